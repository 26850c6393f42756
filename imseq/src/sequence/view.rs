use std::hash::Hash;
use std::ops::{Index, Range};
use std::sync::{Arc, OnceLock};

use super::compare::cached_hash;
use super::sequence_core::Sequence;
use super::traits::{SequenceCore, SequenceExt};

/// A read-only window onto the buffer of a [`Sequence`].
///
/// A view always addresses the root buffer directly: taking a view of a
/// view composes the offsets instead of stacking another layer, so reads
/// never chain through intermediate views.
pub struct View<T> {
    buffer: Arc<[T]>,
    start: usize,
    end: usize,
    hash: OnceLock<u64>,
}

static_assertions::assert_impl_all!(View<u32>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(View<u32>: std::ops::IndexMut<usize>, std::ops::DerefMut);

impl<T> View<T> {
    pub(crate) fn new(buffer: Arc<[T]>, start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= buffer.len());
        Self {
            buffer,
            start,
            end,
            hash: OnceLock::new(),
        }
    }

    /// Where this view starts in the root buffer
    pub fn offset(&self) -> usize {
        self.start
    }

    /// Copy the items of this view into a sequence of its own, releasing
    /// the rest of the root buffer.
    pub fn to_sequence(&self) -> Sequence<T>
    where
        T: Clone,
    {
        Sequence::from_values(self.as_slice())
    }
}

impl<T> Clone for View<T> {
    fn clone(&self) -> Self {
        Self {
            buffer: Arc::clone(&self.buffer),
            start: self.start,
            end: self.end,
            hash: self.hash.clone(),
        }
    }
}

impl<T> SequenceCore<T> for View<T> {
    #[inline]
    fn buffer(&self) -> &Arc<[T]> {
        &self.buffer
    }

    #[inline]
    fn window(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl<T> SequenceExt<T> for View<T> {
    fn hash_code(&self) -> u64
    where
        T: Hash,
    {
        cached_hash(&self.hash, self.as_slice())
    }
}

impl<T> From<Sequence<T>> for View<T> {
    fn from(sequence: Sequence<T>) -> Self {
        let window = sequence.window();
        View::new(Arc::clone(sequence.buffer()), window.start, window.end)
    }
}

impl<T> Index<usize> for View<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T> AsRef<[T]> for View<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
