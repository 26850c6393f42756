use std::hash::Hash;
use std::ops::{Index, Range};
use std::sync::{Arc, OnceLock};

use super::compare::cached_hash;
use super::traits::{SequenceCore, SequenceExt};

/// An immutable sequence of items.
///
/// The items live in a single shared buffer that is never written to after
/// construction. Cloning a sequence, taking a [`View`](super::View) of it or
/// iterating it never copies the items.
///
/// See [`Sequence::from_sized`] and [`Sequence::from_iterable`] for ways to
/// construct one, and [`SequenceExt::hash_code`] for how it hashes.
pub struct Sequence<T> {
    items: Arc<[T]>,
    hash: OnceLock<u64>,
}

// the buffer is shared and read-only, so sequences can be read from any
// number of threads
static_assertions::assert_impl_all!(Sequence<u32>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(Sequence<u32>: std::ops::IndexMut<usize>, std::ops::DerefMut);

impl<T> Sequence<T> {
    pub(crate) fn from_buffer(items: Arc<[T]>) -> Self {
        Self {
            items,
            hash: OnceLock::new(),
        }
    }

    /// Construct an empty sequence
    pub fn new() -> Self {
        Self::from_buffer(Arc::from(Vec::new()))
    }

    pub(crate) fn hash_cell(&self) -> &OnceLock<u64> {
        &self.hash
    }
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            hash: self.hash.clone(),
        }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SequenceCore<T> for Sequence<T> {
    #[inline]
    fn buffer(&self) -> &Arc<[T]> {
        &self.items
    }

    #[inline]
    fn window(&self) -> Range<usize> {
        0..self.items.len()
    }
}

impl<T> SequenceExt<T> for Sequence<T> {
    // a sequence addresses its whole buffer
    #[inline]
    fn as_slice(&self) -> &[T] {
        &self.items
    }

    fn hash_code(&self) -> u64
    where
        T: Hash,
    {
        cached_hash(self.hash_cell(), self.as_slice())
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}
