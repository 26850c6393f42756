use std::hash::Hash;
use std::ops::Range;
use std::sync::Arc;

use crate::error;

use super::{
    iter::{Cursor, Iter},
    sequence_core::Sequence,
    view::View,
};

mod sealed {
    pub trait Sealed {}
}

impl<T> sealed::Sealed for Sequence<T> {}
impl<T> sealed::Sealed for View<T> {}

/// The core sequence interface: a sequence must implement this to function.
///
/// If you do, [`SequenceExt`] provides the read API on top of it. Only
/// [`Sequence`] and [`View`] implement it; the window always lies inside the
/// buffer.
///
/// ```compile_fail
/// use std::ops::Range;
/// use std::sync::Arc;
///
/// struct Outside(Arc<[u8]>);
///
/// impl imseq::SequenceCore<u8> for Outside {
///     fn buffer(&self) -> &Arc<[u8]> {
///         &self.0
///     }
///
///     fn window(&self) -> Range<usize> {
///         0..100
///     }
/// }
/// ```
///
/// The cached hash code is not reachable through it either:
///
/// ```compile_fail
/// use imseq::{seq, SequenceCore};
///
/// let items = seq![1, 2, 3];
/// items.hash_slot().set(42).unwrap();
/// ```
pub trait SequenceCore<T>: sealed::Sealed {
    /// The root buffer the items live in
    fn buffer(&self) -> &Arc<[T]>;

    /// The part of the root buffer this sequence addresses
    fn window(&self) -> Range<usize>;
}

/// Read access shared by [`Sequence`](super::Sequence) and [`View`].
///
/// Every index taken or returned here is relative to the sequence's own
/// window, never to the root buffer.
pub trait SequenceExt<T>: SequenceCore<T> {
    /// The items as a slice
    fn as_slice(&self) -> &[T] {
        &self.buffer()[self.window()]
    }

    /// Get the length of the sequence
    fn len(&self) -> usize {
        self.window().len()
    }

    /// Check whether the sequence is empty
    fn is_empty(&self) -> bool {
        self.window().is_empty()
    }

    /// Get the item at `index`.
    ///
    /// Fails with [`IndexOutOfRange`](error::Error::IndexOutOfRange) when
    /// `index >= len`.
    fn get(&self, index: usize) -> error::Result<&T> {
        let items = self.as_slice();
        items.get(index).ok_or(error::Error::IndexOutOfRange {
            index,
            len: items.len(),
        })
    }

    fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Check whether an equal item is in the sequence
    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(item)
    }

    /// Check whether every one of `items` is in the sequence
    fn contains_all<'i, I>(&self, items: I) -> bool
    where
        T: PartialEq + 'i,
        I: IntoIterator<Item = &'i T>,
    {
        items.into_iter().all(|item| self.contains(item))
    }

    /// Position of the first item equal to `item`
    fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.as_slice().iter().position(|candidate| candidate == item)
    }

    /// Position of the last item equal to `item`
    fn last_index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.as_slice().iter().rposition(|candidate| candidate == item)
    }

    /// Forward iteration over the items
    fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_slice())
    }

    /// Bidirectional cursor positioned before the first item
    fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), 0)
    }

    /// Bidirectional cursor positioned before the item at `index`.
    ///
    /// `index == len` is allowed and places the cursor at the end.
    fn cursor_at(&self, index: usize) -> error::Result<Cursor<'_, T>> {
        let items = self.as_slice();
        if index > items.len() {
            return Err(error::Error::IndexOutOfRange {
                index,
                len: items.len(),
            });
        }
        Ok(Cursor::new(items, index))
    }

    /// A view on `[from, to)` of this sequence, sharing its buffer.
    ///
    /// Out-of-range bounds are clamped into `[0, len]` and `to` is raised to
    /// `from` when it lies before it, so this never fails.
    fn subsequence(&self, from: usize, to: usize) -> View<T> {
        let len = self.len();
        let start = from.min(len);
        let end = to.clamp(start, len);
        if start != from || end != to {
            tracing::debug!(from, to, len, start, end, "clamped subsequence bounds");
        }
        let offset = self.window().start;
        View::new(Arc::clone(self.buffer()), offset + start, offset + end)
    }

    /// Like [`subsequence`](SequenceExt::subsequence), but rejects bounds
    /// instead of clamping them.
    fn try_subsequence(&self, from: usize, to: usize) -> error::Result<View<T>> {
        let len = self.len();
        if to > len {
            return Err(error::Error::IndexOutOfRange { index: to, len });
        }
        if from > to {
            return Err(error::Error::InvalidArgument(
                "subsequence start lies after its end",
            ));
        }
        Ok(self.subsequence(from, to))
    }

    /// A view on the first `n` items (or all of them if there are fewer)
    fn take(&self, n: usize) -> View<T> {
        self.subsequence(0, n)
    }

    /// A view on everything after the first `n` items
    fn skip(&self, n: usize) -> View<T> {
        self.subsequence(n, self.len())
    }

    /// Check whether both sequences read from the same root buffer
    fn shares_buffer_with<S>(&self, other: &S) -> bool
    where
        S: SequenceCore<T>,
    {
        Arc::ptr_eq(self.buffer(), other.buffer())
    }

    /// Composite hash code, `h = h * 31 + hash(item)` over all items.
    ///
    /// Computed on first request and cached afterwards.
    fn hash_code(&self) -> u64
    where
        T: Hash;

    /// Copy the items into a fresh vector
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }
}
