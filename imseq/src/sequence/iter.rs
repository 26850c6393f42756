use std::iter::FusedIterator;
use std::ops::Range;
use std::sync::Arc;

use crate::error;

use super::sequence_core::Sequence;
use super::traits::SequenceCore;
use super::view::View;

/// Forward iteration over the items of a sequence.
///
/// Bound to the window of the sequence that created it.
#[derive(Debug)]
pub struct Iter<'a, T> {
    items: &'a [T],
    index: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(items: &'a [T]) -> Self {
        Self { items, index: 0 }
    }

    /// Check whether there is another item
    pub fn has_next(&self) -> bool {
        self.index < self.items.len()
    }

    /// Advance, failing with [`NoMoreElements`](error::Error::NoMoreElements)
    /// at the end of the window.
    pub fn try_next(&mut self) -> error::Result<&'a T> {
        self.next().ok_or(error::Error::NoMoreElements)
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items,
            index: self.index,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// A cursor that can move in both directions over the items of a sequence.
///
/// The cursor sits between items: `next` returns the item after it,
/// `previous` the item before it. Indexes are relative to the window of the
/// sequence that created it.
#[derive(Debug)]
pub struct Cursor<'a, T> {
    items: &'a [T],
    index: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(items: &'a [T], index: usize) -> Self {
        debug_assert!(index <= items.len());
        Self { items, index }
    }

    pub fn has_next(&self) -> bool {
        self.index < self.items.len()
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    /// Advance, failing with [`NoMoreElements`](error::Error::NoMoreElements)
    /// at the end of the window.
    pub fn try_next(&mut self) -> error::Result<&'a T> {
        self.next().ok_or(error::Error::NoMoreElements)
    }

    /// Step back and return the item stepped over
    pub fn previous(&mut self) -> Option<&'a T> {
        let index = self.index.checked_sub(1)?;
        let item = self.items.get(index)?;
        self.index = index;
        Some(item)
    }

    /// Step back, failing with [`NoMoreElements`](error::Error::NoMoreElements)
    /// at the start of the window.
    pub fn try_previous(&mut self) -> error::Result<&'a T> {
        self.previous().ok_or(error::Error::NoMoreElements)
    }

    /// Index of the item `next` would return
    pub fn next_index(&self) -> usize {
        self.index
    }

    /// Index of the item `previous` would return, if any
    pub fn previous_index(&self) -> Option<usize> {
        self.index.checked_sub(1)
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items,
            index: self.index,
        }
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> {}

// only `previous` can move a finished cursor back into its window
impl<T> FusedIterator for Cursor<'_, T> {}

/// Owning iteration, yielding clones of the items.
///
/// Keeps the shared buffer alive for as long as it is iterated.
pub struct IntoIter<T> {
    buffer: Arc<[T]>,
    window: Range<usize>,
}

impl<T> IntoIter<T> {
    fn new(buffer: Arc<[T]>, window: Range<usize>) -> Self {
        Self { buffer, window }
    }
}

impl<T: Clone> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let index = self.window.next()?;
        Some(self.buffer[index].clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.window.size_hint()
    }
}

impl<T: Clone> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        let index = self.window.next_back()?;
        Some(self.buffer[index].clone())
    }
}

impl<T: Clone> ExactSizeIterator for IntoIter<T> {}

impl<T: Clone> FusedIterator for IntoIter<T> {}

impl<T: Clone> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let window = self.window();
        IntoIter::new(Arc::clone(self.buffer()), window)
    }
}

impl<T: Clone> IntoIterator for View<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let window = self.window();
        IntoIter::new(Arc::clone(self.buffer()), window)
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        Iter::new(self.as_ref())
    }
}

impl<'a, T> IntoIterator for &'a View<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        Iter::new(self.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::sequence::SequenceExt;

    #[test]
    fn test_forward_iteration_ends_with_error() {
        let sequence = Sequence::from(vec!['a', 'b']);
        let mut iter = sequence.iter();
        assert!(iter.has_next());
        assert_eq!(iter.try_next(), Ok(&'a'));
        assert_eq!(iter.try_next(), Ok(&'b'));
        assert!(!iter.has_next());
        assert_eq!(iter.try_next(), Err(Error::NoMoreElements));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_iter_is_bound_to_window() {
        let sequence = Sequence::from(vec![1, 2, 3, 4, 5]);
        let view = sequence.subsequence(1, 3);
        assert_eq!(view.iter().len(), 2);
        assert_eq!(view.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_cursor_moves_both_ways() {
        let sequence = Sequence::from(vec![10, 20, 30]);
        let mut cursor = sequence.cursor();
        assert!(!cursor.has_previous());
        assert_eq!(cursor.previous_index(), None);
        assert_eq!(cursor.next(), Some(&10));
        assert_eq!(cursor.next(), Some(&20));
        assert_eq!(cursor.next_index(), 2);
        assert_eq!(cursor.previous_index(), Some(1));
        assert_eq!(cursor.previous(), Some(&20));
        assert_eq!(cursor.previous(), Some(&10));
        assert_eq!(cursor.try_previous(), Err(Error::NoMoreElements));
        assert_eq!(cursor.next_index(), 0);
    }

    #[test]
    fn test_cursor_reports_exact_remaining() {
        let sequence = Sequence::from(vec![1, 2, 3, 4]);
        let subsequence = sequence.subsequence(1, 4);
        let mut cursor = subsequence.cursor();
        assert_eq!(cursor.len(), 3);
        cursor.next();
        assert_eq!(cursor.len(), 2);
        let mut fused = cursor.by_ref().fuse();
        assert_eq!(fused.next(), Some(&3));
        assert_eq!(fused.next(), Some(&4));
        assert_eq!(fused.next(), None);
        assert_eq!(cursor.len(), 0);
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.previous(), Some(&4));
        assert_eq!(cursor.len(), 1);
    }

    #[test]
    fn test_cursor_on_view_stays_in_window() {
        let sequence = Sequence::from(vec![1, 2, 3, 4, 5]);
        let view = sequence.subsequence(2, 4);
        let mut cursor = view.cursor_at(1).unwrap();
        assert_eq!(cursor.next_index(), 1);
        assert_eq!(cursor.previous(), Some(&3));
        assert!(!cursor.has_previous());
        assert_eq!(cursor.try_previous(), Err(Error::NoMoreElements));

        let mut cursor = view.cursor_at(2).unwrap();
        assert!(!cursor.has_next());
        assert_eq!(cursor.try_next(), Err(Error::NoMoreElements));

        assert!(matches!(
            view.cursor_at(3),
            Err(Error::IndexOutOfRange { index: 3, len: 2 })
        ));
    }

    #[test]
    fn test_into_iter_clones_out_of_window() {
        let sequence = Sequence::from(vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        let view = sequence.subsequence(1, 3);
        let items: Vec<String> = view.into_iter().rev().collect();
        assert_eq!(items, vec!["c".to_string(), "b".to_string()]);
        assert_eq!(sequence.len(), 3);
    }
}
