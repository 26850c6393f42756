use std::sync::Arc;

use super::builder::SequenceBuilder;
use super::sequence_core::Sequence;

impl<T> Sequence<T> {
    /// Construct from a collection whose size is known up front.
    ///
    /// The buffer is allocated once, at its exact size.
    pub fn from_sized<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let items = items.into_iter();
        let mut builder = SequenceBuilder::with_capacity(items.len());
        builder.extend(items);
        builder.finish()
    }

    /// Construct from an iterable of unknown size.
    ///
    /// Starts from a small buffer that grows by half whenever it's full and
    /// is trimmed to the exact item count at the end.
    pub fn from_iterable<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut builder = SequenceBuilder::new();
        builder.extend(items);
        builder.finish()
    }

    /// Construct from explicit values. The values are copied; the sequence
    /// never aliases storage owned by the caller.
    pub fn from_values(values: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_buffer(Arc::from(values))
    }

    /// Construct a sequence holding a single item
    pub fn one(item: T) -> Self {
        Self::from_buffer(Arc::from(vec![item]))
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        let items = items.into_iter();
        let mut builder = SequenceBuilder::for_size_hint(items.size_hint());
        builder.extend(items);
        builder.finish()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_buffer(items.into())
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(items: &[T]) -> Self {
        Self::from_values(items)
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(items: [T; N]) -> Self {
        Self::from(Vec::from(items))
    }
}

impl<T> From<Box<[T]>> for Sequence<T> {
    fn from(items: Box<[T]>) -> Self {
        Self::from_buffer(items.into())
    }
}

/// Construct a [`Sequence`](crate::Sequence) from explicit values.
///
/// ```
/// let numbers = imseq::seq![1, 2, 3];
/// assert_eq!(numbers.to_string(), "[1, 2, 3]");
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::Sequence::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Sequence::from(vec![$($item),+])
    };
}
