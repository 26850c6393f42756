use std::sync::Arc;

use super::sequence_core::Sequence;

/// Capacity a builder starts with when the final size is unknown.
pub const INITIAL_CAPACITY: usize = 8;

/// Growth ratio (numerator, denominator) applied when a builder is full.
pub const GROWTH_RATIO: (usize, usize) = (3, 2);

/// Accumulates items for a [`Sequence`].
///
/// A builder is the only place items are ever written; `finish` trims the
/// buffer to the exact item count and freezes it.
#[derive(Debug)]
pub struct SequenceBuilder<T> {
    items: Vec<T>,
}

impl<T> SequenceBuilder<T> {
    /// A builder for an unknown number of items
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// A builder for a known number of items
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Pre-size from an iterator's size hint. Only an exact hint is
    /// trusted; anything else starts small and grows.
    pub fn for_size_hint(size_hint: (usize, Option<usize>)) -> Self {
        match size_hint {
            (lower, Some(upper)) if lower == upper => Self::with_capacity(lower),
            _ => Self::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn push(&mut self, item: T) {
        if self.items.len() == self.items.capacity() {
            self.grow();
        }
        self.items.push(item);
    }

    fn grow(&mut self) {
        let capacity = self.items.capacity();
        let (numerator, denominator) = GROWTH_RATIO;
        let grown = (capacity * numerator / denominator).max(capacity + 1);
        self.items.reserve_exact(grown - self.items.len());
        tracing::trace!(from = capacity, to = grown, "grew sequence buffer");
    }

    /// Freeze the items into a sequence
    pub fn finish(self) -> Sequence<T> {
        tracing::trace!(
            len = self.items.len(),
            capacity = self.items.capacity(),
            "finished sequence"
        );
        // the conversion copies into an allocation of exactly `len` items
        Sequence::from_buffer(Arc::from(self.items))
    }
}

impl<T> Default for SequenceBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for SequenceBuilder<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{SequenceCore, SequenceExt};

    #[test]
    fn test_grows_by_half() {
        let mut builder = SequenceBuilder::new();
        assert_eq!(builder.capacity(), INITIAL_CAPACITY);
        for i in 0..INITIAL_CAPACITY {
            builder.push(i);
        }
        assert_eq!(builder.capacity(), INITIAL_CAPACITY);
        builder.push(INITIAL_CAPACITY);
        assert!(builder.capacity() >= 12);
        let sequence = builder.finish();
        assert_eq!(sequence.len(), INITIAL_CAPACITY + 1);
        assert_eq!(sequence.buffer().len(), INITIAL_CAPACITY + 1);
    }

    #[test]
    fn test_grows_from_zero_capacity() {
        let mut builder = SequenceBuilder::with_capacity(0);
        builder.extend(["a", "b", "c"]);
        assert_eq!(builder.finish().as_slice(), &["a", "b", "c"]);
    }

    #[test]
    fn test_size_hint_only_trusted_when_exact() {
        assert_eq!(SequenceBuilder::<u8>::for_size_hint((20, Some(20))).capacity(), 20);
        assert_eq!(
            SequenceBuilder::<u8>::for_size_hint((0, Some(20))).capacity(),
            INITIAL_CAPACITY
        );
        assert_eq!(
            SequenceBuilder::<u8>::for_size_hint((3, None)).capacity(),
            INITIAL_CAPACITY
        );
    }
}
