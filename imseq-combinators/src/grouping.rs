use imseq::{error, Sequence, SequenceBuilder, SequenceExt, View};

use crate::capability::{structural_eq, Equivalence, IndexedPredicate, Predicate};

/// Split into consecutive chunks of `size` items; the last chunk may be
/// shorter.
///
/// The input is gathered into one sequence and every chunk is a view onto
/// it, so chunking copies nothing beyond that first gathering.
pub fn partition<I>(items: I, size: usize) -> error::Result<Sequence<View<I::Item>>>
where
    I: IntoIterator,
{
    if size < 1 {
        tracing::debug!(size, "rejected partition chunk size");
        return Err(error::Error::InvalidArgument(
            "partition size must be at least 1",
        ));
    }
    let all: Sequence<I::Item> = items.into_iter().collect();
    let mut chunks = SequenceBuilder::with_capacity(all.len().div_ceil(size));
    let mut start = 0;
    while start < all.len() {
        let end = (start + size).min(all.len());
        chunks.push(all.subsequence(start, end));
        start = end;
    }
    Ok(chunks.finish())
}

/// Split into `(matches, non_matches)`, each keeping input order.
pub fn partition_by<I, P>(items: I, mut predicate: P) -> (Sequence<I::Item>, Sequence<I::Item>)
where
    I: IntoIterator,
    P: Predicate<I::Item>,
{
    let mut matches = SequenceBuilder::new();
    let mut non_matches = SequenceBuilder::new();
    for item in items {
        if predicate(&item) {
            matches.push(item);
        } else {
            non_matches.push(item);
        }
    }
    (matches.finish(), non_matches.finish())
}

pub fn partition_by_indexed<I, P>(
    items: I,
    mut predicate: P,
) -> (Sequence<I::Item>, Sequence<I::Item>)
where
    I: IntoIterator,
    P: IndexedPredicate<I::Item>,
{
    let mut matches = SequenceBuilder::new();
    let mut non_matches = SequenceBuilder::new();
    for (index, item) in items.into_iter().enumerate() {
        if predicate(&item, index) {
            matches.push(item);
        } else {
            non_matches.push(item);
        }
    }
    (matches.finish(), non_matches.finish())
}

/// Maximal runs of adjacent equal items.
pub fn group<I>(items: I) -> Sequence<View<I::Item>>
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    group_by(items, structural_eq::<I::Item>)
}

/// Maximal runs of adjacent items that `equivalent` puts together.
///
/// Each item is compared with the one right before it, so the relation need
/// not be transitive. Runs are views onto one shared sequence.
pub fn group_by<I, E>(items: I, mut equivalent: E) -> Sequence<View<I::Item>>
where
    I: IntoIterator,
    E: Equivalence<I::Item>,
{
    let all: Sequence<I::Item> = items.into_iter().collect();
    let slice = all.as_slice();
    let mut runs = SequenceBuilder::new();
    let mut start = 0;
    for index in 1..slice.len() {
        if !equivalent(&slice[index - 1], &slice[index]) {
            runs.push(all.subsequence(start, index));
            start = index;
        }
    }
    if start < slice.len() {
        runs.push(all.subsequence(start, slice.len()));
    }
    runs.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use imseq::{seq, Error};

    #[test]
    fn test_partition_chunks_share_one_buffer() {
        let chunks = partition(seq![1, 2, 3, 4, 5], 2).unwrap();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0], [1, 2]);
        assert_eq!(chunks[2], [5]);
        assert!(chunks[0].shares_buffer_with(&chunks[2]));
        assert_eq!(chunks[1].offset(), 2);
    }

    #[test]
    fn test_partition_rejects_zero_size() {
        assert_eq!(
            partition([1, 2], 0),
            Err(Error::InvalidArgument("partition size must be at least 1"))
        );
    }

    #[test]
    fn test_partition_of_nothing_is_empty() {
        assert!(partition(Vec::<u8>::new(), 3).unwrap().is_empty());
        assert_eq!(partition([1, 2], 10).unwrap().len(), 1);
    }

    #[test]
    fn test_partition_by() {
        let (even, odd) = partition_by(1..=6, |x: &i32| x % 2 == 0);
        assert_eq!(even, [2, 4, 6]);
        assert_eq!(odd, [1, 3, 5]);
    }

    #[test]
    fn test_partition_by_indexed() {
        let (front, back) = partition_by_indexed("abcd".chars(), |_: &char, i: usize| i < 1);
        assert_eq!(front, ['a']);
        assert_eq!(back, ['b', 'c', 'd']);
    }

    #[test]
    fn test_group_adjacent_runs() {
        let runs = group(["a", "a", "b", "a"]);
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0], ["a", "a"]);
        assert_eq!(runs[1], ["b"]);
        assert_eq!(runs[2], ["a"]);
        assert!(group(Vec::<i32>::new()).is_empty());
    }

    #[test]
    fn test_group_by_compares_neighbours() {
        // within one of the previous item, so 1 2 3 chain into one run
        let runs = group_by([1, 2, 3, 7, 8], |a: &i32, b: &i32| (b - a).abs() <= 1);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], [1, 2, 3]);
        assert_eq!(runs[1], [7, 8]);
    }
}
