use imseq::{Sequence, SequenceBuilder};

use crate::capability::Combiner;

/// Pair up items by position. Stops with the shorter input.
pub fn zip<A, B>(a: A, b: B) -> Sequence<(A::Item, B::Item)>
where
    A: IntoIterator,
    B: IntoIterator,
{
    let pairs = a.into_iter().zip(b);
    let mut builder = SequenceBuilder::for_size_hint(pairs.size_hint());
    builder.extend(pairs);
    builder.finish()
}

/// Combine items at the same position with `combiner`. Stops with the
/// shorter input.
pub fn zip_with<A, B, C, F>(a: A, b: B, mut combiner: F) -> Sequence<C>
where
    A: IntoIterator,
    B: IntoIterator,
    F: Combiner<A::Item, B::Item, C>,
{
    let pairs = a.into_iter().zip(b);
    let mut builder = SequenceBuilder::for_size_hint(pairs.size_hint());
    for (left, right) in pairs {
        builder.push(combiner(left, right));
    }
    builder.finish()
}

/// Split pairs into their first and second halves.
pub fn unzip<I, A, B>(pairs: I) -> (Sequence<A>, Sequence<B>)
where
    I: IntoIterator<Item = (A, B)>,
{
    let pairs = pairs.into_iter();
    let size_hint = pairs.size_hint();
    let mut firsts = SequenceBuilder::for_size_hint(size_hint);
    let mut seconds = SequenceBuilder::for_size_hint(size_hint);
    for (first, second) in pairs {
        firsts.push(first);
        seconds.push(second);
    }
    (firsts.finish(), seconds.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use imseq::{seq, SequenceExt};

    #[test]
    fn test_zip_stops_with_shorter() {
        let pairs = zip(seq![1, 2, 3], ["a", "b"]);
        assert_eq!(pairs, [(1, "a"), (2, "b")]);
    }

    #[test]
    fn test_zip_with() {
        let sums = zip_with([1, 2, 3], [10, 20, 30, 40], |a: i32, b: i32| a + b);
        assert_eq!(sums, [11, 22, 33]);
    }

    #[test]
    fn test_unzip() {
        let (numbers, letters) = unzip([(1, 'x'), (2, 'y')]);
        assert_eq!(numbers, [1, 2]);
        assert_eq!(letters, ['x', 'y']);

        let (empty_a, empty_b) = unzip(Vec::<(u8, u8)>::new());
        assert!(empty_a.is_empty());
        assert!(empty_b.is_empty());
    }
}
