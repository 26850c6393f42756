use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};
use std::sync::OnceLock;

use super::sequence_core::Sequence;
use super::traits::SequenceExt;
use super::view::View;

// fixed seeds, so equal items hash equally in every sequence
const ITEM_HASH_SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

/// `h = h * 31 + hash(item)` over the items, wrapping on overflow.
fn polynomial_hash<T: Hash>(items: &[T]) -> u64 {
    let [k0, k1, k2, k3] = ITEM_HASH_SEEDS;
    let state = ahash::RandomState::with_seeds(k0, k1, k2, k3);
    items.iter().fold(0u64, |hash, item| {
        hash.wrapping_mul(31)
            .wrapping_add(BuildHasher::hash_one(&state, item))
    })
}

/// The cached hash of `items`, computing it on first use.
pub(crate) fn cached_hash<T: Hash>(slot: &OnceLock<u64>, items: &[T]) -> u64 {
    *slot.get_or_init(|| polynomial_hash(items))
}

// Sequences and views are all members of the same family: they compare
// equal whenever their items do, whatever their buffer layout.
macro_rules! impl_family_eq {
    ($lhs:ident, $rhs:ident) => {
        impl<T: PartialEq> PartialEq<$rhs<T>> for $lhs<T> {
            fn eq(&self, other: &$rhs<T>) -> bool {
                self.as_slice() == other.as_slice()
            }
        }
    };
}

impl_family_eq!(Sequence, Sequence);
impl_family_eq!(Sequence, View);
impl_family_eq!(View, View);
impl_family_eq!(View, Sequence);

macro_rules! impl_common {
    ($name:ident) => {
        impl<T: Eq> Eq for $name<T> {}

        // consistent with equality: the hash code only depends on the items
        impl<T: Hash> Hash for $name<T> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                state.write_u64(self.hash_code());
            }
        }

        impl<T: PartialEq> PartialEq<[T]> for $name<T> {
            fn eq(&self, other: &[T]) -> bool {
                self.as_slice() == other
            }
        }

        impl<T: PartialEq> PartialEq<&[T]> for $name<T> {
            fn eq(&self, other: &&[T]) -> bool {
                self.as_slice() == *other
            }
        }

        impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for $name<T> {
            fn eq(&self, other: &[T; N]) -> bool {
                self.as_slice() == other.as_slice()
            }
        }

        impl<T: PartialEq> PartialEq<Vec<T>> for $name<T> {
            fn eq(&self, other: &Vec<T>) -> bool {
                self.as_slice() == other.as_slice()
            }
        }

        impl<T: fmt::Display> fmt::Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_items(self.as_slice(), f)
            }
        }

        impl<T: fmt::Debug> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.as_slice()).finish()
            }
        }
    };
}

impl_common!(Sequence);
impl_common!(View);

fn write_items<T: fmt::Display>(items: &[T], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i != 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str("]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_equals_view() {
        let a = Sequence::from(vec![1, 2, 3, 4]);
        let b = Sequence::from(vec![0, 2, 3, 9]);
        assert_eq!(a.subsequence(1, 3), b.subsequence(1, 3));
        assert_eq!(Sequence::from(vec![2, 3]), a.subsequence(1, 3));
        assert_ne!(a, b);
        assert_ne!(a.subsequence(0, 2), a.subsequence(0, 3));
    }

    #[test]
    fn test_absent_items_are_equal() {
        let a = Sequence::from(vec![Some(1), None, Some(3)]);
        let b = Sequence::from(vec![Some(1), None, Some(3)]);
        assert_eq!(a, b);
        assert_eq!(a.index_of(&None), Some(1));
        assert!(a.contains(&None));
    }

    #[test]
    fn test_hash_code_follows_items() {
        let a = Sequence::from(vec!["x", "y", "z"]);
        let b = Sequence::from(vec!["w", "x", "y", "z"]);
        let view = b.subsequence(1, 4);
        assert_eq!(a.hash_code(), view.hash_code());
        assert_eq!(a.hash_code(), a.hash_code());
        assert_ne!(a.hash_code(), b.hash_code());
    }

    #[test]
    fn test_hash_code_is_polynomial() {
        let [k0, k1, k2, k3] = ITEM_HASH_SEEDS;
        let state = ahash::RandomState::with_seeds(k0, k1, k2, k3);
        let expected = BuildHasher::hash_one(&state, 1u32)
            .wrapping_mul(31)
            .wrapping_add(BuildHasher::hash_one(&state, 2u32));
        assert_eq!(Sequence::from(vec![1u32, 2]).hash_code(), expected);
        assert_eq!(Sequence::<u32>::new().hash_code(), 0);
    }

    #[test]
    fn test_hash_code_is_cached() {
        let sequence = Sequence::from(vec![1, 2, 3]);
        assert!(sequence.hash_cell().get().is_none());
        let hash = sequence.hash_code();
        assert_eq!(sequence.hash_cell().get(), Some(&hash));
    }

    #[test]
    fn test_display() {
        assert_eq!(Sequence::from(vec![1, 2, 3]).to_string(), "[1, 2, 3]");
        assert_eq!(Sequence::<i32>::new().to_string(), "[]");
        let nested = Sequence::from(vec![
            Sequence::from(vec!["a"]),
            Sequence::from(vec!["b", "c"]),
        ]);
        assert_eq!(nested.to_string(), "[[a], [b, c]]");
    }
}
