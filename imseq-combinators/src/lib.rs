//! Eager functional combinators over [`imseq`] sequences.
//!
//! Every combinator consumes anything iterable plus a caller-supplied
//! [capability](capability), and returns a newly allocated
//! [`Sequence`](imseq::Sequence) without touching its inputs.
//!
//! ```
//! use imseq::seq;
//! use imseq_combinators::{filter, map, partition};
//!
//! let xs = seq![1, 2, 3, 4, 5];
//! assert_eq!(filter(&xs, |x: &&i32| **x % 2 == 0), [&2, &4]);
//! assert_eq!(map(xs.clone(), |x: i32| x * 2), [2, 4, 6, 8, 10]);
//! assert_eq!(partition(xs, 2).unwrap().to_string(), "[[1, 2], [3, 4], [5]]");
//! ```
pub mod capability;
mod grouping;
mod maps;
mod pairing;
mod slicing;
mod transform;

pub use imseq::error::{Error, Result};

pub use grouping::{group, group_by, partition, partition_by, partition_by_indexed};
pub use maps::{
    into_map, map_to_pairs, pairs_into_map, pairs_to_hash_map, to_btree_map, to_hash_map,
    to_index_map, values_into_map, values_to_hash_map, AIndexMap,
};
pub use pairing::{unzip, zip, zip_with};
pub use slicing::{concat, drop, head, init, init_indexed, interleave, last, sorted, tail, take};
pub use transform::{
    filter, filter_indexed, map, map_indexed, reduce, reduce_indexed, try_filter, try_map,
    try_reduce,
};
