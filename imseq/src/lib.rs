//! Immutable sequences with zero-copy views.
//!
//! A [`Sequence`] owns a buffer that is frozen once construction finishes.
//! A [`View`] is a window onto such a buffer; views of views always point
//! straight at the root buffer. Read access for both lives on
//! [`SequenceExt`].
//!
//! ```
//! use imseq::{seq, SequenceExt};
//!
//! let numbers = seq![1, 2, 3, 4, 5];
//! let middle = numbers.subsequence(1, 4);
//! assert_eq!(middle, [2, 3, 4]);
//! assert!(middle.shares_buffer_with(&numbers));
//! ```
pub mod error;
mod sequence;

pub use error::{Error, Mutation, Result};
pub use sequence::{
    Cursor, IntoIter, Iter, MutableList, Sequence, SequenceBuilder, SequenceCore, SequenceExt,
    View, GROWTH_RATIO, INITIAL_CAPACITY,
};
