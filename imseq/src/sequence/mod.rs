/// A sequence is an immutable list of items backed by a single shared
/// buffer. Views address a window of that buffer without copying it.
mod builder;
mod compare;
mod creation;
mod iter;
mod mutation;
mod sequence_core;
#[cfg(feature = "serde")]
mod serialization;
mod traits;
mod view;

pub use builder::{SequenceBuilder, GROWTH_RATIO, INITIAL_CAPACITY};
pub use iter::{Cursor, IntoIter, Iter};
pub use mutation::MutableList;
pub use sequence_core::Sequence;
pub use traits::{SequenceCore, SequenceExt};
pub use view::View;
