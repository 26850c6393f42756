use strum_macros::{Display, EnumIter};
use thiserror::Error;

/// A structural change somebody attempted on an immutable sequence.
///
/// Carried by [`Error::UnsupportedMutation`] so the caller can tell which
/// operation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Mutation {
    /// Insert an item at a position.
    Insert,
    /// Remove the item at a position.
    Remove,
    /// Replace the item at a position.
    Set,
    /// Append a single item.
    Push,
    /// Append many items.
    Extend,
    /// Remove every item.
    Clear,
}

/// Sequence error
///
/// All of these are programming errors: the sequences themselves can never
/// be left in a partially modified state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A structural change was attempted on an immutable sequence.
    #[error("unsupported mutation: {0}")]
    UnsupportedMutation(Mutation),
    /// Random access outside of `[0, len)`.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// A cursor was advanced past its window.
    #[error("no more elements")]
    NoMoreElements,
    /// An argument was outside of its accepted domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
