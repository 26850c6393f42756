//! Caller-supplied capabilities.
//!
//! Each capability is a single-call contract. They are implemented for every
//! closure or function with the matching signature, so callers simply pass a
//! closure. Combinators call a capability once per relevant item, in input
//! order, and expect it to be pure and total; a panic inside a capability
//! propagates unchanged to the caller of the combinator.

/// Decides whether an item is kept.
pub trait Predicate<T>: FnMut(&T) -> bool {}

impl<T, F> Predicate<T> for F where F: FnMut(&T) -> bool {}

/// [`Predicate`] that is also told the 0-based position of the item.
pub trait IndexedPredicate<T>: FnMut(&T, usize) -> bool {}

impl<T, F> IndexedPredicate<T> for F where F: FnMut(&T, usize) -> bool {}

/// Transforms an item.
pub trait Mapper<T, U>: FnMut(T) -> U {}

impl<T, U, F> Mapper<T, U> for F where F: FnMut(T) -> U {}

/// [`Mapper`] that is also told the 0-based position of the item.
pub trait IndexedMapper<T, U>: FnMut(T, usize) -> U {}

impl<T, U, F> IndexedMapper<T, U> for F where F: FnMut(T, usize) -> U {}

/// Folds an item into an accumulator: `(item, accumulator) -> accumulator`.
pub trait Reducer<T, A>: FnMut(T, A) -> A {}

impl<T, A, F> Reducer<T, A> for F where F: FnMut(T, A) -> A {}

/// [`Reducer`] that is also told the 0-based position of the item.
pub trait IndexedReducer<T, A>: FnMut(T, A, usize) -> A {}

impl<T, A, F> IndexedReducer<T, A> for F where F: FnMut(T, A, usize) -> A {}

/// Combines two items taken from the same position of two inputs.
pub trait Combiner<A, B, C>: FnMut(A, B) -> C {}

impl<A, B, C, F> Combiner<A, B, C> for F where F: FnMut(A, B) -> C {}

/// Decides whether two items belong together.
pub trait Equivalence<T>: FnMut(&T, &T) -> bool {}

impl<T, F> Equivalence<T> for F where F: FnMut(&T, &T) -> bool {}

/// Produces a new value on each call.
pub trait InstanceFactory<T>: FnMut() -> T {}

impl<T, F> InstanceFactory<T> for F where F: FnMut() -> T {}

/// [`InstanceFactory`] that is told the position of the value it creates.
pub trait IndexedInstanceFactory<T>: FnMut(usize) -> T {}

impl<T, F> IndexedInstanceFactory<T> for F where F: FnMut(usize) -> T {}

/// The default [`Equivalence`]: structural equality.
pub fn structural_eq<T: PartialEq>(a: &T, b: &T) -> bool {
    a == b
}
