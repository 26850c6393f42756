use imseq::{Sequence, SequenceBuilder};

use crate::capability::{
    IndexedMapper, IndexedPredicate, IndexedReducer, Mapper, Predicate, Reducer,
};

/// Apply `mapper` to every item, preserving order and count.
pub fn map<I, U, M>(items: I, mut mapper: M) -> Sequence<U>
where
    I: IntoIterator,
    M: Mapper<I::Item, U>,
{
    let items = items.into_iter();
    let mut builder = SequenceBuilder::for_size_hint(items.size_hint());
    for item in items {
        builder.push(mapper(item));
    }
    builder.finish()
}

pub fn map_indexed<I, U, M>(items: I, mut mapper: M) -> Sequence<U>
where
    I: IntoIterator,
    M: IndexedMapper<I::Item, U>,
{
    let items = items.into_iter();
    let mut builder = SequenceBuilder::for_size_hint(items.size_hint());
    for (index, item) in items.enumerate() {
        builder.push(mapper(item, index));
    }
    builder.finish()
}

/// Keep the items `predicate` accepts, in their original order.
pub fn filter<I, P>(items: I, mut predicate: P) -> Sequence<I::Item>
where
    I: IntoIterator,
    P: Predicate<I::Item>,
{
    let mut builder = SequenceBuilder::new();
    for item in items {
        if predicate(&item) {
            builder.push(item);
        }
    }
    builder.finish()
}

pub fn filter_indexed<I, P>(items: I, mut predicate: P) -> Sequence<I::Item>
where
    I: IntoIterator,
    P: IndexedPredicate<I::Item>,
{
    let mut builder = SequenceBuilder::new();
    for (index, item) in items.into_iter().enumerate() {
        if predicate(&item, index) {
            builder.push(item);
        }
    }
    builder.finish()
}

/// Strict left fold. The reducer receives `(item, accumulator)`.
pub fn reduce<I, A, R>(items: I, mut reducer: R, initial: A) -> A
where
    I: IntoIterator,
    R: Reducer<I::Item, A>,
{
    let mut accumulator = initial;
    for item in items {
        accumulator = reducer(item, accumulator);
    }
    accumulator
}

pub fn reduce_indexed<I, A, R>(items: I, mut reducer: R, initial: A) -> A
where
    I: IntoIterator,
    R: IndexedReducer<I::Item, A>,
{
    let mut accumulator = initial;
    for (index, item) in items.into_iter().enumerate() {
        accumulator = reducer(item, accumulator, index);
    }
    accumulator
}

/// Like [`map`], but stops at the first `Err` and returns it unchanged.
pub fn try_map<I, U, E, M>(items: I, mut mapper: M) -> Result<Sequence<U>, E>
where
    I: IntoIterator,
    M: FnMut(I::Item) -> Result<U, E>,
{
    let items = items.into_iter();
    let mut builder = SequenceBuilder::for_size_hint(items.size_hint());
    for item in items {
        builder.push(mapper(item)?);
    }
    Ok(builder.finish())
}

pub fn try_filter<I, E, P>(items: I, mut predicate: P) -> Result<Sequence<I::Item>, E>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> Result<bool, E>,
{
    let mut builder = SequenceBuilder::new();
    for item in items {
        if predicate(&item)? {
            builder.push(item);
        }
    }
    Ok(builder.finish())
}

pub fn try_reduce<I, A, E, R>(items: I, mut reducer: R, initial: A) -> Result<A, E>
where
    I: IntoIterator,
    R: FnMut(I::Item, A) -> Result<A, E>,
{
    let mut accumulator = initial;
    for item in items {
        accumulator = reducer(item, accumulator)?;
    }
    Ok(accumulator)
}
