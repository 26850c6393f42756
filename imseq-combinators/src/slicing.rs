use imseq::{Sequence, SequenceBuilder};

use crate::capability::{IndexedInstanceFactory, InstanceFactory};

/// The first `min(n, len)` items.
pub fn take<I: IntoIterator>(items: I, n: usize) -> Sequence<I::Item> {
    let items = items.into_iter().take(n);
    let mut builder = SequenceBuilder::for_size_hint(items.size_hint());
    builder.extend(items);
    builder.finish()
}

/// Everything after the first `n` items.
pub fn drop<I: IntoIterator>(items: I, n: usize) -> Sequence<I::Item> {
    let items = items.into_iter().skip(n);
    let mut builder = SequenceBuilder::for_size_hint(items.size_hint());
    builder.extend(items);
    builder.finish()
}

pub fn head<I: IntoIterator>(items: I) -> Option<I::Item> {
    items.into_iter().next()
}

pub fn last<I: IntoIterator>(items: I) -> Option<I::Item> {
    items.into_iter().last()
}

/// All items but the first.
pub fn tail<I: IntoIterator>(items: I) -> Sequence<I::Item> {
    drop(items, 1)
}

/// `a` followed by `b`.
pub fn concat<A, B>(a: A, b: B) -> Sequence<A::Item>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
{
    let items = a.into_iter().chain(b);
    let mut builder = SequenceBuilder::for_size_hint(items.size_hint());
    builder.extend(items);
    builder.finish()
}

/// Alternate items of `a` and `b`, starting with `a`, then append whatever
/// is left of the longer input.
pub fn interleave<A, B>(a: A, b: B) -> Sequence<A::Item>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
{
    let mut a = a.into_iter();
    let mut b = b.into_iter();
    let mut builder = SequenceBuilder::new();
    loop {
        match (a.next(), b.next()) {
            (Some(left), Some(right)) => {
                builder.push(left);
                builder.push(right);
            }
            (Some(left), None) => {
                builder.push(left);
                builder.extend(a);
                break;
            }
            (None, Some(right)) => {
                builder.push(right);
                builder.extend(b);
                break;
            }
            (None, None) => break,
        }
    }
    builder.finish()
}

/// `n` values produced by calling `factory` once each.
pub fn init<T, F: InstanceFactory<T>>(mut factory: F, n: usize) -> Sequence<T> {
    let mut builder = SequenceBuilder::with_capacity(n);
    for _ in 0..n {
        builder.push(factory());
    }
    builder.finish()
}

pub fn init_indexed<T, F: IndexedInstanceFactory<T>>(mut factory: F, n: usize) -> Sequence<T> {
    let mut builder = SequenceBuilder::with_capacity(n);
    for index in 0..n {
        builder.push(factory(index));
    }
    builder.finish()
}

/// A sorted copy; the input is left untouched. The sort is stable.
pub fn sorted<I>(items: I) -> Sequence<I::Item>
where
    I: IntoIterator,
    I::Item: Ord,
{
    let mut items: Vec<I::Item> = items.into_iter().collect();
    items.sort();
    Sequence::from(items)
}
