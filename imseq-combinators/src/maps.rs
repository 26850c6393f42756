use std::collections::BTreeMap;
use std::hash::Hash;

use ahash::{HashMap, HashMapExt};
use imseq::{Sequence, SequenceBuilder};
use indexmap::IndexMap;

/// Insertion-ordered map keyed with the same hasher as [`to_hash_map`].
pub type AIndexMap<K, V> = IndexMap<K, V, ahash::RandomState>;

/// Pair `keys` with `values` by position and insert them into `map`.
///
/// Extra keys or values are ignored. A repeated key keeps its last value.
pub fn into_map<'m, K, V, M>(
    keys: impl IntoIterator<Item = K>,
    values: impl IntoIterator<Item = V>,
    map: &'m mut M,
) -> &'m mut M
where
    M: Extend<(K, V)>,
{
    map.extend(keys.into_iter().zip(values));
    map
}

/// Insert every `(key, value)` pair into `map`.
pub fn pairs_into_map<'m, K, V, M>(
    pairs: impl IntoIterator<Item = (K, V)>,
    map: &'m mut M,
) -> &'m mut M
where
    M: Extend<(K, V)>,
{
    map.extend(pairs);
    map
}

pub fn to_hash_map<K, V>(
    keys: impl IntoIterator<Item = K>,
    values: impl IntoIterator<Item = V>,
) -> HashMap<K, V>
where
    K: Eq + Hash,
{
    let mut map = HashMap::new();
    into_map(keys, values, &mut map);
    map
}

pub fn pairs_to_hash_map<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> HashMap<K, V>
where
    K: Eq + Hash,
{
    let mut map = HashMap::new();
    pairs_into_map(pairs, &mut map);
    map
}

/// Key each of `values` by the item at the same position of `keys`.
///
/// The mirror image of [`into_map`]: the sequence being turned into a map
/// supplies the values.
pub fn values_into_map<'m, K, V, M>(
    values: impl IntoIterator<Item = V>,
    keys: impl IntoIterator<Item = K>,
    map: &'m mut M,
) -> &'m mut M
where
    M: Extend<(K, V)>,
{
    into_map(keys, values, map)
}

pub fn values_to_hash_map<K, V>(
    values: impl IntoIterator<Item = V>,
    keys: impl IntoIterator<Item = K>,
) -> HashMap<K, V>
where
    K: Eq + Hash,
{
    let mut map = HashMap::new();
    values_into_map(values, keys, &mut map);
    map
}

/// The entries of `map` as a sequence of `(key, value)` pairs, in the map's
/// iteration order.
pub fn map_to_pairs<K, V>(map: impl IntoIterator<Item = (K, V)>) -> Sequence<(K, V)> {
    let entries = map.into_iter();
    let mut builder = SequenceBuilder::for_size_hint(entries.size_hint());
    builder.extend(entries);
    builder.finish()
}

/// Like [`to_hash_map`], ordered by key.
pub fn to_btree_map<K, V>(
    keys: impl IntoIterator<Item = K>,
    values: impl IntoIterator<Item = V>,
) -> BTreeMap<K, V>
where
    K: Ord,
{
    let mut map = BTreeMap::new();
    into_map(keys, values, &mut map);
    map
}

/// Like [`to_hash_map`], iterating in the order keys were first inserted.
pub fn to_index_map<K, V>(
    keys: impl IntoIterator<Item = K>,
    values: impl IntoIterator<Item = V>,
) -> AIndexMap<K, V>
where
    K: Eq + Hash,
{
    let mut map = AIndexMap::default();
    into_map(keys, values, &mut map);
    map
}
