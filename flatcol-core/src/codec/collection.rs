//! Sets and key/value collections.
//!
//! These have no stable index, so decoding pulls the element count then
//! inserts freshly decoded elements one at a time. Whether duplicates collapse
//! is left to the destination's own insertion semantics.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

use super::{encode_counted, encode_entries, preallocation, Decode, Encode};
use crate::error::DecodeError;
use crate::multi::{HashMultiMap, HashMultiSet, MultiMap, MultiSet};
use crate::reader::ColumnReader;
use crate::store::ColumnStore;

/// Pulls a length then decodes and inserts that many elements.
fn decode_inserting<T, C>(
    reader: &mut ColumnReader<'_>,
    with_capacity: impl FnOnce(usize) -> C,
    mut insert: impl FnMut(&mut C, T),
) -> Result<C, DecodeError>
where
    T: Decode,
{
    let len = reader.pull_length()?;
    let mut collection = with_capacity(preallocation(len));
    for _ in 0..len {
        let value = T::decode(reader)?;
        insert(&mut collection, value);
    }
    Ok(collection)
}

impl<T: Encode> Encode for BTreeSet<T> {
    fn encode(&self, store: &mut ColumnStore) {
        encode_counted(store, self.len(), self);
    }
}

impl<T: Decode + Ord> Decode for BTreeSet<T> {
    fn decode(reader: &mut ColumnReader<'_>) -> Result<Self, DecodeError> {
        decode_inserting(reader, |_| BTreeSet::new(), |set: &mut Self, value: T| {
            set.insert(value);
        })
    }
}

impl<T: Encode, S> Encode for HashSet<T, S> {
    fn encode(&self, store: &mut ColumnStore) {
        encode_counted(store, self.len(), self);
    }
}

impl<T, S> Decode for HashSet<T, S>
where
    T: Decode + Eq + Hash,
    S: BuildHasher + Default,
{
    fn decode(reader: &mut ColumnReader<'_>) -> Result<Self, DecodeError> {
        decode_inserting(
            reader,
            |capacity| HashSet::with_capacity_and_hasher(capacity, S::default()),
            |set: &mut Self, value: T| {
                set.insert(value);
            },
        )
    }
}

impl<T: Encode> Encode for MultiSet<T> {
    fn encode(&self, store: &mut ColumnStore) {
        encode_counted(store, self.len(), self.iter());
    }
}

impl<T: Decode + Ord> Decode for MultiSet<T> {
    fn decode(reader: &mut ColumnReader<'_>) -> Result<Self, DecodeError> {
        decode_inserting(reader, |_| MultiSet::new(), MultiSet::<T>::insert)
    }
}

impl<T: Encode, S> Encode for HashMultiSet<T, S> {
    fn encode(&self, store: &mut ColumnStore) {
        encode_counted(store, self.len(), self.iter());
    }
}

impl<T, S> Decode for HashMultiSet<T, S>
where
    T: Decode + Eq + Hash,
    S: BuildHasher + Default,
{
    fn decode(reader: &mut ColumnReader<'_>) -> Result<Self, DecodeError> {
        decode_inserting(
            reader,
            |capacity| HashMultiSet::with_capacity_and_hasher(capacity, S::default()),
            |set: &mut Self, value: T| set.insert(value),
        )
    }
}

impl<K: Encode, V: Encode> Encode for BTreeMap<K, V> {
    fn encode(&self, store: &mut ColumnStore) {
        encode_entries(store, self.len(), self);
    }
}

impl<K: Decode + Ord, V: Decode> Decode for BTreeMap<K, V> {
    fn decode(reader: &mut ColumnReader<'_>) -> Result<Self, DecodeError> {
        decode_inserting(reader, |_| BTreeMap::new(), |map: &mut Self, (key, value): (K, V)| {
            map.insert(key, value);
        })
    }
}

impl<K: Encode, V: Encode, S> Encode for HashMap<K, V, S> {
    fn encode(&self, store: &mut ColumnStore) {
        encode_entries(store, self.len(), self);
    }
}

impl<K, V, S> Decode for HashMap<K, V, S>
where
    K: Decode + Eq + Hash,
    V: Decode,
    S: BuildHasher + Default,
{
    fn decode(reader: &mut ColumnReader<'_>) -> Result<Self, DecodeError> {
        decode_inserting(
            reader,
            |capacity| HashMap::with_capacity_and_hasher(capacity, S::default()),
            |map: &mut Self, (key, value): (K, V)| {
                map.insert(key, value);
            },
        )
    }
}

impl<K: Encode, V: Encode> Encode for MultiMap<K, V> {
    fn encode(&self, store: &mut ColumnStore) {
        encode_entries(store, self.len(), self.iter());
    }
}

impl<K: Decode + Ord, V: Decode> Decode for MultiMap<K, V> {
    fn decode(reader: &mut ColumnReader<'_>) -> Result<Self, DecodeError> {
        decode_inserting(reader, |_| MultiMap::new(), |map: &mut Self, (key, value): (K, V)| {
            map.insert(key, value);
        })
    }
}

impl<K: Encode, V: Encode, S> Encode for HashMultiMap<K, V, S> {
    fn encode(&self, store: &mut ColumnStore) {
        encode_entries(store, self.len(), self.iter());
    }
}

impl<K, V, S> Decode for HashMultiMap<K, V, S>
where
    K: Decode + Eq + Hash,
    V: Decode,
    S: BuildHasher + Default,
{
    fn decode(reader: &mut ColumnReader<'_>) -> Result<Self, DecodeError> {
        decode_inserting(
            reader,
            |capacity| HashMultiMap::with_capacity_and_hasher(capacity, S::default()),
            |map: &mut Self, (key, value): (K, V)| map.insert(key, value),
        )
    }
}

#[cfg(test)]
mod tests {
    use fnv::{FnvBuildHasher, FnvHashMap, FnvHashSet};

    use super::*;

    #[test]
    fn test_set_pushes_length_then_elements() {
        let set: BTreeSet<i64> = [546431, 543687, 4683687, 15864].into_iter().collect();
        let store = ColumnStore::from_value(&set);
        assert_eq!(store.lengths(), &[4]);
        assert_eq!(store.int64(), &[15864, 543687, 546431, 4683687]);

        let decoded: BTreeSet<i64> = store.reader().decode().expect("Decode set");
        assert_eq!(decoded, set);
    }

    #[test]
    fn test_hash_set_with_custom_hasher() {
        let set: FnvHashSet<i32> = (0..64).collect();
        let store = ColumnStore::from_value(&set);
        assert_eq!(store.lengths(), &[64]);

        let decoded: FnvHashSet<i32> = store.reader().decode().expect("Decode set");
        assert_eq!(decoded, set);
    }

    #[test]
    fn test_multiset_keeps_duplicates_and_set_collapses_them() {
        let multiset: MultiSet<i64> = [7, 7, 3].into_iter().collect();
        let store = ColumnStore::from_value(&multiset);
        assert_eq!(store.lengths(), &[3]);
        assert_eq!(store.int64(), &[3, 7, 7]);

        let decoded: MultiSet<i64> = store.reader().decode().expect("Decode multiset");
        assert_eq!(decoded.count(&7), 2);
        assert_eq!(decoded, multiset);

        let collapsed: BTreeSet<i64> = store.reader().decode().expect("Decode set");
        assert_eq!(collapsed.len(), 2);
        assert!(collapsed.contains(&7));
    }

    #[test]
    fn test_map_writes_key_then_value() {
        let mut map = BTreeMap::new();
        map.insert(89i32, vec![36.0f64; 2]);
        map.insert(98i32, vec![63.0f64]);

        let store = ColumnStore::from_value(&map);
        assert_eq!(store.lengths(), &[2, 2, 1]);
        assert_eq!(store.int32(), &[89, 98]);
        assert_eq!(store.float64(), &[36.0, 36.0, 63.0]);

        let decoded: BTreeMap<i32, Vec<f64>> = store.reader().decode().expect("Decode map");
        assert_eq!(decoded, map);
    }

    #[test]
    fn test_hash_map_with_custom_hasher() {
        let map: FnvHashMap<i64, (i32, f64)> = (0..10).map(|i| (i, (i as i32, 0.5))).collect();
        let store = ColumnStore::from_value(&map);
        let decoded: FnvHashMap<i64, (i32, f64)> = store.reader().decode().expect("Decode map");
        assert_eq!(decoded, map);
    }

    #[test]
    fn test_multimap_keeps_every_value() {
        let first: BTreeSet<i64> = [1, 2].into_iter().collect();
        let second: BTreeSet<i64> = [3].into_iter().collect();
        let map: MultiMap<i32, BTreeSet<i64>> = [
            (1, first.clone()),
            (1, second.clone()),
            (5, first.clone()),
        ]
        .into_iter()
        .collect();

        let store = ColumnStore::from_value(&map);
        assert_eq!(store.lengths(), &[3, 2, 1, 2]);

        let decoded: MultiMap<i32, BTreeSet<i64>> =
            store.reader().decode().expect("Decode multimap");
        assert_eq!(decoded.get(&1), &[first.clone(), second]);
        assert_eq!(decoded, map);

        let collapsed: BTreeMap<i32, BTreeSet<i64>> =
            store.reader().decode().expect("Decode map");
        assert_eq!(collapsed.len(), 2);
        assert_eq!(collapsed[&5], first);
    }

    #[test]
    fn test_hash_multiset_keeps_duplicates() {
        let multiset: HashMultiSet<(i32, i64), FnvBuildHasher> =
            [(1, 10), (2, 20), (1, 10)].into_iter().collect();
        let store = ColumnStore::from_value(&multiset);
        assert_eq!(store.lengths(), &[3]);
        assert_eq!(store.int32().len(), 3);

        let decoded: HashMultiSet<(i32, i64), FnvBuildHasher> =
            store.reader().decode().expect("Decode multiset");
        assert_eq!(decoded.count(&(1, 10)), 2);
        assert_eq!(decoded, multiset);

        let collapsed: FnvHashSet<(i32, i64)> = store.reader().decode().expect("Decode set");
        assert_eq!(collapsed.len(), 2);
    }

    #[test]
    fn test_hash_multimap_keeps_every_value() {
        let map: HashMultiMap<i64, Vec<f64>> =
            [(3, vec![0.5]), (3, vec![]), (8, vec![1.0, 2.0])].into_iter().collect();
        let store = ColumnStore::from_value(&map);
        assert_eq!(store.lengths()[0], 3);
        assert_eq!(store.int64().len(), 3);

        let decoded: HashMultiMap<i64, Vec<f64>> =
            store.reader().decode().expect("Decode multimap");
        assert_eq!(decoded.get(&3), &[vec![0.5], vec![]]);
        assert_eq!(decoded, map);
    }
}
