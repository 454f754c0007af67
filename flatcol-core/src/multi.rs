//! Collections that keep duplicates.
//!
//! The standard library has no multiset or multimap, these fill the gap so
//! collections with repeated elements or keys round trip with their
//! multiplicity intact. [MultiSet] and [MultiMap] keep their keys ordered,
//! [HashMultiSet] and [HashMultiMap] only need them to be hashable.

use std::collections::hash_map::RandomState;
use std::collections::{BTreeMap, HashMap};
use std::fmt::{Debug, Formatter};
use std::hash::{BuildHasher, Hash};
use std::iter;

#[derive(Clone, Eq, PartialEq, Hash)]
/// An ordered set that counts how many times each element was inserted.
pub struct MultiSet<T> {
    counts: BTreeMap<T, usize>,
    len: usize,
}

impl<T> Default for MultiSet<T> {
    fn default() -> Self {
        Self {
            counts: BTreeMap::new(),
            len: 0,
        }
    }
}

impl<T: Ord> MultiSet<T> {
    /// Creates a new, empty multiset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts one occurrence of `value`.
    pub fn insert(&mut self, value: T) {
        *self.counts.entry(value).or_insert(0) += 1;
        self.len += 1;
    }

    /// Removes one occurrence of `value`, returning `false` if there was none.
    pub fn remove(&mut self, value: &T) -> bool {
        let Some(count) = self.counts.get_mut(value) else {
            return false;
        };

        *count -= 1;
        if *count == 0 {
            self.counts.remove(value);
        }
        self.len -= 1;
        true
    }

    /// Returns the number of occurrences of `value`.
    pub fn count(&self, value: &T) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Returns `true` if at least one occurrence of `value` is held.
    pub fn contains(&self, value: &T) -> bool {
        self.counts.contains_key(value)
    }
}

impl<T> MultiSet<T> {
    #[inline]
    /// Returns the number of elements, counting every occurrence.
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of distinct elements.
    pub fn distinct_len(&self) -> usize {
        self.counts.len()
    }

    /// Iterates over every occurrence in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.counts
            .iter()
            .flat_map(|(value, count)| iter::repeat(value).take(*count))
    }

    /// Iterates over each distinct element with its number of occurrences.
    pub fn counts(&self) -> impl Iterator<Item = (&T, usize)> + '_ {
        self.counts.iter().map(|(value, count)| (value, *count))
    }
}

impl<T: Debug> Debug for MultiSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord> FromIterator<T> for MultiSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut slf = Self::new();
        slf.extend(iter);
        slf
    }
}

impl<T: Ord> Extend<T> for MultiSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash)]
/// An ordered map which may hold several values per key.
///
/// Values under the same key are kept in insertion order.
pub struct MultiMap<K, V> {
    entries: BTreeMap<K, Vec<V>>,
    len: usize,
}

impl<K, V> Default for MultiMap<K, V> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            len: 0,
        }
    }
}

impl<K: Ord, V> MultiMap<K, V> {
    /// Creates a new, empty multimap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` under `key`, after any values already held for it.
    pub fn insert(&mut self, key: K, value: V) {
        self.entries.entry(key).or_default().push(value);
        self.len += 1;
    }

    /// Returns every value held under `key`.
    pub fn get(&self, key: &K) -> &[V] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the number of values held under `key`.
    pub fn count(&self, key: &K) -> usize {
        self.get(key).len()
    }
}

impl<K, V> MultiMap<K, V> {
    #[inline]
    /// Returns the number of entries, counting every value.
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates over every key and value pair in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.entries
            .iter()
            .flat_map(|(key, values)| values.iter().map(move |value| (key, value)))
    }

    /// Iterates over the distinct keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.keys()
    }
}

impl<K: Debug, V: Debug> Debug for MultiMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for MultiMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut slf = Self::new();
        slf.extend(iter);
        slf
    }
}

impl<K: Ord, V> Extend<(K, V)> for MultiMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// An unordered multiset keyed by hash, for elements which are not `Ord`.
///
/// Iteration visits each distinct element in the hasher's order, with every
/// occurrence of an element visited together.
pub struct HashMultiSet<T, S = RandomState> {
    counts: HashMap<T, usize, S>,
    len: usize,
}

impl<T, S: Default> Default for HashMultiSet<T, S> {
    fn default() -> Self {
        Self {
            counts: HashMap::default(),
            len: 0,
        }
    }
}

impl<T: Eq + Hash> HashMultiSet<T> {
    /// Creates a new, empty multiset.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Eq + Hash, S: BuildHasher> HashMultiSet<T, S> {
    /// Creates a new multiset with room for `capacity` distinct elements.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            counts: HashMap::with_capacity_and_hasher(capacity, hasher),
            len: 0,
        }
    }

    /// Inserts one occurrence of `value`.
    pub fn insert(&mut self, value: T) {
        *self.counts.entry(value).or_insert(0) += 1;
        self.len += 1;
    }

    /// Returns the number of occurrences of `value`.
    pub fn count(&self, value: &T) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.counts.contains_key(value)
    }
}

impl<T, S> HashMultiSet<T, S> {
    #[inline]
    /// Returns the number of elements, counting every occurrence.
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn distinct_len(&self) -> usize {
        self.counts.len()
    }

    /// Iterates over every occurrence.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.counts
            .iter()
            .flat_map(|(value, count)| iter::repeat(value).take(*count))
    }
}

impl<T: Eq + Hash, S: BuildHasher> PartialEq for HashMultiSet<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.counts == other.counts
    }
}

impl<T: Eq + Hash, S: BuildHasher> Eq for HashMultiSet<T, S> {}

impl<T: Clone, S: Clone> Clone for HashMultiSet<T, S> {
    fn clone(&self) -> Self {
        Self {
            counts: self.counts.clone(),
            len: self.len,
        }
    }
}

impl<T: Debug, S> Debug for HashMultiSet<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Eq + Hash, S: BuildHasher + Default> FromIterator<T> for HashMultiSet<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut slf = Self::default();
        slf.extend(iter);
        slf
    }
}

impl<T: Eq + Hash, S: BuildHasher> Extend<T> for HashMultiSet<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// An unordered multimap keyed by hash, for keys which are not `Ord`.
///
/// Values under the same key are kept in insertion order.
pub struct HashMultiMap<K, V, S = RandomState> {
    entries: HashMap<K, Vec<V>, S>,
    len: usize,
}

impl<K, V, S: Default> Default for HashMultiMap<K, V, S> {
    fn default() -> Self {
        Self {
            entries: HashMap::default(),
            len: 0,
        }
    }
}

impl<K: Eq + Hash, V> HashMultiMap<K, V> {
    /// Creates a new, empty multimap.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> HashMultiMap<K, V, S> {
    /// Creates a new multimap with room for `capacity` distinct keys.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            entries: HashMap::with_capacity_and_hasher(capacity, hasher),
            len: 0,
        }
    }

    /// Inserts `value` under `key`, after any values already held for it.
    pub fn insert(&mut self, key: K, value: V) {
        self.entries.entry(key).or_default().push(value);
        self.len += 1;
    }

    /// Returns every value held under `key`.
    pub fn get(&self, key: &K) -> &[V] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self, key: &K) -> usize {
        self.get(key).len()
    }
}

impl<K, V, S> HashMultiMap<K, V, S> {
    #[inline]
    /// Returns the number of entries, counting every value.
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates over every key and value pair, grouped by key.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.entries
            .iter()
            .flat_map(|(key, values)| values.iter().map(move |value| (key, value)))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.keys()
    }
}

impl<K: Eq + Hash, V: PartialEq, S: BuildHasher> PartialEq for HashMultiMap<K, V, S> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.entries == other.entries
    }
}

impl<K: Eq + Hash, V: Eq, S: BuildHasher> Eq for HashMultiMap<K, V, S> {}

impl<K: Clone, V: Clone, S: Clone> Clone for HashMultiMap<K, V, S> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            len: self.len,
        }
    }
}

impl<K: Debug, V: Debug, S> Debug for HashMultiMap<K, V, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<K: Eq + Hash, V, S: BuildHasher + Default> FromIterator<(K, V)> for HashMultiMap<K, V, S> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut slf = Self::default();
        slf.extend(iter);
        slf
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> Extend<(K, V)> for HashMultiMap<K, V, S> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
