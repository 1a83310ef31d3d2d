use std::fmt::{self, Debug, Display, Formatter};
use std::iter;
use std::mem;
use std::ops::{Index, IndexMut};

use log::debug;

use super::{IntoIter, Iter, IterMut, Keys, Values, ValuesMut};
use crate::hash::{KeyNotFound, TableConfig};
use crate::traits::KeyedMap;
use crate::util::error::CapacityOverflow;
use crate::util::fmt::DebugFn;
use crate::util::result::ResultExtension;

const GROWTH_FACTOR: usize = 2;

/// A hash table which resolves collisions by separate chaining: every slot of the table holds a
/// bucket, which is an unordered list of all entries whose keys hash to that slot.
///
/// The hash function is supplied by the caller as any `Fn(&K) -> u64`. A key's bucket is its hash
/// modulo the number of buckets. Before every insertion the table checks its load factor (entries
/// per bucket) and doubles the number of buckets while it exceeds the configured threshold, moving
/// every entry into the bucket for its key under the new capacity. The table never shrinks.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the table.
/// - `b`: The number of entries sharing a bucket with the key.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `put` | `O(b)`*, `O(n)` |
/// | `get` | `O(b)` |
/// | `has_key` | `O(b)` |
/// | `remove` | `O(b)` |
///
/// \* If the table is over its load factor, `put` rebuilds every bucket first. Growth doubles the
/// capacity, so this cost is amortized to `O(1)` per insertion for a reasonable hash function.
pub struct ChainedHashTable<K: Eq, V, H: Fn(&K) -> u64> {
    pub(crate) buckets: Box<[Bucket<K, V>]>,
    pub(crate) len: usize,
    pub(crate) max_load_factor: f64,
    pub(crate) hasher: H,
}

pub(crate) type Bucket<K, V> = Vec<(K, V)>;

impl<K: Eq, V, H: Fn(&K) -> u64> ChainedHashTable<K, V, H> {
    /// Creates a new ChainedHashTable using `hasher`, with the default configuration of 5 buckets
    /// and a load factor threshold of 0.75.
    pub fn new(hasher: H) -> ChainedHashTable<K, V, H> {
        ChainedHashTable::with_config(hasher, TableConfig::CHAINED)
    }

    /// Creates a new ChainedHashTable using `hasher`, with the initial capacity and load factor
    /// threshold taken from `config`.
    pub fn with_config(hasher: H, config: TableConfig) -> ChainedHashTable<K, V, H> {
        ChainedHashTable {
            buckets: empty_buckets(config.initial_cap()),
            len: 0,
            max_load_factor: config.max_load_factor(),
            hasher,
        }
    }

    /// Returns the number of entries in the table.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the table contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current number of buckets.
    pub fn cap(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the ratio of entries to buckets.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.cap() as f64
    }

    /// Returns the load factor above which the table grows.
    pub const fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    /// Associates `value` with `key`, growing the table first if it is over its load factor. If
    /// the key is already present, only its value is replaced.
    pub fn put(&mut self, key: K, value: V) {
        while self.should_grow() {
            self.grow();
        }

        let index = self.index_from_key(&key);
        let bucket = &mut self.buckets[index];

        match bucket.iter().position(|(existing, _)| *existing == key) {
            Some(position) => bucket[position].1 = value,
            None => {
                bucket.push((key, value));
                self.len += 1;
            },
        }
    }

    /// Returns a reference to the value associated with `key`.
    pub fn get(&self, key: &K) -> Result<&V, KeyNotFound> {
        self.buckets[self.index_from_key(key)]
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
            .ok_or(KeyNotFound)
    }

    /// Returns a mutable reference to the value associated with `key`.
    pub fn get_mut(&mut self, key: &K) -> Result<&mut V, KeyNotFound> {
        let index = self.index_from_key(key);

        self.buckets[index]
            .iter_mut()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
            .ok_or(KeyNotFound)
    }

    /// Returns true if there is a value associated with `key`.
    pub fn has_key(&self, key: &K) -> bool {
        self.buckets[self.index_from_key(key)]
            .iter()
            .any(|(existing, _)| existing == key)
    }

    /// Removes the entry associated with `key`, returning it if it exists.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let index = self.index_from_key(key);
        let bucket = &mut self.buckets[index];

        let position = bucket.iter().position(|(existing, _)| existing == key)?;
        self.len -= 1;

        // Buckets are unordered, so the last entry can fill the gap.
        Some(bucket.swap_remove(position))
    }

    /// Removes the entry associated with `key`, returning true if it existed.
    pub fn remove(&mut self, key: &K) -> bool {
        self.remove_entry(key).is_some()
    }

    /// Grows the table until `extra` more entries can be inserted without exceeding the load
    /// factor.
    ///
    /// # Panics
    /// Panics if the required capacity overflows `usize`.
    pub fn reserve(&mut self, extra: usize) {
        let required = self.len
            .checked_add(extra)
            .ok_or(CapacityOverflow { cap: self.cap() })
            .throw();

        while required as f64 / self.cap() as f64 > self.max_load_factor {
            self.grow();
        }
    }

    /// Returns an iterator over all entries in the table, in no particular order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all entries in the table, with mutable references to the values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            len: self.len,
            inner: self.buckets.iter_mut().flatten(),
        }
    }

    /// Returns an iterator over all keys in the table.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over all values in the table.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Returns an iterator over all values in the table, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut(self.iter_mut())
    }
}

impl<K: Eq, V, H: Fn(&K) -> u64> ChainedHashTable<K, V, H> {
    pub(crate) fn should_grow(&self) -> bool {
        self.load_factor() > self.max_load_factor
    }

    /// Doubles the number of buckets, moving every entry into its bucket under the new capacity.
    ///
    /// # Panics
    /// Panics if the new capacity overflows `usize`.
    pub(crate) fn grow(&mut self) {
        let new_cap = self.cap()
            .checked_mul(GROWTH_FACTOR)
            .ok_or(CapacityOverflow { cap: self.cap() })
            .throw();

        debug!(
            "Growing ChainedHashTable from {} to {} buckets with {} entries",
            self.cap(), new_cap, self.len
        );

        let old_buckets = mem::replace(&mut self.buckets, empty_buckets(new_cap));

        for (key, value) in old_buckets.into_vec().into_iter().flatten() {
            let index = self.index_from_key(&key);
            self.buckets[index].push((key, value));
        }
    }

    /// Calculates the bucket for `key` under the current capacity, which is never 0.
    pub(crate) fn index_from_key(&self, key: &K) -> usize {
        ((self.hasher)(key) % self.cap() as u64) as usize
    }
}

fn empty_buckets<K, V>(cap: usize) -> Box<[Bucket<K, V>]> {
    iter::repeat_with(Vec::new).take(cap).collect()
}

impl<K: Eq, V, H: Fn(&K) -> u64> KeyedMap<K, V> for ChainedHashTable<K, V, H> {
    fn put(&mut self, key: K, value: V) {
        ChainedHashTable::put(self, key, value)
    }

    fn get(&self, key: &K) -> Result<&V, KeyNotFound> {
        ChainedHashTable::get(self, key)
    }

    fn get_mut(&mut self, key: &K) -> Result<&mut V, KeyNotFound> {
        ChainedHashTable::get_mut(self, key)
    }

    fn has_key(&self, key: &K) -> bool {
        ChainedHashTable::has_key(self, key)
    }

    fn remove(&mut self, key: &K) -> bool {
        ChainedHashTable::remove(self, key)
    }

    fn len(&self) -> usize {
        ChainedHashTable::len(self)
    }
}

impl<K: Eq, V, H: Fn(&K) -> u64> Index<&K> for ChainedHashTable<K, V, H> {
    type Output = V;

    /// # Panics
    /// Panics if the table doesn't contain `key`.
    fn index(&self, key: &K) -> &V {
        self.get(key).throw()
    }
}

impl<K: Eq, V, H: Fn(&K) -> u64> IndexMut<&K> for ChainedHashTable<K, V, H> {
    /// # Panics
    /// Panics if the table doesn't contain `key`.
    fn index_mut(&mut self, key: &K) -> &mut V {
        self.get_mut(key).throw()
    }
}

impl<K: Eq, V, H: Fn(&K) -> u64> Extend<(K, V)> for ChainedHashTable<K, V, H> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K: Eq + Debug, V: Debug, H: Fn(&K) -> u64> Debug for ChainedHashTable<K, V, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let buckets = DebugFn(|f: &mut Formatter<'_>| {
            f.debug_list()
                .entries(self.buckets.iter().map(|bucket| DebugFn(move |f: &mut Formatter<'_>| {
                    if bucket.is_empty() {
                        return write!(f, "-");
                    }
                    for (i, (k, v)) in bucket.iter().enumerate() {
                        if i > 0 {
                            write!(f, " -> ")?;
                        }
                        write!(f, "({k:?}: {v:?})")?;
                    }
                    Ok(())
                })))
                .finish()
        });

        f.debug_struct("ChainedHashTable")
            .field("buckets", &buckets)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("max_load_factor", &self.max_load_factor)
            .finish()
    }
}

impl<K: Eq + Debug, V: Debug, H: Fn(&K) -> u64> Display for ChainedHashTable<K, V, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Eq, V, H: Fn(&K) -> u64> IntoIterator for ChainedHashTable<K, V, H> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            len: self.len,
            inner: self.buckets.into_vec().into_iter().flatten(),
        }
    }
}

impl<'a, K: Eq, V, H: Fn(&K) -> u64> IntoIterator for &'a ChainedHashTable<K, V, H> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            len: self.len,
            inner: self.buckets.iter().flatten(),
        }
    }
}
