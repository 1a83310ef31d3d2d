use std::fmt::{self, Debug, Display, Formatter};
use std::iter;
use std::mem;
use std::ops::{Index, IndexMut};

use log::{debug, warn};

use super::slot::{Slot, SlotStatus};
use super::{IntoIter, Iter, IterMut, Keys, Values, ValuesMut};
use crate::hash::{ConfigError, DegenerateProbe, KeyNotFound, ProbeSequence, TableConfig};
use crate::traits::KeyedMap;
use crate::util::error::CapacityOverflow;
use crate::util::fmt::DebugFn;
use crate::util::result::ResultExtension;

const GROWTH_FACTOR: usize = 2;

/// A hash table which resolves collisions by open addressing: every entry lives directly in a
/// single array of slots, and a key that collides is moved along its [`ProbeSequence`] until a
/// free slot is found.
///
/// A lookup starts at the key's home index (its hash modulo the capacity) and visits
/// `(home + probe.offset(step)) % cap` for `step = 0, 1, 2, ...` until it finds the key or a
/// vacant slot. Removal replaces the entry with a tombstone, which lookups walk past, so keys
/// placed further along the same sequence stay reachable.
///
/// Tombstones count towards the load factor. Once the load factor exceeds the configured threshold
/// the next insertion doubles the capacity and re-places every live entry, dropping all tombstones.
/// The table never shrinks.
///
/// A walk never examines more than `cap` attempts, because both probe strategies repeat with that
/// period. If a probe sequence can't reach every slot (see [`ProbeSequence::covers`]) the table
/// logs a warning, and an insertion that runs out of reachable slots grows the table instead of
/// probing forever.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the table.
/// - `p`: The length of the probe walk for the key, including tombstones.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `put` | `O(p)`*, `O(n)` |
/// | `get` | `O(p)` |
/// | `has_key` | `O(p)` |
/// | `remove` | `O(p)` |
///
/// \* If the table is over its load factor, `put` rebuilds the slot array first, which is
/// amortized to `O(1)` per insertion.
pub struct ProbedHashTable<K: Eq, V, H: Fn(&K) -> u64> {
    pub(crate) slots: Box<[Slot<K, V>]>,
    /// Occupied slots.
    pub(crate) len: usize,
    /// Occupied and tombstone slots.
    pub(crate) used: usize,
    pub(crate) max_load_factor: f64,
    pub(crate) probe: ProbeSequence,
    pub(crate) hasher: H,
}

/// Where a probe walk for a key ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Search {
    /// The key occupies this slot.
    Found(usize),
    /// The key is absent; this is the first vacant slot on its walk.
    Vacant(usize),
    /// Every attempt landed on another key or a tombstone.
    Exhausted,
}

impl<K: Eq, V, H: Fn(&K) -> u64> ProbedHashTable<K, V, H> {
    /// Creates a new ProbedHashTable using `hasher`, with the default configuration of 10 slots, a
    /// load factor threshold of 0.5 and linear probing with a step of 1.
    pub fn new(hasher: H) -> ProbedHashTable<K, V, H> {
        ProbedHashTable::build(hasher, ProbeSequence::default(), TableConfig::PROBED)
    }

    /// Creates a new ProbedHashTable using `hasher` and `probe`, with the default capacity and
    /// load factor threshold.
    ///
    /// # Errors
    /// Returns [`ConfigError::DegenerateProbe`] if `probe` can never move past its first attempt.
    pub fn with_probe(
        hasher: H,
        probe: ProbeSequence,
    ) -> Result<ProbedHashTable<K, V, H>, ConfigError> {
        ProbedHashTable::with_config(hasher, probe, TableConfig::PROBED)
    }

    /// Creates a new ProbedHashTable using `hasher` and `probe`, with the initial capacity and load
    /// factor threshold taken from `config`.
    ///
    /// # Errors
    /// Returns [`ConfigError::DegenerateProbe`] if `probe` can never move past its first attempt.
    pub fn with_config(
        hasher: H,
        probe: ProbeSequence,
        config: TableConfig,
    ) -> Result<ProbedHashTable<K, V, H>, ConfigError> {
        if probe.is_degenerate() {
            return Err(DegenerateProbe { probe }.into());
        }

        Ok(ProbedHashTable::build(hasher, probe, config))
    }

    fn build(hasher: H, probe: ProbeSequence, config: TableConfig) -> ProbedHashTable<K, V, H> {
        let table = ProbedHashTable {
            slots: vacant_slots(config.initial_cap()),
            len: 0,
            used: 0,
            max_load_factor: config.max_load_factor(),
            probe,
            hasher,
        };

        table.check_coverage();
        table
    }

    /// Returns the number of entries in the table.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the table contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current number of slots.
    pub fn cap(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of slots holding a tombstone.
    pub const fn tombstones(&self) -> usize {
        self.used - self.len
    }

    /// Returns the ratio of used slots (entries and tombstones) to the capacity.
    pub fn load_factor(&self) -> f64 {
        self.used as f64 / self.cap() as f64
    }

    /// Returns the load factor above which the table grows.
    pub const fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    /// Returns the probe sequence used to resolve collisions.
    pub const fn probe(&self) -> ProbeSequence {
        self.probe
    }

    /// Returns the status of the slot at `index`, or None if `index` is out of bounds.
    pub fn slot_status(&self, index: usize) -> Option<SlotStatus> {
        self.slots.get(index).map(Slot::status)
    }

    /// Associates `value` with `key`, growing the table first if it is over its load factor. If
    /// the key is already present, only its value is replaced.
    ///
    /// New keys are written to the first vacant slot on their probe walk.
    pub fn put(&mut self, key: K, value: V) {
        while self.should_grow() {
            self.grow();
        }

        loop {
            match self.find(&key) {
                Search::Found(index) => {
                    match &mut self.slots[index] {
                        Slot::Occupied(_, existing) => *existing = value,
                        // UNREACHABLE: find only reports Found for an occupied slot.
                        Slot::Vacant | Slot::Tombstone => unreachable!(),
                    }
                    return;
                },
                Search::Vacant(index) => {
                    self.slots[index] = Slot::Occupied(key, value);
                    self.len += 1;
                    self.used += 1;
                    return;
                },
                Search::Exhausted => {
                    warn!(
                        "Probe sequence {} found no vacant slot among {} slots, growing early",
                        self.probe, self.cap()
                    );
                    self.grow();
                },
            }
        }
    }

    /// Returns a reference to the value associated with `key`.
    pub fn get(&self, key: &K) -> Result<&V, KeyNotFound> {
        let index = self.find_occupied(key).ok_or(KeyNotFound)?;

        match &self.slots[index] {
            Slot::Occupied(_, value) => Ok(value),
            Slot::Vacant | Slot::Tombstone => Err(KeyNotFound),
        }
    }

    /// Returns a mutable reference to the value associated with `key`.
    pub fn get_mut(&mut self, key: &K) -> Result<&mut V, KeyNotFound> {
        let index = self.find_occupied(key).ok_or(KeyNotFound)?;

        match &mut self.slots[index] {
            Slot::Occupied(_, value) => Ok(value),
            Slot::Vacant | Slot::Tombstone => Err(KeyNotFound),
        }
    }

    /// Returns true if there is a value associated with `key`.
    pub fn has_key(&self, key: &K) -> bool {
        self.find_occupied(key).is_some()
    }

    /// Removes the entry associated with `key`, returning it if it exists. The slot it occupied
    /// becomes a tombstone and still counts towards the load factor.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let index = self.find_occupied(key)?;
        self.len -= 1;

        mem::replace(&mut self.slots[index], Slot::Tombstone).into_entry()
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
        loop {
            // Growth drops tombstones, so the slots in use shrink back to the live entries.
            let required = self.used
                .checked_add(extra)
                .ok_or(CapacityOverflow { cap: self.cap() })
                .throw();

            if required as f64 / self.cap() as f64 <= self.max_load_factor {
                break;
            }
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
            inner: self.slots.iter_mut(),
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

impl<K: Eq, V, H: Fn(&K) -> u64> ProbedHashTable<K, V, H> {
    pub(crate) fn should_grow(&self) -> bool {
        self.load_factor() > self.max_load_factor
    }

    /// Walks the probe sequence for `key`, skipping over tombstones and other keys, until it finds
    /// the key or a vacant slot.
    pub(crate) fn find(&self, key: &K) -> Search {
        let cap = self.cap();
        let home = self.home_index(key, cap);

        for step in 0..cap {
            let index = self.probe.position(home, step, cap);

            match &self.slots[index] {
                Slot::Vacant => return Search::Vacant(index),
                Slot::Occupied(existing, _) if existing == key => return Search::Found(index),
                Slot::Occupied(..) | Slot::Tombstone => {},
            }
        }

        Search::Exhausted
    }

    pub(crate) fn find_occupied(&self, key: &K) -> Option<usize> {
        match self.find(key) {
            Search::Found(index) => Some(index),
            Search::Vacant(_) | Search::Exhausted => None,
        }
    }

    /// Doubles the capacity and re-places every entry, dropping all tombstones. If the probe
    /// sequence can't fit every entry at the doubled capacity, the capacity keeps doubling until
    /// it can.
    ///
    /// # Panics
    /// Panics if the new capacity overflows `usize`.
    pub(crate) fn grow(&mut self) {
        let old_cap = self.cap();
        let tombstones = self.tombstones();
        let mut new_cap = doubled(old_cap);

        let mut entries: Vec<(K, V)> = mem::take(&mut self.slots)
            .into_vec()
            .into_iter()
            .filter_map(Slot::into_entry)
            .collect();

        loop {
            let mut slots = vacant_slots(new_cap);
            if self.place_all(&mut slots, &mut entries) {
                self.slots = slots;
                break;
            }

            warn!(
                "Probe sequence {} couldn't re-place every entry into {} slots",
                self.probe, new_cap
            );
            entries.extend(slots.into_vec().into_iter().filter_map(Slot::into_entry));
            new_cap = doubled(new_cap);
        }

        self.used = self.len;

        debug!(
            "Growing ProbedHashTable from {} to {} slots with {} entries, dropped {} tombstones",
            old_cap, new_cap, self.len, tombstones
        );

        self.check_coverage();
    }

    /// Moves `entries` into the first vacant slot of their probe walks in `slots`, which holds no
    /// tombstones or duplicate keys. Returns false, leaving the unplaced entries in `entries`, if
    /// the walk for an entry runs out of attempts.
    fn place_all(&self, slots: &mut [Slot<K, V>], entries: &mut Vec<(K, V)>) -> bool {
        let cap = slots.len();

        while let Some((key, value)) = entries.pop() {
            let home = self.home_index(&key, cap);
            let vacant = (0..cap)
                .map(|step| self.probe.position(home, step, cap))
                .find(|&index| slots[index].is_vacant());

            match vacant {
                Some(index) => slots[index] = Slot::Occupied(key, value),
                None => {
                    entries.push((key, value));
                    return false;
                },
            }
        }

        true
    }

    /// Calculates the home index of `key` in a slot array of length `cap`, which is never 0.
    pub(crate) fn home_index(&self, key: &K, cap: usize) -> usize {
        ((self.hasher)(key) % cap as u64) as usize
    }

    fn check_coverage(&self) {
        if !self.probe.covers(self.cap()) {
            warn!(
                "Probe sequence {} doesn't reach every slot of a ProbedHashTable with capacity {}",
                self.probe, self.cap()
            );
        }
    }
}

fn doubled(cap: usize) -> usize {
    cap.checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow { cap }).throw()
}

fn vacant_slots<K, V>(cap: usize) -> Box<[Slot<K, V>]> {
    iter::repeat_with(|| Slot::Vacant).take(cap).collect()
}

impl<K: Eq, V, H: Fn(&K) -> u64> KeyedMap<K, V> for ProbedHashTable<K, V, H> {
    fn put(&mut self, key: K, value: V) {
        ProbedHashTable::put(self, key, value)
    }

    fn get(&self, key: &K) -> Result<&V, KeyNotFound> {
        ProbedHashTable::get(self, key)
    }

    fn get_mut(&mut self, key: &K) -> Result<&mut V, KeyNotFound> {
        ProbedHashTable::get_mut(self, key)
    }

    fn has_key(&self, key: &K) -> bool {
        ProbedHashTable::has_key(self, key)
    }

    fn remove(&mut self, key: &K) -> bool {
        ProbedHashTable::remove(self, key)
    }

    fn len(&self) -> usize {
        ProbedHashTable::len(self)
    }
}

impl<K: Eq, V, H: Fn(&K) -> u64> Index<&K> for ProbedHashTable<K, V, H> {
    type Output = V;

    /// # Panics
    /// Panics if the table doesn't contain `key`.
    fn index(&self, key: &K) -> &V {
        self.get(key).throw()
    }
}

impl<K: Eq, V, H: Fn(&K) -> u64> IndexMut<&K> for ProbedHashTable<K, V, H> {
    /// # Panics
    /// Panics if the table doesn't contain `key`.
    fn index_mut(&mut self, key: &K) -> &mut V {
        self.get_mut(key).throw()
    }
}

impl<K: Eq, V, H: Fn(&K) -> u64> Extend<(K, V)> for ProbedHashTable<K, V, H> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K: Eq + Debug, V: Debug, H: Fn(&K) -> u64> Debug for ProbedHashTable<K, V, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let slots = DebugFn(|f: &mut Formatter<'_>| {
            f.debug_list()
                .entries(self.slots.iter().map(|slot| DebugFn(move |f: &mut Formatter<'_>| {
                    match slot {
                        Slot::Vacant => write!(f, "-"),
                        Slot::Occupied(k, v) => write!(f, "({k:?}: {v:?})"),
                        Slot::Tombstone => write!(f, "x"),
                    }
                })))
                .finish()
        });

        f.debug_struct("ProbedHashTable")
            .field("slots", &slots)
            .field("len", &self.len)
            .field("tombstones", &self.tombstones())
            .field("cap", &self.cap())
            .field("max_load_factor", &self.max_load_factor)
            .field("probe", &self.probe)
            .finish()
    }
}

impl<K: Eq + Debug, V: Debug, H: Fn(&K) -> u64> Display for ProbedHashTable<K, V, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Eq, V, H: Fn(&K) -> u64> IntoIterator for ProbedHashTable<K, V, H> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            len: self.len,
            inner: self.slots.into_vec().into_iter(),
        }
    }
}

impl<'a, K: Eq, V, H: Fn(&K) -> u64> IntoIterator for &'a ProbedHashTable<K, V, H> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            len: self.len,
            inner: self.slots.iter(),
        }
    }
}
