#![cfg(test)]

use super::*;
use crate::hash::{KeyNotFound, ProbeSequence, TableConfig};
use crate::util::alloc::CountedDrop;
use crate::util::hash::{ManualHash, constant, identity};
use crate::util::panic::assert_panics;

fn statuses<K: Eq, V, H: Fn(&K) -> u64>(table: &ProbedHashTable<K, V, H>) -> Vec<SlotStatus> {
    (0..table.cap()).filter_map(|i| table.slot_status(i)).collect()
}

#[test]
fn test_linear_probing_scenario() {
    let mut table = ProbedHashTable::new(identity);
    table.put(0, 0);
    table.put(10, 1);
    table.put(20, 2);
    table.put(1, 3);
    table.put(2, 4);
    table.put(8, 8);

    assert_eq!(table.cap(), 10, "The load factor is checked before inserting, so 6/10 fits.");
    assert_eq!(table.get(&0), Ok(&0));
    assert_eq!(table.get(&10), Ok(&1), "10 collides with 0 and should move to slot 1.");
    assert_eq!(table.get(&20), Ok(&2), "20 should be found past two occupied slots.");
    assert_eq!(table.get(&1), Ok(&3));
    assert_eq!(table.get(&2), Ok(&4));
    assert_eq!(table.get(&8), Ok(&8));
    assert_eq!(table.slot_status(2), Some(SlotStatus::Occupied));

    assert!(table.remove(&20));
    assert_eq!(
        table.slot_status(2),
        Some(SlotStatus::Tombstone),
        "Removing 20 should leave a tombstone in its slot."
    );
    assert_eq!(table.get(&2), Ok(&4), "2 should stay reachable past the tombstone.");
    assert_eq!(table.get(&1), Ok(&3), "1 should stay reachable past the tombstone.");
    assert_eq!(table.get(&20), Err(KeyNotFound));
    assert!(!table.has_key(&20));
    assert!(!table.remove(&20), "A tombstone shouldn't be removed twice.");

    assert_eq!(table.len(), 5);
    assert_eq!(table.tombstones(), 1);
    assert_eq!(table.load_factor(), 0.6, "Tombstones should count towards the load factor.");
}

#[test]
fn test_growth_after_removals() {
    let mut table = ProbedHashTable::new(identity);
    for key in [0, 10, 20, 1, 2, 8] {
        table.put(key, key);
    }
    table.put(7, 7);
    table.put(6, 6);
    table.put(5, 5);
    table.remove(&20);
    table.remove(&2);

    for key in [0, 7, 10, 1, 6, 8, 5] {
        assert_eq!(table.get(&key), Ok(&key), "Growth shouldn't lose any entry.");
    }
    assert!(!table.has_key(&20));
    assert!(!table.has_key(&2));
    assert_eq!(table.cap(), 20);
    assert_eq!(table.tombstones(), 2);

    table.reserve(10);
    assert_eq!(table.cap(), 40);
    assert_eq!(table.tombstones(), 0, "Growth should drop every tombstone.");
    assert_eq!(
        statuses(&table).iter().filter(|s| s.is_occupied()).count(),
        7
    );
    for key in [0, 7, 10, 1, 6, 8, 5] {
        assert_eq!(table.get(&key), Ok(&key));
    }
}

#[test]
fn test_tombstones_force_growth() {
    let mut table = ProbedHashTable::new(identity);
    for key in 0..6 {
        table.put(key, key);
    }
    for key in 0..5 {
        table.remove(&key);
    }
    assert_eq!((table.len(), table.tombstones(), table.cap()), (1, 5, 10));

    table.put(100, 100);
    assert_eq!(table.cap(), 20, "Tombstones alone should push the next put over the load factor.");
    assert_eq!(table.tombstones(), 0, "Growth should drop every tombstone.");
    assert_eq!(table.len(), 2);
    assert_eq!(table.get(&5), Ok(&5));
    assert_eq!(table.get(&100), Ok(&100));
}

#[test]
fn test_tombstones_keep_chains_intact() {
    let mut table = ProbedHashTable::new(ManualHash::of);
    table.put(ManualHash::new(3, "a"), 1);
    table.put(ManualHash::new(3, "b"), 2);
    table.put(ManualHash::new(3, "c"), 3);

    assert!(table.remove(&ManualHash::new(3, "b")));
    assert!(
        table.slot_status(4).is_some_and(|s| s.is_tombstone()),
        "The middle of the chain should be a tombstone."
    );
    assert_eq!(
        table.get(&ManualHash::new(3, "c")),
        Ok(&3),
        "The end of the chain should be found past the tombstone."
    );

    table.put(ManualHash::new(4, "d"), 4);
    assert_eq!(
        table.slot_status(6),
        Some(SlotStatus::Occupied),
        "New keys should go to the first vacant slot, not reuse the tombstone."
    );
    assert_eq!(table.get(&ManualHash::new(4, "d")), Ok(&4));
    assert_eq!(table.get(&ManualHash::new(3, "a")), Ok(&1));
    assert_eq!(table.get(&ManualHash::new(3, "c")), Ok(&3));
    assert!(!table.has_key(&ManualHash::new(3, "b")));

    table.put(ManualHash::new(3, "c"), 30);
    assert_eq!(table.len(), 3, "Updating past a tombstone shouldn't duplicate the key.");
    assert_eq!(table.get(&ManualHash::new(3, "c")), Ok(&30));

    table.put(ManualHash::new(3, "b"), 20);
    assert_eq!(table.get(&ManualHash::new(3, "b")), Ok(&20), "A removed key can come back.");
    assert_eq!(table.len(), 4);
    assert_eq!(table.tombstones(), 1);
}

#[test]
fn test_wrapping_probe() {
    let mut table = ProbedHashTable::new(ManualHash::of);
    table.put(ManualHash::new(9, "nine"), 9);
    table.put(ManualHash::new(19, "nineteen"), 19);

    assert_eq!(
        table.slot_status(0),
        Some(SlotStatus::Occupied),
        "Collisions at the last slot should wrap around to the first."
    );
    assert_eq!(table.get(&ManualHash::new(19, "nineteen")), Ok(&19));
}

#[test]
fn test_quadratic_probing() {
    let probe = ProbeSequence::quadratic(1, 1);
    let config = TableConfig::new(16, 0.5).unwrap();
    let mut table = ProbedHashTable::with_config(constant::<u64>, probe, config).unwrap();

    table.put(0, 0);
    table.put(1, 1);
    table.put(2, 2);
    assert_eq!(table.slot_status(0), Some(SlotStatus::Occupied));
    assert_eq!(table.slot_status(2), Some(SlotStatus::Occupied), "offset(1) = 1 + 1");
    assert_eq!(table.slot_status(6), Some(SlotStatus::Occupied), "offset(2) = 2 + 4");
    assert_eq!(table.slot_status(1), Some(SlotStatus::Vacant));

    table.remove(&1);
    assert_eq!(table.get(&2), Ok(&2));
}

#[test]
fn test_exhausted_walk_grows() {
    // Linear probing by 2 only reaches the even offsets of an even capacity, so five keys with
    // the same home fill their whole walk in a table of 10.
    let probe = ProbeSequence::linear(2);
    let config = TableConfig::new(10, 1.0).unwrap();
    let mut table = ProbedHashTable::with_config(constant::<u64>, probe, config).unwrap();

    for key in 0..5 {
        table.put(key, key);
    }
    assert_eq!(table.cap(), 10);
    assert!(!table.has_key(&5), "A lookup on an exhausted walk should terminate as absent.");
    assert_eq!(table.get(&5), Err(KeyNotFound));
    assert!(!table.remove(&5));

    table.put(5, 5);
    assert_eq!(table.cap(), 20, "Running out of reachable slots should grow the table.");
    for key in 0..6 {
        assert_eq!(table.get(&key), Ok(&key));
    }
}

#[test]
fn test_full_table() {
    let config = TableConfig::new(4, 1.0).unwrap();
    let mut table = ProbedHashTable::with_config(identity, ProbeSequence::default(), config).unwrap();

    for key in 0..4 {
        table.put(key, key);
    }
    assert_eq!(table.cap(), 4);
    assert_eq!(table.load_factor(), 1.0);
    assert!(!table.has_key(&4), "Lookups on a full table should still terminate.");

    table.put(2, 20);
    assert_eq!(table.cap(), 4, "Updating a full table shouldn't grow it.");

    table.put(4, 4);
    assert_eq!(table.cap(), 8);
    assert_eq!(table.len(), 5);
}

#[test]
fn test_config_errors() {
    assert!(
        ProbedHashTable::<u64, u64, _>::with_probe(identity, ProbeSequence::linear(0))
            .is_err_and(|e| e.is_degenerate_probe())
    );
    assert!(
        ProbedHashTable::<u64, u64, _>::with_probe(identity, ProbeSequence::quadratic(0, 0))
            .is_err_and(|e| e.is_degenerate_probe())
    );
    assert!(ProbedHashTable::<u64, u64, _>::with_probe(identity, ProbeSequence::quadratic(0, 1)).is_ok());
}

#[test]
fn test_updates_and_indexing() {
    let mut table = ProbedHashTable::new(identity);
    table.put(4, "four");
    table.put(4, "FOUR");

    assert_eq!(table.len(), 1);
    assert_eq!(table.tombstones(), 0, "Updates shouldn't count as extra used slots.");
    assert_eq!(table[&4], "FOUR");

    table[&4] = "iv";
    assert_eq!(table.get(&4), Ok(&"iv"));
    *table.get_mut(&4).unwrap() = "4";
    assert_eq!(table.get(&4), Ok(&"4"));
    assert_eq!(table.get_mut(&5), Err(KeyNotFound));

    assert_panics!({
        let table = ProbedHashTable::<u64, u64, _>::new(identity);
        let _value = table[&1];
    });
}

#[test]
fn test_iteration() {
    let mut table = ProbedHashTable::new(identity);
    table.extend((0..12).map(|i| (i, i)));
    table.remove(&3);
    table.remove(&7);

    assert_eq!(table.iter().len(), 10);

    let mut keys: Vec<_> = table.keys().copied().collect();
    keys.sort();
    assert_eq!(keys, [0, 1, 2, 4, 5, 6, 8, 9, 10, 11]);

    for value in table.values_mut() {
        *value *= 2;
    }
    assert_eq!(table.values().sum::<u64>(), 2 * (66 - 3 - 7));

    let mut entries: Vec<_> = table.into_iter().collect();
    entries.sort();
    assert_eq!(entries.len(), 10);
    assert_eq!(entries.last(), Some(&(11, 22)));
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut table = ProbedHashTable::new(identity);
    for i in 0..8 {
        table.put(i, counter.clone());
    }

    table.remove(&2);
    assert_eq!(counter.dropped(), 1, "Tombstoning an entry should drop its value.");

    table.put(5, counter.clone());
    assert_eq!(counter.dropped(), 2, "Replacing a value should drop the old one.");

    drop(table);
    assert_eq!(counter.dropped(), 9, "Dropping the table should drop every value.");
}

#[test]
fn test_formatting() {
    let mut table = ProbedHashTable::new(identity);
    table.put(1, 'a');
    table.put(11, 'b');
    table.put(3, 'c');
    table.remove(&1);

    assert_eq!(format!("{table}"), "#{11: 'b', 3: 'c'}");
    assert_eq!(
        format!("{table:?}"),
        "ProbedHashTable { slots: [-, x, (11: 'b'), (3: 'c'), -, -, -, -, -, -], len: 2, \
        tombstones: 1, cap: 10, max_load_factor: 0.5, probe: Linear { c1: 1 } }"
    );
}

#[test]
fn test_reserve_overflow() {
    assert_panics!({
        let mut table = ProbedHashTable::new(identity);
        table.put(1, 1);
        table.reserve(usize::MAX);
    }, message = "Capacity overflow while growing a table with 10 slots!");
}
