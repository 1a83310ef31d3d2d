#![cfg(test)]

/// The hash used by most tests: a key is its own hash.
pub fn identity(key: &u64) -> u64 {
    *key
}

/// Sends every key to the same home index, forcing the worst case for both backends.
pub fn constant<K>(_key: &K) -> u64 {
    0
}

/// A key that carries its hash alongside the value it is compared by, so tests can place distinct
/// keys on chosen (and colliding) home indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualHash<T: Eq> {
    pub hash: u64,
    pub value: T,
}

impl<T: Eq> ManualHash<T> {
    pub const fn new(hash: u64, value: T) -> ManualHash<T> {
        ManualHash { hash, value }
    }

    /// A hash function for tables keyed by `ManualHash`.
    pub fn of(key: &ManualHash<T>) -> u64 {
        key.hash
    }
}
