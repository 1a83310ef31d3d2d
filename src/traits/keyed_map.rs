use crate::hash::KeyNotFound;

/// A mutable association of unique keys to values, implemented by both hash table backends.
///
/// The trait is object safe, so the backend can be picked at runtime and hidden behind a
/// `Box<dyn KeyedMap<K, V>>`.
///
/// Only [`get`](KeyedMap::get) and [`get_mut`](KeyedMap::get_mut) can fail. Absence is reported
/// through the returned `bool` by [`has_key`](KeyedMap::has_key) and
/// [`remove`](KeyedMap::remove), and [`put`](KeyedMap::put) always succeeds.
pub trait KeyedMap<K, V> {
    /// Associates `value` with `key`, replacing any value the key already had.
    fn put(&mut self, key: K, value: V);

    /// Returns a reference to the value associated with `key`.
    fn get(&self, key: &K) -> Result<&V, KeyNotFound>;

    /// Returns a mutable reference to the value associated with `key`.
    fn get_mut(&mut self, key: &K) -> Result<&mut V, KeyNotFound>;

    /// Returns true if the map contains a value for `key`.
    fn has_key(&self, key: &K) -> bool;

    /// Removes `key` and its value, returning true if the key was present.
    fn remove(&mut self, key: &K) -> bool;

    /// Returns the number of keys in the map.
    fn len(&self) -> usize;

    /// Returns true if the map contains no keys.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
