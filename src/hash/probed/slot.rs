use derive_more::{Display, IsVariant};

/// A single position in a [`ProbedHashTable`](super::ProbedHashTable).
#[derive(Debug, IsVariant)]
pub(crate) enum Slot<K, V> {
    /// Never held an entry since the table was last rebuilt. Ends every probe walk.
    Vacant,
    Occupied(K, V),
    /// Held an entry that has since been removed. Probe walks continue past it.
    Tombstone,
}

impl<K, V> Slot<K, V> {
    pub(crate) fn into_entry(self) -> Option<(K, V)> {
        match self {
            Slot::Occupied(key, value) => Some((key, value)),
            Slot::Vacant | Slot::Tombstone => None,
        }
    }

    pub(crate) const fn status(&self) -> SlotStatus {
        match self {
            Slot::Vacant => SlotStatus::Vacant,
            Slot::Occupied(..) => SlotStatus::Occupied,
            Slot::Tombstone => SlotStatus::Tombstone,
        }
    }
}

/// The state of a slot, as reported by [`ProbedHashTable::slot_status`](super::ProbedHashTable::slot_status).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IsVariant)]
pub enum SlotStatus {
    Vacant,
    Occupied,
    Tombstone,
}
