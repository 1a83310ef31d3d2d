//! A module containing [`ProbedHashTable`], its slot model and its iterators.
//!
//! Removal in an open addressing table is logical: a removed entry leaves a
//! [tombstone](SlotStatus::Tombstone) behind so that lookups for keys further along the same
//! probe sequence keep walking past it. Tombstones are only cleared when the table grows.
//!
//! [`ProbedHashTable`] is also re-exported under the parent module.

mod iter;
mod probed_hash_table;
mod slot;
mod tests;

pub use iter::*;
pub use probed_hash_table::*;
pub use slot::SlotStatus;
