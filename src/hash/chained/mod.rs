//! A module containing [`ChainedHashTable`] and its iterators.
//!
//! [`ChainedHashTable`] is also re-exported under the parent module.

mod chained_hash_table;
mod iter;

pub use chained_hash_table::*;
pub use iter::*;
