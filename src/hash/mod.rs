//! Hash tables with caller-supplied hash functions.
//!
//! Both tables implement [`KeyedMap`](crate::traits::KeyedMap) and can be used interchangeably:
//! - [`ChainedHashTable`] resolves collisions by separate chaining, keeping a list of entries per
//!   bucket.
//! - [`ProbedHashTable`] resolves collisions by open addressing, moving colliding keys along a
//!   configurable [`ProbeSequence`].
//!
//! Neither table derives hashes itself. The hash function is any `Fn(&K) -> u64`, and a key's home
//! index is its hash modulo the table's capacity.

#[cfg(feature = "chained")]
pub mod chained;
#[cfg(feature = "probed")]
pub mod probed;

mod config;
mod error;
pub mod probe;

#[cfg(feature = "chained")]
#[doc(inline)]
pub use chained::ChainedHashTable;
#[doc(inline)]
pub use config::TableConfig;
pub use error::*;
#[doc(inline)]
pub use probe::ProbeSequence;
#[cfg(feature = "probed")]
#[doc(inline)]
pub use probed::ProbedHashTable;
