//! Generic in-memory hash tables behind a single map trait.
//!
//! # Purpose
//! This crate implements the two classic ways of resolving hash collisions, so they can be
//! compared side by side:
//! - [Separate chaining](hash::ChainedHashTable), where each bucket holds a list of entries.
//! - [Open addressing](hash::ProbedHashTable), where colliding entries are moved to other slots of
//!   the same array along a [probe sequence](hash::ProbeSequence), and removals leave tombstones.
//!
//! Both implement [`KeyedMap`](traits::KeyedMap), so code can be written once against the trait
//! and run on either table (including through a `Box<dyn KeyedMap<K, V>>`).
//!
//! # Hashing
//! The tables never hash keys on their own: the caller supplies the hash function as any
//! `Fn(&K) -> u64` when constructing a table. This makes collisions easy to provoke and to reason
//! about, which is half the point of the exercise.
//!
//! # Error Handling
//! Looking up a missing key is the only failing operation, and it returns
//! [`KeyNotFound`](hash::KeyNotFound) instead of a sentinel. Presence checks and removals report
//! absence through a `bool`. Invalid configurations are rejected up front with a
//! [`ConfigError`](hash::ConfigError), so insertion itself never fails. (It can still panic if a
//! table would have to grow past `usize::MAX` slots, just like a `Vec`.)
//!
//! Errors are small types implementing [`Error`](std::error::Error), combined into enums for
//! static dispatch.
//!
//! # Logging
//! Growth is logged at the `debug` level and probe sequences that can't reach every slot at the
//! `warn` level, through the [`log`] facade. No logger is installed by this crate.
//!
//! # Non-goals
//! The tables aren't thread safe, never shrink, and iterate in no particular order.

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod hash;
pub mod traits;

pub(crate) mod util;
