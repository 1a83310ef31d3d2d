//! Traits shared between collections.

mod keyed_map;

pub use keyed_map::*;
