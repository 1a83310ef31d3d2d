//! Probe sequences for open addressing.
//!
//! A [`ProbeSequence`] maps an attempt number to an offset from a key's home index. Attempt 0 is
//! always the home index itself. Offsets are evaluated modulo the table's capacity, so arbitrarily
//! large constants never overflow.

use std::fmt::{self, Display, Formatter};

/// The strategy a [`ProbedHashTable`](crate::hash::ProbedHashTable) uses to pick the next slot
/// after a collision.
///
/// Whether a sequence reaches every slot depends on both its constants and the capacity it is
/// used with, see [`ProbeSequence::covers`]. The default, `Linear { c1: 1 }`, covers any capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeSequence {
    /// `offset(step) = c1 * step`
    Linear { c1: usize },
    /// `offset(step) = c1 * step + c2 * step²`
    Quadratic { c1: usize, c2: usize },
}

impl ProbeSequence {
    pub const fn linear(c1: usize) -> ProbeSequence {
        ProbeSequence::Linear { c1 }
    }

    pub const fn quadratic(c1: usize, c2: usize) -> ProbeSequence {
        ProbeSequence::Quadratic { c1, c2 }
    }

    /// Evaluates the offset for attempt `step`, reduced modulo `cap`.
    ///
    /// # Panics
    /// Panics if `cap` is 0.
    pub const fn offset(&self, step: usize, cap: usize) -> usize {
        let cap = cap as u128;
        let step = step as u128 % cap;

        let offset = match *self {
            ProbeSequence::Linear { c1 } => (c1 as u128 % cap) * step % cap,
            ProbeSequence::Quadratic { c1, c2 } => {
                let linear = (c1 as u128 % cap) * step % cap;
                let quadratic = (c2 as u128 % cap) * step % cap * step % cap;
                (linear + quadratic) % cap
            },
        };

        offset as usize
    }

    /// The slot visited on attempt `step` for a key whose home index is `home`.
    pub(crate) const fn position(&self, home: usize, step: usize, cap: usize) -> usize {
        ((home as u128 + self.offset(step, cap) as u128) % cap as u128) as usize
    }

    /// Returns true if the sequence visits every residue modulo `cap` (and therefore every slot,
    /// from any home index). Both strategies repeat with a period of `cap`, so checking the first
    /// `cap` attempts is enough.
    pub fn covers(&self, cap: usize) -> bool {
        if cap == 0 {
            return false;
        }

        let mut seen = vec![false; cap];
        let mut distinct = 0;
        for step in 0..cap {
            let offset = self.offset(step, cap);
            if !seen[offset] {
                seen[offset] = true;
                distinct += 1;
            }
        }
        distinct == cap
    }

    /// Returns true if every offset is 0 regardless of capacity, meaning the sequence can never
    /// move past a collision.
    pub const fn is_degenerate(&self) -> bool {
        match *self {
            ProbeSequence::Linear { c1 } => c1 == 0,
            ProbeSequence::Quadratic { c1, c2 } => c1 == 0 && c2 == 0,
        }
    }
}

impl Default for ProbeSequence {
    fn default() -> ProbeSequence {
        ProbeSequence::linear(1)
    }
}

impl Display for ProbeSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ProbeSequence::Linear { c1 } => write!(f, "linear({c1})"),
            ProbeSequence::Quadratic { c1, c2 } => write!(f, "quadratic({c1}, {c2})"),
        }
    }
}
