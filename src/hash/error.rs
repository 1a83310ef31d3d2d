use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant};

use super::probe::ProbeSequence;

/// The error returned when looking up a key that a table doesn't contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyNotFound;

impl Display for KeyNotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Key not found in table!")
    }
}

impl Error for KeyNotFound {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroCapacity;

impl Display for ZeroCapacity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to calculate indices for a hash table with capacity 0!")
    }
}

impl Error for ZeroCapacity {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidLoadFactor {
    pub value: f64,
}

impl Display for InvalidLoadFactor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Load factor threshold {} is outside of (0, 1]!", self.value)
    }
}

impl Error for InvalidLoadFactor {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegenerateProbe {
    pub probe: ProbeSequence,
}

impl Display for DegenerateProbe {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Probe sequence {} never leaves the home slot!", self.probe)
    }
}

impl Error for DegenerateProbe {}

/// Any reason a table configuration can be rejected before the table is built.
#[derive(Debug, Clone, Copy, PartialEq, Display, Error, From, IsVariant)]
pub enum ConfigError {
    ZeroCapacity(ZeroCapacity),
    InvalidLoadFactor(InvalidLoadFactor),
    DegenerateProbe(DegenerateProbe),
}
