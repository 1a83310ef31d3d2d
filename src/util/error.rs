use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Raised when doubling a table's capacity would overflow `usize`.
#[derive(Debug)]
pub struct CapacityOverflow {
    pub cap: usize,
}

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow while growing a table with {} slots!", self.cap)
    }
}

impl Error for CapacityOverflow {}
