use super::error::{ConfigError, InvalidLoadFactor, ZeroCapacity};

/// Construction-time options shared by both table backends.
///
/// A `TableConfig` can only be built through [`TableConfig::new`] (or taken from one of the
/// provided defaults), so any instance a table receives has already been validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    initial_cap: usize,
    max_load_factor: f64,
}

impl TableConfig {
    /// The defaults for [`ChainedHashTable`](crate::hash::ChainedHashTable): 5 buckets, grown
    /// once the load factor exceeds 0.75.
    pub const CHAINED: TableConfig = TableConfig {
        initial_cap: 5,
        max_load_factor: 0.75,
    };

    /// The defaults for [`ProbedHashTable`](crate::hash::ProbedHashTable): 10 slots, grown once
    /// the load factor (tombstones included) exceeds 0.5.
    pub const PROBED: TableConfig = TableConfig {
        initial_cap: 10,
        max_load_factor: 0.5,
    };

    /// Creates a new configuration, rejecting a capacity of 0 and load factor thresholds outside
    /// of `(0, 1]` (including NaN).
    pub fn new(initial_cap: usize, max_load_factor: f64) -> Result<TableConfig, ConfigError> {
        if initial_cap == 0 {
            return Err(ZeroCapacity.into());
        }

        if !(max_load_factor > 0.0 && max_load_factor <= 1.0) {
            return Err(InvalidLoadFactor { value: max_load_factor }.into());
        }

        Ok(TableConfig {
            initial_cap,
            max_load_factor,
        })
    }

    pub const fn initial_cap(&self) -> usize {
        self.initial_cap
    }

    pub const fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        assert_eq!(
            TableConfig::new(8, 1.0).map(|c| (c.initial_cap(), c.max_load_factor())),
            Ok((8, 1.0)),
            "A load factor of exactly 1 should be accepted."
        );
        assert!(TableConfig::new(0, 0.5).is_err_and(|e| e.is_zero_capacity()));
        assert!(TableConfig::new(4, 0.0).is_err_and(|e| e.is_invalid_load_factor()));
        assert!(TableConfig::new(4, 1.5).is_err_and(|e| e.is_invalid_load_factor()));
        assert!(TableConfig::new(4, -0.5).is_err_and(|e| e.is_invalid_load_factor()));
        assert!(
            TableConfig::new(4, f64::NAN).is_err_and(|e| e.is_invalid_load_factor()),
            "NaN shouldn't slip through the range check."
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TableConfig::new(4, 2.0).unwrap_err().to_string(),
            "Load factor threshold 2 is outside of (0, 1]!"
        );
        assert_eq!(
            TableConfig::new(0, 0.5).unwrap_err().to_string(),
            "Unable to calculate indices for a hash table with capacity 0!"
        );
    }
}
