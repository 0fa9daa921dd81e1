//! Table configuration
//!
//! Capacity only ever grows: growth replaces the slot array with a larger
//! one, nothing shrinks it back.

use crate::error::{Result, TableError};

/// Capacity used when the caller does not pick one.
pub const DEFAULT_CAPACITY: usize = 11;

/// Growth triggers once `len / capacity` is strictly above this.
pub const MAX_LOAD_FACTOR: f64 = 0.5;

/// Capacity multiplier applied on every growth pass.
pub const GROWTH_FACTOR: usize = 2;

/// Slots examined per lookup, as a multiple of capacity.
pub const DEFAULT_PROBE_FACTOR: usize = 1;

/// File name of the session audit log.
pub const DEFAULT_AUDIT_LOG: &str = "HashtableLog.txt";

/// Construction parameters for a `ProbeTable`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableConfig {
    /// Initial number of slots
    pub capacity: usize,

    /// Probe bound: at most `capacity * probe_factor` slots are examined
    /// (home bucket included) before probing gives up
    pub probe_factor: usize,
}

impl TableConfig {
    /// Create a config with the given capacity and the default probe bound
    pub fn new(capacity: usize) -> Self {
        TableConfig {
            capacity,
            probe_factor: DEFAULT_PROBE_FACTOR,
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_probe_factor(mut self, probe_factor: usize) -> Self {
        self.probe_factor = probe_factor;
        self
    }

    /// Reject zero capacity and a zero probe bound
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(TableError::InvalidCapacity(self.capacity));
        }
        if self.probe_factor == 0 {
            return Err(TableError::InvalidProbeFactor(self.probe_factor));
        }
        Ok(())
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TableConfig::default();
        assert_eq!(config.capacity, 11);
        assert_eq!(config.probe_factor, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = TableConfig::default()
            .with_capacity(31)
            .with_probe_factor(3);
        assert_eq!(config, TableConfig { capacity: 31, probe_factor: 3 });
    }

    #[test]
    fn test_validate_rejects_zero() {
        assert_eq!(
            TableConfig::new(0).validate(),
            Err(TableError::InvalidCapacity(0))
        );
        assert_eq!(
            TableConfig::new(7).with_probe_factor(0).validate(),
            Err(TableError::InvalidProbeFactor(0))
        );
    }
}
