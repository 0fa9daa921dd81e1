//! Member record stored in the table
//!
//! Identity is the name alone: two records with the same name are the
//! same member even when their affiliations differ.

use crate::error::{Result, TableError};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A member: display name (the key) and affiliation
#[derive(Clone, Debug)]
pub struct Record {
    name: String,
    affiliation: String,
}

impl Record {
    /// Create a new record
    ///
    /// Fails with `TableError::EmptyKey` when `name` is empty.
    pub fn new(name: impl Into<String>, affiliation: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(TableError::EmptyKey);
        }
        Ok(Record {
            name,
            affiliation: affiliation.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn affiliation(&self) -> &str {
        &self.affiliation
    }

    /// True if this record is keyed by `name`
    #[inline]
    pub fn same_entity(&self, name: &str) -> bool {
        self.name == name
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Record {}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <> {}", self.name, self.affiliation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let record = Record::new("Alice", "UniA").unwrap();
        assert_eq!(record.name(), "Alice");
        assert_eq!(record.affiliation(), "UniA");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(Record::new("", "UniA").unwrap_err(), TableError::EmptyKey);
    }

    #[test]
    fn test_identity_ignores_affiliation() {
        let a = Record::new("Alice", "UniA").unwrap();
        let b = Record::new("Alice", "UniB").unwrap();
        let c = Record::new("alice", "UniA").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.same_entity("Alice"));
        assert!(!a.same_entity("Alice "));
    }

    #[test]
    fn test_record_display() {
        let record = Record::new("Smith, John", "UniS").unwrap();
        assert_eq!(format!("{}", record), "Smith, John <> UniS");
    }
}
