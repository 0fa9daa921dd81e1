//! Error types for table and audit operations
//!
//! A missing key is never an error: lookups and removals report absence
//! through `Option`.

use thiserror::Error;

/// Errors raised by table operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("member name must not be empty")]
    EmptyKey,

    #[error("table capacity must be positive, got {0}")]
    InvalidCapacity(usize),

    #[error("probe factor must be positive, got {0}")]
    InvalidProbeFactor(usize),

    #[error("probing for [{key}] exhausted after {attempts} slots of a {capacity}-slot table")]
    ProbeExhausted {
        key: String,
        capacity: usize,
        attempts: usize,
    },
}

/// Errors raised by audit sinks
///
/// The table swallows these; only direct callers of a sink see them.
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("audit message must not be empty")]
    EmptyMessage,

    #[error("audit log I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TableError::EmptyKey.to_string(),
            "member name must not be empty"
        );
        assert_eq!(
            TableError::InvalidCapacity(0).to_string(),
            "table capacity must be positive, got 0"
        );

        let err = TableError::ProbeExhausted {
            key: "Bob".to_string(),
            capacity: 8,
            attempts: 8,
        };
        assert_eq!(
            err.to_string(),
            "probing for [Bob] exhausted after 8 slots of a 8-slot table"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AuditError = io.into();
        assert!(matches!(err, AuditError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }
}
