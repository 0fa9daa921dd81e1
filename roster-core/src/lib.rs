//! Roster - member table with quadratic probing
//!
//! Core library providing:
//! - Member records keyed by name
//! - Open-addressing table with tombstone deletion
//! - Load-factor-triggered doubling growth
//! - Pluggable audit sinks for operation tracing
//! - Ordered listing of live members

pub mod audit;
pub mod config;
pub mod error;
pub mod probe_table;
pub mod record;
pub mod report;
pub mod slot;

pub use audit::{AuditSink, LogAuditSink, MemoryAuditSink, NullAuditSink};
pub use config::TableConfig;
pub use error::{AuditError, TableError};
pub use probe_table::{ProbeTable, ProbeTrace, TableStats};
pub use record::Record;
pub use report::{Listing, Reporter};
pub use slot::Slot;
