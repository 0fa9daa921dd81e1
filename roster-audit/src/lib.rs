//! File-backed audit log for roster tables
//!
//! Provides:
//! - Session log file with a per-session banner
//! - Process-wide logger setup (`env_logger`, `ROSTER_LOG` overrides filters)

pub mod file_sink;
pub mod logger;

pub use file_sink::FileAuditSink;
pub use logger::initialize_logger;
