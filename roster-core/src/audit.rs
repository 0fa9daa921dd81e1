//! Audit sinks
//!
//! The table reports every lookup, insertion, removal and growth pass as a
//! line of operator-facing text. Delivery is best effort: a failing sink
//! is logged and otherwise ignored.

use crate::error::AuditError;
use std::cell::RefCell;
use std::rc::Rc;

/// Receiver of audit messages
pub trait AuditSink {
    /// Start a fresh log section
    fn begin_session(&self) -> Result<(), AuditError>;

    /// Append one message to the current section
    fn append(&self, message: &str) -> Result<(), AuditError>;
}

/// Discards everything
#[derive(Clone, Copy, Debug, Default)]
pub struct NullAuditSink;

impl AuditSink for NullAuditSink {
    fn begin_session(&self) -> Result<(), AuditError> {
        Ok(())
    }

    fn append(&self, message: &str) -> Result<(), AuditError> {
        if message.is_empty() {
            return Err(AuditError::EmptyMessage);
        }
        Ok(())
    }
}

/// Forwards messages to the `log` facade under target `roster::audit`
#[derive(Clone, Copy, Debug, Default)]
pub struct LogAuditSink;

impl AuditSink for LogAuditSink {
    fn begin_session(&self) -> Result<(), AuditError> {
        log::info!(target: "roster::audit", "NEW LOG ENTRY");
        Ok(())
    }

    fn append(&self, message: &str) -> Result<(), AuditError> {
        if message.is_empty() {
            return Err(AuditError::EmptyMessage);
        }
        log::info!(target: "roster::audit", "{}", message);
        Ok(())
    }
}

/// Keeps messages in memory
///
/// Clones share the same buffer, so a caller can hand one clone to a table
/// and read the lines back through another.
#[derive(Clone, Debug, Default)]
pub struct MemoryAuditSink {
    lines: Rc<RefCell<Vec<String>>>,
    sessions: Rc<RefCell<usize>>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the messages appended so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Number of sessions started
    pub fn sessions(&self) -> usize {
        *self.sessions.borrow()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl AuditSink for MemoryAuditSink {
    fn begin_session(&self) -> Result<(), AuditError> {
        self.lines.borrow_mut().clear();
        *self.sessions.borrow_mut() += 1;
        Ok(())
    }

    fn append(&self, message: &str) -> Result<(), AuditError> {
        if message.is_empty() {
            return Err(AuditError::EmptyMessage);
        }
        self.lines.borrow_mut().push(message.to_string());
        Ok(())
    }
}
