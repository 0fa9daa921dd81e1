//! Session log on disk
//!
//! Each session starts by truncating the file and writing a banner; every
//! message after that is appended on its own line.

use roster_core::config::DEFAULT_AUDIT_LOG;
use roster_core::{AuditError, AuditSink};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

const SESSION_BANNER: &str = "\
##################################################################################
################################## NEW LOG ENTRY #################################
##################################################################################
";

/// Audit sink writing to a text file
#[derive(Clone, Debug)]
pub struct FileAuditSink {
    path: PathBuf,
}

impl FileAuditSink {
    /// Create a sink for `path`; nothing is written until the first call
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FileAuditSink {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileAuditSink {
    fn default() -> Self {
        Self::new(DEFAULT_AUDIT_LOG)
    }
}

impl AuditSink for FileAuditSink {
    fn begin_session(&self) -> Result<(), AuditError> {
        let mut file = File::create(&self.path).map_err(|err| {
            log::error!(
                "cannot start audit log {}: {}; proceeding without logging",
                self.path.display(),
                err
            );
            err
        })?;
        file.write_all(SESSION_BANNER.as_bytes())?;
        log::info!("audit session started at {}", self.path.display());
        Ok(())
    }

    fn append(&self, message: &str) -> Result<(), AuditError> {
        if message.is_empty() {
            return Err(AuditError::EmptyMessage);
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", message)?;
        Ok(())
    }
}
