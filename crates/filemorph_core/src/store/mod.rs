//! File storage seam for whole-file reads and writes.
//!
//! # Responsibility
//! - Define the read-all/write-all contract every transformation builds on.
//! - Keep filesystem details behind one trait boundary.
//!
//! # Invariants
//! - Reads return the complete file content or fail; no partial buffers.
//! - Writes create-or-truncate; no atomicity is offered, a failed write may
//!   leave a truncated target.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod file_store;

pub use file_store::{DiskFileStore, FileStore, MemoryFileStore};

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage error for whole-file read and write operations.
#[derive(Debug)]
pub enum StoreError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl StoreError {
    /// Path of the file the failed operation targeted.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Read { path, .. } => path,
            Self::Write { path, .. } => path,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "failed to write `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
        }
    }
}
