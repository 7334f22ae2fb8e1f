//! Whole-file store implementations.
//!
//! # Responsibility
//! - Provide the production disk-backed store.
//! - Provide an in-memory store so service behavior can be tested without
//!   touching disk.
//!
//! # Invariants
//! - `read_all` never returns a partial buffer.
//! - `write_all` replaces the full previous content of the target.

use crate::store::{StoreError, StoreResult};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Whole-file read/write contract.
///
/// Every transformation reads its input fully through this trait before the
/// first write, which is what makes in-place targets safe.
pub trait FileStore {
    /// Reads the entire file at `path` into memory.
    fn read_all(&self, path: &Path) -> StoreResult<Vec<u8>>;

    /// Writes `bytes` to `path`, creating the file if absent and truncating
    /// it if present.
    fn write_all(&self, path: &Path, bytes: &[u8]) -> StoreResult<()>;
}

impl<S: FileStore + ?Sized> FileStore for &S {
    fn read_all(&self, path: &Path) -> StoreResult<Vec<u8>> {
        (**self).read_all(path)
    }

    fn write_all(&self, path: &Path, bytes: &[u8]) -> StoreResult<()> {
        (**self).write_all(path, bytes)
    }
}

/// Production store over `std::fs`.
///
/// Created files get the platform default permissive mode (umask-masked
/// owner/group/world read-write).
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskFileStore;

impl FileStore for DiskFileStore {
    fn read_all(&self, path: &Path) -> StoreResult<Vec<u8>> {
        std::fs::read(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_all(&self, path: &Path, bytes: &[u8]) -> StoreResult<()> {
        std::fs::write(path, bytes).map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// In-memory store keyed by path.
///
/// Used by store-agnostic tests; reading a path that was never written fails
/// the same way a missing file does on disk.
#[derive(Debug, Default)]
pub struct MemoryFileStore {
    files: RefCell<HashMap<PathBuf, Vec<u8>>>,
}

impl MemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds one file, replacing any previous content at `path`.
    pub fn insert(&self, path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) {
        self.files.borrow_mut().insert(path.into(), bytes.into());
    }

    /// Returns a copy of the current content at `path`, if any.
    pub fn contents(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.borrow().get(path).cloned()
    }
}

impl FileStore for MemoryFileStore {
    fn read_all(&self, path: &Path) -> StoreResult<Vec<u8>> {
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| StoreError::Read {
                path: path.to_path_buf(),
                source: io::Error::from(io::ErrorKind::NotFound),
            })
    }

    fn write_all(&self, path: &Path, bytes: &[u8]) -> StoreResult<()> {
        self.insert(path, bytes);
        Ok(())
    }
}
