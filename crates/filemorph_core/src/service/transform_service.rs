//! Whole-file transformation service.
//!
//! # Responsibility
//! - Execute validated commands as read-fully-then-write operations.
//! - Surface typed errors for every failure path.
//!
//! # Invariants
//! - The input is fully read before any write, so in-place targets are safe.
//! - A command is validated before the first store access.
//! - Each operation performs exactly one read and one write.

use crate::model::command::{Command, CommandValidationError};
use crate::store::{FileStore, StoreError};
use crate::transform::{repeat_contents, replace_all, reverse_code_points};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type OpResult<T> = Result<T, OpError>;

/// Operation error for whole-file transformations.
#[derive(Debug)]
pub enum OpError {
    Validation(CommandValidationError),
    Store(StoreError),
    InvalidUtf8 { path: PathBuf },
}

impl Display for OpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::InvalidUtf8 { path } => write!(
                f,
                "`{}` is not valid UTF-8; reverse operates on code points",
                path.display()
            ),
        }
    }
}

impl Error for OpError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::InvalidUtf8 { .. } => None,
        }
    }
}

impl From<CommandValidationError> for OpError {
    fn from(value: CommandValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for OpError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Use-case service executing one transformation per call.
pub struct TransformService<S: FileStore> {
    store: S,
}

impl<S: FileStore> TransformService<S> {
    /// Creates a service over the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validates `command` and runs exactly one transformation.
    ///
    /// The single effectful execution step consuming a typed command value;
    /// a rejected command leaves every file untouched.
    pub fn execute(&self, command: &Command) -> OpResult<()> {
        command.validate()?;
        match command {
            Command::Reverse { input, output } => self.reverse(input, output),
            Command::Copy { input, output } => self.copy(input, output),
            Command::DuplicateContents { path, count } => self.duplicate_contents(path, *count),
            Command::ReplaceString {
                path,
                needle,
                replacement,
            } => self.replace_string(path, needle, replacement),
        }
    }

    /// Writes the code-point-reversed content of `input` to `output`.
    ///
    /// # Contract
    /// - `output == input` reverses in place; the read completes first.
    /// - An empty input produces an empty output.
    /// - Input that is not valid UTF-8 is rejected without writing.
    pub fn reverse(&self, input: &Path, output: &Path) -> OpResult<()> {
        let bytes = self.store.read_all(input)?;
        let text = String::from_utf8(bytes).map_err(|_| OpError::InvalidUtf8 {
            path: input.to_path_buf(),
        })?;
        let reversed = reverse_code_points(&text);
        self.store.write_all(output, reversed.as_bytes())?;
        info!(
            "event=reverse status=ok input={} output={} chars={}",
            input.display(),
            output.display(),
            text.chars().count()
        );
        Ok(())
    }

    /// Writes the exact content of `input` to `output`.
    ///
    /// Accepts arbitrary bytes; `input == output` needs no special case.
    pub fn copy(&self, input: &Path, output: &Path) -> OpResult<()> {
        let bytes = self.store.read_all(input)?;
        self.store.write_all(output, &bytes)?;
        info!(
            "event=copy status=ok input={} output={} bytes={}",
            input.display(),
            output.display(),
            bytes.len()
        );
        Ok(())
    }

    /// Overwrites `path` with its content repeated `count` times.
    ///
    /// # Contract
    /// - `count == 0` empties the file; `count == 1` leaves content as-is.
    /// - `count` arrives already parsed; a parse failure upstream never
    ///   reaches the file.
    pub fn duplicate_contents(&self, path: &Path, count: usize) -> OpResult<()> {
        let bytes = self.store.read_all(path)?;
        let repeated = repeat_contents(&bytes, count);
        self.store.write_all(path, &repeated)?;
        info!(
            "event=duplicate_contents status=ok path={} count={} bytes={}",
            path.display(),
            count,
            repeated.len()
        );
        Ok(())
    }

    /// Overwrites `path` with every occurrence of `needle` replaced by
    /// `replacement`.
    ///
    /// # Contract
    /// - Empty `needle` is rejected before the read.
    /// - A needle that never occurs still causes a full read+write cycle.
    pub fn replace_string(&self, path: &Path, needle: &str, replacement: &str) -> OpResult<()> {
        if needle.is_empty() {
            return Err(CommandValidationError::EmptyNeedle.into());
        }
        let bytes = self.store.read_all(path)?;
        let replaced = replace_all(&bytes, needle.as_bytes(), replacement.as_bytes());
        self.store.write_all(path, &replaced)?;
        info!(
            "event=replace_string status=ok path={} bytes_in={} bytes_out={}",
            path.display(),
            bytes.len(),
            replaced.len()
        );
        Ok(())
    }
}
