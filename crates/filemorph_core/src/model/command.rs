//! Transformation command model.
//!
//! # Responsibility
//! - Represent exactly one whole-file transformation request.
//! - Validate semantic constraints the argument parser cannot express.
//!
//! # Invariants
//! - `validate()` performs no I/O; it runs before the first store access.
//! - Each variant carries everything its operation needs.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// One whole-file transformation request.
///
/// Produced by the CLI layer, consumed by a single execution step. Each
/// process invocation executes exactly one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Write the code-point-reversed content of `input` to `output`.
    ///
    /// `output` may equal `input`; the input is fully read before any write.
    Reverse { input: PathBuf, output: PathBuf },
    /// Write the exact content of `input` to `output`.
    Copy { input: PathBuf, output: PathBuf },
    /// Overwrite `path` with its content repeated `count` times.
    DuplicateContents { path: PathBuf, count: usize },
    /// Overwrite `path` with every occurrence of `needle` replaced by
    /// `replacement`.
    ReplaceString {
        path: PathBuf,
        needle: String,
        replacement: String,
    },
}

/// Semantic command defects caught before any filesystem access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandValidationError {
    EmptyPath { role: &'static str },
    EmptyNeedle,
}

impl Display for CommandValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPath { role } => write!(f, "{role} path cannot be empty"),
            Self::EmptyNeedle => write!(f, "search string cannot be empty"),
        }
    }
}

impl Error for CommandValidationError {}

impl Command {
    /// Checks semantic constraints before execution.
    ///
    /// # Invariants
    /// - No filesystem access; a rejected command leaves every file
    ///   untouched.
    pub fn validate(&self) -> Result<(), CommandValidationError> {
        match self {
            Self::Reverse { input, output } | Self::Copy { input, output } => {
                require_path(input, "input")?;
                require_path(output, "output")
            }
            Self::DuplicateContents { path, .. } => require_path(path, "target"),
            Self::ReplaceString { path, needle, .. } => {
                require_path(path, "target")?;
                if needle.is_empty() {
                    return Err(CommandValidationError::EmptyNeedle);
                }
                Ok(())
            }
        }
    }

    /// Stable operation name used in diagnostic events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reverse { .. } => "reverse",
            Self::Copy { .. } => "copy",
            Self::DuplicateContents { .. } => "duplicate-contents",
            Self::ReplaceString { .. } => "replace-string",
        }
    }
}

fn require_path(path: &Path, role: &'static str) -> Result<(), CommandValidationError> {
    if path.as_os_str().is_empty() {
        return Err(CommandValidationError::EmptyPath { role });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Command, CommandValidationError};
    use std::path::PathBuf;

    #[test]
    fn well_formed_commands_validate() {
        let commands = [
            Command::Reverse {
                input: PathBuf::from("in.txt"),
                output: PathBuf::from("out.txt"),
            },
            Command::Copy {
                input: PathBuf::from("in.txt"),
                output: PathBuf::from("in.txt"),
            },
            Command::DuplicateContents {
                path: PathBuf::from("data.txt"),
                count: 0,
            },
            Command::ReplaceString {
                path: PathBuf::from("data.txt"),
                needle: "foo".to_string(),
                replacement: String::new(),
            },
        ];
        for command in commands {
            command.validate().expect("command should validate");
        }
    }

    #[test]
    fn empty_needle_is_rejected() {
        let command = Command::ReplaceString {
            path: PathBuf::from("data.txt"),
            needle: String::new(),
            replacement: "x".to_string(),
        };
        assert_eq!(
            command.validate().unwrap_err(),
            CommandValidationError::EmptyNeedle
        );
    }

    #[test]
    fn empty_paths_are_rejected_with_role() {
        let command = Command::Reverse {
            input: PathBuf::new(),
            output: PathBuf::from("out.txt"),
        };
        let err = command.validate().unwrap_err();
        assert_eq!(err, CommandValidationError::EmptyPath { role: "input" });
        assert!(err.to_string().contains("input"));
    }

    #[test]
    fn names_are_stable() {
        let command = Command::DuplicateContents {
            path: PathBuf::from("data.txt"),
            count: 2,
        };
        assert_eq!(command.name(), "duplicate-contents");
    }
}
