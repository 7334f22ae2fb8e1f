//! Command-line surface for the filemorph binary.
//!
//! # Responsibility
//! - Parse positional arguments into the typed core command.
//! - Reject arity, unknown-command, and repeat-count errors before any file
//!   is touched.

use clap::{Parser, Subcommand};
use filemorph_core::Command;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "filemorph",
    about = "Whole-file transformations: reverse, copy, duplicate, replace",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the code-point-reversed content of <INPUT> to <OUTPUT>
    Reverse {
        /// File to read
        input: PathBuf,
        /// File to write; may equal <INPUT> for in-place reversal
        output: PathBuf,
    },
    /// Write the exact content of <INPUT> to <OUTPUT>
    Copy {
        /// File to read
        input: PathBuf,
        /// File to write
        output: PathBuf,
    },
    /// Overwrite <PATH> with its content repeated <N> times
    DuplicateContents {
        /// File to read and overwrite
        path: PathBuf,
        /// Non-negative repeat count; 0 empties the file
        n: usize,
    },
    /// Overwrite <PATH> with every occurrence of <NEEDLE> replaced by <REPLACEMENT>
    ReplaceString {
        /// File to read and overwrite
        path: PathBuf,
        /// Literal text to search for; must be non-empty
        needle: String,
        /// Literal text inserted for each occurrence; may be empty
        replacement: String,
    },
}

impl Commands {
    /// Converts the parsed surface into the typed core command.
    pub fn into_command(self) -> Command {
        match self {
            Self::Reverse { input, output } => Command::Reverse { input, output },
            Self::Copy { input, output } => Command::Copy { input, output },
            Self::DuplicateContents { path, n } => Command::DuplicateContents { path, count: n },
            Self::ReplaceString {
                path,
                needle,
                replacement,
            } => Command::ReplaceString {
                path,
                needle,
                replacement,
            },
        }
    }
}
