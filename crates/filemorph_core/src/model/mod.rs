//! Typed command surface for whole-file transformations.
//!
//! # Responsibility
//! - Define the canonical command value produced by argument parsing.
//! - Keep one validated shape between the CLI layer and execution.
//!
//! # Invariants
//! - A command that passed `validate()` carries no empty path and no empty
//!   needle.

pub mod command;
