//! Use-case services for whole-file transformations.
//!
//! # Responsibility
//! - Orchestrate store reads and writes into one-shot operations.
//! - Keep the CLI layer decoupled from buffer and storage details.

pub mod transform_service;
