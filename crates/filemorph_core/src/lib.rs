//! Core domain logic for filemorph.
//! This crate is the single source of truth for transformation semantics.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod transform;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::command::{Command, CommandValidationError};
pub use service::transform_service::{OpError, OpResult, TransformService};
pub use store::{DiskFileStore, FileStore, MemoryFileStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
