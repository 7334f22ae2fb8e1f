//! filemorph binary entry point.
//!
//! # Responsibility
//! - Wire the argument surface to the core transformation service.
//! - Report every failure as one human-readable line with a nonzero exit.

mod args;

use args::Cli;
use clap::Parser;
use filemorph_core::{default_log_level, init_logging, DiskFileStore, TransformService};

fn main() {
    let cli = Cli::parse();

    // Logging is diagnostics only; a failed init must not block the run.
    if let Err(message) = init_logging(default_log_level()) {
        eprintln!("warning: logging disabled: {message}");
    }

    let command = cli.command.into_command();
    let service = TransformService::new(DiskFileStore);

    if let Err(err) = service.execute(&command) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
