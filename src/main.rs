//! # QA Dispatch CLI
//!
//! This is the binary entry point for the `qa-dispatch` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Handing the invocation to the library's dispatcher.
//! - Translating the dispatch outcome into a process exit code.
//!
//! The dispatch logic lives in the `lib.rs` library crate, so the binary is a
//! thin wrapper around reusable, testable functionality.

mod cli;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();
    cli.execute()
}
