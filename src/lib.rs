//! # QA Dispatch Library
//!
//! This library resolves short command names (`phpcs`, `phpcbf:pr`,
//! `unit-tests`, ...) to tools installed by the PHP dependency manager and
//! runs them. It is used by the `qa-dispatch` command-line tool, and can be
//! embedded anywhere the same lint/fix/test shortcuts are wanted.
//!
//! ## Quick Example
//!
//! ```no_run
//! use qa_dispatch::config::Settings;
//! use qa_dispatch::dispatcher::{Dispatcher, Invocation};
//! use qa_dispatch::process::SystemRunner;
//!
//! let settings = Settings::new("vendor").with_dry_run(true);
//! let mut dispatcher = Dispatcher::new(settings, SystemRunner::new());
//!
//! let invocation = Invocation::parse(["phpcs", "src/"]).unwrap();
//! let outcome = dispatcher.run(&invocation, &mut std::io::stdout()).unwrap();
//! assert!(outcome.is_success());
//! ```
//!
//! ## Core Concepts
//!
//! - **Command table (`tool`)**: One record per command naming the tool, its
//!   fixed flags, and where its remaining arguments come from.
//! - **Configuration (`config`, `defaults`)**: The dependency root, the
//!   interpreter, the rule set, and the base ref for changed-file commands.
//! - **Processes (`process`)**: Argument-vector command lines and the
//!   [`process::ProcessRunner`] seam every subprocess goes through.
//! - **Source control (`git`)**: The changed-file query behind `phpcs:pr`
//!   and `phpcbf:pr`.
//! - **Dispatch (`dispatcher`)**: Ties the above together for one invocation.
//!
//! ## Execution Flow
//!
//! 1.  **Parse**: Split positional parameters into command and arguments.
//! 2.  **Lookup**: Find the command's record, or fail with `UnknownCommand`.
//! 3.  **Context**: Check that `<root>/bin` exists.
//! 4.  **Arguments**: Pass-through arguments, changed files, or none.
//! 5.  **Run**: Launch the tool and forward its exit status.

pub mod config;
pub mod defaults;
pub mod dispatcher;
pub mod error;
pub mod exit_codes;
pub mod git;
pub mod output;
pub mod path;
pub mod process;
pub mod tool;

#[cfg(test)]
mod process_proptest;
