//! # Error Handling
//!
//! This module defines the centralized error type for `qa-dispatch`. It uses
//! the `thiserror` library to describe every failure the dispatcher can hit
//! before, or while, handing work to an external tool.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum of all failure modes. The first three variants
//!   (`InvalidContext`, `MissingCommand`, `UnknownCommand`) are fatal and end
//!   the process before any tool is launched.
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! A tool that runs and exits non-zero is *not* an error: it is reported as
//! [`crate::dispatcher::Outcome::Failed`] so the exit code can be forwarded.
//! `SourceControlUnavailable` is produced by [`crate::git`] and absorbed by
//! the dispatcher into an empty changed-file set.

use thiserror::Error;

/// Main error type for qa-dispatch operations
#[derive(Error, Debug)]
pub enum Error {
    /// The dispatcher is not running inside a usable project layout.
    ///
    /// Raised when the dependency root has no `bin` directory.
    #[error("Invalid context: {message}{}", hint.as_ref().map(|h| format!("; hint: {}", h)).unwrap_or_default())]
    InvalidContext {
        message: String,
        /// Optional hint for how to fix the setup
        hint: Option<String>,
    },

    /// No command token was supplied.
    #[error("No command specified")]
    MissingCommand,

    /// The command token is not one of the recognized commands.
    #[error("Unknown command: {name}")]
    UnknownCommand { name: String },

    /// A process could not be started at all.
    #[error("Failed to start {program}: {message}")]
    Spawn { program: String, message: String },

    /// The changed-file query against source control failed.
    #[error("Source control unavailable: {command} - {stderr}")]
    SourceControlUnavailable { command: String, stderr: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
