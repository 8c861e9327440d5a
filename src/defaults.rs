//! Default values for qa-dispatch configuration.
//!
//! This module provides centralized default values used by the CLI flags and
//! the dispatcher, ensuring consistency and avoiding duplication.

use std::path::{Path, PathBuf};

/// Rule set passed to the style checker and fixer as `--standard=`.
pub const DEFAULT_STANDARD: &str = "Uncanny-Automator";

/// Upstream reference the changed-file commands diff against.
pub const DEFAULT_BASE_REF: &str = "origin/pre-release";

/// Interpreter prefixed to every tool invocation.
pub const DEFAULT_INTERPRETER: &str = "php";

/// Directory name the dependency manager installs packages into.
pub const VENDOR_DIR: &str = "vendor";

/// File extension (without the dot) of files the changed-file commands keep.
pub const SOURCE_EXTENSION: &str = "php";

/// Returns the default dependency root for a working directory.
///
/// This is `<cwd>/vendor`, the directory whose `bin/` holds the tool
/// executables. It can be overridden by the `--root` CLI flag or the
/// `QA_DISPATCH_ROOT` environment variable.
pub fn default_root(cwd: &Path) -> PathBuf {
    cwd.join(VENDOR_DIR)
}
