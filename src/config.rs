//! # Dispatcher Configuration
//!
//! [`Settings`] carries every value the dispatcher needs that is not part of
//! the invocation itself: where the vendored tools live, which interpreter
//! runs them, the rule set, and the upstream ref for changed-file commands.
//!
//! The binary fills it from CLI flags and environment variables; library
//! callers and tests build it directly with [`Settings::new`] and the
//! `with_*` methods.

use std::path::{Path, PathBuf};

use crate::defaults;
use crate::error::{Error, Result};
use crate::path;
use crate::tool::Tool;

/// Runtime configuration for a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Dependency root; tools live in `<root>/bin`.
    pub root: PathBuf,
    /// Program prefixed to every tool invocation. `None` runs the tool
    /// executable directly.
    pub interpreter: Option<String>,
    /// Rule set passed as `--standard=`.
    pub standard: String,
    /// Upstream ref the changed-file commands diff against.
    pub base_ref: String,
    /// Extension (without dot) of files the changed-file commands keep.
    pub extension: String,
    /// Print the command line instead of running it.
    pub dry_run: bool,
}

impl Settings {
    /// Settings for `root` with every other value at its default.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            interpreter: Some(defaults::DEFAULT_INTERPRETER.to_string()),
            standard: defaults::DEFAULT_STANDARD.to_string(),
            base_ref: defaults::DEFAULT_BASE_REF.to_string(),
            extension: defaults::SOURCE_EXTENSION.to_string(),
            dry_run: false,
        }
    }

    /// Settings rooted at `<cwd>/vendor`.
    pub fn for_project(cwd: &Path) -> Self {
        Self::new(defaults::default_root(cwd))
    }

    pub fn with_interpreter(mut self, interpreter: Option<String>) -> Self {
        self.interpreter = interpreter;
        self
    }

    pub fn with_standard(mut self, standard: impl Into<String>) -> Self {
        self.standard = standard.into();
        self
    }

    pub fn with_base_ref(mut self, base_ref: impl Into<String>) -> Self {
        self.base_ref = base_ref.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// The directory holding the tool executables.
    pub fn bin_dir(&self) -> PathBuf {
        path::bin_dir(&self.root)
    }

    /// Full path of `tool`'s executable.
    pub fn tool_path(&self, tool: Tool) -> PathBuf {
        path::tool_path(&self.root, tool.binary())
    }

    /// Ensure the dependency root looks like an installed project.
    ///
    /// Fails with [`Error::InvalidContext`] when `<root>/bin` is not a
    /// directory. Individual tool binaries are not checked here; a missing
    /// one surfaces as a failed run of that tool.
    pub fn validate_context(&self) -> Result<()> {
        let bin = self.bin_dir();
        if bin.is_dir() {
            return Ok(());
        }

        Err(Error::InvalidContext {
            message: format!("bin directory not found: {}", bin.display()),
            hint: Some(
                "Run from the project root after installing dependencies, \
                 or pass --root / set QA_DISPATCH_ROOT"
                    .to_string(),
            ),
        })
    }
}
