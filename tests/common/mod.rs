//! Shared test utilities for E2E tests.
//!
//! This module provides a project fixture with a vendored `bin/` directory
//! and, on Unix, a fake interpreter that records the arguments it was given
//! instead of running any PHP.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_vendor_bin().with_fake_php();
//!     fixture.command_with_php().arg("phpcs").assert().success();
//!     assert_eq!(fixture.recorded_args()[1], "-s");
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::git_available;
    pub use super::TestFixture;
}

/// Name of the fake interpreter script inside the fixture.
const FAKE_PHP: &str = "fake-php";

/// File the fake interpreter writes its arguments to, one per line.
const ARGS_LOG: &str = "php-args.log";

/// Environment variable read by the fake interpreter for its exit code.
pub const FAKE_EXIT_ENV: &str = "FAKE_PHP_EXIT";

/// Tool binaries installed under `vendor/bin`.
pub const TOOLS: [&str; 3] = ["phpcs", "phpcbf", "codecept"];

/// Check whether a usable `git` is on PATH.
#[allow(dead_code)]
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// A temporary project directory.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Install placeholder tool files under `vendor/bin`.
    pub fn with_vendor_bin(self) -> Self {
        for tool in TOOLS {
            self.temp_dir
                .child(format!("vendor/bin/{}", tool))
                .write_str("#!/usr/bin/env php\n")
                .expect("Failed to write tool file");
        }
        self
    }

    /// Add a file with the given path and content.
    #[allow(dead_code)]
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Install an executable script at `path`.
    #[cfg(unix)]
    #[allow(dead_code)]
    pub fn with_script(self, path: &str, body: &str) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let child = self.temp_dir.child(path);
        child
            .write_str(&format!("#!/bin/sh\n{}", body))
            .expect("Failed to write script");
        std::fs::set_permissions(child.path(), std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make script executable");
        self
    }

    /// Install the fake interpreter.
    ///
    /// It writes each argument on its own line to `php-args.log`, prints
    /// `fake tool output`, and exits with `$FAKE_PHP_EXIT` (default 0).
    #[cfg(unix)]
    #[allow(dead_code)]
    pub fn with_fake_php(self) -> Self {
        let log = self.path().join(ARGS_LOG);
        let body = format!(
            "for a in \"$@\"; do printf '%s\\n' \"$a\"; done > '{}'\n\
             echo 'fake tool output'\n\
             exit ${{{}:-0}}\n",
            log.display(),
            FAKE_EXIT_ENV
        );
        self.with_script(FAKE_PHP, &body)
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the fake interpreter.
    #[allow(dead_code)]
    pub fn fake_php(&self) -> PathBuf {
        self.path().join(FAKE_PHP)
    }

    /// Path of a vendored tool.
    #[allow(dead_code)]
    pub fn tool(&self, name: &str) -> PathBuf {
        self.path().join("vendor").join("bin").join(name)
    }

    /// Whether the fake interpreter ran at all.
    #[allow(dead_code)]
    pub fn php_was_invoked(&self) -> bool {
        self.path().join(ARGS_LOG).exists()
    }

    /// Arguments the fake interpreter received, in order.
    #[allow(dead_code)]
    pub fn recorded_args(&self) -> Vec<String> {
        std::fs::read_to_string(self.path().join(ARGS_LOG))
            .expect("fake php was not invoked")
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Replace fixture paths in `output` with `[ROOT]` for stable snapshots.
    #[allow(dead_code)]
    pub fn normalize(&self, output: &str) -> String {
        let mut normalized = output.to_string();
        if let Ok(canonical) = self.path().canonicalize() {
            normalized = normalized.replace(&canonical.display().to_string(), "[ROOT]");
        }
        normalized
            .replace(&self.path().display().to_string(), "[ROOT]")
            .lines()
            .map(|line| line.trim_end())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Run `git` in the fixture, panicking on failure.
    #[allow(dead_code)]
    pub fn git(&self, args: &[&str]) {
        let status = Command::new("git")
            .args(["-c", "user.name=qa", "-c", "user.email=qa@example.com"])
            .args(["-c", "commit.gpgsign=false", "-c", "init.defaultBranch=main"])
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("Failed to run git");
        assert!(
            status.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&status.stderr)
        );
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    /// Create a command configured to run in this fixture's directory.
    ///
    /// Environment that would change dispatch is cleared so host settings
    /// cannot leak into the tests.
    pub fn command(&self) -> assert_cmd::Command {
        self.command_at(self.path())
    }

    /// Like [`TestFixture::command`], but run from `dir` inside the fixture.
    #[allow(dead_code)]
    pub fn command_in(&self, dir: &str) -> assert_cmd::Command {
        self.command_at(&self.path().join(dir))
    }

    /// Git repository discovery stops at `cwd`, so a checkout enclosing the
    /// temp directory is never consulted.
    fn command_at(&self, cwd: &Path) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("qa-dispatch");
        if let Some(parent) = cwd.parent() {
            cmd.env("GIT_CEILING_DIRECTORIES", parent);
        }
        cmd.current_dir(cwd)
            .env_remove("QA_DISPATCH_ROOT")
            .env_remove("QA_DISPATCH_PHP")
            .env_remove("QA_DISPATCH_STANDARD")
            .env_remove("QA_DISPATCH_BASE_REF")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }

    /// Create a command that runs tools through the fake interpreter.
    #[allow(dead_code)]
    pub fn command_with_php(&self) -> assert_cmd::Command {
        let mut cmd = self.command();
        cmd.arg("--php").arg(self.fake_php());
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_fixture_with_vendor_bin() {
        let fixture = TestFixture::new().with_vendor_bin();
        for tool in TOOLS {
            assert!(fixture.tool(tool).exists());
        }
    }

    #[test]
    fn test_normalize_replaces_root() {
        let fixture = TestFixture::new();
        let line = format!("php \"{}/vendor/bin/phpcs\"  ", fixture.path().display());
        assert_eq!(fixture.normalize(&line), "php \"[ROOT]/vendor/bin/phpcs\"");
    }
}
