//! # Subprocess Execution
//!
//! Every process the dispatcher starts, the tools and `git` alike, goes
//! through the [`ProcessRunner`] trait. Commands are explicit argument
//! vectors handed straight to the operating system; no shell is involved,
//! so spaces and quote characters inside arguments need no escaping.
//!
//! [`CommandLine`] also knows how to render itself for humans: fixed
//! tokens are printed bare while dynamic ones (paths, pass-through
//! arguments, changed files) are wrapped in double quotes. The rendering is
//! only used for logs and `--dry-run`, never for execution.

use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// One element of a [`CommandLine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A token from a fixed template, rendered as-is.
    Fixed(String),
    /// A token supplied at runtime, rendered inside double quotes.
    Dynamic(String),
}

impl Token {
    /// The raw value passed to the operating system.
    pub fn value(&self) -> &str {
        match self {
            Token::Fixed(v) | Token::Dynamic(v) => v,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Fixed(v) => write!(f, "{}", v),
            Token::Dynamic(v) => write!(f, "\"{}\"", v),
        }
    }
}

/// A program plus its ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: Token,
    args: Vec<Token>,
}

impl CommandLine {
    /// Start a command line whose program is a fixed name such as `git`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: Token::Fixed(program.into()),
            args: Vec::new(),
        }
    }

    /// Start a command line whose program is a runtime path.
    pub fn dynamic(program: impl Into<String>) -> Self {
        Self {
            program: Token::Dynamic(program.into()),
            args: Vec::new(),
        }
    }

    /// Append a fixed argument.
    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.args.push(Token::Fixed(value.into()));
        self
    }

    /// Append a runtime argument.
    pub fn dynamic_arg(mut self, value: impl Into<String>) -> Self {
        self.args.push(Token::Dynamic(value.into()));
        self
    }

    /// Append several runtime arguments, preserving their order.
    pub fn dynamic_args<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args
            .extend(values.into_iter().map(|v| Token::Dynamic(v.into())));
        self
    }

    pub fn program(&self) -> &str {
        self.program.value()
    }

    /// Arguments as they are handed to the operating system.
    pub fn args(&self) -> Vec<&str> {
        self.args.iter().map(Token::value).collect()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.args
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for token in &self.args {
            write!(f, " {}", token)?;
        }
        Ok(())
    }
}

/// How the standard streams of a child are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// Capture stdout; stderr goes straight to the terminal.
    Stdout,
    /// Capture both streams so nothing reaches the terminal.
    All,
}

/// What a finished child process left behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code (None if terminated by a signal).
    pub code: Option<i32>,
    /// Captured standard output, one entry per line.
    pub stdout: Vec<String>,
    /// Captured standard error; empty unless [`Capture::All`] was used.
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Convenience constructor, mostly for stub runners.
    pub fn with_code(code: i32) -> Self {
        Self {
            code: Some(code),
            ..Default::default()
        }
    }

    /// Convenience constructor for a successful run printing `lines`.
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            code: Some(0),
            stdout: lines.into_iter().map(Into::into).collect(),
            stderr: String::new(),
        }
    }
}

/// Launches a [`CommandLine`] and waits for it to exit.
pub trait ProcessRunner {
    fn run(&mut self, command: &CommandLine, capture: Capture) -> Result<ProcessOutput>;
}

/// [`ProcessRunner`] backed by `std::process::Command`.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    /// Working directory for children; inherits ours when `None`.
    pub cwd: Option<PathBuf>,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_dir(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: Some(cwd.into()),
        }
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&mut self, command: &CommandLine, capture: Capture) -> Result<ProcessOutput> {
        let mut cmd = Command::new(command.program());
        cmd.args(command.args());
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());

        match capture {
            Capture::Stdout => cmd.stderr(Stdio::inherit()),
            Capture::All => cmd.stderr(Stdio::piped()),
        };

        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }

        let output = cmd.output().map_err(|e| Error::Spawn {
            program: command.program().to_string(),
            message: e.to_string(),
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect();

        Ok(ProcessOutput {
            code: output.status.code(),
            stdout,
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
