//! # Dispatcher
//!
//! Turns an [`Invocation`] into at most one tool run:
//!
//! 1. Look the command token up in [`crate::tool::COMMANDS`].
//! 2. Check the dependency root ([`Settings::validate_context`]).
//! 3. Collect the dynamic arguments: pass-through arguments, the changed
//!    source files, or nothing.
//! 4. Build the argument vector, run it, and report the result.
//!
//! Everything is sequential. Source control is queried at most once and at
//! most one tool process is in flight.

use std::io::Write;
use std::path::PathBuf;

use log::debug;

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::exit_codes;
use crate::git;
use crate::output::{OutputConfig, Role};
use crate::process::{Capture, CommandLine, ProcessRunner};
use crate::tool::{ActionSpec, ArgumentSource, ToolCommand};

/// A command token plus the arguments that followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    command: String,
    arguments: Vec<String>,
}

impl Invocation {
    pub fn new(command: impl Into<String>, arguments: Vec<String>) -> Self {
        Self {
            command: command.into(),
            arguments,
        }
    }

    /// Split positional parameters into command and arguments.
    ///
    /// Fails with [`Error::MissingCommand`] when `args` is empty.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let command = args.next().ok_or(Error::MissingCommand)?;
        Ok(Self::new(command, args.collect()))
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }
}

/// A command resolved against the settings, ready to launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAction {
    pub spec: &'static ActionSpec,
    pub executable_path: PathBuf,
    /// Fixed flags with the rule set substituted.
    pub flags: Vec<String>,
    /// Pass-through arguments or changed files.
    pub extra_arguments: Vec<String>,
}

impl ResolvedAction {
    /// The argument vector for this action.
    ///
    /// With an interpreter the line is
    /// `<interpreter> "<executable>" <flags...> "<extra>"...`; without one
    /// the executable is the program.
    pub fn command_line(&self, interpreter: Option<&str>) -> CommandLine {
        let executable = self.executable_path.to_string_lossy().into_owned();
        let line = match interpreter {
            Some(program) => CommandLine::new(program).dynamic_arg(executable),
            None => CommandLine::dynamic(executable),
        };

        self.flags
            .iter()
            .fold(line, |line, flag| line.arg(flag.as_str()))
            .dynamic_args(self.extra_arguments.iter().cloned())
    }
}

/// What resolving an invocation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Launch this.
    Run(ResolvedAction),
    /// A changed-file command found no files; print the message instead.
    NothingToDo(&'static str),
}

/// How a dispatch ended, short of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The tool exited 0, or `--dry-run` printed the line.
    Success,
    /// A changed-file command had no files to work on.
    NothingToDo,
    /// The tool ran and exited non-zero (`None` when killed by a signal).
    Failed { code: Option<i32> },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::Failed { .. })
    }

    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Success | Outcome::NothingToDo => exit_codes::SUCCESS,
            Outcome::Failed { code } => exit_codes::from_tool_code(*code),
        }
    }
}

/// Resolves invocations and runs them through a [`ProcessRunner`].
pub struct Dispatcher<R> {
    settings: Settings,
    runner: R,
    output: OutputConfig,
}

impl<R: ProcessRunner> Dispatcher<R> {
    pub fn new(settings: Settings, runner: R) -> Self {
        Self {
            settings,
            runner,
            output: OutputConfig::without_color(),
        }
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Resolve `invocation` without launching the tool.
    ///
    /// Changed-file commands do query source control here.
    pub fn resolve(&mut self, invocation: &Invocation) -> Result<Resolution> {
        let command: ToolCommand = invocation.command().parse()?;
        let spec = command.spec();

        self.settings.validate_context()?;

        let extra_arguments = match spec.source {
            ArgumentSource::Passthrough => invocation.arguments().to_vec(),
            ArgumentSource::ChangedFiles => {
                let files = git::changed_source_files(
                    &mut self.runner,
                    &self.settings.base_ref,
                    &self.settings.extension,
                );
                if files.is_empty() {
                    return Ok(Resolution::NothingToDo(
                        spec.empty_message.unwrap_or("Nothing to do."),
                    ));
                }
                debug!("{} changed file(s) for {}", files.len(), command);
                files
            }
            ArgumentSource::None => {
                if !invocation.arguments().is_empty() {
                    debug!(
                        "Ignoring {} argument(s); {} takes none",
                        invocation.arguments().len(),
                        command
                    );
                }
                Vec::new()
            }
        };

        Ok(Resolution::Run(ResolvedAction {
            spec,
            executable_path: self.settings.tool_path(spec.tool),
            flags: spec.flags_for(&self.settings.standard),
            extra_arguments,
        }))
    }

    /// Resolve and run `invocation`, writing diagnostics to `out`.
    ///
    /// On tool failure the tool's captured standard output is replayed to
    /// `out`, followed by `Command failed with exit code: <n>`.
    pub fn run(&mut self, invocation: &Invocation, out: &mut dyn Write) -> Result<Outcome> {
        let action = match self.resolve(invocation)? {
            Resolution::Run(action) => action,
            Resolution::NothingToDo(message) => {
                writeln!(out, "{}", self.output.paint(Role::Notice, message))?;
                return Ok(Outcome::NothingToDo);
            }
        };

        let line = action.command_line(self.settings.interpreter.as_deref());
        debug!("Running {}: {}", action.spec.name, line);

        if self.settings.dry_run {
            writeln!(out, "{}", line)?;
            return Ok(Outcome::Success);
        }

        let result = self.runner.run(&line, Capture::Stdout)?;
        if result.success() {
            return Ok(Outcome::Success);
        }

        for captured in &result.stdout {
            writeln!(out, "{}", captured)?;
        }
        let outcome = Outcome::Failed { code: result.code };
        if result.code.is_none() {
            debug!("{} terminated by signal", action.spec.name);
        }
        writeln!(
            out,
            "{}",
            self.output.paint(
                Role::Failure,
                &format!("Command failed with exit code: {}", outcome.exit_code())
            )
        )?;

        Ok(outcome)
    }
}
