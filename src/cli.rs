//! CLI argument parsing and command dispatch

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use qa_dispatch::config::Settings;
use qa_dispatch::defaults::{DEFAULT_BASE_REF, DEFAULT_INTERPRETER, DEFAULT_STANDARD};
use qa_dispatch::dispatcher::{Dispatcher, Invocation};
use qa_dispatch::error::Error;
use qa_dispatch::exit_codes;
use qa_dispatch::output::{OutputConfig, Role};
use qa_dispatch::process::SystemRunner;

const COMMANDS_HELP: &str = "\
Commands:
  phpcs                 Check coding standards on the given paths
  phpcsOnSave           Verbose full-report check, for editor on-save hooks
  phpcbf                Fix coding standard violations on the given paths
  phpcs:pr              Check PHP files changed against the base ref
  phpcbf:pr             Fix PHP files changed against the base ref
  unit-tests            Run the wpunit suite, skipping the Full_Coverage group
  unit-tests-full       Run the whole wpunit suite
  unit-tests:coverage   Run the wpunit suite with HTML and XML coverage";

/// QA Dispatch - Run vendored PHP lint, fix and test tools
#[derive(Parser, Debug)]
#[command(name = "qa-dispatch")]
#[command(version, about, long_about = None, after_help = COMMANDS_HELP)]
pub struct Cli {
    /// Dependency root whose bin/ directory holds the tools.
    ///
    /// Defaults to `vendor` in the current directory.
    #[arg(long, value_name = "DIR", env = "QA_DISPATCH_ROOT")]
    root: Option<PathBuf>,

    /// Interpreter used to run the tools
    #[arg(long, value_name = "BIN", env = "QA_DISPATCH_PHP", default_value = DEFAULT_INTERPRETER)]
    php: String,

    /// Run the tool executables directly instead of through the interpreter
    #[arg(long)]
    no_interpreter: bool,

    /// Coding standard passed to phpcs and phpcbf
    #[arg(long, value_name = "NAME", env = "QA_DISPATCH_STANDARD", default_value = DEFAULT_STANDARD)]
    standard: String,

    /// Upstream ref the `:pr` commands diff against
    #[arg(long, value_name = "REF", env = "QA_DISPATCH_BASE_REF", default_value = DEFAULT_BASE_REF)]
    base_ref: String,

    /// Print the command line instead of running it
    #[arg(long)]
    dry_run: bool,

    /// Colorize output (always, never, auto)
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (off, error, warn, info, debug, trace); RUST_LOG wins when set
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: LevelFilter,

    /// Command to run, followed by arguments passed through to the tool
    #[arg(value_name = "COMMAND", trailing_var_arg = true)]
    invocation: Vec<String>,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<ExitCode> {
        init_logging(self.log_level);

        let output = OutputConfig::from_env_and_flag(&self.color);
        let cwd = std::env::current_dir().context("Failed to determine the working directory")?;

        let outcome = Invocation::parse(self.invocation.iter().cloned()).and_then(|invocation| {
            let mut dispatcher =
                Dispatcher::new(self.settings(&cwd), SystemRunner::in_dir(&cwd)).with_output(output);
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            let outcome = dispatcher.run(&invocation, &mut handle);
            handle.flush()?;
            outcome
        });

        match outcome {
            Ok(outcome) => Ok(ExitCode::from(outcome.exit_code())),
            Err(Error::Io(e)) => Err(e).context("Failed to write output"),
            Err(e) => {
                println!("{}", output.paint(Role::Failure, &e.to_string()));
                Ok(ExitCode::from(exit_codes::FAILURE))
            }
        }
    }

    /// Build dispatcher settings, resolving a relative root against `cwd`.
    fn settings(&self, cwd: &Path) -> Settings {
        let base = match &self.root {
            Some(root) => Settings::new(cwd.join(root)),
            None => Settings::for_project(cwd),
        };

        let interpreter = if self.no_interpreter {
            None
        } else {
            Some(self.php.clone())
        };

        base.with_interpreter(interpreter)
            .with_standard(self.standard.as_str())
            .with_base_ref(self.base_ref.as_str())
            .with_dry_run(self.dry_run)
    }
}

/// Send log records to stderr at `level`, unless `RUST_LOG` says otherwise.
fn init_logging(level: LevelFilter) {
    let mut builder = if std::env::var_os("RUST_LOG").is_some() {
        env_logger::Builder::from_default_env()
    } else {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(level);
        builder
    };

    let _ = builder
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
