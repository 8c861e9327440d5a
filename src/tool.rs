//! # Command Table
//!
//! Maps each recognized command token to a small record describing what to
//! launch: which vendored tool, which fixed flags, and where the remaining
//! arguments come from. Dispatch is a table lookup; adding a command means
//! adding a row to [`COMMANDS`].
//!
//! The tokens (`phpcs`, `phpcs:pr`, `unit-tests:coverage`, ...) are the
//! externally visible protocol and are matched verbatim.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Placeholder in flag templates replaced by the configured rule set.
pub const STANDARD_PLACEHOLDER: &str = "{standard}";

/// A tool installed in the dependency root's `bin` directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Coding standard checker.
    StyleChecker,
    /// Automatic fixer for the checker's violations.
    StyleFixer,
    /// Test suite runner.
    TestRunner,
}

impl Tool {
    /// File name of the executable under `bin/`.
    pub fn binary(self) -> &'static str {
        match self {
            Tool::StyleChecker => "phpcs",
            Tool::StyleFixer => "phpcbf",
            Tool::TestRunner => "codecept",
        }
    }
}

/// Where the arguments after the fixed flags come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentSource {
    /// The caller's trailing arguments, verbatim.
    Passthrough,
    /// Source files changed against the base ref.
    ChangedFiles,
    /// Nothing; trailing arguments are ignored.
    None,
}

/// A recognized command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolCommand {
    StyleCheck,
    StyleCheckOnSave,
    StyleFix,
    StyleCheckChanged,
    StyleFixChanged,
    UnitTests,
    UnitTestsFull,
    UnitTestsCoverage,
}

/// The dispatch record for one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionSpec {
    pub command: ToolCommand,
    /// Token accepted on the command line.
    pub name: &'static str,
    pub tool: Tool,
    /// Fixed flags; [`STANDARD_PLACEHOLDER`] is substituted at resolve time.
    pub flags: &'static [&'static str],
    pub source: ArgumentSource,
    /// Printed instead of running when a changed-file set is empty.
    pub empty_message: Option<&'static str>,
}

const CHECK_FLAGS: &[&str] = &["-s", "--standard={standard}", "--warning-severity=1"];
const FIX_FLAGS: &[&str] = &["-s", "--standard={standard}"];

/// Every recognized command, in help order.
pub const COMMANDS: &[ActionSpec] = &[
    ActionSpec {
        command: ToolCommand::StyleCheck,
        name: "phpcs",
        tool: Tool::StyleChecker,
        flags: CHECK_FLAGS,
        source: ArgumentSource::Passthrough,
        empty_message: None,
    },
    ActionSpec {
        command: ToolCommand::StyleCheckOnSave,
        name: "phpcsOnSave",
        tool: Tool::StyleChecker,
        flags: &[
            "-s",
            "-v",
            "--standard={standard}",
            "--warning-severity=1",
            "--report=full",
        ],
        source: ArgumentSource::Passthrough,
        empty_message: None,
    },
    ActionSpec {
        command: ToolCommand::StyleFix,
        name: "phpcbf",
        tool: Tool::StyleFixer,
        flags: FIX_FLAGS,
        source: ArgumentSource::Passthrough,
        empty_message: None,
    },
    ActionSpec {
        command: ToolCommand::StyleCheckChanged,
        name: "phpcs:pr",
        tool: Tool::StyleChecker,
        flags: CHECK_FLAGS,
        source: ArgumentSource::ChangedFiles,
        empty_message: Some("No PHP files to lint."),
    },
    ActionSpec {
        command: ToolCommand::StyleFixChanged,
        name: "phpcbf:pr",
        tool: Tool::StyleFixer,
        flags: FIX_FLAGS,
        source: ArgumentSource::ChangedFiles,
        empty_message: Some("No PHP files to fix."),
    },
    ActionSpec {
        command: ToolCommand::UnitTests,
        name: "unit-tests",
        tool: Tool::TestRunner,
        flags: &["run", "wpunit", "--skip-group", "Full_Coverage"],
        source: ArgumentSource::None,
        empty_message: None,
    },
    ActionSpec {
        command: ToolCommand::UnitTestsFull,
        name: "unit-tests-full",
        tool: Tool::TestRunner,
        flags: &["run", "wpunit"],
        source: ArgumentSource::None,
        empty_message: None,
    },
    ActionSpec {
        command: ToolCommand::UnitTestsCoverage,
        name: "unit-tests:coverage",
        tool: Tool::TestRunner,
        flags: &["run", "wpunit", "--coverage", "--coverage-html", "--xml"],
        source: ArgumentSource::None,
        empty_message: None,
    },
];

impl ToolCommand {
    /// The table row for this command.
    pub fn spec(self) -> &'static ActionSpec {
        COMMANDS
            .iter()
            .find(|spec| spec.command == self)
            .unwrap_or_else(|| unreachable!("every ToolCommand has a row in COMMANDS"))
    }

    /// The command-line token.
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// All recognized tokens, in table order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        COMMANDS.iter().map(|spec| spec.name)
    }
}

impl FromStr for ToolCommand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        COMMANDS
            .iter()
            .find(|spec| spec.name == s)
            .map(|spec| spec.command)
            .ok_or_else(|| Error::UnknownCommand {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ActionSpec {
    /// Fixed flags with the rule set substituted.
    pub fn flags_for(&self, standard: &str) -> Vec<String> {
        self.flags
            .iter()
            .map(|flag| flag.replace(STANDARD_PLACEHOLDER, standard))
            .collect()
    }
}
