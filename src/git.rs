//! Changed-file discovery through the system `git` command.

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::path::has_extension;
use crate::process::{Capture, CommandLine, ProcessRunner};

/// Build `git diff --name-only <base_ref>...`.
///
/// The three-dot form compares the working tree against the merge base of
/// `base_ref` and `HEAD`, so only changes made on the current branch show up.
pub fn diff_command(base_ref: &str) -> CommandLine {
    CommandLine::new("git")
        .arg("diff")
        .arg("--name-only")
        .arg(format!("{}...", base_ref))
}

/// List files changed against `base_ref`, in the order git reports them.
///
/// Fails with [`Error::SourceControlUnavailable`] when git cannot be started
/// or exits non-zero (not a repository, unknown ref, no remote...).
pub fn diff_names<R: ProcessRunner + ?Sized>(runner: &mut R, base_ref: &str) -> Result<Vec<String>> {
    let command = diff_command(base_ref);
    debug!("Querying changed files: {}", command);

    let output = runner
        .run(&command, Capture::All)
        .map_err(|e| Error::SourceControlUnavailable {
            command: command.to_string(),
            stderr: e.to_string(),
        })?;

    if !output.success() {
        return Err(Error::SourceControlUnavailable {
            command: command.to_string(),
            stderr: output.stderr.trim().to_string(),
        });
    }

    Ok(output
        .stdout
        .into_iter()
        .map(|line| line.trim_end().to_string())
        .filter(|line| !line.is_empty())
        .collect())
}

/// Keep only the paths ending in `.<extension>`.
pub fn filter_source_files<I>(paths: I, extension: &str) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    paths
        .into_iter()
        .filter(|p| has_extension(p, extension))
        .collect()
}

/// Changed files with `extension`, or an empty list when git is unavailable.
///
/// A failed query is logged and absorbed: the changed-file commands become
/// no-ops instead of errors outside a repository or without the base ref.
pub fn changed_source_files<R: ProcessRunner + ?Sized>(
    runner: &mut R,
    base_ref: &str,
    extension: &str,
) -> Vec<String> {
    match diff_names(runner, base_ref) {
        Ok(names) => filter_source_files(names, extension),
        Err(e) => {
            warn!("{}", e);
            Vec::new()
        }
    }
}
