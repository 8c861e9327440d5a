//! Process exit codes.
//!
//! - `0`: the tool succeeded, or there was nothing to do
//! - `1`: the invocation was rejected, or the tool could not be started
//! - `2`: malformed global flags (reported by clap)
//! - anything else: forwarded from the tool

/// The dispatched tool succeeded, or there was nothing to do.
pub const SUCCESS: u8 = 0;

/// Generic failure: bad invocation, invalid context, spawn failure, or a
/// tool that ended without an exit code.
pub const FAILURE: u8 = 1;

/// Invalid command-line usage, as reported by clap.
pub const USAGE: u8 = 2;

/// Map a tool's exit status onto a process exit code.
///
/// Codes in `1..=255` are forwarded unchanged. Anything a process cannot
/// express as a non-zero byte (a signal, `0` reported as a failure, codes
/// outside the byte range) becomes [`FAILURE`].
pub fn from_tool_code(code: Option<i32>) -> u8 {
    match code {
        Some(c) if (1..=255).contains(&c) => c as u8,
        _ => FAILURE,
    }
}
