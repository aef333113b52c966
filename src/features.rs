//! Contains code for handling the Cargo features used to compile this crate,
//! plus the numeric knobs shared by more than one module.
#![allow(dead_code)]

use std::io::{stdout,stderr,Write};

#[cfg(feature = "report_stdout")]
/// Function to output an `&str` -- used to sink benchmark progress -- controlled by the crate's features (stdout, stderr, no_report)
pub const OUTPUT: fn(&str) = stdout_write;

#[cfg(all(feature = "report_stderr", not(feature = "report_stdout")))]
/// Function to output an `&str` -- used to sink benchmark progress -- controlled by the crate's features (stdout, stderr, no_report)
pub const OUTPUT: fn(&str) = stderr_write;

#[cfg(not(any(feature = "report_stdout", feature = "report_stderr")))]
/// Function to output an `&str` -- used to sink benchmark progress -- controlled by the crate's features (stdout, stderr, no_report)
pub const OUTPUT: fn(&str) = null_write;

/// Maximum length of the shorter input the backtracking solver accepts unless the caller
/// overrides it -- its enumeration visits `2^n` candidate subsequences, so anything much
/// above ~30 symbols stops completing in sane time
pub const DEFAULT_BACKTRACKING_CAP: usize = 30;

/// Cost, in bytes, attributed to each simulated stack frame when estimating the
/// backtracking solver's space usage -- a crude but monotonic proxy for resource
/// pressure, sufficient for scaling comparisons (not for memory profiling)
pub const STACK_FRAME_COST_BYTES: u64 = 64;


fn stdout_write(buf: &str) {
    sync_outputs();
    print!("{}", buf);
    sync_outputs();
}

fn stderr_write(buf: &str) {
    sync_outputs();
    eprint!("{}", buf);
    sync_outputs();
}

/// Flushes both stdout and stderr so the next output will be in sync with everything that came before
fn sync_outputs() {
    _ = stdout().flush();
    _ = stderr().flush();
}

fn null_write(_buf: &str) {
    // release compilations will optimize out this call for '_buf' is not used
}
