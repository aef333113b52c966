//! Value types shared by the solving strategies.\
//! See [super::types_impl] as well for implementations of the structs/enums defined here.

use crate::metrics::PerformanceMetrics;
use thiserror::Error;


/// Failures raised by the core -- all of them indicate programmer/caller error, not
/// transient conditions: none are retried or silently recovered internally.
#[derive(Debug,Error)]
pub enum LcsError {
    /// a required sequence failed validation -- raised at the very start of a solver call,
    /// before any computation occurs
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// the metrics recorder was driven out of order (timer stopped before started)
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// a malformed value was supplied -- e.g. mismatched series lengths given to the curve fitter
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// the backtracking guard refused an input whose `2^n` enumeration would not complete
    /// in sane time -- raise the cap explicitly (via `with_max_len()`) to override
    #[error("shorter input has {len} symbols, exceeding the backtracking cap of {cap}")]
    LengthCapExceeded { len: usize, cap: usize },
}


/// Immutable record of one algorithm run: the computed LCS, the inputs that produced it,
/// the [PerformanceMetrics] snapshot taken at completion and -- for the dynamic programming
/// solver, when requested -- the full DP table as a trace artifact for external visualization.\
/// Created once, at the end of a solver call; never mutated afterward.
#[derive(Debug,Clone)]
pub struct ComparisonResult {
    /// presentation label for this comparison (e.g. "S1 vs S2")
    pub(crate) label:        String,
    /// the first input sequence, as supplied by the caller
    pub(crate) first_input:  String,
    /// the second input sequence, as supplied by the caller
    pub(crate) second_input: String,
    /// the computed longest common subsequence
    pub(crate) lcs:          String,
    /// performance readings snapshotted when the run completed
    pub(crate) metrics:      PerformanceMetrics,
    /// the filled DP table -- `Some` only for [super::dynamic::DynamicSolver] runs that asked to retain it
    pub(crate) dp_table:     Option<DpTable>,
}


/// The `(m+1) × (n+1)` matrix of LCS lengths for every prefix pair, from which the optimal
/// subsequence is reconstructed -- row-major, `u32` cells.\
/// Kept only as a trace artifact; external reporting collaborators may pretty-print it.
#[derive(Debug,Clone)]
pub struct DpTable {
    pub(crate) rows:  usize,
    pub(crate) cols:  usize,
    pub(crate) cells: Vec<u32>,
}
