//! LCS solving strategies and the value types they produce. See:
//!   - [dynamic]
//!   - [backtracking]
//!   - [types]

pub mod types;
mod types_impl;
pub mod dynamic;
pub mod backtracking;

use types::{ComparisonResult, LcsError};


/// Common contract for LCS solving strategies -- the strategy pattern with two independent
/// implementing types ([dynamic::DynamicSolver] & [backtracking::BacktrackingSolver]).\
/// `compute()` owns a fresh [crate::metrics::PerformanceMetrics] recorder per call, returned
/// as part of the result, so solvers carry no hidden cross-call state and are trivially safe
/// to call concurrently from independent threads.
pub trait LcsSolver {

    /// Computes the longest common subsequence between `s1` & `s2`, returning it along with
    /// the performance readings of this run and the `label` given for presentation purposes.\
    /// Fails with [LcsError::InvalidInput] if either sequence is empty -- raised before any
    /// computation takes place, so no caller-visible state is ever partially mutated.
    fn compute(&self, label: &str, s1: &str, s2: &str) -> Result<ComparisonResult, LcsError>;

}


/// Shared input-validation policy for both solvers: an empty sequence is rejected.\
/// (The "absent input" case of dynamically-typed renditions of this engine cannot be
/// represented here; emptiness is the validation that remains meaningful.)
pub(crate) fn validate_inputs(s1: &str, s2: &str) -> Result<(), LcsError> {
    if s1.is_empty() || s2.is_empty() {
        Err(LcsError::InvalidInput("input sequences must not be empty".to_owned()))
    } else {
        Ok(())
    }
}

/// Two-pointer linear scan attesting that `candidate` appears, in order, within `full` --
/// every pointer-advance comparison adds 1 to `comparisons`.\
/// This is both the backtracking solver's validation step and the re-validation tool for
/// attesting that a computed LCS is a genuine subsequence of its inputs.
pub fn is_subsequence_counted(candidate: &[char], full: &[char], comparisons: &mut u64) -> bool {
    let mut i = 0;
    let mut j = 0;
    while i < candidate.len() && j < full.len() {
        *comparisons += 1;
        if candidate[i] == full[j] {
            i += 1;
        }
        j += 1;
    }
    i == candidate.len()
}

/// Convenience form of [is_subsequence_counted()] for callers that don't track comparisons
pub fn is_subsequence(candidate: &str, full: &str) -> bool {
    let candidate: Vec<char> = candidate.chars().collect();
    let full:      Vec<char> = full.chars().collect();
    let mut _comparisons = 0;
    is_subsequence_counted(&candidate, &full, &mut _comparisons)
}
