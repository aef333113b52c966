//! Tracks the resources consumed by a single solver run -- symbol-comparison counts,
//! elapsed wall-clock time and estimated memory.\
//! One [PerformanceMetrics] instance is created fresh per solver invocation (or explicitly
//! reset); it never silently carries state across independent comparisons.

use crate::lcs::types::LcsError;
use std::time::{Duration, Instant};


/// Mutable accumulator for the readings of one algorithm run.\
/// The comparison count is an implementation-independent proxy for algorithmic work:
/// it grows by exactly 1 for every elementary symbol-equality check performed, so it is
/// deterministic & reproducible across repeated runs on identical inputs -- unlike the
/// elapsed time, which the curve fitter consequently never looks at.
#[derive(Debug,Clone,Default)]
pub struct PerformanceMetrics {
    /// monotonic timestamp taken by [start()](Self::start) -- `None` until then
    start_time:            Option<Instant>,
    /// monotonic timestamp taken by [stop()](Self::stop) -- `None` until then
    end_time:              Option<Instant>,
    /// total number of elementary symbol-equality checks -- monotonically non-decreasing within one run
    comparison_count:      u64,
    /// estimated memory committed by the run, in bytes -- see each solver for its estimation formula
    estimated_space_bytes: u64,
}

impl PerformanceMetrics {

    /// Creates a recorder with all counters & timestamps zeroed
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the current monotonic time as the start of the run
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Records the current monotonic time as the end of the run.\
    /// Fails with [LcsError::InvalidState] if [start()](Self::start) was never called.
    pub fn stop(&mut self) -> Result<(), LcsError> {
        if self.start_time.is_none() {
            return Err(LcsError::InvalidState("stop() called before start()".to_owned()));
        }
        self.end_time = Some(Instant::now());
        Ok(())
    }

    /// The time between [start()](Self::start) & [stop()](Self::stop) -- `None` unless both were called
    pub fn elapsed(&self) -> Option<Duration> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some(end.duration_since(start)),
            _                        => None,
        }
    }

    /// The elapsed run time in whole milliseconds -- 0 unless both timestamps are set; never negative
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed()
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0)
    }

    /// Adds 1 to the comparison counter -- to be called on every elementary symbol-equality check
    pub fn increment_comparisons(&mut self) {
        self.comparison_count += 1;
    }

    /// Adds `amount` comparisons at once -- for callers that tally privately and merge, such as
    /// the parallel DP fill. The unsigned type makes the negative-delta misuse unrepresentable.
    pub fn add_comparisons(&mut self, amount: u64) {
        self.comparison_count += amount;
    }

    /// Total number of symbol comparisons recorded so far
    pub fn comparison_count(&self) -> u64 {
        self.comparison_count
    }

    /// Records the estimated memory committed by the run, in bytes
    pub fn set_estimated_space(&mut self, bytes: u64) {
        self.estimated_space_bytes = bytes;
    }

    /// Estimated memory committed by the run, in bytes
    pub fn estimated_space_bytes(&self) -> u64 {
        self.estimated_space_bytes
    }

    /// Estimated memory in whole KiB -- power-of-1024 division
    pub fn estimated_space_kb(&self) -> u64 {
        self.estimated_space_bytes / 1024
    }

    /// Estimated memory in whole MiB -- power-of-1024 division
    pub fn estimated_space_mb(&self) -> u64 {
        self.estimated_space_bytes / (1024 * 1024)
    }

    /// Zeroes only the comparison counter, keeping the timestamps -- for callers that reuse
    /// the timer but restart counting
    pub fn reset_comparisons(&mut self) {
        self.comparison_count = 0;
    }

    /// Zeroes every field, allowing the instance to be reused from a clean state
    pub fn reset_all(&mut self) {
        *self = Self::default();
    }

}
