//! Bottom-up dynamic programming LCS: fills the `(m+1) × (n+1)` table of prefix LCS
//! lengths, then reconstructs the subsequence by walking the table back from `(m, n)`.\
//! `O(m·n)` comparisons & space -- the quadratic baseline the backtracking solver is
//! measured against.

use crate::{
    metrics::PerformanceMetrics,
    lcs::{
        LcsSolver,
        validate_inputs,
        types::{ComparisonResult, DpTable, LcsError},
    },
};


/// The dynamic programming strategy.\
/// Plain [new()](Self::new) runs give the smallest result object; [retaining_table()](Self::retaining_table)
/// attaches the filled DP table to the result as a trace artifact; [with_threads()](Self::with_threads)
/// parallelizes the cell-fill phase over anti-diagonals -- the LCS, the table and the
/// comparison count are identical to the sequential run's.
pub struct DynamicSolver {
    retain_table: bool,
    threads:      u32,
}

impl DynamicSolver {

    pub fn new() -> Self {
        Self {
            retain_table: false,
            threads:      1,
        }
    }

    /// Attach the filled DP table to each [ComparisonResult] -- for external visualization
    pub fn retaining_table(mut self) -> Self {
        self.retain_table = true;
        self
    }

    /// Fill the table with `threads` worker threads, anti-diagonal by anti-diagonal.\
    /// Cells on one anti-diagonal only depend on the two previous diagonals, so they may be
    /// computed concurrently; each worker tallies its comparisons privately and the tallies
    /// are merged in thread order, keeping the total count exact & reproducible.
    pub fn with_threads(mut self, threads: u32) -> Self {
        self.threads = threads.max(1);
        self
    }

}

impl Default for DynamicSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl LcsSolver for DynamicSolver {

    fn compute(&self, label: &str, s1: &str, s2: &str) -> Result<ComparisonResult, LcsError> {
        validate_inputs(s1, s2)?;

        let mut metrics = PerformanceMetrics::new();
        metrics.start();

        let a: Vec<char> = s1.chars().collect();
        let b: Vec<char> = s2.chars().collect();
        let (m, n) = (a.len(), b.len());

        // the table is the whole of this algorithm's memory commitment -- recorded before the fill phase
        metrics.set_estimated_space(((m + 1) * (n + 1) * std::mem::size_of::<u32>()) as u64);

        let mut table = DpTable::new(m + 1, n + 1);
        let fill_comparisons = if self.threads > 1 {
            fill_anti_diagonals(&a, &b, &mut table, self.threads)
        } else {
            fill_sequential(&a, &b, &mut table)
        };
        metrics.add_comparisons(fill_comparisons);

        let lcs = trace_back(&a, &b, &table, &mut metrics);

        metrics.stop()?;
        Ok(ComparisonResult::new(label, s1, s2, lcs, metrics,
                                 self.retain_table.then_some(table)))
    }

}


/// The classic row-by-row fill: 1 comparison per cell;
/// `table[i][j] = table[i-1][j-1] + 1` on a match, `max(table[i-1][j], table[i][j-1])` otherwise
fn fill_sequential(a: &[char], b: &[char], table: &mut DpTable) -> u64 {
    let mut comparisons = 0;
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            comparisons += 1;
            let cell = if a[i - 1] == b[j - 1] {
                table.get(i - 1, j - 1) + 1
            } else {
                table.get(i - 1, j).max(table.get(i, j - 1))
            };
            table.set(i, j, cell);
        }
    }
    comparisons
}

/// Same recurrence as [fill_sequential()], computed wavefront-style: all cells of one
/// anti-diagonal (`i + j = d`) are independent, so they are split among scoped threads;
/// writes and counter merges happen single-threaded after each diagonal joins, in thread
/// order, so both the table and the comparison count come out deterministic.
fn fill_anti_diagonals(a: &[char], b: &[char], table: &mut DpTable, threads: u32) -> u64 {
    let (m, n) = (a.len(), b.len());
    let mut comparisons = 0;
    for d in 2..=(m + n) {
        let i_start = 1.max(d.saturating_sub(n));
        let i_end   = m.min(d - 1);
        if i_start > i_end {
            continue;
        }
        let cells = i_end - i_start + 1;
        let chunk_size = cells.div_ceil(threads as usize);
        let table_ref = &*table;
        // use crossbeam's scoped threads to avoid requiring a 'static lifetime for the table borrow
        let joined = crossbeam::scope(|scope| {
            let mut thread_handlers: Vec<crossbeam::thread::ScopedJoinHandle<(u64, Vec<(usize, u32)>)>> = Vec::with_capacity(threads as usize);
            for t in 0..threads as usize {
                let lo = i_start + t * chunk_size;
                if lo > i_end {
                    break;
                }
                let hi = i_end.min(lo + chunk_size - 1);
                thread_handlers.push(scope.spawn(move |_| {
                    let mut thread_comparisons = 0;
                    let mut values = Vec::with_capacity(hi - lo + 1);
                    for i in lo..=hi {
                        let j = d - i;
                        thread_comparisons += 1;
                        let cell = if a[i - 1] == b[j - 1] {
                            table_ref.get(i - 1, j - 1) + 1
                        } else {
                            table_ref.get(i - 1, j).max(table_ref.get(i, j - 1))
                        };
                        values.push((i, cell));
                    }
                    (thread_comparisons, values)
                }));
            }
            thread_handlers.into_iter()
                .map(|handler| handler.join().expect("Panic! in an anti-diagonal fill worker"))
                .collect::<Vec<_>>()
        }).expect("crossbeam scope failure in the anti-diagonal fill");
        for (thread_comparisons, values) in joined {
            comparisons += thread_comparisons;
            for (i, cell) in values {
                table.set(i, d - i, cell);
            }
        }
    }
    comparisons
}

/// Walks the filled table from `(m, n)` back to the origin: 1 comparison per step; matched
/// symbols are prepended & the walk moves diagonally; otherwise it moves toward the larger
/// neighbor. Fixed tie-break for reproducibility: equal neighbors prefer "up" (along `s1`).
fn trace_back(a: &[char], b: &[char], table: &DpTable, metrics: &mut PerformanceMetrics) -> String {
    let mut lcs = Vec::new();
    let mut i = a.len();
    let mut j = b.len();
    while i > 0 && j > 0 {
        metrics.increment_comparisons();
        if a[i - 1] == b[j - 1] {
            lcs.push(a[i - 1]);
            i -= 1;
            j -= 1;
        } else if table.get(i - 1, j) >= table.get(i, j - 1) {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    lcs.into_iter().rev().collect()
}
