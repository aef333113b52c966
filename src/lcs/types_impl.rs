//! Implementations for structs/enums defined in [super::types]
//! -- accessors plus the `Display` rendering consumed by reporting collaborators.

use super::types::*;
use crate::metrics::PerformanceMetrics;
use std::fmt::{Display, Formatter};


impl ComparisonResult {

    pub(crate) fn new(label:        &str,
                      first_input:  &str,
                      second_input: &str,
                      lcs:          String,
                      metrics:      PerformanceMetrics,
                      dp_table:     Option<DpTable>)
                     -> Self {
        Self {
            label:        label.to_owned(),
            first_input:  first_input.to_owned(),
            second_input: second_input.to_owned(),
            lcs,
            metrics,
            dp_table,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn first_input(&self) -> &str {
        &self.first_input
    }

    pub fn second_input(&self) -> &str {
        &self.second_input
    }

    pub fn lcs(&self) -> &str {
        &self.lcs
    }

    /// length of the computed LCS, in symbols -- derived, never stored separately
    pub fn lcs_len(&self) -> usize {
        self.lcs.chars().count()
    }

    /// the performance readings snapshotted when the run completed
    pub fn metrics(&self) -> &PerformanceMetrics {
        &self.metrics
    }

    /// the filled DP table -- present only for dynamic programming runs that asked to retain it
    pub fn dp_table(&self) -> Option<&DpTable> {
        self.dp_table.as_ref()
    }

}

impl Display for ComparisonResult {
    /// human-readable rendering -- the only behavior beyond field access; file/console
    /// report *formatting* belongs to external collaborators
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== LCS Result: {} ===", self.label)?;
        writeln!(f, "Input 1: {}", self.first_input)?;
        writeln!(f, "Input 2: {}", self.second_input)?;
        writeln!(f, "LCS    : {}", self.lcs)?;
        writeln!(f, "Length : {}", self.lcs_len())?;
        writeln!(f, "Comparisons  : {}", self.metrics.comparison_count())?;
        writeln!(f, "Time (ms)    : {}", self.metrics.elapsed_ms())?;
        writeln!(f, "Space (bytes): {}", self.metrics.estimated_space_bytes())
    }
}


impl DpTable {

    /// a zeroed `rows × cols` table -- row 0 and column 0 stay zero, per the LCS recurrence's base case
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// the LCS length of the prefix pair `(s1[..i], s2[..j])`
    pub fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.cols + j]
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, value: u32) {
        self.cells[i * self.cols + j] = value;
    }

}


#[cfg(test)]
mod tests {

    //! Unit tests for [types_impl](super) -- mainly attesting the `Display` rendering
    //! carries every field reporting collaborators consume.

    use super::*;

    #[test]
    fn comparison_result_rendering() {
        let mut metrics = PerformanceMetrics::new();
        metrics.add_comparisons(12);
        metrics.set_estimated_space(2048);
        let result = ComparisonResult::new("S1 vs S2", "ACGT", "AGT", "AGT".to_owned(), metrics, None);
        let rendered = result.to_string();
        for expected in ["=== LCS Result: S1 vs S2 ===",
                         "Input 1: ACGT",
                         "Input 2: AGT",
                         "LCS    : AGT",
                         "Length : 3",
                         "Comparisons  : 12",
                         "Time (ms)    : 0",
                         "Space (bytes): 2048"] {
            assert!(rendered.contains(expected), "rendering misses '{}':\n{}", expected, rendered);
        }
    }

    #[test]
    fn dp_table_indexing_is_row_major() {
        let mut table = DpTable::new(3, 4);
        table.set(2, 3, 7);
        table.set(0, 0, 1);
        assert_eq!(table.get(2, 3), 7);
        assert_eq!(table.get(0, 0), 1);
        assert_eq!(table.get(1, 2), 0);
        assert_eq!((table.rows(), table.cols()), (3, 4));
    }

}
