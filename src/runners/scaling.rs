//! Hybrid scaling benchmark: for each length tier, runs several pairwise LCS computations
//! through both solvers and collects their [ComparisonResult]s -- the backtracking solver
//! is skipped beyond its cap to prevent runtime blowup.\
//! The collected series are what the [crate::fitting] module consumes to estimate the
//! empirical constants of the `c·n²` (dynamic programming) and `c·2^n` (backtracking) models.

use crate::{
    features::OUTPUT,
    fitting::{self, GrowthModel},
    lcs::{
        LcsSolver,
        backtracking::BacktrackingSolver,
        dynamic::DynamicSolver,
        types::{ComparisonResult, LcsError},
    },
    runners::inputs::SequenceGenerator,
};


/// Shape of one benchmark run -- the `Default` mirrors the reference campaign:
/// lengths 10 to 60 in steps of 10, 5 pairs per tier, backtracking capped at 30 symbols
#[derive(Debug,Clone)]
pub struct ScalingConfig {
    /// first length tier, in symbols
    pub min_len:          usize,
    /// last length tier, inclusive
    pub max_len:          usize,
    /// tier increment -- must be > 0
    pub step:             usize,
    /// random sequence pairs generated & solved per tier
    pub pairs_per_len:    usize,
    /// tiers above this length skip the backtracking solver
    pub backtracking_cap: usize,
    /// seed for the sequence generator -- identical configs reproduce identical campaigns
    pub seed:             u64,
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            min_len:          10,
            max_len:          60,
            step:             10,
            pairs_per_len:    5,
            backtracking_cap: 30,
            seed:             42,
        }
    }
}


/// Everything a benchmark campaign produced: one result series per solver, ready for
/// aggregation & curve fitting. The backtracking series is shorter whenever tiers above
/// the cap were skipped.
pub struct ScalingReport {
    pub dynamic_results:      Vec<ComparisonResult>,
    pub backtracking_results: Vec<ComparisonResult>,
}

impl ScalingReport {

    /// the empirical `c` in `comparisons ≈ c·n²` for the dynamic programming series
    pub fn fitted_dynamic_constant(&self) -> f64 {
        fitting::fit(&self.dynamic_results, GrowthModel::PowerLaw { exponent: 2.0 })
    }

    /// the empirical `c` in `comparisons ≈ c·2^n` for the backtracking series
    pub fn fitted_backtracking_constant(&self) -> f64 {
        fitting::fit(&self.backtracking_results, GrowthModel::Exponential)
    }

}

/// Sum of the elapsed times across a batch, in milliseconds
pub fn total_elapsed_ms(results: &[ComparisonResult]) -> u64 {
    results.iter()
        .map(|result| result.metrics().elapsed_ms())
        .sum()
}

/// Sum of the estimated space across a batch, in bytes
pub fn total_estimated_space_bytes(results: &[ComparisonResult]) -> u64 {
    results.iter()
        .map(|result| result.metrics().estimated_space_bytes())
        .sum()
}


/// Runs the whole campaign described by `config`, reporting progress through [OUTPUT].\
/// Fails with [LcsError::InvalidArgument] on a zero `step` (the campaign would never
/// terminate); solver errors propagate as-is.
pub fn run(config: &ScalingConfig) -> Result<ScalingReport, LcsError> {
    if config.step == 0 {
        return Err(LcsError::InvalidArgument("scaling step must be > 0".to_owned()));
    }

    let dynamic_solver = DynamicSolver::new();
    let backtracking_solver = BacktrackingSolver::with_max_len(config.backtracking_cap);
    let mut generator = SequenceGenerator::new(config.seed);

    let mut dynamic_results = Vec::new();
    let mut backtracking_results = Vec::new();

    let mut len = config.min_len;
    while len <= config.max_len {
        for pair in 1..=config.pairs_per_len {
            let s1 = generator.random(len);
            let s2 = generator.random(len);
            let label = format!("L{}_P{}", len, pair);
            OUTPUT(&format!("→ {}\n", label));

            dynamic_results.push(dynamic_solver.compute(&label, &s1, &s2)?);
            if len <= config.backtracking_cap {
                backtracking_results.push(backtracking_solver.compute(&label, &s1, &s2)?);
            }
        }
        len += config.step;
    }

    Ok(ScalingReport { dynamic_results, backtracking_results })
}
