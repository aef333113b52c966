//! Least-squares estimation of the constant factor `c` in empirical complexity models:
//! given observations of the work performed at several input sizes and a hypothesized
//! growth function `f`, finds the `c` minimizing the squared error of `observed ≈ c·f(size)`
//! -- in closed form, `c = Σ(observed·f) / Σ(f²)`.

use crate::lcs::types::{ComparisonResult, LcsError};


/// Threshold below which `Σ(f²)` is treated as "no data": the fit returns `0.0` instead of
/// blowing up numerically. A `0.0` constant is a sentinel, not a modeling claim.
pub const FIT_EPSILON: f64 = 1e-10;


/// The hypothesized growth forms the fitter knows how to evaluate
#[derive(Debug,Clone,Copy,PartialEq)]
pub enum GrowthModel {
    /// `f(n) = n^exponent` -- an exponent of 2.0 models the DP solver's quadratic cell fill
    PowerLaw { exponent: f64 },
    /// `f(n) = 2^n` -- models the backtracking solver's subsequence enumeration
    Exponential,
    /// `f(n) = n` -- for series whose independent variable is already a count;
    /// see also [fit_linear()] for fitting raw `(x, y)` pairs directly
    Linear,
}

impl GrowthModel {
    fn eval(&self, n: f64) -> f64 {
        match self {
            Self::PowerLaw { exponent } => n.powf(*exponent),
            Self::Exponential           => 2f64.powf(n),
            Self::Linear                => n,
        }
    }
}


/// Fits `comparisons ≈ c·f(n)` over a batch of [ComparisonResult]s, taking each run's `n`
/// as the average of its two input lengths and the observation as its comparison count.\
/// An empty batch (or a degenerate `Σ(f²)`, per [FIT_EPSILON]) yields `0.0` without error.
pub fn fit(results: &[ComparisonResult], model: GrowthModel) -> f64 {
    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for result in results {
        let n1 = result.first_input().chars().count() as f64;
        let n2 = result.second_input().chars().count() as f64;
        let f = model.eval((n1 + n2) / 2.0);
        numerator   += result.metrics().comparison_count() as f64 * f;
        denominator += f * f;
    }
    if denominator.abs() < FIT_EPSILON {
        0.0
    } else {
        numerator / denominator
    }
}

/// Fits `y ≈ c·x` over raw pairs -- for observations not tied to [ComparisonResult]s, such
/// as (number of pairwise comparisons, total comparison count) series.\
/// Fails with [LcsError::InvalidArgument] when the series lengths differ; an empty (or
/// degenerate) series yields `0.0` without error.
pub fn fit_linear(xs: &[f64], ys: &[f64]) -> Result<f64, LcsError> {
    if xs.len() != ys.len() {
        return Err(LcsError::InvalidArgument(format!("x and y series lengths must match -- got {} and {}", xs.len(), ys.len())));
    }
    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        numerator   += x * y;
        denominator += x * x;
    }
    if denominator.abs() < FIT_EPSILON {
        Ok(0.0)
    } else {
        Ok(numerator / denominator)
    }
}
