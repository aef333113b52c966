//! Exercises the crate end-to-end: both solving strategies over generated inputs, the
//! properties every LCS must satisfy, and a full (reduced) scaling campaign feeding the
//! curve fitter.

use lcs_bench::{
    BacktrackingSolver, DynamicSolver, GrowthModel, LcsError, LcsSolver,
    fitting,
    lcs::is_subsequence,
    runners::{
        inputs::SequenceGenerator,
        scaling::{self, ScalingConfig},
    },
};


/// both strategies, behind the common trait
fn solvers() -> Vec<(&'static str, Box<dyn LcsSolver>)> {
    vec![
        ("dynamic programming", Box::new(DynamicSolver::new())),
        ("backtracking",        Box::new(BacktrackingSolver::new())),
    ]
}

/// For all non-empty inputs: the LCS is no longer than the shorter input, is a genuine
/// subsequence of both, and its comparison count is positive & reproducible.
#[test]
fn lcs_laws_hold_for_both_strategies_over_random_inputs() {
    let mut generator = SequenceGenerator::new(1234);
    let pairs: Vec<(String, String)> = (0..8)
        .map(|i| (generator.random(4 + i), generator.random(6 + i)))
        .collect();
    for (strategy_name, solver) in solvers() {
        for (s1, s2) in &pairs {
            let first  = solver.compute("law check", s1, s2).unwrap();
            let second = solver.compute("law check", s1, s2).unwrap();
            assert!(first.lcs_len() <= s1.len().min(s2.len()),
                    "[{strategy_name}] LCS of {s1} vs {s2} is longer than the shorter input");
            assert!(is_subsequence(first.lcs(), s1),
                    "[{strategy_name}] '{}' is no subsequence of {s1}", first.lcs());
            assert!(is_subsequence(first.lcs(), s2),
                    "[{strategy_name}] '{}' is no subsequence of {s2}", first.lcs());
            assert!(first.metrics().comparison_count() > 0,
                    "[{strategy_name}] non-empty inputs must cost at least one comparison");
            assert_eq!(first.metrics().comparison_count(), second.metrics().comparison_count(),
                       "[{strategy_name}] comparison counts must reproduce across runs");
        }
    }
}

#[test]
fn a_sequence_is_its_own_lcs() {
    let mut generator = SequenceGenerator::new(99);
    for (strategy_name, solver) in solvers() {
        for len in [1, 5, 12] {
            let s = generator.random(len);
            let result = solver.compute("self", &s, &s).unwrap();
            assert_eq!(result.lcs(), s, "[{strategy_name}] LCS(s, s) must be s itself");
        }
    }
}

#[test]
fn strategies_agree_on_length_for_identical_inputs() {
    let mut generator = SequenceGenerator::new(5150);
    let dynamic = DynamicSolver::new();
    let backtracking = BacktrackingSolver::new();
    for _ in 0..10 {
        let s1 = generator.random(10);
        let s2 = generator.mutated(&s1, 3);
        let dp = dynamic.compute("dp", &s1, &s2).unwrap();
        let bt = backtracking.compute("bt", &s1, &s2).unwrap();
        assert_eq!(dp.lcs_len(), bt.lcs_len(), "length disagreement on {s1} vs {s2}");
        // 3 point mutations of a 10-symbol sequence leave at least 7 symbols in common
        assert!(dp.lcs_len() >= 7, "mutated pair {s1} vs {s2} lost too much similarity");
    }
}

#[test]
fn error_taxonomy_reaches_the_caller_unrecovered() {
    assert!(matches!(DynamicSolver::new().compute("x", "", "ACGT"),
                     Err(LcsError::InvalidInput(_))));
    assert!(matches!(BacktrackingSolver::with_max_len(4).compute("x", "ACGTA", "ACGTA"),
                     Err(LcsError::LengthCapExceeded { len: 5, cap: 4 })));
    assert!(matches!(fitting::fit_linear(&[1.0], &[]),
                     Err(LcsError::InvalidArgument(_))));
}

/// a reduced campaign end-to-end: results in, fitted constants out
#[test]
fn scaling_campaign_feeds_the_curve_fitter() {
    let config = ScalingConfig {
        min_len:          5,
        max_len:          15,
        step:             5,
        pairs_per_len:    3,
        backtracking_cap: 10,
        seed:             42,
    };
    let report = scaling::run(&config).unwrap();
    assert_eq!(report.dynamic_results.len(), 9);
    assert_eq!(report.backtracking_results.len(), 6, "the 15-symbol tier must skip backtracking");

    // the DP fill performs exactly n² comparisons for equal-length inputs, plus a traceback
    // of at most 2n -- so the fitted quadratic constant sits a whisker above 1.0
    let c_dynamic = report.fitted_dynamic_constant();
    assert!(c_dynamic > 1.0 && c_dynamic < 1.5,
            "DP comparisons ≈ n² should fit c barely above 1.0 -- got {c_dynamic}");

    let c_backtracking = report.fitted_backtracking_constant();
    assert!(c_backtracking > 0.0, "a non-empty series must fit a positive constant");

    // aggregates cover the whole batch
    assert!(scaling::total_estimated_space_bytes(&report.dynamic_results) > 0);

    // the rendering carries what reporting collaborators need
    let rendered = report.dynamic_results[0].to_string();
    assert!(rendered.contains("=== LCS Result: L5_P1 ==="), "unexpected rendering:\n{rendered}");
    assert!(rendered.contains("Comparisons"));
}

/// the fitter's textbook check: observations of exactly 3n² fit c ≈ 3.0
#[test]
fn power_law_fit_recovers_a_synthetic_constant() {
    let mut metrics_series = Vec::new();
    for i in 1..=10 {
        let n = 5 * i;
        metrics_series.push((n as f64, 3.0 * (n * n) as f64));
    }
    let xs: Vec<f64> = metrics_series.iter().map(|(x, _)| x * x).collect();
    let ys: Vec<f64> = metrics_series.iter().map(|(_, y)| *y).collect();
    // y ≈ c·n² is a linear fit in x = n²
    let c = fitting::fit_linear(&xs, &ys).unwrap();
    assert!((c - 3.0).abs() < 1e-9, "expected c ≈ 3.0, got {c}");
}

#[test]
fn empty_series_fit_the_no_data_sentinel() {
    for model in [GrowthModel::PowerLaw { exponent: 2.0 }, GrowthModel::Exponential, GrowthModel::Linear] {
        assert_eq!(fitting::fit(&[], model), 0.0);
    }
}
