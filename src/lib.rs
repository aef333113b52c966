#![doc = include_str!("../README.md")]

pub mod features;
pub mod metrics;
pub mod lcs;
pub mod fitting;
pub mod runners;


// exported symbols
pub use {
    features::OUTPUT,
    metrics::PerformanceMetrics,
    lcs::{
        LcsSolver,
        types::{
            ComparisonResult,
            DpTable,
            LcsError,
        },
        dynamic::DynamicSolver,
        backtracking::BacktrackingSolver,
    },
    fitting::GrowthModel,
};
