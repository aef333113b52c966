//! Batch orchestration on top of the solvers: reproducible input generation and the
//! scaling benchmark that feeds the curve fitter. See:
//!   - [inputs]
//!   - [scaling]

pub mod inputs;
pub mod scaling;
