//! Growth and depletion series projections

pub mod engine;
pub mod series;

pub use engine::{Compounding, GrowthPlan, ProjectionEngine, WithdrawalPlan};
pub use series::{DepletionResult, GrowthPoint, GrowthResult, WithdrawalPoint};
