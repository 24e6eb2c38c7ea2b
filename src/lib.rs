//! Fincalc - amortization and projection engine for financial calculators
//!
//! This library provides:
//! - Annual-to-monthly rate conversion and fixed-payment solving
//! - Full period-by-period amortization ledgers with extra-payment and
//!   step-up acceleration policies
//! - Growth and depletion projections (recurring investment, systematic
//!   withdrawal, provident-fund accumulation)
//! - Baseline-versus-accelerated scenario comparison

pub mod amortization;
pub mod error;
pub mod loan;
pub mod projection;
pub mod rates;
pub mod scenario;

// Re-export commonly used types
pub use amortization::{AmortizationEngine, AmortizationResult, EngineConfig, LedgerEntry, LoanSummary, PaymentKind};
pub use error::{CalcError, CalcResult};
pub use loan::{AccelerationPolicy, ExtraPaymentInterval, LoanTerms};
pub use projection::{GrowthPlan, ProjectionEngine, WithdrawalPlan};
pub use scenario::{ScenarioComparator, ScenarioComparison};
