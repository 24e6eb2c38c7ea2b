//! Monthly amortization schedule generation

pub mod engine;
pub mod ledger;
pub mod state;

pub use engine::{AmortizationEngine, EngineConfig};
pub use ledger::{AmortizationResult, LedgerEntry, LoanSummary, PaymentKind};
pub use state::ScheduleState;
