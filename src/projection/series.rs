//! Series output structures for growth and depletion projections

use serde::{Deserialize, Serialize};

/// One period of a growth projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    /// Month index (1-based). Annual-averaged runs emit one point per year
    /// at months 12, 24, ...
    pub month: u32,
    pub year: u32,
    /// Amount contributed this period.
    pub contribution: f64,
    /// Interest credited this period.
    pub interest: f64,
    /// Balance after contribution and crediting.
    pub balance: f64,
    pub cumulative_invested: f64,
}

/// Complete output of a growth projection run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthResult {
    pub series: Vec<GrowthPoint>,
    /// Total amount contributed over the horizon.
    pub invested: f64,
    /// Balance at the end of the horizon.
    pub final_value: f64,
    /// `final_value - invested`.
    pub gained: f64,
}

/// One period of a withdrawal projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalPoint {
    pub month: u32,
    pub year: u32,
    /// Interest credited before this month's withdrawal.
    pub interest: f64,
    /// Amount actually withdrawn; the final withdrawal of a depleting run may
    /// be truncated to the remaining balance.
    pub withdrawal: f64,
    /// Balance after the withdrawal.
    pub balance: f64,
    pub cumulative_withdrawn: f64,
}

/// Complete output of a withdrawal projection run.
///
/// Depletion is a valid terminal outcome, not an error: when the balance
/// cannot cover a withdrawal the series ends and the month is recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepletionResult {
    pub series: Vec<WithdrawalPoint>,
    pub total_withdrawn: f64,
    /// Balance left at the end of the horizon (zero if depleted).
    pub final_balance: f64,
    /// Month in which the balance hit zero, if it did.
    pub depleted_at_month: Option<u32>,
}

impl DepletionResult {
    pub fn is_depleted(&self) -> bool {
        self.depleted_at_month.is_some()
    }
}
