//! Core schedule generation engine for amortizing loans

use crate::error::{CalcError, CalcResult};
use crate::loan::LoanTerms;
use crate::rates;

use super::ledger::{AmortizationResult, LedgerEntry, PaymentKind};
use super::state::ScheduleState;

/// Configuration for a schedule generation run.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Iteration cap expressed as a multiple of the original tenure. The loop
    /// aborts with `NonConvergent` when the cap is reached with the loan
    /// still open.
    pub cap_multiple: u32,

    /// Balances below this amount are treated as fully repaid.
    pub closure_epsilon: f64,

    /// Override the solved payment (for testing and what-if runs).
    /// If Some, used as the starting scheduled payment; step-ups still
    /// escalate from it. The solved base payment is reported regardless.
    pub payment_override: Option<f64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cap_multiple: 2,
            closure_epsilon: 1.0,
            payment_override: None,
        }
    }
}

/// Generates period-by-period amortization ledgers.
///
/// Stateless across calls: identical terms produce identical ledgers.
#[derive(Debug, Clone, Default)]
pub struct AmortizationEngine {
    config: EngineConfig,
}

impl AmortizationEngine {
    /// Create an engine with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Generate the full payment ledger for the given terms.
    ///
    /// The base payment is solved from the original principal, rate and
    /// tenure; acceleration policies only alter how the schedule unwinds.
    /// Returns the whole ledger or an error, never a partial ledger.
    pub fn generate(&self, terms: &LoanTerms) -> CalcResult<AmortizationResult> {
        terms.validate()?;
        if let Some(p) = self.config.payment_override {
            if !p.is_finite() || p <= 0.0 {
                return Err(CalcError::invalid_input(
                    "payment override must be positive",
                ));
            }
        }

        let rate = rates::monthly_rate(terms.annual_rate_pct);
        let tenure_months = terms.tenure_months();
        let base_payment = rates::solve_payment(terms.principal, rate, tenure_months)?;

        let policy = terms.acceleration.unwrap_or_default();
        let step_up_rate = policy.annual_step_up_pct / 100.0;
        let extra_interval = policy.extra_payment_interval.map(|i| i.months());

        let starting_payment = self.config.payment_override.unwrap_or(base_payment);
        let cap = tenure_months.saturating_mul(self.config.cap_multiple.max(1));

        let mut result = AmortizationResult::new(base_payment);
        let mut state = ScheduleState::new(terms.principal, starting_payment);

        while !state.is_closed() && state.month < cap {
            state.advance_month(step_up_rate);

            // Declining balance: interest accrues on the balance before this
            // month's principal reduction.
            let interest = state.balance * rate;

            // Capped so the closing installment never overpays.
            let principal_paid = (state.current_payment - interest).min(state.balance);

            state.cumulative_interest += interest;
            state.apply_principal(principal_paid, self.config.closure_epsilon);

            result.push(LedgerEntry {
                month: state.month,
                year: state.year,
                month_in_year: state.month_in_year,
                kind: PaymentKind::Regular,
                amount_paid: principal_paid + interest,
                scheduled_payment: state.current_payment,
                step_up_increase: state.current_payment - base_payment,
                principal_component: principal_paid,
                interest_component: interest,
                balance: state.balance,
                cumulative_interest: state.cumulative_interest,
                cumulative_principal: state.cumulative_principal,
                closes_loan: state.is_closed(),
            });
            if state.is_closed() {
                break;
            }

            if let Some(interval) = extra_interval {
                if state.month % interval == 0 {
                    let extra = state.current_payment.min(state.balance);
                    state.apply_principal(extra, self.config.closure_epsilon);

                    result.push(LedgerEntry {
                        month: state.month,
                        year: state.year,
                        month_in_year: state.month_in_year,
                        kind: PaymentKind::Extra,
                        amount_paid: extra,
                        scheduled_payment: state.current_payment,
                        step_up_increase: state.current_payment - base_payment,
                        principal_component: extra,
                        interest_component: 0.0,
                        balance: state.balance,
                        cumulative_interest: state.cumulative_interest,
                        cumulative_principal: state.cumulative_principal,
                        closes_loan: state.is_closed(),
                    });
                    if state.is_closed() {
                        break;
                    }
                }
            }
        }

        if !state.is_closed() {
            return Err(CalcError::NonConvergent { cap });
        }
        Ok(result)
    }
}
