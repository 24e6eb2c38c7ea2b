//! Ledger output structures for amortization schedules

use serde::{Deserialize, Serialize};

/// Whether a ledger row is a scheduled installment or an extra lump payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentKind {
    /// Scheduled monthly installment covering interest and principal.
    Regular,
    /// Extra lump payment, applied entirely to principal.
    Extra,
}

/// A single payment event in an amortization schedule.
///
/// Extra rows share the month index of the regular row they follow.
/// Invariant: `principal_component + interest_component == amount_paid`;
/// extra rows carry zero interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Month index (1-based).
    pub month: u32,
    /// Calendar year of the schedule (1-based).
    pub year: u32,
    /// Month within the year (1-12).
    pub month_in_year: u32,
    pub kind: PaymentKind,

    /// Cash actually paid this event. The closing installment may be smaller
    /// than the scheduled payment.
    pub amount_paid: f64,
    /// Nominal installment in effect this month (after step-ups).
    pub scheduled_payment: f64,
    /// Increase of the scheduled payment over the base payment.
    pub step_up_increase: f64,

    pub principal_component: f64,
    pub interest_component: f64,

    /// Balance remaining after this event.
    pub balance: f64,
    pub cumulative_interest: f64,
    pub cumulative_principal: f64,

    /// Set on the event that brings the balance to zero.
    pub closes_loan: bool,
}

impl LedgerEntry {
    pub fn is_extra(&self) -> bool {
        self.kind == PaymentKind::Extra
    }
}

/// Complete output of one schedule generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationResult {
    /// Fixed payment solved from the original terms, before any step-up.
    pub base_payment: f64,

    /// Payment events in schedule order.
    pub entries: Vec<LedgerEntry>,
}

impl AmortizationResult {
    pub(crate) fn new(base_payment: f64) -> Self {
        Self {
            base_payment,
            entries: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, entry: LedgerEntry) {
        self.entries.push(entry);
    }

    /// Months consumed by the schedule.
    pub fn months(&self) -> u32 {
        self.entries.last().map(|e| e.month).unwrap_or(0)
    }

    /// Aggregate figures derived from the ledger.
    pub fn summary(&self) -> LoanSummary {
        let total_interest: f64 = self.entries.iter().map(|e| e.interest_component).sum();
        let total_principal: f64 = self.entries.iter().map(|e| e.principal_component).sum();
        let total_paid: f64 = self.entries.iter().map(|e| e.amount_paid).sum();
        let extra_payments = self.entries.iter().filter(|e| e.is_extra()).count() as u32;

        LoanSummary {
            base_payment: self.base_payment,
            months: self.months(),
            payment_events: self.entries.len() as u32,
            extra_payments,
            total_interest,
            total_principal,
            total_paid,
        }
    }
}

/// Aggregate figures for one generated schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub base_payment: f64,
    /// Months until the loan closed.
    pub months: u32,
    /// Total ledger rows, regular and extra.
    pub payment_events: u32,
    pub extra_payments: u32,
    pub total_interest: f64,
    pub total_principal: f64,
    pub total_paid: f64,
}
