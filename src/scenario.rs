//! Baseline-versus-accelerated scenario comparison
//!
//! Runs the amortization engine twice over the same loan — once with no
//! acceleration policy, once with the caller's policy — and reports the
//! savings deltas the presentation layer displays.

use serde::{Deserialize, Serialize};

use crate::amortization::{AmortizationEngine, LoanSummary};
use crate::error::CalcResult;
use crate::loan::LoanTerms;

/// Savings of an accelerated schedule over its no-acceleration baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub baseline: LoanSummary,
    pub accelerated: LoanSummary,

    /// Interest avoided by accelerating, clamped at zero.
    pub interest_saved: f64,

    /// Months cut off the schedule, clamped at zero.
    pub time_saved_months: u32,

    /// Extra-payment rows in the accelerated ledger.
    pub extra_payments_made: u32,
}

/// Runs baseline and accelerated schedules for one loan.
#[derive(Debug, Clone, Default)]
pub struct ScenarioComparator {
    engine: AmortizationEngine,
}

impl ScenarioComparator {
    /// Comparator over a default-configured engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Comparator over a custom-configured engine. Both arms run through the
    /// same engine so configuration applies symmetrically.
    pub fn with_engine(engine: AmortizationEngine) -> Self {
        Self { engine }
    }

    /// Compare the loan's accelerated schedule against its baseline.
    ///
    /// With no policy (or an inactive one) both arms equal the baseline and
    /// all savings are zero — asking for no acceleration is not an error.
    pub fn compare(&self, terms: &LoanTerms) -> CalcResult<ScenarioComparison> {
        let baseline = self.engine.generate(&terms.baseline())?.summary();

        let accelerated = match &terms.acceleration {
            Some(policy) if policy.is_active() => self.engine.generate(terms)?.summary(),
            _ => baseline.clone(),
        };

        let interest_saved = (baseline.total_interest - accelerated.total_interest).max(0.0);
        let time_saved_months = baseline.months.saturating_sub(accelerated.months);
        let extra_payments_made = accelerated.extra_payments;

        Ok(ScenarioComparison {
            baseline,
            accelerated,
            interest_saved,
            time_saved_months,
            extra_payments_made,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loan::{AccelerationPolicy, ExtraPaymentInterval};
    use approx::assert_relative_eq;

    fn home_loan() -> LoanTerms {
        LoanTerms::new(5_000_000.0, 8.5, 20.0)
    }

    #[test]
    fn test_no_policy_is_degenerate_not_error() {
        let comparison = ScenarioComparator::new().compare(&home_loan()).unwrap();

        assert_eq!(comparison.baseline, comparison.accelerated);
        assert_eq!(comparison.interest_saved, 0.0);
        assert_eq!(comparison.time_saved_months, 0);
        assert_eq!(comparison.extra_payments_made, 0);
    }

    #[test]
    fn test_inactive_policy_equals_baseline() {
        let terms = home_loan().with_acceleration(AccelerationPolicy::default());
        let comparison = ScenarioComparator::new().compare(&terms).unwrap();
        assert_eq!(comparison.baseline, comparison.accelerated);
        assert_eq!(comparison.time_saved_months, 0);
    }

    #[test]
    fn test_yearly_extra_savings() {
        let terms = home_loan().with_acceleration(AccelerationPolicy {
            extra_payment_interval: Some(ExtraPaymentInterval::Yearly),
            annual_step_up_pct: 0.0,
        });
        let comparison = ScenarioComparator::new().compare(&terms).unwrap();

        assert_eq!(comparison.baseline.months, 240);
        assert_eq!(comparison.accelerated.months, 201);
        assert_eq!(comparison.time_saved_months, 39);
        assert_eq!(comparison.extra_payments_made, 16);
        assert_relative_eq!(comparison.interest_saved, 1_029_139.17, epsilon = 1.0);
    }

    #[test]
    fn test_acceleration_never_costs_more() {
        let policies = [
            AccelerationPolicy {
                extra_payment_interval: Some(ExtraPaymentInterval::Quarterly),
                annual_step_up_pct: 0.0,
            },
            AccelerationPolicy {
                extra_payment_interval: None,
                annual_step_up_pct: 7.5,
            },
            AccelerationPolicy {
                extra_payment_interval: Some(ExtraPaymentInterval::HalfYearly),
                annual_step_up_pct: 12.0,
            },
        ];

        let comparator = ScenarioComparator::new();
        for policy in policies {
            let terms = home_loan().with_acceleration(policy);
            let comparison = comparator.compare(&terms).unwrap();
            assert!(comparison.accelerated.total_interest <= comparison.baseline.total_interest);
            assert!(comparison.accelerated.months <= comparison.baseline.months);
        }
    }
}
