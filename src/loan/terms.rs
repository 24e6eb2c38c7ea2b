//! Loan terms and acceleration policy structures

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};

/// Interval at which an extra lump installment is paid.
///
/// The lump equals the current scheduled payment and goes entirely to
/// principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtraPaymentInterval {
    /// Every 3 months
    Quarterly,
    /// Every 6 months
    HalfYearly,
    /// Every 12 months
    Yearly,
}

impl ExtraPaymentInterval {
    /// Number of months between extra payments.
    pub fn months(&self) -> u32 {
        match self {
            ExtraPaymentInterval::Quarterly => 3,
            ExtraPaymentInterval::HalfYearly => 6,
            ExtraPaymentInterval::Yearly => 12,
        }
    }

    /// Parse a month count into an interval. Only 3, 6 and 12 are supported.
    pub fn from_months(months: u32) -> Option<Self> {
        match months {
            3 => Some(ExtraPaymentInterval::Quarterly),
            6 => Some(ExtraPaymentInterval::HalfYearly),
            12 => Some(ExtraPaymentInterval::Yearly),
            _ => None,
        }
    }
}

/// Optional schedule accelerators: periodic extra payments and an annual
/// payment step-up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AccelerationPolicy {
    /// Pay an extra installment every N months, entirely to principal.
    pub extra_payment_interval: Option<ExtraPaymentInterval>,

    /// Percentage by which the scheduled payment increases at the start of
    /// every subsequent year.
    pub annual_step_up_pct: f64,
}

impl AccelerationPolicy {
    /// Whether this policy changes the schedule at all.
    pub fn is_active(&self) -> bool {
        self.extra_payment_interval.is_some() || self.annual_step_up_pct > 0.0
    }

    pub(crate) fn validate(&self) -> CalcResult<()> {
        if !self.annual_step_up_pct.is_finite() || self.annual_step_up_pct < 0.0 {
            return Err(CalcError::invalid_input(
                "annual step-up must be non-negative",
            ));
        }
        Ok(())
    }
}

/// Immutable input terms for one amortization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Loan principal in minor-unit-agnostic currency.
    pub principal: f64,

    /// Annual interest rate in percent, e.g. 8.5 for 8.5% p.a.
    pub annual_rate_pct: f64,

    /// Tenure in years. Fractional years are rounded to whole months.
    pub tenure_years: f64,

    /// Optional schedule accelerators.
    pub acceleration: Option<AccelerationPolicy>,
}

impl LoanTerms {
    /// Create terms with no acceleration policy.
    pub fn new(principal: f64, annual_rate_pct: f64, tenure_years: f64) -> Self {
        Self {
            principal,
            annual_rate_pct,
            tenure_years,
            acceleration: None,
        }
    }

    /// Attach an acceleration policy.
    pub fn with_acceleration(mut self, policy: AccelerationPolicy) -> Self {
        self.acceleration = Some(policy);
        self
    }

    /// Original tenure expressed in months.
    pub fn tenure_months(&self) -> u32 {
        (self.tenure_years * 12.0).round() as u32
    }

    /// Terms for the no-acceleration baseline of the same loan.
    pub fn baseline(&self) -> Self {
        Self {
            acceleration: None,
            ..self.clone()
        }
    }

    /// Reject invalid terms before any iteration begins.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.principal.is_finite() || self.principal <= 0.0 {
            return Err(CalcError::invalid_input("principal must be positive"));
        }
        if !self.annual_rate_pct.is_finite() || self.annual_rate_pct < 0.0 {
            return Err(CalcError::invalid_input(
                "annual rate must be non-negative",
            ));
        }
        if !self.tenure_years.is_finite() || self.tenure_years <= 0.0 || self.tenure_months() == 0 {
            return Err(CalcError::invalid_input(
                "tenure must cover at least one month",
            ));
        }
        if let Some(policy) = &self.acceleration {
            policy.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_months() {
        assert_eq!(ExtraPaymentInterval::Quarterly.months(), 3);
        assert_eq!(ExtraPaymentInterval::HalfYearly.months(), 6);
        assert_eq!(ExtraPaymentInterval::Yearly.months(), 12);

        assert_eq!(
            ExtraPaymentInterval::from_months(6),
            Some(ExtraPaymentInterval::HalfYearly)
        );
        assert_eq!(ExtraPaymentInterval::from_months(4), None);
        assert_eq!(ExtraPaymentInterval::from_months(0), None);
    }

    #[test]
    fn test_tenure_months() {
        assert_eq!(LoanTerms::new(100.0, 8.0, 20.0).tenure_months(), 240);
        assert_eq!(LoanTerms::new(100.0, 8.0, 2.5).tenure_months(), 30);
    }

    #[test]
    fn test_policy_activity() {
        assert!(!AccelerationPolicy::default().is_active());
        assert!(AccelerationPolicy {
            extra_payment_interval: Some(ExtraPaymentInterval::Yearly),
            annual_step_up_pct: 0.0,
        }
        .is_active());
        assert!(AccelerationPolicy {
            extra_payment_interval: None,
            annual_step_up_pct: 5.0,
        }
        .is_active());
    }

    #[test]
    fn test_validation() {
        assert!(LoanTerms::new(5_000_000.0, 8.5, 20.0).validate().is_ok());
        assert!(LoanTerms::new(0.0, 8.5, 20.0).validate().is_err());
        assert!(LoanTerms::new(5_000_000.0, -1.0, 20.0).validate().is_err());
        assert!(LoanTerms::new(5_000_000.0, 8.5, 0.0).validate().is_err());

        let negative_step_up = LoanTerms::new(5_000_000.0, 8.5, 20.0).with_acceleration(
            AccelerationPolicy {
                extra_payment_interval: None,
                annual_step_up_pct: -5.0,
            },
        );
        assert!(negative_step_up.validate().is_err());
    }
}
