//! Growth and depletion projections for recurring-investment products

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};
use crate::rates;

use super::series::{DepletionResult, GrowthPoint, GrowthResult, WithdrawalPoint};

/// Balances below one minor currency unit are treated as depleted.
const DEPLETION_EPSILON: f64 = 1.0;

/// How contributions are scheduled and compounded in a growth projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Compounding {
    /// Contribution at the start of each month, compounded monthly
    /// (annuity-due accumulation, the SIP/NPS convention).
    MonthlyDue,
    /// Contributions pooled per year; interest accrues on the opening
    /// balance plus half the year's contributions (the provident-fund
    /// convention).
    AnnualAveraged,
}

/// Input plan for a growth projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthPlan {
    /// Contribution per month. Annual-averaged runs pool twelve of these
    /// per year.
    pub monthly_contribution: f64,
    pub annual_rate_pct: f64,
    pub years: f64,
    pub compounding: Compounding,
}

impl GrowthPlan {
    /// Monthly-compounded plan (SIP/NPS style).
    pub fn monthly(monthly_contribution: f64, annual_rate_pct: f64, years: f64) -> Self {
        Self {
            monthly_contribution,
            annual_rate_pct,
            years,
            compounding: Compounding::MonthlyDue,
        }
    }

    /// Annually-averaged plan (provident-fund style).
    pub fn annual_averaged(monthly_contribution: f64, annual_rate_pct: f64, years: f64) -> Self {
        Self {
            monthly_contribution,
            annual_rate_pct,
            years,
            compounding: Compounding::AnnualAveraged,
        }
    }

    fn validate(&self) -> CalcResult<()> {
        if !self.monthly_contribution.is_finite() || self.monthly_contribution <= 0.0 {
            return Err(CalcError::invalid_input("contribution must be positive"));
        }
        if !self.annual_rate_pct.is_finite() || self.annual_rate_pct < 0.0 {
            return Err(CalcError::invalid_input("annual rate must be non-negative"));
        }
        if !self.years.is_finite() || self.years <= 0.0 {
            return Err(CalcError::invalid_input("horizon must be positive"));
        }
        Ok(())
    }
}

/// Input plan for a withdrawal projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalPlan {
    pub opening_balance: f64,
    pub monthly_withdrawal: f64,
    pub annual_rate_pct: f64,
    pub years: f64,
}

impl WithdrawalPlan {
    pub fn new(
        opening_balance: f64,
        monthly_withdrawal: f64,
        annual_rate_pct: f64,
        years: f64,
    ) -> Self {
        Self {
            opening_balance,
            monthly_withdrawal,
            annual_rate_pct,
            years,
        }
    }

    fn validate(&self) -> CalcResult<()> {
        if !self.opening_balance.is_finite() || self.opening_balance <= 0.0 {
            return Err(CalcError::invalid_input("opening balance must be positive"));
        }
        if !self.monthly_withdrawal.is_finite() || self.monthly_withdrawal <= 0.0 {
            return Err(CalcError::invalid_input("withdrawal must be positive"));
        }
        if !self.annual_rate_pct.is_finite() || self.annual_rate_pct < 0.0 {
            return Err(CalcError::invalid_input("annual rate must be non-negative"));
        }
        if !self.years.is_finite() || self.years <= 0.0 {
            return Err(CalcError::invalid_input("horizon must be positive"));
        }
        Ok(())
    }
}

/// Iterative series engine for pure growth and depletion products.
///
/// Same ledger pattern as the amortization engine, without a payment solve:
/// each period compounds the balance and applies a contribution or a
/// withdrawal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectionEngine;

impl ProjectionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run a growth projection over the full horizon.
    ///
    /// Growth has no natural termination: the loop always runs to the end of
    /// the horizon and returns the full series plus totals.
    pub fn project_growth(&self, plan: &GrowthPlan) -> CalcResult<GrowthResult> {
        plan.validate()?;

        let series = match plan.compounding {
            Compounding::MonthlyDue => self.grow_monthly(plan),
            Compounding::AnnualAveraged => self.grow_annual(plan),
        };

        let invested = series.last().map(|p| p.cumulative_invested).unwrap_or(0.0);
        let final_value = series.last().map(|p| p.balance).unwrap_or(0.0);
        Ok(GrowthResult {
            series,
            invested,
            final_value,
            gained: final_value - invested,
        })
    }

    fn grow_monthly(&self, plan: &GrowthPlan) -> Vec<GrowthPoint> {
        let rate = rates::monthly_rate(plan.annual_rate_pct);
        let months = (plan.years * 12.0).round() as u32;

        let mut balance = 0.0;
        let mut invested = 0.0;
        let mut series = Vec::with_capacity(months as usize);

        for month in 1..=months {
            balance += plan.monthly_contribution;
            invested += plan.monthly_contribution;

            let interest = balance * rate;
            balance += interest;

            series.push(GrowthPoint {
                month,
                year: (month - 1) / 12 + 1,
                contribution: plan.monthly_contribution,
                interest,
                balance,
                cumulative_invested: invested,
            });
        }
        series
    }

    fn grow_annual(&self, plan: &GrowthPlan) -> Vec<GrowthPoint> {
        let rate = plan.annual_rate_pct / 100.0;
        let years = plan.years.round() as u32;
        let yearly_contribution = plan.monthly_contribution * 12.0;

        let mut balance = 0.0;
        let mut invested = 0.0;
        let mut series = Vec::with_capacity(years as usize);

        for year in 1..=years {
            // Contributions arrive through the year, so they earn roughly
            // half a year of interest on average.
            let interest = balance * rate + yearly_contribution * rate / 2.0;
            balance += yearly_contribution + interest;
            invested += yearly_contribution;

            series.push(GrowthPoint {
                month: year * 12,
                year,
                contribution: yearly_contribution,
                interest,
                balance,
                cumulative_invested: invested,
            });
        }
        series
    }

    /// Run a withdrawal projection until the horizon or depletion.
    ///
    /// Each month credits interest first, then withdraws. A withdrawal the
    /// balance cannot cover is truncated to the remaining balance; the series
    /// ends there with the depletion month recorded.
    pub fn project_withdrawal(&self, plan: &WithdrawalPlan) -> CalcResult<DepletionResult> {
        plan.validate()?;

        let rate = rates::monthly_rate(plan.annual_rate_pct);
        let months = (plan.years * 12.0).round() as u32;

        let mut balance = plan.opening_balance;
        let mut total_withdrawn = 0.0;
        let mut depleted_at_month = None;
        let mut series = Vec::with_capacity(months as usize);

        for month in 1..=months {
            let interest = balance * rate;
            balance += interest;

            let withdrawal = plan.monthly_withdrawal.min(balance);
            balance -= withdrawal;
            total_withdrawn += withdrawal;
            if balance < DEPLETION_EPSILON {
                balance = 0.0;
            }

            series.push(WithdrawalPoint {
                month,
                year: (month - 1) / 12 + 1,
                interest,
                withdrawal,
                balance,
                cumulative_withdrawn: total_withdrawn,
            });

            if balance == 0.0 {
                depleted_at_month = Some(month);
                break;
            }
        }

        Ok(DepletionResult {
            series,
            total_withdrawn,
            final_balance: balance,
            depleted_at_month,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_monthly_growth() {
        // 5,000/month at 12% for 10 years
        let result = ProjectionEngine::new()
            .project_growth(&GrowthPlan::monthly(5_000.0, 12.0, 10.0))
            .unwrap();

        assert_eq!(result.series.len(), 120);
        assert_relative_eq!(result.invested, 600_000.0);
        assert_relative_eq!(result.final_value, 1_161_695.38, epsilon = 1.0);
        assert_relative_eq!(result.gained, 561_695.38, epsilon = 1.0);
    }

    #[test]
    fn test_annual_averaged_growth() {
        // Provident fund: 50k basic, 12% + 3.67% contributions, 15 years
        // at the 8.25% statutory rate
        let monthly = 50_000.0 * 0.12 + 50_000.0 * 0.0367;
        let result = ProjectionEngine::new()
            .project_growth(&GrowthPlan::annual_averaged(monthly, 8.25, 15.0))
            .unwrap();

        assert_eq!(result.series.len(), 15);
        assert_relative_eq!(result.invested, 1_410_300.0, epsilon = 1e-6);
        assert_relative_eq!(result.final_value, 2_710_438.72, epsilon = 1.0);
    }

    #[test]
    fn test_zero_rate_growth_is_contributions_only() {
        let result = ProjectionEngine::new()
            .project_growth(&GrowthPlan::monthly(1_000.0, 0.0, 2.0))
            .unwrap();
        assert_relative_eq!(result.final_value, 24_000.0);
        assert_relative_eq!(result.gained, 0.0);
    }

    #[test]
    fn test_growth_is_monotonic() {
        let result = ProjectionEngine::new()
            .project_growth(&GrowthPlan::monthly(5_000.0, 12.0, 10.0))
            .unwrap();
        let mut prev = 0.0;
        for point in &result.series {
            assert!(point.balance > prev);
            prev = point.balance;
        }
    }

    #[test]
    fn test_withdrawal_sustained() {
        // 10L corpus at 10% supports 10k/month for the full horizon
        let result = ProjectionEngine::new()
            .project_withdrawal(&WithdrawalPlan::new(1_000_000.0, 10_000.0, 10.0, 10.0))
            .unwrap();

        assert!(!result.is_depleted());
        assert_eq!(result.series.len(), 120);
        assert_relative_eq!(result.total_withdrawn, 1_200_000.0);
        assert_relative_eq!(result.final_balance, 658_591.70, epsilon = 1.0);
    }

    #[test]
    fn test_withdrawal_depletes() {
        // 1L corpus cannot sustain 5k/month at 8%
        let result = ProjectionEngine::new()
            .project_withdrawal(&WithdrawalPlan::new(100_000.0, 5_000.0, 8.0, 10.0))
            .unwrap();

        assert_eq!(result.depleted_at_month, Some(22));
        assert_eq!(result.series.len(), 22);
        assert_eq!(result.final_balance, 0.0);
        assert_relative_eq!(result.total_withdrawn, 107_687.12, epsilon = 1.0);

        // Final withdrawal is truncated, never overdrawn
        let last = result.series.last().unwrap();
        assert!(last.withdrawal < 5_000.0);
        assert_eq!(last.balance, 0.0);
    }

    #[test]
    fn test_invalid_plans_rejected() {
        let engine = ProjectionEngine::new();
        assert!(engine
            .project_growth(&GrowthPlan::monthly(0.0, 12.0, 10.0))
            .is_err());
        assert!(engine
            .project_growth(&GrowthPlan::monthly(100.0, -1.0, 10.0))
            .is_err());
        assert!(engine
            .project_withdrawal(&WithdrawalPlan::new(0.0, 100.0, 8.0, 10.0))
            .is_err());
        assert!(engine
            .project_withdrawal(&WithdrawalPlan::new(1_000.0, 100.0, 8.0, 0.0))
            .is_err());
    }
}
