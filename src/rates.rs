//! Rate conversion and fixed-payment solving

use crate::error::{CalcError, CalcResult};

/// Convert an annual percentage rate to a monthly periodic rate.
///
/// A zero annual rate yields a zero periodic rate; `solve_payment` handles
/// that case without dividing by zero.
pub fn monthly_rate(annual_pct: f64) -> f64 {
    annual_pct / 12.0 / 100.0
}

/// Solve the fixed periodic payment for a standard amortizing loan.
///
/// Uses the annuity formula `P * r * (1+r)^n / ((1+r)^n - 1)`. With a zero
/// periodic rate this degenerates to straight-line repayment `P / n`.
pub fn solve_payment(principal: f64, periodic_rate: f64, periods: u32) -> CalcResult<f64> {
    if !principal.is_finite() || principal <= 0.0 {
        return Err(CalcError::invalid_input("principal must be positive"));
    }
    if periods == 0 {
        return Err(CalcError::invalid_input("period count must be positive"));
    }
    if !periodic_rate.is_finite() || periodic_rate < 0.0 {
        return Err(CalcError::invalid_input("periodic rate must be non-negative"));
    }

    if periodic_rate == 0.0 {
        return Ok(principal / periods as f64);
    }

    let growth = (1.0 + periodic_rate).powi(periods as i32);
    let payment = principal * periodic_rate * growth / (growth - 1.0);
    if !payment.is_finite() {
        return Err(CalcError::invalid_input(
            "payment solve produced a non-finite value",
        ));
    }
    Ok(payment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_monthly_rate() {
        assert_relative_eq!(monthly_rate(12.0), 0.01);
        assert_eq!(monthly_rate(0.0), 0.0);
    }

    #[test]
    fn test_standard_payment() {
        // 50L home loan at 8.5% over 20 years
        let payment = solve_payment(5_000_000.0, monthly_rate(8.5), 240).unwrap();
        assert_relative_eq!(payment, 43_391.161668, epsilon = 1e-3);
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let payment = solve_payment(1_200_000.0, 0.0, 120).unwrap();
        assert_relative_eq!(payment, 10_000.0);
    }

    #[test]
    fn test_rejects_bad_inputs() {
        assert!(solve_payment(0.0, 0.01, 240).is_err());
        assert!(solve_payment(-5.0, 0.01, 240).is_err());
        assert!(solve_payment(100.0, 0.01, 0).is_err());
        assert!(solve_payment(100.0, -0.01, 240).is_err());
        assert!(solve_payment(f64::NAN, 0.01, 240).is_err());
    }
}
