//! Running state for schedule generation

/// Mutable state threaded through the monthly schedule loop.
#[derive(Debug, Clone)]
pub struct ScheduleState {
    /// Current month (1-indexed once the loop starts).
    pub month: u32,

    /// Schedule year (1-indexed).
    pub year: u32,

    /// Month within the year (1-12).
    pub month_in_year: u32,

    /// Principal still owed.
    pub balance: f64,

    /// Scheduled installment in effect, escalated by step-ups.
    pub current_payment: f64,

    pub cumulative_interest: f64,
    pub cumulative_principal: f64,

    /// Last year for which the step-up was applied, so a boundary crossing
    /// escalates the payment exactly once.
    stepped_through: u32,
}

impl ScheduleState {
    /// Initialize state at schedule start.
    pub fn new(principal: f64, starting_payment: f64) -> Self {
        Self {
            month: 0,
            year: 1,
            month_in_year: 0,
            balance: principal,
            current_payment: starting_payment,
            cumulative_interest: 0.0,
            cumulative_principal: 0.0,
            stepped_through: 1,
        }
    }

    /// Advance to the next month, escalating the payment on a year boundary.
    pub fn advance_month(&mut self, step_up_rate: f64) {
        self.month += 1;
        self.year = (self.month - 1) / 12 + 1;
        self.month_in_year = (self.month - 1) % 12 + 1;

        if self.year > self.stepped_through {
            if step_up_rate > 0.0 {
                self.current_payment *= 1.0 + step_up_rate;
            }
            self.stepped_through = self.year;
        }
    }

    /// Deduct a principal amount, clamping at zero and snapping sub-epsilon
    /// residue to a closed balance.
    pub fn apply_principal(&mut self, amount: f64, closure_epsilon: f64) {
        self.balance = (self.balance - amount).max(0.0);
        if self.balance < closure_epsilon {
            self.balance = 0.0;
        }
        self.cumulative_principal += amount;
    }

    /// Terminal state: the loan is closed once the balance reaches zero.
    pub fn is_closed(&self) -> bool {
        self.balance == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_month_timing() {
        let mut state = ScheduleState::new(1000.0, 100.0);
        state.advance_month(0.0);
        assert_eq!((state.month, state.year, state.month_in_year), (1, 1, 1));

        for _ in 0..11 {
            state.advance_month(0.0);
        }
        assert_eq!((state.month, state.year, state.month_in_year), (12, 1, 12));

        state.advance_month(0.0);
        assert_eq!((state.month, state.year, state.month_in_year), (13, 2, 1));
    }

    #[test]
    fn test_step_up_once_per_year() {
        let mut state = ScheduleState::new(1000.0, 100.0);
        for _ in 0..12 {
            state.advance_month(0.10);
        }
        // No escalation within year one
        assert_relative_eq!(state.current_payment, 100.0);

        state.advance_month(0.10);
        assert_relative_eq!(state.current_payment, 110.0);

        // Stays flat through the rest of year two
        for _ in 0..11 {
            state.advance_month(0.10);
        }
        assert_relative_eq!(state.current_payment, 110.0);

        state.advance_month(0.10);
        assert_relative_eq!(state.current_payment, 121.0);
    }

    #[test]
    fn test_closure_snapping() {
        let mut state = ScheduleState::new(100.5, 100.0);
        state.apply_principal(100.0, 1.0);
        assert!(state.is_closed());
        assert_eq!(state.balance, 0.0);

        let mut state = ScheduleState::new(100.0, 100.0);
        state.apply_principal(150.0, 1.0);
        assert_eq!(state.balance, 0.0);
    }
}
