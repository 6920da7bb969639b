//! Budget status for a single category
//!
//! Used by the add command to alert on the month-to-date position right after
//! an expense is recorded.

use crate::models::Money;

/// Whether month-to-date spend is within the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetState {
    /// Spend is at or under the budget
    Ok,
    /// Spend is over the budget
    Exceeded,
}

/// Month-to-date position of a category against its budget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetStatus {
    pub state: BudgetState,
    /// Amount spent this month
    pub spent: Money,
    /// The category's monthly budget
    pub budget: Money,
    /// Remaining when Ok, overrun when Exceeded; always non-negative
    pub remaining_or_over: Money,
    /// Spend as a percentage of budget; exactly 0 when the budget is zero
    pub percentage: f64,
}

/// Compute the budget status for a month-to-date spend
pub fn budget_status(spent: Money, budget: Money) -> BudgetStatus {
    let state = if spent > budget {
        BudgetState::Exceeded
    } else {
        BudgetState::Ok
    };

    let percentage = if budget.is_zero() {
        0.0
    } else {
        spent.cents() as f64 / budget.cents() as f64 * 100.0
    };

    BudgetStatus {
        state,
        spent,
        budget,
        remaining_or_over: (budget - spent).abs(),
        percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_under_budget() {
        let status = budget_status(Money::from_cents(1250), Money::from_cents(1500));

        assert_eq!(status.state, BudgetState::Ok);
        assert_eq!(status.remaining_or_over.cents(), 250);
        assert!((status.percentage - 83.333).abs() < 0.01);
    }

    #[test]
    fn test_exactly_at_budget_is_ok() {
        let status = budget_status(Money::from_cents(1500), Money::from_cents(1500));

        assert_eq!(status.state, BudgetState::Ok);
        assert_eq!(status.remaining_or_over, Money::zero());
        assert_eq!(status.percentage, 100.0);
    }

    #[test]
    fn test_exceeded() {
        // $20.50 spent against a $15.00 budget: over by $5.50 at ~137%
        let status = budget_status(Money::from_cents(2050), Money::from_cents(1500));

        assert_eq!(status.state, BudgetState::Exceeded);
        assert_eq!(status.remaining_or_over.cents(), 550);
        assert_eq!(format!("{:.0}", status.percentage), "137");
    }

    #[test]
    fn test_zero_budget_percentage_is_zero() {
        let status = budget_status(Money::from_cents(9999), Money::zero());

        assert_eq!(status.state, BudgetState::Exceeded);
        assert_eq!(status.percentage, 0.0);
    }
}
