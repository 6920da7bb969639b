//! Report composition
//!
//! Combines query output with budgets into structured, ready-to-render rows.

pub mod month_to_date;
pub mod status;

pub use month_to_date::{MonthToDateReport, ReportRow};
pub use status::{budget_status, BudgetState, BudgetStatus};
