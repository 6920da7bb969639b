//! Core data models for xpense

pub mod expense;
pub mod money;
pub mod period;

pub use expense::{Expense, DATE_FMT};
pub use money::{Money, MoneyParseError};
pub use period::{month_bounds, parse_date, resolve_month_spec, resolve_period};
pub use period::{Period, PeriodSelector};
