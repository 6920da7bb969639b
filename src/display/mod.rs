//! Terminal rendering of computed rows
//!
//! Tables are built with `tabled`; the list and report views render rounded
//! tables, everything else is plain formatted text in the handlers.

pub mod expense;
pub mod report;

pub use expense::format_expense_table;
pub use report::format_report_table;
