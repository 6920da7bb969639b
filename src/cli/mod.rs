//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the clap
//! argument parsing with the storage and query layers.

pub mod add;
pub mod budget;
pub mod list;
pub mod report;
pub mod summary;

pub use add::handle_add_command;
pub use budget::handle_set_budget_command;
pub use list::handle_list_command;
pub use report::handle_report_command;
pub use summary::{handle_summary_command, SummaryPeriod};
