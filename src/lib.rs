//! xpense - Tiny CLI expense tracker
//!
//! This library provides the core functionality for the xpense expense
//! tracker. Expenses are stored as CSV rows, budgets as a flat JSON mapping,
//! and every command is a single pass of load, filter, aggregate, print.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution
//! - `error`: Custom error types
//! - `models`: Core data models (money, expenses, periods)
//! - `storage`: CSV/JSON file storage layer
//! - `query`: Filtering and aggregation over loaded expenses
//! - `reports`: Month-to-date budget comparison
//! - `display`: Terminal rendering of computed rows
//! - `cli`: Command handlers

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod query;
pub mod reports;
pub mod storage;

pub use error::{XpenseError, XpenseResult};
