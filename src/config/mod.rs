//! Configuration and path management

pub mod paths;

pub use paths::{XpensePaths, DATA_DIR_ENV};
