//! Chain reaction CLI library
//!
//! This library provides the command-line interface for reducing
//! chain reaction workloads stored as CSV files.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
