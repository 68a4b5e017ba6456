//! ceno-reports CLI library
//!
//! This library provides the command-line interface for encoding report
//! requests and rendering stored error reports.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod vocabulary_source;

pub use error::{CliError, CliResult};
