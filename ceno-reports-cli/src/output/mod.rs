//! Output formatting module

use anyhow::Result;
use ceno_reports_core::{Catalog, ErrorReport};
use std::io::Write;

/// Trait for encoded report formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single encoded report
    fn format_report(&mut self, report: &ErrorReport, catalog: &Catalog) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary of the encoded masks
    Text,
    /// JSON array of reports, accepted by the render command
    Json,
}

impl OutputFormat {
    /// Create the formatter for this format
    pub fn formatter<W>(self, writer: W) -> Box<dyn OutputFormatter>
    where
        W: Write + Send + Sync + 'static,
    {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        }
    }
}
