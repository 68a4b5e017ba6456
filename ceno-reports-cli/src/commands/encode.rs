//! Encode command implementation

use anyhow::Result;
use ceno_reports_core::{Catalog, EmptyFieldPolicy, Encoder, ErrorReport, RawReportRequest};
use clap::Args;
use std::io;
use std::path::PathBuf;

use crate::error::CliError;
use crate::input;
use crate::output::OutputFormat;
use crate::vocabulary_source::VocabularyArg;

/// Arguments for the encode command
#[derive(Debug, Args)]
pub struct EncodeArgs {
    /// Comma-separated resource types, e.g. "feed,article"
    #[arg(short = 'r', long, value_name = "LIST", required_unless_present = "request")]
    pub resource_types: Option<String>,

    /// Comma-separated error classes, e.g. "invalidUrl,malformed"
    #[arg(short = 'e', long, value_name = "LIST", required_unless_present = "request")]
    pub error_classes: Option<String>,

    /// JSON request body with resourceTypes and errorClasses ('-' for stdin)
    #[arg(long, value_name = "FILE", conflicts_with_all = ["resource_types", "error_classes"])]
    pub request: Option<PathBuf>,

    /// Message attached to the encoded report
    #[arg(short, long)]
    pub message: Option<String>,

    /// Encode an empty list as "no filter" instead of rejecting it
    #[arg(long)]
    pub allow_empty: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub vocabulary: VocabularyArg,
}

impl EncodeArgs {
    /// Execute the encode command
    pub fn execute(&self) -> Result<()> {
        let source = self.vocabulary.source();
        log::info!("Encoding report request");
        log::debug!("Vocabulary: {}", source.display_name());

        let catalog = source.load()?;
        let report = self.encode(&catalog)?;

        let mut formatter = self.format.formatter(io::stdout());
        formatter.format_report(&report, &catalog)?;
        formatter.finish()
    }

    /// The request named by the arguments
    pub fn request(&self) -> Result<RawReportRequest> {
        match &self.request {
            Some(path) => input::read_json(Some(path)),
            None => Ok(RawReportRequest::new(
                self.resource_types.clone().unwrap_or_default(),
                self.error_classes.clone().unwrap_or_default(),
            )),
        }
    }

    /// Encode the request against `catalog`
    pub fn encode(&self, catalog: &Catalog) -> Result<ErrorReport> {
        let policy = if self.allow_empty {
            EmptyFieldPolicy::MatchNone
        } else {
            EmptyFieldPolicy::Reject
        };

        let request = self.request()?;
        let report = Encoder::new(catalog)
            .empty_fields(policy)
            .encode(&request)
            .map_err(|e| CliError::EncodeError(e.to_string()))?;

        Ok(match &self.message {
            Some(message) => report.with_message(message.as_str()),
            None => report,
        })
    }
}
