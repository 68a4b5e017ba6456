//! Render command implementation

use anyhow::{Context, Result};
use ceno_reports_core::{Catalog, ErrorReport, Renderer};
use clap::Args;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::input;
use crate::vocabulary_source::VocabularyArg;

/// Arguments for the render command
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// JSON array of stored reports (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub vocabulary: VocabularyArg,
}

impl RenderArgs {
    /// Execute the render command
    pub fn execute(&self) -> Result<()> {
        let source = self.vocabulary.source();
        log::debug!("Vocabulary: {}", source.display_name());
        let catalog = source.load()?;

        let text = self.render(&catalog)?;
        match &self.output {
            Some(path) => fs::write(path, &text)
                .with_context(|| format!("Failed to write to {}", path.display()))?,
            None => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(text.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }

    /// Read the input reports and render them against `catalog`
    pub fn render(&self, catalog: &Catalog) -> Result<String> {
        let reports: Vec<ErrorReport> = input::read_json(self.input.as_deref())?;
        log::info!("Rendering {} report(s)", reports.len());
        Ok(Renderer::new(catalog).render(&reports))
    }
}
