//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use ceno_reports_core::{Catalog, ErrorReport};
use std::io::Write;

/// Plain text formatter - one `key: value` line per report field
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, report: &ErrorReport, catalog: &Catalog) -> Result<()> {
        let resources = join_names(
            catalog
                .resource_types()
                .members(report.resource_types)
                .map(|e| e.name.as_str()),
        );
        let classes = join_names(
            catalog
                .error_classes()
                .members(report.error_types)
                .map(|e| e.name.as_str()),
        );

        writeln!(self.writer, "id: {}", report.id)?;
        writeln!(
            self.writer,
            "resource types: {resources} ({:#b})",
            report.resource_types.bits()
        )?;
        writeln!(
            self.writer,
            "error classes: {classes} ({:#b})",
            report.error_types.bits()
        )?;
        writeln!(self.writer, "message: {}", report.message)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
