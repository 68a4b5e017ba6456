//! List command implementation

use anyhow::Result;
use ceno_reports_core::Catalog;
use clap::Subcommand;
use std::io::{self, Write};

use crate::vocabulary_source::VocabularySource;

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List resource types and their flags
    ResourceTypes,

    /// List error classes, their flags and descriptions
    ErrorClasses,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self, source: &VocabularySource) -> Result<()> {
        let catalog = source.load()?;
        let mut stdout = io::stdout().lock();
        self.write_to(&catalog, &mut stdout)?;
        stdout.flush()?;
        Ok(())
    }

    /// Write one tab-separated line per entry, in declaration order
    pub fn write_to(&self, catalog: &Catalog, writer: &mut impl Write) -> Result<()> {
        match self {
            ListCommands::ResourceTypes => {
                for entry in catalog.resource_types().entries() {
                    writeln!(writer, "{}\t{}", entry.name, entry.flag)?;
                }
            }
            ListCommands::ErrorClasses => {
                for entry in catalog.error_classes().entries() {
                    writeln!(writer, "{}\t{}\t{}", entry.name, entry.flag, entry.description)?;
                }
            }
        }
        Ok(())
    }
}
