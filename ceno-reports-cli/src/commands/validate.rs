//! Validate command implementation

use anyhow::Result;
use ceno_reports_core::Catalog;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to vocabulary file to validate
    #[arg(short = 'c', long = "vocabulary", value_name = "FILE", required = true)]
    pub vocabulary: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating vocabulary: {}", self.vocabulary.display());

        match Catalog::from_file(&self.vocabulary) {
            Ok(catalog) => {
                println!("✓ Vocabulary is valid!");
                if !catalog.name().is_empty() {
                    println!("  Name: {}", catalog.name());
                }
                println!("  Resource types: {}", catalog.resource_types().len());
                println!("  Error classes: {}", catalog.error_classes().len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Vocabulary is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
