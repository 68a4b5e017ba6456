//! Generate config command implementation

use anyhow::{Context, Result};
use ceno_reports_core::vocabulary::DEFAULT_VOCABULARY_TOML;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating vocabulary template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Self::generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Vocabulary template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Add or edit resource types and error classes");
        println!("2. Validate your vocabulary:");
        println!("   ceno-reports validate --vocabulary {}", self.output.display());
        println!("3. Use it for encoding:");
        println!(
            "   ceno-reports encode -r feed -e malformed --vocabulary {}",
            self.output.display()
        );

        Ok(())
    }

    /// Template content: the built-in vocabulary plus editing notes
    fn generate_template() -> String {
        format!(
            r#"# Custom vocabulary template.
#
# Rules checked on load:
#   - each table needs at least one entry
#   - every flag is a single bit (1, 2, 4, 8, ...) unique within its table
#   - names are unique and contain no commas or spaces
#   - every error class has a description

{DEFAULT_VOCABULARY_TOML}"#
        )
    }
}
