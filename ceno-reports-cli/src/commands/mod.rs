//! CLI command implementations

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::vocabulary_source::VocabularyArg;

pub mod encode;
pub mod generate_config;
pub mod list;
pub mod render;
pub mod validate;

/// Encode CENO reader report requests and render stored error reports
#[derive(Debug, Parser)]
#[command(name = "ceno-reports", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Encode a report request into flag masks
    Encode(encode::EncodeArgs),

    /// Render stored reports as text
    Render(render::RenderArgs),

    /// List vocabulary entries
    List {
        #[command(subcommand)]
        subcommand: list::ListCommands,

        #[command(flatten)]
        vocabulary: VocabularyArg,
    },

    /// Validate a vocabulary file
    Validate(validate::ValidateArgs),

    /// Generate a vocabulary template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Cli {
    /// Initialize logging and run the selected command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();
        log::debug!("Arguments: {:?}", self);

        match &self.command {
            Commands::Encode(args) => args.execute(),
            Commands::Render(args) => args.execute(),
            Commands::List {
                subcommand,
                vocabulary,
            } => subcommand.execute(&vocabulary.source()),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // Ignored when a logger is already installed
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .format_target(false)
            .try_init();
    }
}
