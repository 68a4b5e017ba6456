//! Vocabulary source management for CLI

use crate::error::CliError;
use anyhow::Result;
use ceno_reports_core::{vocabulary, Catalog};
use clap::Args;
use std::borrow::Cow;
use std::path::PathBuf;

/// Source of the vocabularies requests are encoded against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularySource {
    /// Vocabulary compiled into the binary
    BuiltIn,
    /// External TOML vocabulary file
    External(PathBuf),
}

impl VocabularySource {
    /// Load the catalog this source points at
    pub fn load(&self) -> Result<Cow<'static, Catalog>> {
        match self {
            VocabularySource::BuiltIn => Ok(Cow::Borrowed(vocabulary::builtin()?)),
            VocabularySource::External(path) => Catalog::from_file(path)
                .map(Cow::Owned)
                .map_err(|e| {
                    CliError::ConfigError(format!("{}: {e}", path.display())).into()
                }),
        }
    }

    /// Get the display name for the vocabulary source
    pub fn display_name(&self) -> String {
        match self {
            VocabularySource::BuiltIn => "Built-in".to_string(),
            VocabularySource::External(path) => format!("External: {}", path.display()),
        }
    }
}

/// `--vocabulary` option shared by commands
#[derive(Debug, Clone, Default, Args)]
pub struct VocabularyArg {
    /// TOML vocabulary file (default: built-in vocabulary)
    #[arg(short = 'c', long = "vocabulary", value_name = "FILE")]
    pub vocabulary: Option<PathBuf>,
}

impl VocabularyArg {
    pub fn source(&self) -> VocabularySource {
        match &self.vocabulary {
            Some(path) => VocabularySource::External(path.clone()),
            None => VocabularySource::BuiltIn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_source_is_builtin() {
        let source = VocabularyArg::default().source();
        assert_eq!(source, VocabularySource::BuiltIn);
        assert_eq!(source.display_name(), "Built-in");
        assert!(matches!(source.load().unwrap(), Cow::Borrowed(_)));
    }

    #[test]
    fn test_external_source_display() {
        let source = VocabularyArg {
            vocabulary: Some(PathBuf::from("vocab.toml")),
        }
        .source();
        assert_eq!(source.display_name(), "External: vocab.toml");
    }

    #[test]
    fn test_missing_external_file() {
        let source = VocabularySource::External(PathBuf::from("/nonexistent/vocab.toml"));
        let err = source.load().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }
}
