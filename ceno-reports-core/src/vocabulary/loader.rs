use super::Catalog;
use crate::error::{ReportError, Result};
use std::sync::OnceLock;

/// The vocabulary document compiled into the crate
pub const DEFAULT_VOCABULARY_TOML: &str = include_str!("../../configs/vocabulary.toml");

static BUILTIN: OnceLock<std::result::Result<Catalog, String>> = OnceLock::new();

/// The embedded CENO reader vocabulary, parsed once per process
pub fn builtin() -> Result<&'static Catalog> {
    BUILTIN
        .get_or_init(|| {
            let catalog =
                Catalog::from_toml_str(DEFAULT_VOCABULARY_TOML).map_err(|e| e.to_string())?;
            log::debug!("loaded embedded vocabulary '{}'", catalog.name());
            Ok(catalog)
        })
        .as_ref()
        .map_err(|msg| ReportError::config(format!("embedded vocabulary: {msg}")))
}
