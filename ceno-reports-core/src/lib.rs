//! Encoding and rendering of CENO reader error reports
//!
//! Users ask for error reports by naming resource types and error classes in
//! free-text, comma-separated lists. This crate turns such a request into a
//! compact [`ErrorReport`] whose memberships are bitmasks suitable for storage
//! and querying, and renders stored reports back into prose.
//!
//! Both directions work against a [`Catalog`] of two vocabularies. The
//! vocabulary shipped with the crate is available through
//! [`vocabulary::builtin`]; custom ones load from TOML.
//!
//! # Example
//!
//! ```rust
//! use ceno_reports_core::{vocabulary, Encoder, RawReportRequest, Renderer};
//!
//! let catalog = vocabulary::builtin().unwrap();
//! let request = RawReportRequest::new("feed", "malformed");
//! let report = Encoder::new(catalog)
//!     .encode(&request)
//!     .unwrap()
//!     .with_message("timeout");
//!
//! let text = Renderer::new(catalog).render(&[report]);
//! assert!(text.starts_with("Error concerns feeds.\n"));
//! assert!(text.contains("Error message: timeout\n"));
//! ```

pub mod encoder;
pub mod error;
pub mod flags;
pub mod kind;
pub mod renderer;
pub mod report;
pub mod vocabulary;

pub use encoder::{EmptyFieldPolicy, Encoder};
pub use error::{ReportError, Result};
pub use flags::{ErrorClassSet, Flag, FlagSet, ResourceTypeSet};
pub use kind::{ErrorClasses, IdentifierKind, ResourceTypes, VocabularyKind};
pub use renderer::Renderer;
pub use report::{ErrorReport, RawReportRequest, UNSET_ID};
pub use vocabulary::{Catalog, Entry, Vocabulary};

// Convenience functions

/// Encode a request against the embedded vocabulary
pub fn encode(request: &RawReportRequest) -> Result<ErrorReport> {
    Encoder::new(vocabulary::builtin()?).encode(request)
}

/// Render reports against the embedded vocabulary
pub fn render(reports: &[ErrorReport]) -> Result<String> {
    Ok(Renderer::new(vocabulary::builtin()?).render(reports))
}
