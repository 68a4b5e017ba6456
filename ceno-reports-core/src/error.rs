use crate::kind::IdentifierKind;
use thiserror::Error;

/// Errors raised while loading vocabularies or encoding report requests
#[derive(Debug, Error)]
pub enum ReportError {
    /// A request token matched no entry in its vocabulary
    #[error("No such {kind} {token}")]
    UnknownIdentifier {
        /// Vocabulary the token was looked up in
        kind: IdentifierKind,
        /// The offending token, after space removal
        token: String,
    },

    /// Vocabulary document could not be parsed or failed validation
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Vocabulary file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReportError {
    pub(crate) fn unknown(kind: IdentifierKind, token: impl Into<String>) -> Self {
        ReportError::UnknownIdentifier {
            kind,
            token: token.into(),
        }
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        ReportError::Configuration(msg.into())
    }

    /// The rejected token, if this is an unknown identifier error
    pub fn token(&self) -> Option<&str> {
        match self {
            ReportError::UnknownIdentifier { token, .. } => Some(token),
            _ => None,
        }
    }
}

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;
