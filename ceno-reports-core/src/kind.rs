//! Markers distinguishing the two vocabularies at the type level

use std::fmt;

/// Which vocabulary an identifier belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    /// Kinds of resource an error can concern (feeds, articles)
    ResourceType,
    /// Categories of failure (invalid URL, no response, malformed content)
    ErrorClass,
}

impl IdentifierKind {
    /// Human-readable label used in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierKind::ResourceType => "resource type",
            IdentifierKind::ErrorClass => "error class",
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compile-time tag for a vocabulary and the flag sets drawn from it
pub trait VocabularyKind: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// Runtime identity of the vocabulary
    const KIND: IdentifierKind;

    /// Whether every entry must carry a description
    const REQUIRES_DESCRIPTION: bool;
}

/// Tag for the resource type vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ResourceTypes;

impl VocabularyKind for ResourceTypes {
    const KIND: IdentifierKind = IdentifierKind::ResourceType;
    const REQUIRES_DESCRIPTION: bool = false;
}

/// Tag for the error class vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ErrorClasses;

impl VocabularyKind for ErrorClasses {
    const KIND: IdentifierKind = IdentifierKind::ErrorClass;
    const REQUIRES_DESCRIPTION: bool = true;
}
