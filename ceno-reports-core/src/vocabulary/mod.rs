//! Vocabularies binding report identifiers to flags
//!
//! A [`Catalog`] holds the two vocabularies a report is encoded against. It is
//! immutable once built, so a single catalog can back any number of encoders
//! and renderers across threads.

mod loader;
pub mod types;

pub use loader::{builtin, DEFAULT_VOCABULARY_TOML};

use crate::error::{ReportError, Result};
use crate::flags::{Flag, FlagSet};
use crate::kind::{ErrorClasses, ResourceTypes, VocabularyKind};
use std::collections::HashMap;
use std::marker::PhantomData;
use std::path::Path;
use types::{EntryConfig, VocabularyConfig};

/// A vocabulary entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub flag: Flag,
    /// Human-readable description; empty when the vocabulary has none
    pub description: String,
}

/// Closed, ordered set of identifiers of kind `K`
///
/// Entries keep their declaration order, which is also the order rendered
/// reports list them in.
#[derive(Debug, Clone)]
pub struct Vocabulary<K> {
    entries: Vec<Entry>,
    by_name: HashMap<String, usize>,
    _kind: PhantomData<K>,
}

impl<K: VocabularyKind> Vocabulary<K> {
    /// Build a vocabulary, rejecting entries the encoder could never match
    /// and flags that are not disjoint single bits.
    pub fn from_entries(entries: Vec<Entry>) -> Result<Self> {
        let kind = K::KIND;
        if entries.is_empty() {
            return Err(ReportError::config(format!("no {kind} entries defined")));
        }

        let mut by_name = HashMap::with_capacity(entries.len());
        let mut seen: Flag = 0;
        for (index, entry) in entries.iter().enumerate() {
            let name = &entry.name;
            if name.is_empty() {
                return Err(ReportError::config(format!("{kind} with empty name")));
            }
            if name.contains([',', ' ']) {
                return Err(ReportError::config(format!(
                    "{kind} '{name}' contains a comma or space"
                )));
            }
            if entry.flag.count_ones() != 1 {
                return Err(ReportError::config(format!(
                    "flag {:#x} of {kind} '{name}' is not a single bit",
                    entry.flag
                )));
            }
            if seen & entry.flag != 0 {
                return Err(ReportError::config(format!(
                    "flag {:#x} of {kind} '{name}' is already in use",
                    entry.flag
                )));
            }
            if K::REQUIRES_DESCRIPTION && entry.description.trim().is_empty() {
                return Err(ReportError::config(format!(
                    "{kind} '{name}' has no description"
                )));
            }
            if by_name.insert(name.clone(), index).is_some() {
                return Err(ReportError::config(format!("duplicate {kind} '{name}'")));
            }
            seen |= entry.flag;
        }

        Ok(Self {
            entries,
            by_name,
            _kind: PhantomData,
        })
    }

    fn from_config(entries: Vec<EntryConfig>) -> Result<Self> {
        Self::from_entries(
            entries
                .into_iter()
                .map(|e| Entry {
                    name: e.name,
                    flag: e.flag,
                    description: e.description.unwrap_or_default(),
                })
                .collect(),
        )
    }

    /// Flag bound to `name`; matching is exact and case-sensitive
    pub fn lookup(&self, name: &str) -> Option<Flag> {
        self.entry(name).map(|e| e.flag)
    }

    pub fn entry(&self, name: &str) -> Option<&Entry> {
        self.by_name.get(name).map(|&i| &self.entries[i])
    }

    /// All entries in declaration order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entries whose flag is in `set`, in declaration order.
    /// Bits no entry owns are skipped.
    pub fn members(&self, set: FlagSet<K>) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter().filter(move |e| set.contains(e.flag))
    }

    /// Set holding every entry
    pub fn all(&self) -> FlagSet<K> {
        self.entries.iter().map(|e| e.flag).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The resource type and error class vocabularies reports are encoded against
#[derive(Debug, Clone)]
pub struct Catalog {
    name: String,
    resource_types: Vocabulary<ResourceTypes>,
    error_classes: Vocabulary<ErrorClasses>,
}

impl Catalog {
    pub fn new(
        name: impl Into<String>,
        resource_types: Vocabulary<ResourceTypes>,
        error_classes: Vocabulary<ErrorClasses>,
    ) -> Self {
        Self {
            name: name.into(),
            resource_types,
            error_classes,
        }
    }

    /// Build from a parsed vocabulary document
    pub fn from_config(config: VocabularyConfig) -> Result<Self> {
        Ok(Self::new(
            config.metadata.name,
            Vocabulary::from_config(config.resource_types)?,
            Vocabulary::from_config(config.error_classes)?,
        ))
    }

    /// Parse and validate a TOML vocabulary document
    pub fn from_toml_str(toml_content: &str) -> Result<Self> {
        let config: VocabularyConfig = toml::from_str(toml_content)
            .map_err(|e| ReportError::config(format!("failed to parse vocabulary: {e}")))?;
        Self::from_config(config)
    }

    /// Load a TOML vocabulary document from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content)?;
        log::debug!(
            "loaded vocabulary '{}' from {} ({} resource types, {} error classes)",
            catalog.name,
            path.display(),
            catalog.resource_types.len(),
            catalog.error_classes.len()
        );
        Ok(catalog)
    }

    /// Name from the document metadata; may be empty
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn resource_types(&self) -> &Vocabulary<ResourceTypes> {
        &self.resource_types
    }

    pub fn error_classes(&self) -> &Vocabulary<ErrorClasses> {
        &self.error_classes
    }
}
