//! TOML schema for vocabulary documents

use crate::flags::Flag;
use serde::{Deserialize, Serialize};

/// Root vocabulary document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyConfig {
    #[serde(default)]
    pub metadata: Metadata,
    pub resource_types: Vec<EntryConfig>,
    pub error_classes: Vec<EntryConfig>,
}

/// Document metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub name: String,
}

/// One identifier and the flag it is bound to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryConfig {
    pub name: String,
    pub flag: Flag,
    #[serde(default)]
    pub description: Option<String>,
}
