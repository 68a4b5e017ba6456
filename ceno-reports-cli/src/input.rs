//! Reading JSON request and report documents

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Path that selects standard input
pub const STDIN_PATH: &str = "-";

/// Read UTF-8 text from a file, or from stdin when the path is `-` or absent
pub fn read_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new(STDIN_PATH) => {
            if !path.exists() {
                return Err(CliError::FileNotFound(path.display().to_string()).into());
            }
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))
        }
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read standard input")?;
            Ok(buffer)
        }
    }
}

/// Read and deserialize a JSON document
pub fn read_json<T: DeserializeOwned>(path: Option<&Path>) -> Result<T> {
    let text = read_text(path)?;
    let source = path.map_or_else(|| STDIN_PATH.to_string(), |p| p.display().to_string());
    serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {source}"))
}
