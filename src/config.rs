// src/config.rs
//! Scan configuration: root paths to walk and exclusion substrings.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Name of the optional local config file read by the CLI.
pub const CONFIG_FILE: &str = "modscan.toml";

/// Immutable scan settings. Built up through `EngineBuilder`, read-only
/// from the scanner's perspective afterwards.
#[derive(Debug, Clone, Default)]
pub struct Configuration {
    /// Root directories to walk, in configured order.
    pub root_paths: Vec<PathBuf>,
    /// Literal substrings; any candidate path containing one is discarded.
    pub exclude_patterns: Vec<String>,
}

impl Configuration {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// On-disk shape of `modscan.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub roots: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Parses the contents of a `modscan.toml` file.
///
/// # Errors
/// Returns error if the TOML is syntactically invalid.
pub fn parse_toml(content: &str) -> Result<FileConfig> {
    Ok(toml::from_str(content)?)
}

/// Loads `modscan.toml` from the working directory, if present.
/// A missing file is not an error; a malformed one is reported upstream.
pub fn load_local_file() -> Option<Result<FileConfig>> {
    let content = fs::read_to_string(CONFIG_FILE).ok()?;
    Some(parse_toml(&content))
}
