// src/types.rs
//! Common data structures: module records and version numbers.

use serde::{Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// A 4-component module version (major.minor.build.revision).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ModuleVersion {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
    pub revision: u32,
}

impl ModuleVersion {
    #[must_use]
    pub const fn new(major: u32, minor: u32, build: u32, revision: u32) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }
}

impl fmt::Display for ModuleVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid version string: {0}")]
pub struct VersionParseError(pub String);

impl FromStr for ModuleVersion {
    type Err = VersionParseError;

    /// Accepts 1 to 4 dot-separated numeric components; missing components are zero.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.is_empty() || parts.len() > 4 {
            return Err(VersionParseError(s.to_string()));
        }
        let mut numbers = [0u32; 4];
        for (i, part) in parts.iter().enumerate() {
            numbers[i] = part
                .parse()
                .map_err(|_| VersionParseError(s.to_string()))?;
        }
        Ok(Self::new(numbers[0], numbers[1], numbers[2], numbers[3]))
    }
}

// Versions serialize as their display form ("1.2.0.0"), not as a struct.
impl Serialize for ModuleVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One discovered module: a file that passed the exclusion filter and
/// yielded readable header metadata (possibly defaulted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleInfo {
    pub name: String,
    pub path: PathBuf,
    pub version: ModuleVersion,
}

impl ModuleInfo {
    #[must_use]
    pub fn new(name: String, path: PathBuf, version: ModuleVersion) -> Self {
        Self {
            name,
            path,
            version,
        }
    }
}

impl fmt::Display for ModuleInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} v{} ({})", self.name, self.version, self.path.display())
    }
}
