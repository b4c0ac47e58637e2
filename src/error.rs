// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("at least one root path must be configured")]
    NoRootPaths,

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Malformed module header: {reason} (path: {path})")]
    Malformed { path: PathBuf, reason: String },

    #[error("Invalid config file: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ScanError>;

// Allow `?` on std::io::Error by converting to ScanError::Io with unknown path.
impl From<std::io::Error> for ScanError {
    fn from(source: std::io::Error) -> Self {
        ScanError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
