// src/metadata.rs
//! Module header readers.
//!
//! The scanner only cares about two fields per file: a declared name and a
//! declared version. Readers are an injected capability so the scan logic is
//! testable without real binary modules on disk.

use crate::error::{Result, ScanError};
use crate::types::ModuleVersion;
use std::fs;
use std::path::Path;

/// Raw result of one header read, before defaulting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleMetadata {
    pub name: Option<String>,
    pub version: Option<ModuleVersion>,
}

/// Extracts declared name/version metadata from a module file's header.
///
/// Contract: any failure (I/O, malformed file, wrong format despite the
/// extension) is an `Err`; the scan loop treats that as "skip this file".
pub trait MetadataReader {
    /// Reads the header of the module at `path`.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not a valid module.
    fn read_header(&self, path: &Path) -> Result<ModuleMetadata>;
}

/// Production reader for PE images (.dll).
///
/// Name comes from the export table's DLL name; version from the optional
/// header's image version. Neither is mandatory in a valid image, so both
/// are optional in the result.
#[derive(Debug, Default)]
pub struct PeHeaderReader;

impl PeHeaderReader {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MetadataReader for PeHeaderReader {
    fn read_header(&self, path: &Path) -> Result<ModuleMetadata> {
        let data = fs::read(path).map_err(|source| ScanError::Io {
            source,
            path: path.to_path_buf(),
        })?;

        let pe = goblin::pe::PE::parse(&data).map_err(|e| ScanError::Malformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let name = pe.name.map(trim_dll_suffix).map(str::to_string);
        let version = pe.header.optional_header.map(|opt| {
            ModuleVersion::new(
                u32::from(opt.windows_fields.major_image_version),
                u32::from(opt.windows_fields.minor_image_version),
                0,
                0,
            )
        });

        Ok(ModuleMetadata { name, version })
    }
}

/// Export-table names usually carry the extension ("Alpha.dll"); declared
/// module names do not.
fn trim_dll_suffix(name: &str) -> &str {
    let lower = name.to_ascii_lowercase();
    if lower.ends_with(".dll") {
        &name[..name.len() - 4]
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_trim_dll_suffix() {
        assert_eq!(trim_dll_suffix("Alpha.dll"), "Alpha");
        assert_eq!(trim_dll_suffix("Alpha.DLL"), "Alpha");
        assert_eq!(trim_dll_suffix("Alpha"), "Alpha");
        assert_eq!(trim_dll_suffix("dll"), "dll");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let reader = PeHeaderReader::new();
        let err = reader.read_header(Path::new("/nonexistent/x.dll")).unwrap_err();
        assert!(matches!(err, ScanError::Io { .. }));
    }

    #[test]
    fn test_empty_file_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.dll");
        fs::write(&path, b"").unwrap();

        let reader = PeHeaderReader::new();
        let err = reader.read_header(&path).unwrap_err();
        assert!(matches!(err, ScanError::Malformed { .. }));
    }

    #[test]
    fn test_garbage_file_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("garbage.dll");
        fs::write(&path, b"this is definitely not a portable executable").unwrap();

        let reader = PeHeaderReader::new();
        assert!(reader.read_header(&path).is_err());
    }

    #[test]
    fn test_truncated_header_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("truncated.dll");
        // Valid DOS magic, nothing else.
        fs::write(&path, b"MZ").unwrap();

        let reader = PeHeaderReader::new();
        assert!(reader.read_header(&path).is_err());
    }
}
