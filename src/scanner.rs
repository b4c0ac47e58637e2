// src/scanner.rs
//! Walks the configured roots and collects module records.

use crate::config::Configuration;
use crate::metadata::{MetadataReader, PeHeaderReader};
use crate::types::ModuleInfo;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extension that marks a candidate module (matched case-insensitively).
pub const MODULE_EXTENSION: &str = "dll";

/// Recursively scans the configured roots for binary modules.
///
/// Per-file and per-directory failures are swallowed: a corrupt or
/// inaccessible module never aborts a scan, it is simply absent from the
/// result. Two scans over an unchanged filesystem produce identical output.
pub struct ModuleScanner {
    config: Configuration,
    reader: Box<dyn MetadataReader>,
}

impl ModuleScanner {
    #[must_use]
    pub fn new(config: Configuration) -> Self {
        Self::with_reader(config, Box::new(PeHeaderReader::new()))
    }

    /// Builds a scanner with a substitute header reader (used by tests and
    /// callers targeting other module formats).
    #[must_use]
    pub fn with_reader(config: Configuration, reader: Box<dyn MetadataReader>) -> Self {
        Self { config, reader }
    }

    /// Runs one scan: walk every root in configured order, filter, read
    /// headers, and return the surviving records sorted by name.
    ///
    /// Never fails; a missing root or an unreadable file contributes nothing.
    #[must_use]
    pub fn scan(&self) -> Vec<ModuleInfo> {
        let mut modules = Vec::new();

        for root in &self.config.root_paths {
            if !root.is_dir() {
                continue;
            }
            for candidate in collect_candidates(root) {
                if self.is_excluded(&candidate) {
                    continue;
                }
                if let Some(info) = self.read_module(&candidate) {
                    modules.push(info);
                }
            }
        }

        // Stable sort: ties keep discovery order.
        modules.sort_by(|a, b| a.name.cmp(&b.name));
        modules
    }

    /// Literal substring match on the full path, checked before the file is
    /// ever opened.
    fn is_excluded(&self, path: &Path) -> bool {
        let s = path.to_string_lossy();
        self.config
            .exclude_patterns
            .iter()
            .any(|pattern| s.contains(pattern.as_str()))
    }

    /// Attempts one header read; `None` means the file is skipped.
    fn read_module(&self, path: &Path) -> Option<ModuleInfo> {
        let metadata = self.reader.read_header(path).ok()?;

        let name = metadata
            .name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| file_stem(path));
        let version = metadata.version.unwrap_or_default();

        Some(ModuleInfo::new(name, path.to_path_buf(), version))
    }
}

/// Enumerates `*.dll` files under `root` at any depth, in walk order.
/// Unreadable directory entries are dropped.
fn collect_candidates(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| has_module_extension(path))
        .collect()
}

fn has_module_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(MODULE_EXTENSION))
}

/// Base name without extension; fallback module name for anonymous headers.
fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
