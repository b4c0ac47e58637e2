// src/engine.rs
//! Discovery engine and its fluent builder.

use crate::config::Configuration;
use crate::error::{Result, ScanError};
use crate::metadata::MetadataReader;
use crate::scanner::ModuleScanner;
use crate::types::ModuleInfo;

/// Stable façade over module discovery. Owns its configuration and scanner;
/// holds no cross-call state, so repeated discovery calls are independent.
pub struct Engine {
    config: Configuration,
    scanner: ModuleScanner,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Engine {
    fn new(config: Configuration, scanner: ModuleScanner) -> Self {
        Self { config, scanner }
    }

    /// Runs one scan over the configured roots. Never fails: missing roots
    /// and unreadable modules simply contribute nothing.
    #[must_use]
    pub fn discover_modules(&self) -> Vec<ModuleInfo> {
        self.scanner.scan()
    }

    #[must_use]
    pub fn config(&self) -> &Configuration {
        &self.config
    }
}

/// Accumulates scan settings, then validates and produces an [`Engine`].
///
/// Single-use: `build()` consumes the builder. The engine takes exclusive
/// ownership of the accumulated configuration snapshot.
#[derive(Default)]
pub struct EngineBuilder {
    config: Configuration,
    reader: Option<Box<dyn MetadataReader>>,
}

impl EngineBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a root directory to scan.
    #[must_use]
    pub fn add_root_path(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.config.root_paths.push(path.into());
        self
    }

    /// Appends a literal exclusion substring.
    #[must_use]
    pub fn add_exclude_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.exclude_patterns.push(pattern.into());
        self
    }

    /// Substitutes the header reader (default: the PE reader).
    #[must_use]
    pub fn with_reader(mut self, reader: Box<dyn MetadataReader>) -> Self {
        self.reader = Some(reader);
        self
    }

    /// Validates the accumulated configuration and builds the engine.
    ///
    /// # Errors
    /// Returns [`ScanError::NoRootPaths`] when no root path was configured.
    pub fn build(self) -> Result<Engine> {
        if self.config.root_paths.is_empty() {
            return Err(ScanError::NoRootPaths);
        }

        let scanner = match self.reader {
            Some(reader) => ModuleScanner::with_reader(self.config.clone(), reader),
            None => ModuleScanner::new(self.config.clone()),
        };
        Ok(Engine::new(self.config, scanner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_without_roots_fails() {
        let err = EngineBuilder::new().build().unwrap_err();
        assert!(matches!(err, ScanError::NoRootPaths));
    }

    #[test]
    fn test_exclude_patterns_alone_do_not_satisfy_build() {
        let err = EngineBuilder::new()
            .add_exclude_pattern("vendor")
            .build()
            .unwrap_err();
        assert!(matches!(err, ScanError::NoRootPaths));
    }

    #[test]
    fn test_build_with_root_succeeds() {
        let engine = EngineBuilder::new().add_root_path("/lib").build().unwrap();
        assert_eq!(engine.config().root_paths.len(), 1);
    }

    #[test]
    fn test_fluent_chain_preserves_order() {
        let engine = EngineBuilder::new()
            .add_root_path("/first")
            .add_root_path("/second")
            .add_exclude_pattern("one")
            .add_exclude_pattern("two")
            .build()
            .unwrap();

        let config = engine.config();
        assert_eq!(config.root_paths[0].to_str(), Some("/first"));
        assert_eq!(config.root_paths[1].to_str(), Some("/second"));
        assert_eq!(config.exclude_patterns, vec!["one", "two"]);
    }

    #[test]
    fn test_discover_on_missing_root_returns_empty() {
        let engine = EngineBuilder::new()
            .add_root_path("/definitely/not/a/real/dir")
            .build()
            .unwrap();
        assert!(engine.discover_modules().is_empty());
    }
}
