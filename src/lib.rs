// src/lib.rs
//! Binary module discovery: walks configured root directories, filters
//! candidate `.dll` files by literal substring patterns, reads each module's
//! declared name and version from its header, and returns the surviving
//! records sorted by name.
//!
//! ```no_run
//! use modscan_core::EngineBuilder;
//!
//! # fn main() -> anyhow::Result<()> {
//! let engine = EngineBuilder::new()
//!     .add_root_path("/usr/lib/app")
//!     .add_exclude_pattern("api-ms-win")
//!     .build()?;
//!
//! for module in engine.discover_modules() {
//!     println!("{module}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod metadata;
pub mod report;
pub mod scanner;
pub mod types;

pub use config::Configuration;
pub use engine::{Engine, EngineBuilder};
pub use error::{Result, ScanError};
pub use metadata::{MetadataReader, ModuleMetadata, PeHeaderReader};
pub use scanner::ModuleScanner;
pub use types::{ModuleInfo, ModuleVersion};
