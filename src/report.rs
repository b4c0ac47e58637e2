// src/report.rs
//! Renders scan results for terminal and machine consumption.

use crate::types::ModuleInfo;
use anyhow::Result;
use colored::Colorize;
use std::fmt::Write;

/// Human-oriented listing: a count line followed by one bullet per module.
#[must_use]
pub fn render_text(modules: &[ModuleInfo]) -> String {
    let mut out = String::new();

    let count = format!("Found {} modules", modules.len());
    let _ = writeln!(out, "{}", count.bold());

    for module in modules {
        let _ = writeln!(
            out,
            "  {} {} {} ({})",
            "•".cyan(),
            module.name.green(),
            format!("v{}", module.version).yellow(),
            module.path.display()
        );
    }

    out
}

/// Pretty JSON array of module records, order preserved.
///
/// # Errors
/// Returns error if serialization fails.
pub fn render_json(modules: &[ModuleInfo]) -> Result<String> {
    Ok(serde_json::to_string_pretty(modules)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ModuleVersion;
    use std::path::PathBuf;

    fn sample() -> Vec<ModuleInfo> {
        vec![
            ModuleInfo::new(
                "Alpha".to_string(),
                PathBuf::from("/lib/a.dll"),
                ModuleVersion::new(1, 2, 0, 0),
            ),
            ModuleInfo::new(
                "Zeta".to_string(),
                PathBuf::from("/lib/zeta.dll"),
                ModuleVersion::new(0, 1, 0, 0),
            ),
        ]
    }

    #[test]
    fn test_text_includes_every_name_and_version() {
        colored::control::set_override(false);
        let text = render_text(&sample());
        assert!(text.contains("Found 2 modules"));
        assert!(text.contains("Alpha"));
        assert!(text.contains("v1.2.0.0"));
        assert!(text.contains("Zeta"));
        assert!(text.contains("v0.1.0.0"));
    }

    #[test]
    fn test_text_for_empty_scan() {
        colored::control::set_override(false);
        let text = render_text(&[]);
        assert!(text.contains("Found 0 modules"));
    }

    #[test]
    fn test_json_parses_and_preserves_order() {
        let json = render_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["name"], "Alpha");
        assert_eq!(entries[0]["version"], "1.2.0.0");
        assert_eq!(entries[1]["name"], "Zeta");
    }
}
