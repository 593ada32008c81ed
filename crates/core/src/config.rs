//! Report configuration.
//!
//! An optional JSON or YAML file supplies defaults for a run; command-line
//! flags override it and built-in defaults fill whatever is left.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::chart::DEFAULT_DEPTH;
use crate::gedcom::ParentLinkPolicy;
use crate::report::ReportFormat;

/// Default directory for generated reports.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Serializable run configuration; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<ReportFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
    /// Name of the individual to use as chart root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_links: Option<ParentLinkPolicy>,
}

impl ReportConfig {
    /// Field-wise overlay: values set in `other` win.
    pub fn overlay(self, other: ReportConfig) -> ReportConfig {
        ReportConfig {
            output_dir: other.output_dir.or(self.output_dir),
            format: other.format.or(self.format),
            depth: other.depth.or(self.depth),
            root_name: other.root_name.or(self.root_name),
            parent_links: other.parent_links.or(self.parent_links),
        }
    }

    /// Fill unset fields with built-in defaults.
    pub fn resolve(self) -> Settings {
        Settings {
            output_dir: self.output_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            format: self.format.unwrap_or_default(),
            depth: self.depth.unwrap_or(DEFAULT_DEPTH),
            root_name: self.root_name,
            parent_links: self.parent_links.unwrap_or_default(),
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub output_dir: PathBuf,
    pub format: ReportFormat,
    pub depth: u32,
    pub root_name: Option<String>,
    pub parent_links: ParentLinkPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        ReportConfig::default().resolve()
    }
}

/// Load a config file, picking the parser from the extension (json/yaml/yml).
pub fn load_report_config(path: &Path) -> Result<ReportConfig> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config at {}", path.display()))?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    let config: ReportConfig = match ext {
        "json" => serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse config JSON at {}", path.display()))?,
        "yaml" | "yml" => serde_yaml::from_str(&body)
            .with_context(|| format!("Failed to parse config YAML at {}", path.display()))?,
        other => {
            return Err(anyhow!(
                "Unsupported config extension '{}' for {}. Allowed: json, yaml, yml",
                other,
                path.display()
            ))
        }
    };
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_fills_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.output_dir, PathBuf::from("output"));
        assert_eq!(settings.format, ReportFormat::Markdown);
        assert_eq!(settings.depth, 4);
        assert_eq!(settings.root_name, None);
        assert_eq!(settings.parent_links, ParentLinkPolicy::LastWins);
    }

    #[test]
    fn overlay_prefers_later_values() {
        let file = ReportConfig {
            format: Some(ReportFormat::Word),
            depth: Some(5),
            root_name: Some("Kari".into()),
            ..ReportConfig::default()
        };
        let flags = ReportConfig { depth: Some(3), ..ReportConfig::default() };

        let merged = file.overlay(flags).resolve();
        assert_eq!(merged.format, ReportFormat::Word);
        assert_eq!(merged.depth, 3);
        assert_eq!(merged.root_name.as_deref(), Some("Kari"));
    }
}
