//! # CLI Configuration
//!
//! Optional YAML file passed with `--config`:
//!
//! ```yaml
//! tariffs: tables/tariffs-2025.yaml
//! exemptions: tables/exemptions.yaml
//! output: json
//! ```
//!
//! Relative paths resolve against the config file's directory. Command-line
//! flags override file values.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Output format for listing and calculation commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Contents of a config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Tariff table file.
    pub tariffs: Option<PathBuf>,
    /// Exemption table file.
    pub exemptions: Option<PathBuf>,
    /// Default output format.
    pub output: OutputFormat,
}

impl CliConfig {
    /// Read a config file, resolving relative table paths against its
    /// directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let mut config: CliConfig = serde_yaml::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        config.tariffs = config.tariffs.map(|p| resolve(&p, base));
        config.exemptions = config.exemptions.map(|p| resolve(&p, base));
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}

/// Effective settings after merging config file and flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    /// Tariff table file, if any.
    pub tariffs: Option<PathBuf>,
    /// Exemption table file, if any.
    pub exemptions: Option<PathBuf>,
    /// Output format.
    pub output: OutputFormat,
}

impl Settings {
    /// Merge flags over an optional config file.
    pub fn resolve(
        config: Option<CliConfig>,
        tariffs: Option<PathBuf>,
        exemptions: Option<PathBuf>,
        json: bool,
    ) -> Self {
        let config = config.unwrap_or_default();
        Self {
            tariffs: tariffs.or(config.tariffs),
            exemptions: exemptions.or(config.exemptions),
            output: if json { OutputFormat::Json } else { config.output },
        }
    }
}

fn resolve(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("courtfee.yaml");
        std::fs::write(&path, "tariffs: t.yaml\nexemptions: /abs/e.json\noutput: json\n").unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.tariffs, Some(dir.path().join("t.yaml")));
        assert_eq!(config.exemptions, Some(PathBuf::from("/abs/e.json")));
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn load_rejects_unknown_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("courtfee.yaml");
        std::fs::write(&path, "tarifs: typo.yaml\n").unwrap();
        assert!(CliConfig::load(&path).is_err());
    }

    #[test]
    fn empty_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("courtfee.yaml");
        std::fs::write(&path, "{}\n").unwrap();
        assert_eq!(CliConfig::load(&path).unwrap(), CliConfig::default());
    }

    #[test]
    fn flags_override_config() {
        let config = CliConfig {
            tariffs: Some(PathBuf::from("from-config.yaml")),
            exemptions: Some(PathBuf::from("e.yaml")),
            output: OutputFormat::Text,
        };
        let settings = Settings::resolve(
            Some(config),
            Some(PathBuf::from("from-flag.yaml")),
            None,
            true,
        );
        assert_eq!(settings.tariffs, Some(PathBuf::from("from-flag.yaml")));
        assert_eq!(settings.exemptions, Some(PathBuf::from("e.yaml")));
        assert_eq!(settings.output, OutputFormat::Json);
    }

    #[test]
    fn no_config_no_flags() {
        assert_eq!(Settings::resolve(None, None, None, false), Settings::default());
    }
}
