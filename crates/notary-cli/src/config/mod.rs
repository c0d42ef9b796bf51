//! Configuration management.

use anyhow::{Context as _, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "NOTARY_QUERY_CONFIG";

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Notary zone to query under.
    pub domain: Option<String>,

    /// Nameservers to use instead of the system resolver.
    #[serde(default)]
    pub nameservers: Vec<IpAddr>,

    /// Default output format.
    pub output_format: Option<OutputFormat>,

    /// Always show explanations (as if --explain was passed).
    #[serde(default)]
    pub explain_by_default: bool,
}

impl Config {
    /// Get the config file path.
    pub fn path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let dirs = ProjectDirs::from("edu", "icsi", "notary-query")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        Ok(())
    }

    /// Set a key from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "domain" => {
                let value = value.trim().trim_end_matches('.');
                self.domain = (!value.is_empty()).then(|| value.to_string());
            }
            "nameservers" | "nameserver" => {
                self.nameservers = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(|s| {
                        s.parse()
                            .with_context(|| format!("invalid nameserver address: {s}"))
                    })
                    .collect::<Result<_>>()?;
            }
            "output_format" | "output" => {
                self.output_format = Some(value.parse()?);
            }
            "explain_by_default" | "explain" => {
                self.explain_by_default = value
                    .parse()
                    .with_context(|| format!("expected true or false, got {value}"))?;
            }
            _ => {
                anyhow::bail!(
                    "Unknown config key: {}\n\n\
                     Available keys:\n  \
                     domain             - Notary zone to query under\n  \
                     nameservers        - Comma-separated nameserver IPs (empty for system resolver)\n  \
                     output_format      - Default output format (pretty/json/csv/yaml)\n  \
                     explain_by_default - Always explain commands (true/false)",
                    key
                );
            }
        }
        Ok(())
    }
}
