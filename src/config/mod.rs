//! Scan configuration: YAML file with defaults for unattended use.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Scan settings loaded from a YAML file. Everything here can also be set
/// on the command line; the file exists so helpdesk machines can run the
/// same scheduled scan without a long argument list.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ScanConfig {
    pub version: String,
    pub description: String,

    /// Targets scanned when none are given on the command line
    #[serde(default)]
    pub targets: Vec<String>,

    /// Query Active Directory for local-mode targets
    #[serde(default)]
    pub include_directory: bool,

    /// Directory where per-host JSON results are written
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            version: "1.0".to_string(),
            description: "Computer inventory scan".to_string(),
            targets: Vec::new(),
            include_directory: false,
            output_dir: None,
        }
    }
}

impl ScanConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: ScanConfig =
            serde_yaml::from_str(&content).context("Failed to parse YAML config")?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save_to_yaml_file(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self).context("Failed to serialize config to YAML")?;

        fs::write(path, yaml).context(format!("Failed to write config to {}", path.display()))?;

        info!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Create a default configuration file
    pub fn create_default_config_file(path: &Path) -> Result<()> {
        ScanConfig::default().save_to_yaml_file(path)
    }
}
