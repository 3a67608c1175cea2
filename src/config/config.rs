//! Main configuration structure and implementation

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{ChartConfig, GeneratorConfig, PackagingConfig, RewriteRules};
use crate::utils::expand_path;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Directory commands run in and relative paths resolve against
    #[serde(default = "default_workdir")]
    pub workdir: PathBuf,

    /// Manifest generator invocation
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Chart layout
    #[serde(default)]
    pub chart: ChartConfig,

    /// Manifest rewrite rules
    #[serde(default)]
    pub rewrite: RewriteRules,

    /// Chart packaging invocation
    #[serde(default)]
    pub packaging: PackagingConfig,
}

fn default_workdir() -> PathBuf {
    PathBuf::from(".")
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read configuration {:?}: {}", path, e))?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.version != "1.0" {
            return Err(anyhow!(
                "Unsupported configuration version: {}",
                self.version
            ));
        }

        if self.workdir.as_os_str().is_empty() {
            return Err(anyhow!("workdir cannot be empty"));
        }

        self.generator.validate()?;
        self.chart.validate()?;
        self.rewrite.validate()?;
        self.packaging.validate()?;

        Ok(())
    }

    /// Working directory with `~` and environment variables expanded
    pub fn resolved_workdir(&self) -> Result<PathBuf> {
        expand_path(&self.workdir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            workdir: default_workdir(),
            generator: GeneratorConfig::default(),
            chart: ChartConfig::default(),
            rewrite: RewriteRules::default(),
            packaging: PackagingConfig::default(),
        }
    }
}
