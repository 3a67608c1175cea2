//! Chart layout configuration

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the chart is assembled and what goes into it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Chart root, removed and recreated on every run
    pub output_dir: PathBuf,

    /// Chart descriptor copied into the chart root
    pub descriptor: PathBuf,
}

impl ChartConfig {
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(anyhow!("Chart output directory cannot be empty"));
        }
        if self.descriptor.as_os_str().is_empty() {
            return Err(anyhow!("Chart descriptor path cannot be empty"));
        }
        Ok(())
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("helm"),
            descriptor: PathBuf::from("hack/Chart.yaml"),
        }
    }
}
