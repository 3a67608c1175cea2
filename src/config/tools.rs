//! External tool configuration

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Build command that prints the operator manifests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub program: String,

    /// Arguments placed before the build parameters
    pub args: Vec<String>,

    /// Build parameter receiving `<image>:<version>`
    pub image_variable: String,

    /// Build parameter receiving the mutating webhook toggle
    pub webhook_variable: String,
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.program.trim().is_empty() {
            return Err(anyhow!("Generator program cannot be empty"));
        }
        if self.image_variable.trim().is_empty() || self.webhook_variable.trim().is_empty() {
            return Err(anyhow!("Generator build variables cannot be empty"));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            program: "make".to_string(),
            // -s keeps make from echoing recipes into the captured output
            args: vec!["-s".to_string(), "print-manifests".to_string()],
            image_variable: "IMG".to_string(),
            webhook_variable: "ENABLE_MUTATING_WEBHOOK".to_string(),
        }
    }
}

/// Tool that packages the assembled chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackagingConfig {
    pub program: String,
}

impl PackagingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.program.trim().is_empty() {
            return Err(anyhow!("Packaging program cannot be empty"));
        }
        Ok(())
    }
}

impl Default for PackagingConfig {
    fn default() -> Self {
        Self {
            program: "helm".to_string(),
        }
    }
}
