//! Per-run chart options supplied on the command line

use crate::error::{ChartGenError, ChartGenResult};
use semver::Version;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_IMAGE: &str = "controller";
pub const DEFAULT_VERSION: &str = "0.0.1";
pub const DEFAULT_MUTATING: &str = "false";

/// Whether the operator's mutating webhook is rendered into the manifests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WebhookToggle {
    Enabled,
    #[default]
    Disabled,
}

impl WebhookToggle {
    /// Value handed to the manifest generator
    pub fn as_str(&self) -> &'static str {
        match self {
            WebhookToggle::Enabled => "true",
            WebhookToggle::Disabled => "false",
        }
    }
}

impl FromStr for WebhookToggle {
    type Err = ChartGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "true" => Ok(WebhookToggle::Enabled),
            "false" => Ok(WebhookToggle::Disabled),
            other => Err(ChartGenError::InvalidWebhookToggle(other.to_string())),
        }
    }
}

impl fmt::Display for WebhookToggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated options for one chart generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartOptions {
    /// Operator image reference without tag
    pub image: String,

    /// Chart version, also used as the image tag
    pub version: Version,

    pub mutating: WebhookToggle,
}

impl ChartOptions {
    /// Validate raw option values. Nothing is checked on the image reference.
    pub fn parse(image: &str, version: &str, mutating: &str) -> ChartGenResult<Self> {
        let version = parse_chart_version(version)?;
        let mutating: WebhookToggle = mutating.parse()?;

        Ok(Self {
            image: image.to_string(),
            version,
            mutating,
        })
    }

    /// Full image reference passed to the manifest generator
    pub fn image_reference(&self) -> String {
        format!("{}:{}", self.image, self.version)
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            image: DEFAULT_IMAGE.to_string(),
            version: Version::new(0, 0, 1),
            mutating: WebhookToggle::Disabled,
        }
    }
}

/// Parse a chart version as Semantic Versioning 2.0.0
pub fn parse_chart_version(version: &str) -> ChartGenResult<Version> {
    Version::parse(version).map_err(|source| ChartGenError::InvalidVersion {
        version: version.to_string(),
        source,
    })
}
