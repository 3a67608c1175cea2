//! Rewrite rules applied to every manifest document

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Rules controlling how generator manifests become chart templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteRules {
    /// Namespace baked into the manifests by the build tool
    pub source_namespace: String,

    /// Helm expression resolving to the release namespace at install time
    pub namespace_placeholder: String,

    /// Kinds that never become templates
    pub skipped_kinds: Vec<String>,

    /// Cluster-scoped kinds whose names get suffixed with the release namespace
    pub cluster_scoped_kinds: Vec<String>,
}

impl RewriteRules {
    pub fn is_skipped(&self, kind: &str) -> bool {
        self.skipped_kinds.iter().any(|k| k == kind)
    }

    pub fn is_cluster_scoped(&self, kind: &str) -> bool {
        self.cluster_scoped_kinds.iter().any(|k| k == kind)
    }

    /// Suffix appended to cluster-scoped resource names
    pub fn name_suffix(&self) -> String {
        format!("-{}", self.namespace_placeholder)
    }

    /// Check that the rules can produce a usable chart
    pub fn validate(&self) -> Result<()> {
        if self.source_namespace.trim().is_empty() {
            return Err(anyhow!("source_namespace cannot be empty"));
        }
        if self.namespace_placeholder.trim().is_empty() {
            return Err(anyhow!("namespace_placeholder cannot be empty"));
        }
        Ok(())
    }
}

impl Default for RewriteRules {
    fn default() -> Self {
        Self {
            source_namespace: "meridio-operator-system".to_string(),
            namespace_placeholder: "{{.Release.Namespace}}".to_string(),
            skipped_kinds: vec!["Namespace".to_string()],
            cluster_scoped_kinds: vec![
                "MutatingWebhookConfiguration".to_string(),
                "ValidatingWebhookConfiguration".to_string(),
            ],
        }
    }
}
