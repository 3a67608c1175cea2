//! Rewriting manifest documents into chart templates

use crate::document::ManifestDocument;
use crate::error::{ManifestError, ManifestResult};
use crate::rules::RewriteRules;
use serde_yaml::Value;
use tracing::{debug, info};

/// Sections of a cluster-scoped resource whose entries may name the resource itself
const SELF_REFERENCE_SECTIONS: [&str; 2] = ["webhooks", "subjects"];

/// A manifest document ready to be written into the chart's templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTemplate {
    pub kind: String,
    pub name: String,
    pub file_name: String,
    pub content: String,
}

/// What became of one split document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformOutcome {
    Rendered(RenderedTemplate),
    Skipped { kind: String },
    Blank,
}

pub struct ManifestTransformer {
    rules: RewriteRules,
}

impl ManifestTransformer {
    pub fn new(rules: RewriteRules) -> Self {
        Self { rules }
    }

    /// Transform the document at `index` of the generator output
    pub fn transform(&self, index: usize, content: &str) -> ManifestResult<TransformOutcome> {
        if ManifestDocument::is_blank(content) {
            debug!("Document {} is blank, skipping", index);
            return Ok(TransformOutcome::Blank);
        }

        let mut document = ManifestDocument::parse(index, content)?;
        if self.rules.is_skipped(&document.kind) {
            info!("Skipping {} document {}", document.kind, index);
            return Ok(TransformOutcome::Skipped {
                kind: document.kind,
            });
        }

        let name = document.resolve_name()?.to_string();
        let kind = document.kind.clone();

        let body = if self.rules.is_cluster_scoped(&kind) {
            self.suffix_resource_name(&kind, &name, content)?
        } else {
            content.to_string()
        };
        let body = body.replace(
            &self.rules.source_namespace,
            &self.rules.namespace_placeholder,
        );

        let file_name = format!("{kind}-{name}.yaml");
        debug!("Rendered {} from document {}", file_name, index);

        Ok(TransformOutcome::Rendered(RenderedTemplate {
            kind,
            name,
            file_name,
            content: format!("---\n{body}"),
        }))
    }

    /// Suffix `metadata.name` and matching self-references with the release namespace.
    ///
    /// Only `metadata.name` and `name` entries under [`SELF_REFERENCE_SECTIONS`]
    /// equal to the original name are touched.
    fn suffix_resource_name(&self, kind: &str, name: &str, content: &str) -> ManifestResult<String> {
        let invalid_yaml = |source| ManifestError::InvalidYaml {
            kind: kind.to_string(),
            name: name.to_string(),
            source,
        };

        let mut value: Value = serde_yaml::from_str(content).map_err(invalid_yaml)?;
        let suffix = self.rules.name_suffix();

        let metadata_name = value
            .get_mut("metadata")
            .and_then(|metadata| metadata.get_mut("name"))
            .ok_or_else(|| ManifestError::MissingMetadataName {
                kind: kind.to_string(),
                name: name.to_string(),
            })?;
        let original = metadata_name
            .as_str()
            .ok_or_else(|| ManifestError::MissingMetadataName {
                kind: kind.to_string(),
                name: name.to_string(),
            })?
            .to_string();
        let renamed = format!("{original}{suffix}");
        *metadata_name = Value::String(renamed.clone());

        for section in SELF_REFERENCE_SECTIONS {
            if let Some(Value::Sequence(entries)) = value.get_mut(section) {
                for entry in entries.iter_mut() {
                    if let Some(entry_name) = entry.get_mut("name") {
                        if entry_name.as_str() == Some(original.as_str()) {
                            *entry_name = Value::String(renamed.clone());
                        }
                    }
                }
            }
        }

        info!("Renamed cluster-scoped {} {} to {}", kind, original, renamed);
        serde_yaml::to_string(&value).map_err(invalid_yaml)
    }
}
