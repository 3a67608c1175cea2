//! Error types for manifest processing

/// Errors raised while turning a manifest document into a chart template
#[derive(thiserror::Error, Debug)]
pub enum ManifestError {
    #[error("document {index}: no `kind:` line found")]
    MissingKind { index: usize },

    #[error("document {index} ({kind}): no `  name:` line found")]
    MissingName { index: usize, kind: String },

    #[error("{kind}/{name}: document is not valid YAML: {source}")]
    InvalidYaml {
        kind: String,
        name: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{kind}/{name}: document has no metadata.name field")]
    MissingMetadataName { kind: String, name: String },
}

pub type ManifestResult<T> = Result<T, ManifestError>;
