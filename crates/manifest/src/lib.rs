//! Manifest document handling for Helm chart generation
//!
//! Splits multi-document generator output, extracts resource identity and
//! rewrites documents into chart templates.

pub mod document;
pub mod error;
pub mod rules;
pub mod transform;

pub use document::{split_documents, ManifestDocument, DOCUMENT_SEPARATOR};
pub use error::{ManifestError, ManifestResult};
pub use rules::RewriteRules;
pub use transform::{ManifestTransformer, RenderedTemplate, TransformOutcome};
