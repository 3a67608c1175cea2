//! Splitting generator output into manifest documents

use crate::error::{ManifestError, ManifestResult};
use regex::Regex;
use std::sync::LazyLock;

/// Separator between documents in the generator's output
pub const DOCUMENT_SEPARATOR: &str = "\n---\n";

static KIND_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^kind: (\S+)").expect("valid kind pattern"));

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^  name: (\S+)").expect("valid name pattern"));

/// Split multi-document output on the literal separator.
///
/// Pieces are returned untouched, so joining them with
/// [`DOCUMENT_SEPARATOR`] gives back the input. A separator inside a
/// document body (e.g. a block scalar) will fragment that document.
pub fn split_documents(output: &str) -> Vec<&str> {
    output.split(DOCUMENT_SEPARATOR).collect()
}

/// A single manifest document with its extracted identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestDocument<'a> {
    /// Position in the generator output, starting at zero
    pub index: usize,

    /// First token after a `kind: ` line
    pub kind: String,

    /// First token after a `  name: ` line, `None` until looked up
    name: Option<String>,

    /// Raw document text
    pub content: &'a str,
}

impl<'a> ManifestDocument<'a> {
    /// Parse a document, extracting its kind.
    ///
    /// The name is extracted separately by [`ManifestDocument::resolve_name`]
    /// so documents of skipped kinds never need one.
    pub fn parse(index: usize, content: &'a str) -> ManifestResult<Self> {
        let kind = first_capture(&KIND_REGEX, content)
            .ok_or(ManifestError::MissingKind { index })?;

        Ok(Self {
            index,
            kind: kind.to_string(),
            name: None,
            content,
        })
    }

    /// Look up the resource name, failing if the document carries none
    pub fn resolve_name(&mut self) -> ManifestResult<&str> {
        if self.name.is_none() {
            let name = first_capture(&NAME_REGEX, self.content).ok_or_else(|| {
                ManifestError::MissingName {
                    index: self.index,
                    kind: self.kind.clone(),
                }
            })?;
            self.name = Some(name.to_string());
        }

        Ok(self.name.as_deref().unwrap_or_default())
    }

    /// Whether the document holds nothing but whitespace
    pub fn is_blank(content: &str) -> bool {
        content.trim().is_empty()
    }
}

fn first_capture<'t>(regex: &Regex, text: &'t str) -> Option<&'t str> {
    regex
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
