//! Result types for a chart generation run

use std::path::PathBuf;

/// Outcome of one run
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Chart root directory
    pub chart_dir: PathBuf,

    /// Templates written, or planned in a dry run
    pub templates: Vec<PathBuf>,

    /// Kinds of the documents that were left out of the chart
    pub skipped_kinds: Vec<String>,

    /// Number of documents in the generator output, blank ones included
    pub documents_seen: usize,

    /// Output of the packaging tool, `None` when packaging did not run
    pub package_output: Option<String>,

    pub dry_run: bool,
}

impl RunSummary {
    pub fn packaged(&self) -> bool {
        self.package_output.is_some()
    }
}
