//! Chart packaging invocation

use crate::config::PackagingConfig;
use crate::error::ChartGenResult;
use crate::process::{CommandRunner, CommandSpec};
use semver::Version;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Packages an assembled chart directory into an archive
pub struct ChartPackager {
    config: PackagingConfig,
    workdir: PathBuf,
    runner: Arc<dyn CommandRunner>,
}

impl ChartPackager {
    pub fn new(config: PackagingConfig, workdir: &Path, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            config,
            workdir: workdir.to_path_buf(),
            runner,
        }
    }

    /// `helm package <chart-dir> --version <version>`
    pub fn command(&self, chart_dir: &Path, version: &Version) -> CommandSpec {
        CommandSpec::new(&self.config.program, &self.workdir)
            .arg("package")
            .arg(chart_dir.to_string_lossy())
            .arg("--version")
            .arg(version.to_string())
    }

    /// Package the chart, returning what the tool printed
    pub async fn package(&self, chart_dir: &Path, version: &Version) -> ChartGenResult<String> {
        let spec = self.command(chart_dir, version);
        info!("Packaging chart with `{}`", spec);

        let output = self.runner.run(&spec).await?.check(&spec)?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
