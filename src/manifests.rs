//! Manifest generator invocation

use crate::config::GeneratorConfig;
use crate::error::ChartGenResult;
use crate::options::ChartOptions;
use crate::process::{CommandRunner, CommandSpec};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Runs the build target that prints the operator manifests
pub struct ManifestGenerator {
    config: GeneratorConfig,
    workdir: PathBuf,
    runner: Arc<dyn CommandRunner>,
}

impl ManifestGenerator {
    pub fn new(config: GeneratorConfig, workdir: &Path, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            config,
            workdir: workdir.to_path_buf(),
            runner,
        }
    }

    /// Command line for the given options
    pub fn command(&self, options: &ChartOptions) -> CommandSpec {
        CommandSpec::new(&self.config.program, &self.workdir)
            .args(self.config.args.iter().cloned())
            .arg(format!(
                "{}={}",
                self.config.image_variable,
                options.image_reference()
            ))
            .arg(format!(
                "{}={}",
                self.config.webhook_variable, options.mutating
            ))
    }

    /// Run the generator and return its standard output
    pub async fn generate(&self, options: &ChartOptions) -> ChartGenResult<String> {
        let spec = self.command(options);
        info!("Generating manifests with `{}`", spec);

        let output = self.runner.run(&spec).await?.check(&spec)?;
        let manifests = output.stdout_utf8(&spec)?;
        info!("Generator produced {} bytes of manifests", manifests.len());
        Ok(manifests)
    }
}
