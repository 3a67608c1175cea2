//! Helm Chart Generator Library
//!
//! Turns the Kubernetes manifests printed by the operator's build into a
//! packaged Helm chart whose namespace is chosen at install time.

pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod manifests;
pub mod options;
pub mod packaging;
pub mod process;
pub mod result;
pub mod utils;

pub use chart::ChartLayout;
pub use config::Config;
pub use error::{ChartGenError, ChartGenResult};
pub use manifests::ManifestGenerator;
pub use options::{ChartOptions, WebhookToggle};
pub use packaging::ChartPackager;
pub use process::{CommandOutput, CommandRunner, CommandSpec, SystemCommandRunner};
pub use result::RunSummary;

use anyhow::Result;
use chart_manifest::{split_documents, ManifestTransformer, TransformOutcome};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use utils::resolve_against;

/// Switches that change how much of the pipeline runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunFlags {
    /// Generate and transform only; leave the filesystem alone
    pub dry_run: bool,

    /// Assemble the chart without packaging it
    pub skip_package: bool,
}

/// Main application context that coordinates all components
pub struct ChartGen {
    layout: ChartLayout,
    /// Chart directory as handed to the packaging tool
    chart_dir: PathBuf,
    descriptor: PathBuf,
    generator: ManifestGenerator,
    transformer: ManifestTransformer,
    packager: ChartPackager,
}

impl ChartGen {
    /// Create a new ChartGen instance that runs real commands
    pub fn new(config: Config) -> Result<Self> {
        Self::with_runner(config, Arc::new(SystemCommandRunner))
    }

    /// Create a new ChartGen instance with a custom command runner
    pub fn with_runner(config: Config, runner: Arc<dyn CommandRunner>) -> Result<Self> {
        config.validate()?;

        let workdir = config.resolved_workdir()?;
        let chart_dir = utils::expand_path(&config.chart.output_dir)?;
        let descriptor = utils::expand_path(&config.chart.descriptor)?;

        let layout = ChartLayout::new(resolve_against(&workdir, &chart_dir));
        let descriptor = resolve_against(&workdir, &descriptor);
        layout.check_removable(&workdir, &descriptor)?;

        Ok(Self {
            layout,
            chart_dir,
            descriptor,
            generator: ManifestGenerator::new(config.generator, &workdir, runner.clone()),
            transformer: ManifestTransformer::new(config.rewrite),
            packager: ChartPackager::new(config.packaging, &workdir, runner),
        })
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    /// Generate manifests, write the chart and package it
    pub async fn run(&self, options: &ChartOptions, flags: RunFlags) -> ChartGenResult<RunSummary> {
        info!("Starting chart generation for version {}", options.version);

        let manifests = self.generator.generate(options).await?;
        let documents = split_documents(&manifests);

        let mut summary = RunSummary {
            chart_dir: self.layout.root().to_path_buf(),
            documents_seen: documents.len(),
            dry_run: flags.dry_run,
            ..RunSummary::default()
        };

        if !flags.dry_run {
            self.layout.prepare()?;
        }

        for (index, content) in documents.into_iter().enumerate() {
            match self.transformer.transform(index, content)? {
                TransformOutcome::Rendered(template) => {
                    let path = if flags.dry_run {
                        self.layout.template_path(&template)
                    } else {
                        self.layout.write_template(&template)?
                    };
                    if summary.templates.contains(&path) {
                        warn!("{} produced twice, keeping document {}", path.display(), index);
                    } else {
                        summary.templates.push(path);
                    }
                }
                TransformOutcome::Skipped { kind } => summary.skipped_kinds.push(kind),
                TransformOutcome::Blank => {}
            }
        }

        if flags.dry_run {
            if !self.descriptor.is_file() {
                return Err(ChartGenError::MissingChartDescriptor(self.descriptor.clone()));
            }
            info!("Dry run complete, {} templates planned", summary.templates.len());
            return Ok(summary);
        }

        summary.templates = self.layout.template_files();
        self.layout.install_descriptor(&self.descriptor)?;

        if flags.skip_package {
            info!("Skipping packaging of {:?}", self.layout.root());
        } else {
            let output = self.packager.package(&self.chart_dir, &options.version).await?;
            summary.package_output = Some(output);
        }

        info!(
            "Chart generation complete: {} templates, {} documents skipped",
            summary.templates.len(),
            summary.skipped_kinds.len()
        );
        Ok(summary)
    }
}
