//! Command line interface

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use tracing::info;

use crate::options::{DEFAULT_IMAGE, DEFAULT_MUTATING, DEFAULT_VERSION};
use crate::{ChartGen, ChartOptions, RunFlags, RunSummary};

/// Main CLI application
pub struct CliApp;

impl CliApp {
    /// Create the CLI application
    pub fn app() -> Command {
        Command::new("helm-chart-gen")
            .about("Generate a Helm chart from the operator's Kubernetes manifests")
            // --version names the chart version
            .disable_version_flag(true)
            .arg(
                Arg::new("image")
                    .long("image")
                    .help("Operator image without tag")
                    .value_name("IMAGE")
                    .default_value(DEFAULT_IMAGE),
            )
            .arg(
                Arg::new("version")
                    .long("version")
                    .help("Chart version, must follow Semantic Versioning 2.0.0")
                    .value_name("VERSION")
                    .default_value(DEFAULT_VERSION),
            )
            .arg(
                Arg::new("mutating")
                    .long("mutating")
                    .help("Enable the mutating webhook (true or false)")
                    .value_name("BOOL")
                    .default_value(DEFAULT_MUTATING),
            )
            .arg(
                Arg::new("config")
                    .short('c')
                    .long("config")
                    .help("Configuration file path")
                    .value_name("FILE"),
            )
            .arg(
                Arg::new("output")
                    .short('o')
                    .long("output")
                    .help("Chart output directory")
                    .value_name("DIR"),
            )
            .arg(
                Arg::new("dry-run")
                    .long("dry-run")
                    .help("Show the templates that would be written without touching the disk")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("skip-package")
                    .long("skip-package")
                    .help("Assemble the chart but do not package it")
                    .action(ArgAction::SetTrue),
            )
    }

    /// Run the CLI application
    pub async fn run(matches: &ArgMatches) -> Result<()> {
        // Echo what was asked for before validation can fail
        println!("operator image: {}", utils::raw_value(matches, "image")?);
        println!("operator version: {}", utils::raw_value(matches, "version")?);
        println!("mutating webhook enabled: {}", utils::raw_value(matches, "mutating")?);

        let options = utils::chart_options(matches)?;

        let mut config = utils::load_config(matches)?;
        if let Some(output) = matches.get_one::<String>("output") {
            config.chart.output_dir = PathBuf::from(output);
        }

        let flags = RunFlags {
            dry_run: matches.get_flag("dry-run"),
            skip_package: matches.get_flag("skip-package"),
        };
        if flags.dry_run {
            info!("Dry run mode - no files will be written");
            println!("Dry run mode - no files will be written");
        }

        let app = ChartGen::new(config)?;
        let summary = app.run(&options, flags).await?;
        print_summary(&summary);

        Ok(())
    }
}

fn print_summary(summary: &RunSummary) {
    let verb = if summary.dry_run { "Would write" } else { "Wrote" };
    println!(
        "{} {} templates from {} documents to {}",
        verb,
        summary.templates.len(),
        summary.documents_seen,
        summary.chart_dir.display()
    );
    for path in &summary.templates {
        println!("  - {}", path.display());
    }
    if !summary.skipped_kinds.is_empty() {
        println!("Skipped: {}", summary.skipped_kinds.join(", "));
    }
    if let Some(output) = &summary.package_output {
        if !output.is_empty() {
            println!("{output}");
        }
    }
}

/// Common CLI utilities
pub mod utils {
    use super::*;
    use crate::Config;
    use anyhow::anyhow;

    /// Default configuration file names, searched in order
    pub const DEFAULT_CONFIG_FILES: [&str; 4] = [
        ".helm-chart-gen.yaml",
        ".helm-chart-gen.yml",
        "helm-chart-gen.yaml",
        "helm-chart-gen.yml",
    ];

    /// Option value as typed, before any validation
    pub fn raw_value<'a>(matches: &'a ArgMatches, id: &str) -> Result<&'a str> {
        matches
            .get_one::<String>(id)
            .map(String::as_str)
            .ok_or_else(|| anyhow!("Missing value for --{}", id))
    }

    /// Validate the chart options before anything runs
    pub fn chart_options(matches: &ArgMatches) -> Result<ChartOptions> {
        let options = ChartOptions::parse(
            raw_value(matches, "image")?,
            raw_value(matches, "version")?,
            raw_value(matches, "mutating")?,
        )?;
        Ok(options)
    }

    /// Get configuration file path from arguments or look for a default one
    pub fn get_config_path(matches: &ArgMatches) -> Option<PathBuf> {
        if let Some(config_path) = matches.get_one::<String>("config") {
            return Some(PathBuf::from(config_path));
        }

        DEFAULT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Load configuration from file, falling back to defaults when none exists
    pub fn load_config(matches: &ArgMatches) -> Result<Config> {
        match get_config_path(matches) {
            Some(path) => {
                info!("Loading configuration from {:?}", path);
                Config::from_file(&path)
                    .with_context(|| format!("Invalid configuration file {path:?}"))
            }
            None => Ok(Config::default()),
        }
    }
}
