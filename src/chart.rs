//! On-disk chart layout

use crate::error::{ChartGenError, ChartGenResult};
use crate::utils::{ensure_directory, find_yaml_files, normalize_path, remove_directory};
use chart_manifest::RenderedTemplate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const TEMPLATES_DIR: &str = "templates";
pub const DESCRIPTOR_FILE: &str = "Chart.yaml";

/// Chart root and its templates directory
#[derive(Debug, Clone)]
pub struct ChartLayout {
    root: PathBuf,
}

impl ChartLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.root.join(TEMPLATES_DIR)
    }

    pub fn template_path(&self, template: &RenderedTemplate) -> PathBuf {
        self.templates_dir().join(&template.file_name)
    }

    /// Refuse a chart root whose removal would take the working directory or
    /// the chart descriptor with it
    pub fn check_removable(&self, workdir: &Path, descriptor: &Path) -> ChartGenResult<()> {
        let root = normalize_path(&self.root)?;
        let workdir = normalize_path(workdir)?;
        let descriptor = normalize_path(descriptor)?;

        if workdir.starts_with(&root) {
            return Err(ChartGenError::Config(format!(
                "Chart output directory {} is the working directory {} or one of its parents",
                self.root.display(),
                workdir.display()
            )));
        }
        if descriptor.starts_with(&root) {
            return Err(ChartGenError::Config(format!(
                "Chart output directory {} contains the chart descriptor {}",
                self.root.display(),
                descriptor.display()
            )));
        }
        Ok(())
    }

    /// Remove any previous chart and recreate an empty templates directory
    pub fn prepare(&self) -> ChartGenResult<()> {
        if self.root.exists() {
            info!("Removing previous chart at {:?}", self.root);
            remove_directory(&self.root)?;
        }
        ensure_directory(&self.templates_dir())?;
        Ok(())
    }

    /// Write one template, returning its path
    pub fn write_template(&self, template: &RenderedTemplate) -> ChartGenResult<PathBuf> {
        let path = self.template_path(template);
        fs::write(&path, &template.content)?;
        debug!("Wrote {:?}", path);
        Ok(path)
    }

    /// Copy the chart descriptor into the chart root
    pub fn install_descriptor(&self, descriptor: &Path) -> ChartGenResult<PathBuf> {
        if !descriptor.is_file() {
            return Err(ChartGenError::MissingChartDescriptor(
                descriptor.to_path_buf(),
            ));
        }

        let target = self.root.join(DESCRIPTOR_FILE);
        fs::copy(descriptor, &target)?;
        info!("Copied {:?} to {:?}", descriptor, target);
        Ok(target)
    }

    /// Template files currently on disk
    pub fn template_files(&self) -> Vec<PathBuf> {
        find_yaml_files(&self.templates_dir())
    }
}
