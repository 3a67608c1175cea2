//! Configuration tests

use super::*;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let yaml = serde_yaml::to_string(&config).unwrap();
    let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(config, parsed);
}

#[test]
fn test_config_from_file() {
    let mut config = Config::default();
    config.chart.output_dir = PathBuf::from("dist/chart");
    config.generator.args = vec!["print-manifests".to_string()];

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), serde_yaml::to_string(&config).unwrap()).unwrap();

    let loaded = Config::from_file(temp_file.path()).unwrap();
    assert_eq!(config, loaded);
}

#[test]
fn test_minimal_file_uses_defaults() {
    let config: Config = serde_yaml::from_str("version: \"1.0\"\n").unwrap();
    assert_eq!(config, Config::default());
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_sections_keep_defaults() {
    let yaml = r#"
version: "1.0"
chart:
  descriptor: deploy/Chart.yaml
rewrite:
  source_namespace: example-system
"#;
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.chart.output_dir, PathBuf::from("helm"));
    assert_eq!(config.chart.descriptor, PathBuf::from("deploy/Chart.yaml"));
    assert_eq!(config.rewrite.source_namespace, "example-system");
    assert_eq!(config.rewrite.namespace_placeholder, "{{.Release.Namespace}}");
    assert_eq!(config.generator.program, "make");
}

#[test]
fn test_config_validation() {
    assert!(Config::default().validate().is_ok());

    let mut config = Config::default();
    config.version = "2.0".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.packaging.program = String::new();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.chart.output_dir = PathBuf::new();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.rewrite.source_namespace = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn test_invalid_file_is_rejected() {
    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), "version: \"0.9\"\n").unwrap();
    assert!(Config::from_file(temp_file.path()).is_err());
}
