//! Utility functions for helm-chart-gen

use anyhow::{anyhow, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Ensure a directory exists, creating it and any parents if necessary
pub fn ensure_directory(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    } else if !path.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {path:?}"),
        ));
    }
    Ok(())
}

/// Remove directory recursively
pub fn remove_directory(path: &Path) -> std::io::Result<()> {
    if path.exists() {
        fs::remove_dir_all(path)?;
    }
    Ok(())
}

/// Find all YAML files in a directory recursively, sorted by path
pub fn find_yaml_files(dir: &Path) -> Vec<PathBuf> {
    let mut yaml_files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
        })
        .collect();

    yaml_files.sort();
    yaml_files
}

/// Expand `~` and environment variables in a path
pub fn expand_path(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_string_lossy();
    let expanded = shellexpand::full(&path_str)
        .map_err(|e| anyhow!("Failed to expand {:?}: {}", path, e))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Make `path` absolute against the current directory and fold away `.` and `..`
/// without touching the filesystem
pub fn normalize_path(path: &Path) -> std::io::Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}

/// Resolve `path` against `base` unless it is already absolute
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_directory_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("helm").join("templates");

        ensure_directory(&nested).unwrap();
        assert!(nested.is_dir());

        // Existing directories are fine
        ensure_directory(&nested).unwrap();
    }

    #[test]
    fn test_ensure_directory_rejects_files() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("helm");
        fs::write(&file, "not a directory").unwrap();

        assert!(ensure_directory(&file).is_err());
    }

    #[test]
    fn test_remove_directory() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("helm");
        fs::create_dir_all(dir.join("templates")).unwrap();
        fs::write(dir.join("templates").join("a.yaml"), "a").unwrap();

        remove_directory(&dir).unwrap();
        assert!(!dir.exists());

        // Removing a missing directory is a no-op
        remove_directory(&dir).unwrap();
    }

    #[test]
    fn test_find_yaml_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.yaml"), "b").unwrap();
        fs::write(temp_dir.path().join("a.yml"), "a").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "n").unwrap();

        let files = find_yaml_files(temp_dir.path());
        assert_eq!(
            files,
            vec![temp_dir.path().join("a.yml"), temp_dir.path().join("b.yaml")]
        );
    }

    #[test]
    fn test_expand_path_with_env() {
        std::env::set_var("HELM_CHART_GEN_TEST_DIR", "/tmp/charts");
        let expanded = expand_path(Path::new("$HELM_CHART_GEN_TEST_DIR/out")).unwrap();
        assert_eq!(expanded, PathBuf::from("/tmp/charts/out"));
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(
            normalize_path(Path::new("/repo/./helm/../hack/Chart.yaml")).unwrap(),
            PathBuf::from("/repo/hack/Chart.yaml")
        );
        assert_eq!(normalize_path(Path::new("/repo/..")).unwrap(), PathBuf::from("/"));
        assert_eq!(
            normalize_path(Path::new("helm")).unwrap(),
            std::env::current_dir().unwrap().join("helm")
        );
    }

    #[test]
    fn test_resolve_against() {
        let base = Path::new("/repo");
        assert_eq!(resolve_against(base, Path::new("helm")), PathBuf::from("/repo/helm"));
        assert_eq!(resolve_against(base, Path::new("/abs")), PathBuf::from("/abs"));
    }
}
