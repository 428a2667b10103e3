//! Application dataset loading.

use std::fs;
use std::path::{Path, PathBuf};

use bidboard_core::Application;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset file not found: {0}")]
    NotFound(PathBuf),

    #[error("dataset I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("dataset is not a valid application list: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load a JSON array of applications from `path`.
pub fn load(path: &Path) -> Result<Vec<Application>, DatasetError> {
    if !path.exists() {
        return Err(DatasetError::NotFound(path.to_path_buf()));
    }
    let raw = fs::read_to_string(path)?;
    let apps: Vec<Application> = serde_json::from_str(&raw)?;
    info!(count = apps.len(), path = %path.display(), "loaded applications");
    Ok(apps)
}

/// Write the application list back to `path` as pretty-printed JSON.
pub fn save(path: &Path, apps: &[Application]) -> Result<(), DatasetError> {
    let raw = serde_json::to_string_pretty(apps)?;
    fs::write(path, raw)?;
    info!(count = apps.len(), path = %path.display(), "saved applications");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn bundled_dataset() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("data")
            .join("applications.json")
    }

    #[test]
    fn missing_file_errors() {
        let result = load(Path::new("/nonexistent/applications.json"));
        assert!(matches!(result, Err(DatasetError::NotFound(_))));
    }

    #[test]
    fn bundled_dataset_loads() {
        let apps = load(&bundled_dataset()).unwrap();
        assert!(apps.len() >= 10, "expected the full seed set, got {}", apps.len());
        assert!(apps.iter().all(|app| !app.id.is_empty()));
        assert!(apps.iter().all(|app| app.percent_complete <= 100));
    }

    #[test]
    fn save_then_load_roundtrips() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("applications.json");

        let mut apps = load(&bundled_dataset()).unwrap();
        apps[0].mark_submitted();
        save(&path, &apps).unwrap();

        let reloaded = load(&path).unwrap();
        assert_eq!(reloaded, apps);
    }

    #[test]
    fn invalid_json_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("bad.json");
        fs::write(&path, "{\"not\": \"a list\"}").unwrap();
        assert!(matches!(load(&path), Err(DatasetError::Json(_))));
    }
}
