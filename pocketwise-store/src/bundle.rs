//! JSON-file persistence for a [`ContextBundle`]

use pocketwise_core::ContextBundle;
use std::fs;
use std::path::Path;

use crate::error::{Result, StoreError};

/// Load a bundle from a JSON file.
///
/// Bad numbers and dates inside records are coerced by the record types;
/// only a missing file or structurally invalid JSON is an error.
pub fn load_bundle(path: impl AsRef<Path>) -> Result<ContextBundle> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let bundle: ContextBundle = serde_json::from_str(&raw).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        transactions = bundle.transactions.len(),
        goals = bundle.goals.len(),
        budgets = bundle.budgets.len(),
        "Loaded context bundle"
    );
    Ok(bundle)
}

/// Write a bundle as pretty-printed JSON.
pub fn save_bundle(path: impl AsRef<Path>, bundle: &ContextBundle) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(bundle).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocketwise_core::{RiskTolerance, User};

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("context.json");
        let bundle = ContextBundle::new(User::new("Asha", 50000.0, RiskTolerance::High));

        save_bundle(&path, &bundle).unwrap();
        let loaded = load_bundle(&path).unwrap();
        assert_eq!(loaded, bundle);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_bundle(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[test]
    fn test_invalid_json_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_bundle(&path).unwrap_err();
        assert!(matches!(err, StoreError::Json { .. }));
        assert!(err.to_string().contains("broken.json"));
    }
}
