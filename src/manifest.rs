//! Edits to the generated project's `package.json`.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// File name of the package manifest inside a generated project.
pub const MANIFEST_FILE: &str = "package.json";

const DEV_DEPENDENCIES: &str = "devDependencies";

/// Sets `devDependencies.<name>` to `version` in `<project_dir>/package.json`
/// and rewrites the file as 2-space indented JSON. Other keys keep their order.
pub fn set_dev_dependency<P: AsRef<Path>>(project_dir: P, name: &str, version: &str) -> Result<()> {
    let path = project_dir.as_ref().join(MANIFEST_FILE);
    let content = fs::read_to_string(&path)?;
    let mut manifest: Value =
        serde_json::from_str(&content).map_err(|source| manifest_error(&path, source))?;

    let root = manifest.as_object_mut().ok_or_else(|| {
        manifest_error(&path, serde::de::Error::custom("manifest is not a JSON object"))
    })?;
    let dev_dependencies = root
        .entry(DEV_DEPENDENCIES)
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| {
            manifest_error(&path, serde::de::Error::custom("devDependencies is not an object"))
        })?;
    dev_dependencies.insert(name.to_string(), Value::from(version));

    debug!("Setting {DEV_DEPENDENCIES}.{name} = {version} in {}", path.display());
    let rendered =
        serde_json::to_string_pretty(&manifest).map_err(|source| manifest_error(&path, source))?;
    fs::write(&path, rendered)?;
    Ok(())
}

fn manifest_error(path: &Path, source: serde_json::Error) -> Error {
    Error::ManifestError { path: PathBuf::from(path), source }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_dev_dependency_keeps_order() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(MANIFEST_FILE),
            r#"{"name": "app", "version": "1.0.0", "devDependencies": {"webpack": "^5.0.0"}, "scripts": {}}"#,
        )
        .unwrap();

        set_dev_dependency(dir.path(), "tailwindcss", "^2.0.2").unwrap();

        let written = fs::read_to_string(dir.path().join(MANIFEST_FILE)).unwrap();
        assert_eq!(
            written,
            "{\n  \"name\": \"app\",\n  \"version\": \"1.0.0\",\n  \"devDependencies\": {\n    \"webpack\": \"^5.0.0\",\n    \"tailwindcss\": \"^2.0.2\"\n  },\n  \"scripts\": {}\n}"
        );
    }

    #[test]
    fn test_overwrites_existing_entry() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(MANIFEST_FILE),
            r#"{"devDependencies": {"tailwindcss": "^1.0.0"}}"#,
        )
        .unwrap();

        set_dev_dependency(dir.path(), "tailwindcss", "^2.0.2").unwrap();

        let manifest: Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join(MANIFEST_FILE)).unwrap())
                .unwrap();
        assert_eq!(manifest["devDependencies"]["tailwindcss"], "^2.0.2");
    }

    #[test]
    fn test_creates_missing_dev_dependencies() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), r#"{"name": "app"}"#).unwrap();

        set_dev_dependency(dir.path(), "tailwindcss", "^2.0.2").unwrap();

        let manifest: Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join(MANIFEST_FILE)).unwrap())
                .unwrap();
        assert_eq!(manifest["devDependencies"]["tailwindcss"], "^2.0.2");
    }

    #[test]
    fn test_malformed_manifest() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), "{ not json").unwrap();

        let err = set_dev_dependency(dir.path(), "tailwindcss", "^2.0.2").unwrap_err();
        assert!(matches!(err, Error::ManifestError { .. }));
    }

    #[test]
    fn test_missing_manifest() {
        let dir = TempDir::new().unwrap();
        let err = set_dev_dependency(dir.path(), "tailwindcss", "^2.0.2").unwrap_err();
        assert!(matches!(err, Error::IoError(_)));
    }
}
