//! Project defaults loaded from the working directory.
//! Supports JSON and YAML formats (kiln.json, kiln.yml, kiln.yaml).

use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::request::{Language, ProjectType};

/// Supported defaults file names, in lookup order
pub const CONFIG_FILES: [&str; 3] = ["kiln.json", "kiln.yml", "kiln.yaml"];

/// Templates root used when neither the CLI nor the defaults file name one
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Values used for any option not given on the command line.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    pub templates: Option<PathBuf>,
    #[serde(rename = "type")]
    pub project_type: Option<ProjectType>,
    pub framework: Option<String>,
    pub language: Option<Language>,
    pub css: Option<String>,
    pub port: Option<u16>,
}

/// Loads the first defaults file found in `dir`.
///
/// Returns empty defaults when no file exists.
///
/// # Errors
/// * `Error::ConfigError` if the file is neither valid JSON nor valid YAML
pub fn load_defaults<P: AsRef<Path>>(dir: P) -> Result<Defaults> {
    for file in CONFIG_FILES {
        let config_path = dir.as_ref().join(file);
        if config_path.exists() {
            debug!("Loading defaults from {}", config_path.display());
            let content = std::fs::read_to_string(&config_path)?;
            return parse_defaults(&content);
        }
    }

    debug!("No defaults file found (tried: {})", CONFIG_FILES.join(", "));
    Ok(Defaults::default())
}

/// Parses defaults content, trying JSON first and YAML second.
pub fn parse_defaults(content: &str) -> Result<Defaults> {
    match serde_json::from_str(content) {
        Ok(defaults) => Ok(defaults),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid defaults file: {e}"))),
    }
}

/// Picks the templates root and checks that it exists.
pub fn resolve_templates_root(cli: Option<PathBuf>, defaults: &Defaults) -> Result<PathBuf> {
    let root = cli
        .or_else(|| defaults.templates.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATES_DIR));

    if !root.is_dir() {
        return Err(Error::TemplateDoesNotExistsError {
            template_dir: root.display().to_string(),
        });
    }
    debug!("Using templates from {}", root.display());
    Ok(root)
}
