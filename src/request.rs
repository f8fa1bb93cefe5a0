//! The build request: what kind of project to scaffold and how.

use std::fmt;
use std::path::{Component, Path};

use clap::ValueEnum;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Marker value of the `css` option that enables the Tailwind extras.
pub const TAILWIND: &str = "Tailwind";

/// Kind of project being scaffolded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Application,
    Library,
    Server,
}

impl ProjectType {
    /// Directory name of this project type under the templates root.
    pub fn template_dir(&self) -> &'static str {
        match self {
            ProjectType::Application => "application",
            ProjectType::Library => "library",
            ProjectType::Server => "server",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template_dir())
    }
}

/// Implementation language of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ts,
    Js,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ts => "ts",
            Language::Js => "js",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved scaffolding request. Built once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    pub project_type: ProjectType,
    pub name: String,
    pub framework: String,
    pub language: Language,
    pub css: String,
    pub port: u16,
}

impl BuildRequest {
    /// Creates a request after checking that `name` and `framework` can be
    /// used as directory names.
    pub fn new(
        project_type: ProjectType,
        name: impl Into<String>,
        framework: impl Into<String>,
        language: Language,
        css: impl Into<String>,
        port: u16,
    ) -> Result<Self> {
        let name = name.into();
        let framework = framework.into();
        validate_name(&name)?;
        validate_segment("framework", &framework)?;
        Ok(Self {
            project_type,
            name,
            framework,
            language,
            css: css.into(),
            port,
        })
    }

    pub fn is_tailwind(&self) -> bool {
        self.css == TAILWIND
    }
}

/// Checks that a project name is a single, normal path segment.
pub fn validate_name(name: &str) -> Result<()> {
    validate_segment("project name", name)
}

fn validate_segment(what: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::ValidationError(format!("{what} must not be empty")));
    }

    let mut components = Path::new(value).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(Error::ValidationError(format!(
            "{what} '{value}' must be a single directory name"
        ))),
    }
}
