//! Project building pipeline.
//!
//! A build runs as a fixed sequence of stages, each consuming the previous one:
//!
//! 1. [`BuildPlan`]: template trees and replacement keys chosen from the request
//! 2. [`Materialized`]: every template tree copied into the destination
//! 3. [`Styled`]: stylesheet extras applied, replacement set complete
//! 4. [`BuildReport`]: ignore file restored and every file templated

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::copier::{FsCopier, TreeCopier};
use crate::error::{Error, Result};
use crate::gitignore::normalize_gitignore;
use crate::manifest::set_dev_dependency;
use crate::replacements::{ReplacementSet, Styling};
use crate::request::{BuildRequest, ProjectType};
use crate::templater::Templater;

/// Language directory the library template is always taken from.
pub const LIBRARY_TEMPLATE: &str = "typescript";

/// Directory under an application framework holding the shared files.
pub const APPLICATION_BASE: &str = "base";

/// Tailwind extras tree, relative to the templates root.
pub const TAILWIND_EXTRAS: &str = "application-extras/tailwind";

/// Default stylesheet replaced by the Tailwind extras.
pub const DEFAULT_STYLESHEET: &str = "src/index.css";

/// Dev-dependency added to the manifest of Tailwind applications.
pub const TAILWIND_PACKAGE: &str = "tailwindcss";
pub const TAILWIND_VERSION: &str = "^2.0.2";

/// Builds projects from the template trees below one templates root.
pub struct ProjectBuilder {
    templates_root: PathBuf,
    copier: Box<dyn TreeCopier>,
}

impl ProjectBuilder {
    pub fn new<P: Into<PathBuf>>(templates_root: P) -> Self {
        Self::with_copier(templates_root, Box::new(FsCopier::new()))
    }

    pub fn with_copier<P: Into<PathBuf>>(templates_root: P, copier: Box<dyn TreeCopier>) -> Self {
        Self { templates_root: templates_root.into(), copier }
    }

    /// Chooses the template trees and replacement keys for `request`.
    pub fn plan(&self, request: &BuildRequest, destination: &Path) -> BuildPlan {
        let type_root = self.templates_root.join(request.project_type.template_dir());
        let base = ReplacementSet::base(request);

        let (sources, replacements, styling) = match request.project_type {
            ProjectType::Library => (vec![type_root.join(LIBRARY_TEMPLATE)], base, None),
            ProjectType::Server => {
                (vec![type_root.join(&request.framework)], base.with_port(request.port), None)
            }
            ProjectType::Application => {
                let framework_root = type_root.join(&request.framework);
                (
                    vec![
                        framework_root.join(APPLICATION_BASE),
                        framework_root.join(request.language.as_str()),
                    ],
                    base.with_port(request.port),
                    Some(Styling::for_request(request)),
                )
            }
        };

        BuildPlan {
            templates_root: self.templates_root.clone(),
            destination: destination.to_path_buf(),
            sources,
            replacements,
            styling,
        }
    }

    /// Runs the whole pipeline for `request` into `destination`.
    ///
    /// Nothing is rolled back on failure; a partially written destination is
    /// left in place.
    pub fn build(&self, request: &BuildRequest, destination: &Path) -> Result<BuildReport> {
        info!("Building {} '{}' in {}", request.project_type, request.name, destination.display());
        self.plan(request, destination)
            .materialize(&*self.copier)?
            .style(&*self.copier)?
            .finish()
    }
}

/// Template trees and replacement keys for one build.
#[derive(Debug, Clone)]
pub struct BuildPlan {
    templates_root: PathBuf,
    destination: PathBuf,
    sources: Vec<PathBuf>,
    replacements: ReplacementSet,
    styling: Option<Styling>,
}

impl BuildPlan {
    /// Template trees in copy order; later trees overwrite earlier ones.
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn replacements(&self) -> &ReplacementSet {
        &self.replacements
    }

    pub fn styling(&self) -> Option<Styling> {
        self.styling
    }

    /// Copies every source tree, in order, into the destination.
    pub fn materialize(self, copier: &dyn TreeCopier) -> Result<Materialized> {
        for source in &self.sources {
            info!("Copying template {}", source.display());
            copier.copy_tree(source, &self.destination)?;
        }
        Ok(Materialized { plan: self })
    }
}

/// A destination holding every copied template tree.
#[derive(Debug)]
pub struct Materialized {
    plan: BuildPlan,
}

impl Materialized {
    /// Applies the stylesheet choice and completes the replacement set.
    pub fn style(self, copier: &dyn TreeCopier) -> Result<Styled> {
        let BuildPlan { templates_root, destination, replacements, styling, .. } = self.plan;

        let replacements = match styling {
            Some(styling) => {
                if styling == Styling::TAILWIND {
                    apply_tailwind(&templates_root, &destination, copier)?;
                }
                replacements.with_styling(styling)
            }
            None => replacements,
        };

        Ok(Styled { destination, replacements })
    }
}

fn apply_tailwind(templates_root: &Path, destination: &Path, copier: &dyn TreeCopier) -> Result<()> {
    info!("Adding Tailwind extras");
    let stylesheet = destination.join(DEFAULT_STYLESHEET);
    debug!("Removing {}", stylesheet.display());
    fs::remove_file(&stylesheet)?;

    copier.copy_tree(&templates_root.join(TAILWIND_EXTRAS), destination)?;
    set_dev_dependency(destination, TAILWIND_PACKAGE, TAILWIND_VERSION)
}

/// A fully materialized destination with its final replacement set.
#[derive(Debug)]
pub struct Styled {
    destination: PathBuf,
    replacements: ReplacementSet,
}

impl Styled {
    /// Restores the ignore file and templates every file of the destination.
    pub fn finish(self) -> Result<BuildReport> {
        let gitignore_renamed = normalize_gitignore(&self.destination)?;

        info!("Templating files in {}", self.destination.display());
        let templater = Templater::new(&self.replacements)?;
        let templated_files = templater.template_tree(&self.destination)?;

        Ok(BuildReport {
            destination: self.destination,
            replacements: self.replacements,
            templated_files,
            gitignore_renamed,
        })
    }
}

/// Outcome of a finished build.
#[derive(Debug)]
pub struct BuildReport {
    pub destination: PathBuf,
    pub replacements: ReplacementSet,
    pub templated_files: usize,
    pub gitignore_renamed: bool,
}

/// Ensures the destination is safe to write to.
///
/// # Errors
/// * `Error::OutputDirectoryExistsError` if `output_dir` exists and `force` is false
pub fn ensure_output_dir<P: AsRef<Path>>(output_dir: P, force: bool) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if output_dir.exists() && !force {
        return Err(Error::OutputDirectoryExistsError {
            output_dir: output_dir.display().to_string(),
        });
    }
    Ok(output_dir.to_path_buf())
}

/// Lists the frameworks that have a template tree for `project_type`.
pub fn available_frameworks<P: AsRef<Path>>(
    templates_root: P,
    project_type: ProjectType,
) -> Result<Vec<String>> {
    let type_root = templates_root.as_ref().join(project_type.template_dir());
    if !type_root.is_dir() {
        return Err(Error::TemplateDoesNotExistsError {
            template_dir: type_root.display().to_string(),
        });
    }

    let mut frameworks = Vec::new();
    for entry in fs::read_dir(&type_root)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            if let Some(name) = entry.file_name().to_str() {
                frameworks.push(name.to_string());
            }
        }
    }
    frameworks.sort();
    Ok(frameworks)
}
