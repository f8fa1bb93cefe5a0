//! Turns partially specified options into a complete [`BuildRequest`].
//!
//! Missing values are asked for when a [`Prompter`] is available, otherwise
//! they fall back to built-in defaults.

use std::path::Path;

use clap::ValueEnum;
use log::debug;

use crate::builder::{available_frameworks, LIBRARY_TEMPLATE};
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use crate::request::{BuildRequest, Language, ProjectType, TAILWIND};

pub const DEFAULT_LANGUAGE: Language = Language::Ts;
pub const DEFAULT_CSS: &str = "CSS";
pub const DEFAULT_PORT: u16 = 8080;

/// Stylesheet options offered interactively.
pub const CSS_CHOICES: [&str; 2] = [DEFAULT_CSS, TAILWIND];

/// Options collected from the command line and the defaults file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub name: String,
    pub project_type: Option<ProjectType>,
    pub framework: Option<String>,
    pub language: Option<Language>,
    pub css: Option<String>,
    pub port: Option<u16>,
}

/// Fills in every missing option and validates the result.
pub fn resolve_request(
    options: RequestOptions,
    templates_root: &Path,
    prompter: Option<&dyn Prompter>,
) -> Result<BuildRequest> {
    let project_type = match options.project_type {
        Some(project_type) => project_type,
        None => {
            let prompter = prompter.ok_or_else(|| {
                Error::ValidationError("project type is required (--type)".to_string())
            })?;
            let variants = ProjectType::value_variants();
            let choices: Vec<String> = variants.iter().map(|v| v.to_string()).collect();
            variants[prompter.select("Project type", &choices, 0)?]
        }
    };

    let framework = match options.framework {
        Some(framework) => framework,
        None => ask_framework(project_type, templates_root, prompter)?,
    };

    let is_application = project_type == ProjectType::Application;

    let language = match (options.language, prompter) {
        (Some(language), _) => language,
        (None, Some(prompter)) if is_application => {
            let variants = Language::value_variants();
            let choices: Vec<String> = variants.iter().map(|v| v.to_string()).collect();
            variants[prompter.select("Language", &choices, 0)?]
        }
        (None, _) => DEFAULT_LANGUAGE,
    };

    let css = match (options.css, prompter) {
        (Some(css), _) => css,
        (None, Some(prompter)) if is_application => {
            let choices: Vec<String> = CSS_CHOICES.iter().map(|c| c.to_string()).collect();
            choices[prompter.select("CSS", &choices, 0)?].clone()
        }
        (None, _) => DEFAULT_CSS.to_string(),
    };

    let port = match (options.port, prompter) {
        (Some(port), _) => port,
        (None, Some(prompter)) if project_type != ProjectType::Library => {
            let answer = prompter.input("Port", &DEFAULT_PORT.to_string())?;
            parse_port(&answer)?
        }
        (None, _) => DEFAULT_PORT,
    };

    debug!("Resolved {project_type} '{}' with framework '{framework}'", options.name);
    BuildRequest::new(project_type, options.name, framework, language, css, port)
}

fn ask_framework(
    project_type: ProjectType,
    templates_root: &Path,
    prompter: Option<&dyn Prompter>,
) -> Result<String> {
    let Some(prompter) = prompter else {
        return match project_type {
            ProjectType::Library => Ok(LIBRARY_TEMPLATE.to_string()),
            _ => Err(Error::ValidationError(format!(
                "framework is required for a {project_type} (--framework)"
            ))),
        };
    };

    let frameworks = available_frameworks(templates_root, project_type)?;
    if frameworks.is_empty() {
        return Err(Error::ValidationError(format!(
            "no {project_type} templates found in {}",
            templates_root.display()
        )));
    }
    let index = prompter.select("Framework", &frameworks, 0)?;
    Ok(frameworks[index].clone())
}

/// Decides whether an existing `destination` may be written into.
///
/// `--force` always wins; otherwise the user is asked when a prompter is
/// available.
pub fn confirm_overwrite(
    destination: &Path,
    force: bool,
    prompter: Option<&dyn Prompter>,
) -> Result<bool> {
    if force || !destination.exists() {
        return Ok(force);
    }
    match prompter {
        Some(prompter) => prompter.confirm(
            &format!("Directory '{}' already exists. Write into it?", destination.display()),
            false,
        ),
        None => Ok(false),
    }
}

/// Parses a port answer.
pub fn parse_port(answer: &str) -> Result<u16> {
    answer
        .trim()
        .parse()
        .map_err(|_| Error::ValidationError(format!("'{}' is not a valid port", answer.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    /// Answers prompts from a fixed script and records what was asked.
    struct ScriptedPrompter {
        selections: RefCell<Vec<usize>>,
        inputs: RefCell<Vec<String>>,
        confirmations: RefCell<Vec<bool>>,
        asked: RefCell<Vec<String>>,
    }

    impl ScriptedPrompter {
        fn new(selections: Vec<usize>, inputs: Vec<&str>) -> Self {
            Self {
                selections: RefCell::new(selections),
                inputs: RefCell::new(inputs.into_iter().map(String::from).collect()),
                confirmations: RefCell::new(Vec::new()),
                asked: RefCell::new(Vec::new()),
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn select(&self, prompt: &str, choices: &[String], _default: usize) -> Result<usize> {
            self.asked.borrow_mut().push(format!("{prompt}: {}", choices.join(",")));
            Ok(self.selections.borrow_mut().remove(0))
        }

        fn input(&self, prompt: &str, default: &str) -> Result<String> {
            self.asked.borrow_mut().push(format!("{prompt} [{default}]"));
            Ok(self.inputs.borrow_mut().remove(0))
        }

        fn confirm(&self, prompt: &str, _default: bool) -> Result<bool> {
            self.asked.borrow_mut().push(prompt.to_string());
            Ok(self.confirmations.borrow_mut().remove(0))
        }
    }

    fn templates() -> TempDir {
        let dir = TempDir::new().unwrap();
        for path in ["application/vue/base", "application/react/base", "server/express"] {
            fs::create_dir_all(dir.path().join(path)).unwrap();
        }
        dir
    }

    fn options(name: &str) -> RequestOptions {
        RequestOptions { name: name.to_string(), ..Default::default() }
    }

    #[test]
    fn test_interactive_application() {
        let templates = templates();
        let prompter = ScriptedPrompter::new(vec![0, 1, 1, 1], vec!["3000"]);

        let request = resolve_request(options("shop"), templates.path(), Some(&prompter)).unwrap();

        assert_eq!(request.project_type, ProjectType::Application);
        assert_eq!(request.framework, "vue");
        assert_eq!(request.language, Language::Js);
        assert_eq!(request.css, TAILWIND);
        assert_eq!(request.port, 3000);
        assert_eq!(
            prompter.asked.borrow().as_slice(),
            &[
                "Project type: application,library,server",
                "Framework: react,vue",
                "Language: ts,js",
                "CSS: CSS,Tailwind",
                "Port [8080]",
            ]
        );
    }

    #[test]
    fn test_server_only_asks_for_port() {
        let templates = templates();
        let prompter = ScriptedPrompter::new(vec![], vec!["not-a-port"]);
        let opts = RequestOptions {
            project_type: Some(ProjectType::Server),
            framework: Some("express".to_string()),
            ..options("api")
        };

        let err = resolve_request(opts, templates.path(), Some(&prompter)).unwrap_err();
        assert!(matches!(err, Error::ValidationError(_)));
        assert_eq!(prompter.asked.borrow().as_slice(), &["Port [8080]"]);
    }

    #[test]
    fn test_non_interactive_defaults() {
        let templates = templates();
        let opts = RequestOptions { project_type: Some(ProjectType::Library), ..options("lib") };

        let request = resolve_request(opts, templates.path(), None).unwrap();
        assert_eq!(request.framework, LIBRARY_TEMPLATE);
        assert_eq!(request.language, DEFAULT_LANGUAGE);
        assert_eq!(request.css, DEFAULT_CSS);
        assert_eq!(request.port, DEFAULT_PORT);
    }

    #[test]
    fn test_non_interactive_requires_type_and_framework() {
        let templates = templates();
        assert!(resolve_request(options("app"), templates.path(), None).is_err());

        let opts = RequestOptions { project_type: Some(ProjectType::Server), ..options("api") };
        let err = resolve_request(opts, templates.path(), None).unwrap_err();
        assert!(err.to_string().contains("--framework"));
    }

    #[test]
    fn test_confirm_overwrite() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("new");
        let prompter = ScriptedPrompter::new(vec![], vec![]);
        prompter.confirmations.borrow_mut().extend([true, false]);

        assert!(!confirm_overwrite(&missing, false, Some(&prompter)).unwrap());
        assert!(confirm_overwrite(dir.path(), true, Some(&prompter)).unwrap());
        assert!(prompter.asked.borrow().is_empty());

        assert!(confirm_overwrite(dir.path(), false, Some(&prompter)).unwrap());
        assert!(!confirm_overwrite(dir.path(), false, Some(&prompter)).unwrap());
        assert_eq!(prompter.asked.borrow().len(), 2);
        assert!(prompter.asked.borrow()[0].contains("already exists"));

        assert!(!confirm_overwrite(dir.path(), false, None).unwrap());
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port(" 3000 ").unwrap(), 3000);
        assert!(parse_port("70000").is_err());
        assert!(parse_port("").is_err());
    }
}
