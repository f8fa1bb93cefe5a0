use std::fs;
use std::path::PathBuf;

use kiln::config::{load_defaults, parse_defaults, resolve_templates_root, Defaults};
use kiln::error::Error;
use kiln::request::{Language, ProjectType};
use tempfile::TempDir;

#[test]
fn test_no_defaults_file() {
    let temp_dir = TempDir::new().unwrap();
    assert_eq!(load_defaults(temp_dir.path()).unwrap(), Defaults::default());
}

#[test]
fn test_json_defaults() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("kiln.json"),
        r#"{"type": "application", "framework": "react", "language": "js", "port": 3000}"#,
    )
    .unwrap();

    let defaults = load_defaults(temp_dir.path()).unwrap();
    assert_eq!(defaults.project_type, Some(ProjectType::Application));
    assert_eq!(defaults.framework.as_deref(), Some("react"));
    assert_eq!(defaults.language, Some(Language::Js));
    assert_eq!(defaults.port, Some(3000));
    assert_eq!(defaults.css, None);
}

#[test]
fn test_yaml_defaults() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("kiln.yaml"),
        "templates: ./my-templates\ntype: server\ncss: Tailwind\n",
    )
    .unwrap();

    let defaults = load_defaults(temp_dir.path()).unwrap();
    assert_eq!(defaults.templates, Some(PathBuf::from("./my-templates")));
    assert_eq!(defaults.project_type, Some(ProjectType::Server));
    assert_eq!(defaults.css.as_deref(), Some("Tailwind"));
}

#[test]
fn test_invalid_defaults() {
    let err = parse_defaults("type: [unclosed").unwrap_err();
    assert!(matches!(err, Error::ConfigError(_)));

    let err = parse_defaults("colour: blue").unwrap_err();
    assert!(matches!(err, Error::ConfigError(_)));
}

#[test]
fn test_resolve_templates_root() {
    let temp_dir = TempDir::new().unwrap();
    let from_defaults = Defaults { templates: Some(temp_dir.path().to_path_buf()), ..Default::default() };

    assert_eq!(resolve_templates_root(None, &from_defaults).unwrap(), temp_dir.path());

    let missing = temp_dir.path().join("missing");
    let err = resolve_templates_root(Some(missing), &from_defaults).unwrap_err();
    assert!(matches!(err, Error::TemplateDoesNotExistsError { .. }));
}
