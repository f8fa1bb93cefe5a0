//! kiln creates new projects from template trees.
//! It copies the template trees matching a project type, framework and
//! language into a new directory and fills in `{{KEY}}` placeholders.

/// Resolution of missing options, interactively or from defaults
pub mod answers;

/// Project building pipeline
/// Copies template trees, applies stylesheet extras and templates every file
pub mod builder;

/// Command-line interface module for the kiln application
pub mod cli;

/// Defaults file handling
/// Supports JSON and YAML formats (kiln.json, kiln.yml, kiln.yaml)
pub mod config;

/// Recursive copy of template trees
pub mod copier;

/// Error types and handling for the kiln application
pub mod error;

/// Renaming of the staged `gitignore` file
pub mod gitignore;

/// Logger initialisation
pub mod logger;

/// `package.json` editing
pub mod manifest;

/// User input and interaction handling
pub mod prompt;

/// Placeholder keys and values
pub mod replacements;

/// Project type, language and the build request
pub mod request;

/// Placeholder substitution in generated files
pub mod templater;
