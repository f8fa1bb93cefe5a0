//! Restores the project's ignore file.
//!
//! Templates ship their ignore file as `gitignore` so that packaging tools
//! do not apply it to the template tree itself.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::Result;

/// Name the ignore file is stored under inside a template tree.
pub const STAGED_IGNORE_FILE: &str = "gitignore";

/// Name the ignore file gets in the generated project.
pub const IGNORE_FILE: &str = ".gitignore";

/// Renames `<project_dir>/gitignore` to `<project_dir>/.gitignore`.
///
/// A missing staged file is not an error. Returns whether a rename happened.
pub fn normalize_gitignore<P: AsRef<Path>>(project_dir: P) -> Result<bool> {
    let project_dir = project_dir.as_ref();
    let staged = project_dir.join(STAGED_IGNORE_FILE);
    if !staged.is_file() {
        debug!("No staged ignore file in {}", project_dir.display());
        return Ok(false);
    }

    let target = project_dir.join(IGNORE_FILE);
    debug!("Renaming {} to {}", staged.display(), target.display());
    fs::rename(&staged, &target)?;
    Ok(true)
}
