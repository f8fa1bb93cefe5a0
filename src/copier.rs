//! Recursive copy of template trees into the destination project.

use std::fs;
use std::path::Path;

use log::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Copies a whole template tree into a destination directory.
pub trait TreeCopier {
    /// Copies every file and directory below `source` into `destination`,
    /// keeping relative paths. Destination directories are created as needed
    /// and files sharing a relative path are overwritten. Symlinks are
    /// recreated as symlinks, not followed.
    fn copy_tree(&self, source: &Path, destination: &Path) -> Result<()>;
}

/// [`TreeCopier`] backed by the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsCopier;

impl FsCopier {
    pub fn new() -> Self {
        Self
    }
}

impl TreeCopier for FsCopier {
    fn copy_tree(&self, source: &Path, destination: &Path) -> Result<()> {
        if !source.is_dir() {
            return Err(Error::TemplateDoesNotExistsError {
                template_dir: source.display().to_string(),
            });
        }

        debug!("Copying tree {} into {}", source.display(), destination.display());

        for entry in WalkDir::new(source) {
            let entry = entry?;
            let relative = entry
                .path()
                .strip_prefix(source)
                .map_err(|e| Error::ConfigError(e.to_string()))?;
            let target = destination.join(relative);

            let file_type = entry.file_type();
            if file_type.is_dir() {
                fs::create_dir_all(&target)?;
            } else if file_type.is_symlink() {
                copy_symlink(entry.path(), &target)?;
            } else {
                copy_file(entry.path(), &target)?;
            }
        }
        Ok(())
    }
}

fn copy_file(source: &Path, target: &Path) -> Result<()> {
    prepare_target(target)?;
    debug!("Copying file: {}", target.display());
    fs::copy(source, target).map(|_| ()).map_err(Error::IoError)
}

fn copy_symlink(source: &Path, target: &Path) -> Result<()> {
    let link = fs::read_link(source)?;
    prepare_target(target)?;
    if target.is_file() {
        fs::remove_file(target)?;
    }
    debug!("Linking {} -> {}", target.display(), link.display());

    #[cfg(unix)]
    std::os::unix::fs::symlink(&link, target)?;

    #[cfg(windows)]
    {
        if source.is_dir() {
            std::os::windows::fs::symlink_dir(&link, target)?;
        } else {
            std::os::windows::fs::symlink_file(&link, target)?;
        }
    }

    Ok(())
}

/// Creates the parent of `target` and drops a symlink already at `target`,
/// so a later tree replaces the link instead of writing through it.
fn prepare_target(target: &Path) -> Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    let is_link = fs::symlink_metadata(target).map(|m| m.file_type().is_symlink()).unwrap_or(false);
    if is_link {
        remove_link(target)?;
    }
    Ok(())
}

#[cfg(windows)]
fn remove_link(target: &Path) -> Result<()> {
    fs::remove_file(target).or_else(|_| fs::remove_dir(target)).map_err(Error::IoError)
}

#[cfg(not(windows))]
fn remove_link(target: &Path) -> Result<()> {
    fs::remove_file(target).map_err(Error::IoError)
}
