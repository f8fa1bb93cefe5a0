//! Placeholder substitution over generated files.
//!
//! Tokens are written `{{KEY}}` or `{{ KEY }}` and are matched literally,
//! case-sensitively. Only keys present in the [`ReplacementSet`] are touched;
//! any other `{{...}}` text is left as it is.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use log::debug;
use regex::{Captures, Regex};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::replacements::ReplacementSet;

/// Substitutes the placeholders of one replacement set.
pub struct Templater {
    pattern: Option<Regex>,
    values: Vec<(&'static str, String)>,
}

impl Templater {
    pub fn new(replacements: &ReplacementSet) -> Result<Self> {
        let values: Vec<_> = replacements.iter().collect();
        if values.is_empty() {
            return Ok(Self { pattern: None, values });
        }

        let keys = values
            .iter()
            .map(|(key, _)| regex::escape(key))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"\{{\{{(?:({keys})| ({keys}) )\}}\}}"))
            .map_err(|e| Error::ConfigError(format!("invalid placeholder key: {e}")))?;

        Ok(Self { pattern: Some(pattern), values })
    }

    /// Replaces every recognised token in `content`.
    ///
    /// Substituted values are not scanned again, so a value that itself looks
    /// like a token ends up in the output verbatim.
    pub fn render<'a>(&self, content: &'a str) -> Cow<'a, str> {
        let Some(pattern) = &self.pattern else {
            return Cow::Borrowed(content);
        };

        pattern.replace_all(content, |caps: &Captures| {
            let key = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
            self.lookup(key).to_string()
        })
    }

    fn lookup(&self, key: &str) -> &str {
        self.values
            .iter()
            .find(|(k, _)| *k == key)
            .map_or("", |(_, value)| value.as_str())
    }

    /// Rewrites one file in place. Returns whether the file changed.
    ///
    /// Files that are not valid UTF-8 are left untouched.
    pub fn template_file(&self, path: &Path) -> Result<bool> {
        let bytes = fs::read(path)?;
        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(_) => {
                debug!("Skipping binary file: {}", path.display());
                return Ok(false);
            }
        };

        match self.render(&content) {
            Cow::Borrowed(_) => Ok(false),
            Cow::Owned(rendered) => {
                debug!("Templating file: {}", path.display());
                fs::write(path, rendered)?;
                Ok(true)
            }
        }
    }

    /// Templates every regular file below `root`. Symlinks are not followed.
    /// Returns the number of files that changed.
    pub fn template_tree(&self, root: &Path) -> Result<usize> {
        let mut changed = 0;
        for entry in WalkDir::new(root) {
            let entry = entry?;
            if entry.file_type().is_file() && self.template_file(entry.path())? {
                changed += 1;
            }
        }
        Ok(changed)
    }
}
