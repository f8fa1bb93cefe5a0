//! Placeholder values substituted into every generated file.

use indexmap::IndexMap;
use serde_json::Value;

use crate::request::BuildRequest;

pub const NAME: &str = "NAME";
pub const FRAMEWORK: &str = "FRAMEWORK";
pub const SAFE_NAME: &str = "SAFE_NAME";
pub const LANGUAGE: &str = "LANGUAGE";
pub const PORT: &str = "PORT";
pub const CSS: &str = "CSS";
pub const CSS_EXTENSION: &str = "CSS_EXTENSION";
pub const CONTAINER: &str = "CONTAINER";

/// Stylesheet settings of an application build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styling {
    pub css: &'static str,
    pub extension: &'static str,
    pub container: &'static str,
}

impl Styling {
    pub const TAILWIND: Styling = Styling {
        css: "Tailwind",
        extension: "scss",
        container: "mt-10 text-3xl mx-auto max-w-6xl",
    };

    pub const PLAIN: Styling = Styling {
        css: "Empty CSS",
        extension: "css",
        container: "container",
    };

    pub fn for_request(request: &BuildRequest) -> Self {
        if request.is_tailwind() {
            Self::TAILWIND
        } else {
            Self::PLAIN
        }
    }
}

/// Replaces every hyphen with an underscore and trims surrounding whitespace.
pub fn safe_name(name: &str) -> String {
    name.replace('-', "_").trim().to_string()
}

/// Ordered mapping of placeholder keys to values.
///
/// Sets only grow: every `with_*` step consumes the set and returns an
/// extended one.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplacementSet {
    values: IndexMap<&'static str, Value>,
}

impl ReplacementSet {
    /// The keys every build carries.
    pub fn base(request: &BuildRequest) -> Self {
        let mut values = IndexMap::new();
        values.insert(NAME, Value::from(request.name.as_str()));
        values.insert(FRAMEWORK, Value::from(request.framework.as_str()));
        values.insert(SAFE_NAME, Value::from(safe_name(&request.name)));
        values.insert(LANGUAGE, Value::from(request.language.as_str()));
        Self { values }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.values.insert(PORT, Value::from(port));
        self
    }

    pub fn with_styling(mut self, styling: Styling) -> Self {
        self.values.insert(CSS_EXTENSION, Value::from(styling.extension));
        self.values.insert(CONTAINER, Value::from(styling.container));
        self.values.insert(CSS, Value::from(styling.css));
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }

    /// Iterates over keys and the text each one is replaced with.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, String)> + '_ {
        self.values.iter().map(|(key, value)| (*key, display_value(value)))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
