//! Named HTML templates with `{slot}` substitution
//!
//! Templates are plain text files under `templates/`. A slot is written as
//! `{name}`; `{{` and `}}` produce literal braces, so inline CSS and JS
//! survive. Rendering is a single pass over the template source: values are
//! copied verbatim and never scanned for further slots.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Every template the page assembler needs, by file stem.
pub const REQUIRED_TEMPLATES: [&str; 16] = [
    "base",
    "header",
    "about",
    "blog_list",
    "blog_content",
    "blog_post",
    "books_section",
    "gear_section_clean",
    "category",
    "book_item",
    "gear_item",
    "tag",
    "placeholder_item",
    "philosophy_section",
    "philosophy_item",
    "cta_section",
];

/// Template loading and rendering errors
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Template '{template}' uses slot '{slot}' but no value was supplied")]
    MissingSlot { template: String, slot: String },

    #[error("Template '{template}' has an unbalanced '{brace}' at byte {position}")]
    Malformed {
        template: String,
        brace: char,
        position: usize,
    },

    #[error("Failed to read template {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Slot values for one render call
#[derive(Debug, Clone, Default)]
pub struct Slots {
    values: HashMap<&'static str, String>,
}

impl Slots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &'static str, value: impl Into<String>) {
        self.values.insert(name, value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

/// A single named template
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    source: String,
}

impl Template {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// The unprocessed template text
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Substitute every `{slot}` with its value from `slots`
    pub fn render(&self, slots: &Slots) -> Result<String, TemplateError> {
        let src = self.source.as_str();
        let bytes = src.as_bytes();
        let mut out = String::with_capacity(src.len());
        let mut literal_start = 0;
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                b'{' => {
                    out.push_str(&src[literal_start..i]);
                    if bytes.get(i + 1) == Some(&b'{') {
                        out.push('{');
                        i += 2;
                    } else {
                        let close = src[i + 1..]
                            .find(['{', '}'])
                            .filter(|&offset| bytes[i + 1 + offset] == b'}')
                            .ok_or_else(|| self.malformed('{', i))?;
                        let slot = &src[i + 1..i + 1 + close];
                        let value = slots.get(slot).ok_or_else(|| TemplateError::MissingSlot {
                            template: self.name.clone(),
                            slot: slot.to_string(),
                        })?;
                        out.push_str(value);
                        i += close + 2;
                    }
                    literal_start = i;
                }
                b'}' => {
                    out.push_str(&src[literal_start..i]);
                    if bytes.get(i + 1) != Some(&b'}') {
                        return Err(self.malformed('}', i));
                    }
                    out.push('}');
                    i += 2;
                    literal_start = i;
                }
                _ => i += 1,
            }
        }

        out.push_str(&src[literal_start..]);
        Ok(out)
    }

    fn malformed(&self, brace: char, position: usize) -> TemplateError {
        TemplateError::Malformed {
            template: self.name.clone(),
            brace,
            position,
        }
    }
}

/// All templates for one run, keyed by name
#[derive(Debug, Clone, Default)]
pub struct TemplateSet {
    templates: HashMap<String, Template>,
}

impl TemplateSet {
    /// Read every required template from `dir`
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self, TemplateError> {
        let dir = dir.as_ref();
        let mut set = Self::default();

        for name in REQUIRED_TEMPLATES {
            let path = dir.join(format!("{}.html", name));
            if !path.is_file() {
                return Err(TemplateError::NotFound(path.display().to_string()));
            }
            let source =
                fs::read_to_string(&path).map_err(|source| TemplateError::Io { path, source })?;
            set.insert(Template::new(name, source));
        }

        tracing::debug!("Loaded {} templates from {:?}", set.templates.len(), dir);
        Ok(set)
    }

    /// Build a set from in-memory `(name, source)` pairs
    pub fn from_sources<I, N, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for (name, source) in sources {
            set.insert(Template::new(name, source));
        }
        set
    }

    pub fn insert(&mut self, template: Template) {
        self.templates.insert(template.name.clone(), template);
    }

    pub fn get(&self, name: &str) -> Result<&Template, TemplateError> {
        self.templates
            .get(name)
            .ok_or_else(|| TemplateError::NotFound(name.to_string()))
    }

    /// Template text inserted as-is, without slot processing
    pub fn raw(&self, name: &str) -> Result<&str, TemplateError> {
        self.get(name).map(Template::source)
    }

    pub fn render(&self, name: &str, slots: &Slots) -> Result<String, TemplateError> {
        self.get(name)?.render(slots)
    }
}
