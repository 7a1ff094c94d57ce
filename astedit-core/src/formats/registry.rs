//! Format registry
//!
//! Formats implement [Formatter] and are registered by name with a [FormatRegistry]. The
//! registry built by [FormatRegistry::with_defaults] knows every built-in format.

use crate::estree::SyntaxTree;
use crate::navigation::FocusPath;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("format '{0}' not found")]
    FormatNotFound(String),
    #[error("serialization error: {0}")]
    SerializationError(String),
}

/// A way of printing a tree with its current focus.
pub trait Formatter: Send + Sync {
    /// The name the format is selected by (e.g. "text", "treeviz").
    fn name(&self) -> &str;

    fn serialize(&self, tree: &SyntaxTree, focus: &FocusPath) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

/// User-adjustable knobs of the built-in formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// One level of indentation in `text` output.
    pub indent_string: String,
    /// Labels in `treeviz` output are cut after this many characters.
    pub label_width: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            indent_string: "  ".to_string(),
            label_width: 30,
        }
    }
}

pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any existing one with the same name.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Print `tree` in the named format.
    pub fn serialize(
        &self,
        tree: &SyntaxTree,
        focus: &FocusPath,
        format: &str,
    ) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(tree, focus)
    }

    /// All format names, sorted.
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Name and description of every format, sorted by name.
    pub fn describe_formats(&self) -> Vec<(String, String)> {
        self.list_formats()
            .into_iter()
            .map(|name| {
                let description = self
                    .get(&name)
                    .map(|f| f.description().to_string())
                    .unwrap_or_default();
                (name, description)
            })
            .collect()
    }

    /// The built-in formats, configured with `options`.
    pub fn with_options(options: &FormatOptions) -> Self {
        let mut registry = Self::new();
        registry.register(super::TextFormatter::new(options.indent_string.clone()));
        registry.register(super::TagFormatter);
        registry.register(super::TreevizFormatter::new(options.label_width));
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);
        registry
    }

    pub fn with_defaults() -> Self {
        Self::with_options(&FormatOptions::default())
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
