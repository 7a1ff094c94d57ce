//! Shared configuration loader for the astedit tools.
//!
//! `defaults/astedit.default.toml` is embedded into every binary so that the documented
//! defaults and runtime behavior stay in sync. Applications layer user files and command
//! line overrides on top of those defaults via [`Loader`] before deserializing into
//! [`AsteditConfig`].

use astedit_core::formats::FormatOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/astedit.default.toml");

/// Top-level configuration consumed by astedit applications.
#[derive(Debug, Clone, Deserialize)]
pub struct AsteditConfig {
    pub render: RenderConfig,
    pub formats: FormatsConfig,
    pub viewer: ViewerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub default_format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormatsConfig {
    pub text: TextFormatConfig,
    pub treeviz: TreevizFormatConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextFormatConfig {
    pub indent_string: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreevizFormatConfig {
    pub label_width: usize,
}

/// Layout and timing of the interactive viewer.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewerConfig {
    pub outline_width: u16,
    pub start_in_outline: bool,
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// A tracing filter directive such as `warn` or `astedit_core=debug`.
    pub level: String,
}

impl FormatsConfig {
    /// The knobs the format registry understands.
    pub fn options(&self) -> FormatOptions {
        FormatOptions {
            indent_string: self.text.indent_string.clone(),
            label_width: self.treeviz.label_width,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer the per-user file, if the platform has a place for it.
    pub fn with_user_file(self) -> Self {
        match user_config_path() {
            Some(path) => self.with_optional_file(path),
            None => self,
        }
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<AsteditConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// `$XDG_CONFIG_HOME/astedit/config.toml`, falling back to `~/.config/astedit/config.toml`.
pub fn user_config_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(base.join("astedit").join("config.toml"))
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<AsteditConfig, ConfigError> {
    Loader::new().build()
}
