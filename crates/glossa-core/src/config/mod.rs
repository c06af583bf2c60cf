mod defaults;


use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::GlossaError;
use defaults::*;

/// Top-level glossa configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub translations: TranslationsConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// Where translation files live and which languages to try by default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationsConfig {
    /// Directory holding one file per language, named `<language-id>.<ext>`.
    #[serde(default = "default_dir")]
    pub dir: String,
    /// Default fallback chain, highest priority first.
    #[serde(default = "default_fallback")]
    pub fallback: Vec<String>,
    /// File extensions treated as translation files.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for TranslationsConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            fallback: default_fallback(),
            extensions: default_extensions(),
        }
    }
}

impl TranslationsConfig {
    /// `dir` with a leading `~/` expanded.
    pub fn dir_path(&self) -> PathBuf {
        PathBuf::from(shellexpand(&self.dir))
    }
}

/// Diagnostic reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    /// Report missing keys and template failures through `tracing` (default: true).
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Parse configuration from a TOML string.
pub fn from_toml(content: &str) -> Result<Config, GlossaError> {
    toml::from_str(content).map_err(|e| GlossaError::Config(format!("failed to parse config: {e}")))
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: impl AsRef<Path>) -> Result<Config, GlossaError> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| GlossaError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    from_toml(&content)
}
