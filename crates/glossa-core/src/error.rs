use thiserror::Error;

/// Top-level error type for glossa.
///
/// Only loading translation files and reading configuration fail hard.
/// Lookup and rendering report through [`crate::Diagnostic`] instead.
#[derive(Debug, Error)]
pub enum GlossaError {
    /// The translation stream or file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A translation document is not a valid key/value YAML mapping.
    #[error("parse error: {0}")]
    Parse(#[from] serde_yml::Error),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),
}
