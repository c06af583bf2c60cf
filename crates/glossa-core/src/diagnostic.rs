//! Soft failures reported while resolving and rendering translations.

use thiserror::Error;

use crate::value::Plurality;

/// A non-fatal problem found during lookup or rendering.
///
/// Diagnostics never interrupt the caller. They are handed to the
/// translator's [`crate::Errlog`] sink, or dropped when none is installed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// The language is registered but has no entry for the key.
    #[error("no translation match for key: {key} in language {language}, trying next language")]
    MissingKey { key: String, language: String },

    /// A language in the fallback list is not registered.
    #[error("language {language} does not exist")]
    UnknownLanguage { language: String },

    /// No language in the fallback list has the key; the key itself is rendered.
    #[error("no translation match for key: {key} in any of the languages given ({})", .languages.join(", "))]
    Unresolved { key: String, languages: Vec<String> },

    /// A bucket string has malformed placeholder syntax.
    #[error("failed parsing translation value: {template}, reason: {reason}")]
    TemplateParse { template: String, reason: String },

    /// A placeholder could not be filled from the attached data.
    #[error("failed executing template value: {template}, reason: {reason}")]
    TemplateExecute { template: String, reason: String },

    /// Data passed to `with` could not be serialized.
    #[error("failed attaching data to {plural} translation, reason: {reason}")]
    InvalidData { plural: Plurality, reason: String },
}

impl Diagnostic {
    /// Short machine-readable tag, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingKey { .. } => "missing_key",
            Self::UnknownLanguage { .. } => "unknown_language",
            Self::Unresolved { .. } => "unresolved",
            Self::TemplateParse { .. } => "template_parse",
            Self::TemplateExecute { .. } => "template_execute",
            Self::InvalidData { .. } => "invalid_data",
        }
    }
}
