//! `{{.Field}}` templates merged against serde data.
//!
//! Supported actions: `{{.}}` (the whole data value), `{{.Field}}` and
//! nested `{{.A.B}}` field access, `{{/* comments */}}`, and the `{{- `
//! / ` -}}` whitespace trim markers.
//!
//! # Failure Modes
//!
//! | Failure | Behavior |
//! |---------|----------|
//! | Unclosed `{{` | Remainder emitted literally |
//! | Unsupported action | Substitutes empty |
//! | Missing field | Substitutes empty |
//! | Field access on a non-object | Substitutes empty |
//!
//! [`render`] never fails: problems come back as warnings next to the
//! partial output. [`Template::parse`] and [`Template::execute`] are the
//! strict variants for validating translation files.

mod parse;


use glossa_core::Diagnostic;
use serde_json::Value as JsonValue;
use thiserror::Error;

/// Why a placeholder could not be parsed or filled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// `{{` without a matching `}}`.
    #[error("unclosed action starting at byte {offset}")]
    Unclosed { offset: usize },

    /// Anything between `{{` and `}}` other than a field path or comment.
    #[error("unsupported action {{{{{action}}}}} at byte {offset}")]
    UnsupportedAction { action: String, offset: usize },

    /// The data has no entry for a referenced field.
    #[error("map has no entry for key {path}")]
    MissingField { path: String },

    /// A field was accessed on a value that is not an object.
    #[error("can't evaluate field {path}: {parent} is not an object")]
    NotAnObject { path: String, parent: String },
}

impl TemplateError {
    /// Whether the error comes from parsing rather than executing.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Unclosed { .. } | Self::UnsupportedAction { .. })
    }

    pub(crate) fn into_diagnostic(self, template: &str) -> Diagnostic {
        let reason = self.to_string();
        let template = template.to_string();
        if self.is_parse() {
            Diagnostic::TemplateParse { template, reason }
        } else {
            Diagnostic::TemplateExecute { template, reason }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Text(String),
    /// Field path; empty means the data value itself.
    Field(Vec<String>),
}

/// A parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    nodes: Vec<Node>,
}

/// Best-effort render output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// The merged text, with failing placeholders left empty.
    pub text: String,
    /// Every problem met on the way, in source order.
    pub warnings: Vec<TemplateError>,
}

impl Rendered {
    /// `true` when no warning was raised.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

impl Template {
    /// Parse `src`, failing on the first malformed action.
    pub fn parse(src: &str) -> Result<Self, TemplateError> {
        let (template, errors) = Self::parse_lenient(src);
        match errors.into_iter().next() {
            Some(e) => Err(e),
            None => Ok(template),
        }
    }

    fn parse_lenient(src: &str) -> (Self, Vec<TemplateError>) {
        let (nodes, errors) = parse::parse(src);
        (Self { nodes }, errors)
    }

    /// Whether the template has no placeholders at all.
    pub fn is_plain(&self) -> bool {
        self.nodes.iter().all(|n| matches!(n, Node::Text(_)))
    }

    /// Merge `data`, failing on the first placeholder that can't be filled.
    pub fn execute(&self, data: &JsonValue) -> Result<String, TemplateError> {
        let rendered = self.render(data);
        match rendered.warnings.into_iter().next() {
            Some(e) => Err(e),
            None => Ok(rendered.text),
        }
    }

    /// Merge `data`, leaving unfillable placeholders empty.
    pub fn render(&self, data: &JsonValue) -> Rendered {
        let mut text = String::new();
        let mut warnings = Vec::new();
        for node in &self.nodes {
            match node {
                Node::Text(s) => text.push_str(s),
                Node::Field(path) => match lookup(data, path) {
                    Ok(value) => write_value(&mut text, value),
                    Err(e) => warnings.push(e),
                },
            }
        }
        Rendered { text, warnings }
    }
}

/// Parse and merge `src` against `data` in one best-effort pass.
pub fn render(src: &str, data: &JsonValue) -> Rendered {
    if !src.contains("{{") {
        return Rendered {
            text: src.to_string(),
            warnings: Vec::new(),
        };
    }
    let (template, mut warnings) = Template::parse_lenient(src);
    let rendered = template.render(data);
    warnings.extend(rendered.warnings);
    Rendered {
        text: rendered.text,
        warnings,
    }
}

fn lookup<'d>(data: &'d JsonValue, path: &[String]) -> Result<&'d JsonValue, TemplateError> {
    let mut current = data;
    for (i, field) in path.iter().enumerate() {
        current = match current {
            JsonValue::Object(map) => map.get(field).ok_or_else(|| TemplateError::MissingField {
                path: dotted(&path[..=i]),
            })?,
            _ => {
                return Err(TemplateError::NotAnObject {
                    path: dotted(&path[..=i]),
                    parent: dotted(&path[..i]),
                })
            }
        };
    }
    Ok(current)
}

fn dotted(path: &[String]) -> String {
    if path.is_empty() {
        ".".to_string()
    } else {
        format!(".{}", path.join("."))
    }
}

fn write_value(out: &mut String, value: &JsonValue) {
    match value {
        JsonValue::Null => {}
        JsonValue::String(s) => out.push_str(s),
        other => out.push_str(&other.to_string()),
    }
}
