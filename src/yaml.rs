//! YAML translation files.
//!
//! A file is a flat mapping from key to the five optional buckets:
//!
//! ```yaml
//! apple.count:
//!   zero: No apples
//!   one: 1 apple
//!   few: "{{.Count}} apples"
//!   many: Many apples
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use glossa_core::{GlossaError, Language, Plurality, Value};
use serde_yml::Value as YamlValue;
use tracing::{debug, info};

use crate::template::{Template, TemplateError};

/// Read `reader` to the end and parse it as the language `id`.
///
/// Bytes that are not valid UTF-8 are a [`GlossaError::Parse`], not a read failure.
pub fn load_yaml<R: Read>(mut reader: R, id: &str) -> Result<Language, GlossaError> {
    let mut content = Vec::new();
    reader.read_to_end(&mut content)?;
    parse_yaml_bytes(&content, id)
}

/// Parse `content` as the language `id`.
///
/// A document holding only comments and blank lines, or only `~`, is an
/// empty language. Merge keys (`<<: *anchor`) are applied.
pub fn parse_yaml(content: &str, id: &str) -> Result<Language, GlossaError> {
    parse_yaml_bytes(content.as_bytes(), id)
}

fn parse_yaml_bytes(content: &[u8], id: &str) -> Result<Language, GlossaError> {
    if std::str::from_utf8(content).is_ok_and(is_blank_document) {
        debug!("yaml: {id} is empty");
        return Ok(Language::new(id));
    }
    let mut doc: YamlValue = serde_yml::from_slice(content)?;
    if doc.is_null() {
        debug!("yaml: {id} is null");
        return Ok(Language::new(id));
    }
    doc.apply_merge()?;
    let keys: HashMap<String, Value> = serde_yml::from_value(doc)?;
    debug!("yaml: loaded {} keys for {id}", keys.len());
    Ok(Language::with_keys(id, keys))
}

fn is_blank_document(content: &str) -> bool {
    content
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#') || line == "---")
}

/// Load one file; the language id is the file stem (`locales/en-us.yaml` → `en-us`).
pub fn load_yaml_file(path: impl AsRef<Path>) -> Result<Language, GlossaError> {
    let path = path.as_ref();
    let id = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file = File::open(path)?;
    load_yaml(BufReader::new(file), &id)
}

/// Load every file in `dir` whose extension is one of `extensions`.
///
/// Files are loaded in file-name order. The first unreadable or malformed
/// file fails the whole load.
pub fn load_dir<S: AsRef<str>>(
    dir: impl AsRef<Path>,
    extensions: &[S],
) -> Result<Vec<Language>, GlossaError> {
    let dir = dir.as_ref();
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_extension(path, extensions))
        .collect();
    paths.sort();

    let languages = paths
        .iter()
        .map(|path| load_yaml_file(path))
        .collect::<Result<Vec<_>, _>>()?;
    info!("yaml: loaded {} languages from {}", languages.len(), dir.display());
    Ok(languages)
}

fn has_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    extensions
        .iter()
        .any(|want| want.as_ref().eq_ignore_ascii_case(ext))
}

/// A bucket whose placeholder syntax does not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateIssue {
    pub key: String,
    pub plural: Plurality,
    pub error: TemplateError,
}

/// Strict-parse every non-empty bucket of `language`.
///
/// Rendering tolerates broken placeholders; this surfaces them when the
/// file is loaded instead. Issues come back sorted by key, then bucket.
pub fn check_templates(language: &Language) -> Vec<TemplateIssue> {
    let mut entries: Vec<(&str, &Value)> = language.iter().collect();
    entries.sort_unstable_by_key(|(key, _)| *key);

    let mut issues = Vec::new();
    for (key, value) in entries {
        for plural in Plurality::ALL {
            let src = value.get(plural);
            if src.is_empty() {
                continue;
            }
            if let Err(error) = Template::parse(src) {
                issues.push(TemplateIssue {
                    key: key.to_string(),
                    plural,
                    error,
                });
            }
        }
    }
    issues
}
