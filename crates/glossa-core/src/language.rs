//! A loaded language: an identifier plus its flat key table.

use std::collections::HashMap;

use crate::value::Value;

/// Translations for a single language.
///
/// Keys are flat strings. Dots in a key such as `apple.count` are literal
/// characters, not nesting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Language {
    id: String,
    keys: HashMap<String, Value>,
}

impl Language {
    /// Create an empty language with the given identifier (e.g. `"en-us"`).
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            keys: HashMap::new(),
        }
    }

    /// Create a language from an already built key table.
    pub fn with_keys(id: impl Into<String>, keys: HashMap<String, Value>) -> Self {
        Self {
            id: id.into(),
            keys,
        }
    }

    /// Language identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Insert or replace the value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.keys.insert(key.into(), value);
    }

    /// Look up the value for `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.keys.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains_key(key)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.keys.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Iterate over `(key, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.keys.iter().map(|(k, v)| (k.as_str(), v))
    }
}
