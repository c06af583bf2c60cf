//! Translated values and the plural buckets that select between them.

use serde::{Deserialize, Deserializer, Serialize};

/// Plural bucket used to pick one variant of a [`Value`].
///
/// A fixed, closed set. Not CLDR plural categories.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plurality {
    Zero,
    /// The bucket every freshly resolved translation starts in.
    #[default]
    One,
    Few,
    Many,
    Other,
}

impl Plurality {
    /// All buckets, in declaration order.
    pub const ALL: [Plurality; 5] = [
        Plurality::Zero,
        Plurality::One,
        Plurality::Few,
        Plurality::Many,
        Plurality::Other,
    ];

    /// Lowercase bucket name as it appears in translation files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for Plurality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The translated variants of a single key, one per plural bucket.
///
/// Any bucket may be empty; a missing bucket in a translation file
/// deserializes to `""`. Strings may contain `{{.Field}}` placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Value {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub zero: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub one: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub few: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub many: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub other: String,
}

impl Value {
    /// A value whose five buckets all hold `text`.
    ///
    /// Used when a key resolves nowhere: the key itself is rendered.
    pub fn uniform(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            zero: text.clone(),
            one: text.clone(),
            few: text.clone(),
            many: text.clone(),
            other: text,
        }
    }

    /// The raw string stored for `plural`.
    pub fn get(&self, plural: Plurality) -> &str {
        match plural {
            Plurality::Zero => &self.zero,
            Plurality::One => &self.one,
            Plurality::Few => &self.few,
            Plurality::Many => &self.many,
            Plurality::Other => &self.other,
        }
    }
}

/// `few: ~` in a translation file means an empty bucket.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
