//! The translation handle returned by a resolver.
//!
//! A handle is a value: every chained call consumes it and returns an
//! updated copy, so an intermediate handle can be cloned and finished in
//! several different ways without interference.

#[cfg(test)]
mod tests;

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use glossa_core::{Diagnostic, Errlog, Plurality, Value};
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use crate::template;

/// Field under which the count is exposed to the `few` bucket.
pub const COUNT_FIELD: &str = "Count";

/// A resolved translation, ready to be narrowed to a plural bucket,
/// given data, and rendered.
#[derive(Clone)]
pub struct T<'a> {
    value: Cow<'a, Value>,
    plural: Plurality,
    count: u64,
    data: Option<Arc<JsonValue>>,
    log: Option<&'a dyn Errlog>,
}

impl<'a> T<'a> {
    pub(crate) fn new(value: Cow<'a, Value>, log: Option<&'a dyn Errlog>) -> Self {
        Self {
            value,
            plural: Plurality::One,
            count: 0,
            data: None,
            log,
        }
    }

    /// Select the `zero` bucket.
    pub fn zero(mut self) -> Self {
        self.plural = Plurality::Zero;
        self.count = 0;
        self
    }

    /// Select the `other` bucket. The count is left as is.
    pub fn other(mut self) -> Self {
        self.plural = Plurality::Other;
        self
    }

    /// Select a bucket from `count`.
    ///
    /// `0` picks `zero`, `1` picks `one`, anything below `many` picks
    /// `few` (and keeps the count for `{{.Count}}`), the rest picks `many`.
    /// Selecting `many` does not touch the stored count.
    pub fn plural(mut self, count: u64, many: u64) -> Self {
        match count {
            0 => {
                self.plural = Plurality::Zero;
                self.count = 0;
            }
            1 => {
                self.plural = Plurality::One;
                self.count = 1;
            }
            c if c < many => {
                self.plural = Plurality::Few;
                self.count = c;
            }
            _ => self.plural = Plurality::Many,
        }
        self
    }

    /// Attach data to merge into the rendered text, replacing earlier data.
    ///
    /// If `data` fails to serialize the handle is left without data and an
    /// [`Diagnostic::InvalidData`] is reported.
    pub fn with<D>(mut self, data: &D) -> Self
    where
        D: Serialize + ?Sized,
    {
        match serde_json::to_value(data) {
            Ok(value) => self.data = Some(Arc::new(value)),
            Err(e) => {
                self.data = None;
                self.report(Diagnostic::InvalidData {
                    plural: self.plural,
                    reason: e.to_string(),
                });
            }
        }
        self
    }

    /// Attach already built JSON data.
    pub fn with_json(mut self, data: JsonValue) -> Self {
        self.data = Some(Arc::new(data));
        self
    }

    pub fn plurality(&self) -> Plurality {
        self.plural
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// The resolved value (all five buckets).
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn data(&self) -> Option<&JsonValue> {
        self.data.as_deref()
    }

    /// Render the selected bucket.
    ///
    /// `few` is always rendered as a template with `Count` available.
    /// Other buckets are rendered as templates only when data is attached,
    /// and returned verbatim otherwise.
    pub fn render(&self) -> String {
        let raw = self.value.get(self.plural);
        if self.plural == Plurality::Few {
            return self.render_template(raw, &self.few_context());
        }
        match self.data.as_deref() {
            Some(data) => self.render_template(raw, data),
            None => raw.to_string(),
        }
    }

    /// Count plus the fields of attached object data. Attached data wins
    /// if it carries its own `Count`.
    fn few_context(&self) -> JsonValue {
        let mut context = match self.data.as_deref() {
            Some(JsonValue::Object(map)) => map.clone(),
            _ => Map::new(),
        };
        context
            .entry(COUNT_FIELD)
            .or_insert_with(|| JsonValue::from(self.count));
        JsonValue::Object(context)
    }

    fn render_template(&self, src: &str, data: &JsonValue) -> String {
        let rendered = template::render(src, data);
        for warning in rendered.warnings {
            self.report(warning.into_diagnostic(src));
        }
        rendered.text
    }

    fn report(&self, diagnostic: Diagnostic) {
        if let Some(log) = self.log {
            log.log(&diagnostic);
        }
    }
}

impl fmt::Display for T<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for T<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("T")
            .field("value", &self.value)
            .field("plural", &self.plural)
            .field("count", &self.count)
            .field("data", &self.data)
            .field("log", &self.log.is_some())
            .finish()
    }
}
