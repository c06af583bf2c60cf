//! Language registry and fallback-chain resolution.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use glossa_core::config::Config;
use glossa_core::{Diagnostic, Errlog, GlossaError, Language, TracingLog, Value};
use tracing::info;

use crate::handle::T;
use crate::yaml;

/// Owns the loaded languages and the optional diagnostic sink.
///
/// The language set is fixed once built. A `Translator` is `Send + Sync`
/// and can be shared across threads for lookups.
#[derive(Default)]
pub struct Translator {
    langs: HashMap<String, Language>,
    log: Option<Arc<dyn Errlog>>,
}

impl Translator {
    /// Index `languages` by id. A later language with the same id replaces
    /// an earlier one.
    pub fn new<I>(languages: I) -> Self
    where
        I: IntoIterator<Item = Language>,
    {
        let langs = languages
            .into_iter()
            .map(|lang| (lang.id().to_string(), lang))
            .collect();
        Self { langs, log: None }
    }

    /// Load every translation file of the configured directory.
    ///
    /// Installs [`TracingLog`] when diagnostics are enabled.
    pub fn from_config(config: &Config) -> Result<Self, GlossaError> {
        let translations = &config.translations;
        let dir = translations.dir_path();
        let languages = yaml::load_dir(&dir, translations.extensions.as_slice())?;
        let mut translator = Self::new(languages);
        if config.diagnostics.enabled {
            translator.set_log(TracingLog);
        }
        info!(
            "translator: {} languages from {}",
            translator.len(),
            dir.display()
        );
        Ok(translator)
    }

    /// Install the diagnostic sink. Without one, diagnostics are dropped.
    pub fn set_log(&mut self, log: impl Errlog + 'static) {
        self.log = Some(Arc::new(log));
    }

    /// Builder form of [`Translator::set_log`].
    pub fn with_log(mut self, log: impl Errlog + 'static) -> Self {
        self.set_log(log);
        self
    }

    pub fn language(&self, id: &str) -> Option<&Language> {
        self.langs.get(id)
    }

    /// Registered language ids, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.langs.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.langs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.langs.is_empty()
    }

    /// A resolver over `languages`, highest priority first.
    pub fn resolver<I, S>(&self, languages: I) -> Resolver<'_>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Resolver {
            translator: self,
            languages: languages.into_iter().map(Into::into).collect(),
        }
    }

    /// Translation function over `languages`, highest priority first.
    ///
    /// ```
    /// use glossa::{Language, Translator, Value};
    ///
    /// let mut en = Language::new("en-us");
    /// en.insert("title", Value::uniform("One world"));
    /// let translator = Translator::new([en]);
    ///
    /// let t = translator.tfunc(&["da-dk", "en-us"]);
    /// assert_eq!(t("title").to_string(), "One world");
    /// assert_eq!(t("missing.key").to_string(), "missing.key");
    /// ```
    pub fn tfunc<'a>(&'a self, languages: &[&str]) -> impl Fn(&str) -> T<'a> + 'a {
        let resolver = self.resolver(languages.iter().copied());
        move |key: &str| resolver.t(key)
    }

    fn sink(&self) -> Option<&dyn Errlog> {
        self.log.as_deref()
    }

    fn report(&self, diagnostic: Diagnostic) {
        if let Some(log) = self.sink() {
            log.log(&diagnostic);
        }
    }
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("languages", &self.languages())
            .field("log", &self.log.is_some())
            .finish()
    }
}

/// Looks keys up across an ordered list of languages.
#[derive(Debug, Clone)]
pub struct Resolver<'a> {
    translator: &'a Translator,
    languages: Vec<String>,
}

impl<'a> Resolver<'a> {
    /// The fallback chain, highest priority first.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Resolve `key`.
    ///
    /// The first language holding the key wins. Misses and unknown
    /// languages are reported and skipped. When nothing matches, the
    /// returned handle renders the key itself in every bucket.
    pub fn t(&self, key: &str) -> T<'a> {
        let translator = self.translator;
        for id in &self.languages {
            match translator.langs.get(id) {
                Some(lang) => {
                    if let Some(value) = lang.get(key) {
                        return T::new(Cow::Borrowed(value), translator.sink());
                    }
                    translator.report(Diagnostic::MissingKey {
                        key: key.to_string(),
                        language: id.clone(),
                    });
                }
                None => translator.report(Diagnostic::UnknownLanguage {
                    language: id.clone(),
                }),
            }
        }

        translator.report(Diagnostic::Unresolved {
            key: key.to_string(),
            languages: self.languages.clone(),
        });
        T::new(Cow::Owned(Value::uniform(key)), translator.sink())
    }
}
