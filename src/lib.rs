//! # glossa
//!
//! Key-based translation lookup across an ordered fallback chain of
//! languages, with five fixed plural buckets (`zero`, `one`, `few`, `many`,
//! `other`) and `{{.Field}}` templates merged against serde data.
//!
//! ```
//! use glossa::{load_yaml, Translator};
//! use serde_json::json;
//!
//! let en = load_yaml(
//!     r#"
//! apple.count:
//!   zero: No apples
//!   one: 1 apple
//!   few: "{{.Count}} apples"
//!   many: Many apples
//!   other: "{{.Who}}'s apples"
//! "#
//!     .as_bytes(),
//!     "en-us",
//! )?;
//!
//! let translator = Translator::new([en]);
//! let t = translator.tfunc(&["en-us"]);
//!
//! assert_eq!(t("apple.count").to_string(), "1 apple");
//! assert_eq!(t("apple.count").plural(0, 10).to_string(), "No apples");
//! assert_eq!(t("apple.count").plural(5, 10).to_string(), "5 apples");
//! assert_eq!(t("apple.count").plural(11, 10).to_string(), "Many apples");
//! assert_eq!(
//!     t("apple.count").with(&json!({"Who": "Ada"})).other().to_string(),
//!     "Ada's apples"
//! );
//! # Ok::<(), glossa::GlossaError>(())
//! ```
//!
//! Lookups and rendering never fail: a missing key renders as the key
//! itself and a broken placeholder renders empty. Both are reported to the
//! optional [`Errlog`] sink set with [`Translator::set_log`].

pub mod handle;
pub mod template;
pub mod translator;
pub mod yaml;

pub use glossa_core::{config, Diagnostic, Errlog, GlossaError, Language, Plurality, TracingLog, Value};
pub use handle::T;
pub use template::{Rendered, Template, TemplateError};
pub use translator::{Resolver, Translator};
pub use yaml::{check_templates, load_dir, load_yaml, load_yaml_file, parse_yaml, TemplateIssue};
