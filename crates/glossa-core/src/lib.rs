//! # glossa-core
//!
//! Core types, diagnostics, configuration, and error handling shared by the
//! glossa translator.

pub mod config;
pub mod diagnostic;
pub mod error;
pub mod language;
pub mod traits;
pub mod value;

pub use diagnostic::Diagnostic;
pub use error::GlossaError;
pub use language::Language;
pub use traits::{Errlog, TracingLog};
pub use value::{Plurality, Value};
