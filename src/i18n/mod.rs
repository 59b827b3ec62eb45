//! Internationalization (i18n) for the admin UI.
//!
//! All language-related logic lives here:
//!
//! - `registry`: single source of truth for the declared languages
//! - `language`: validated language type backed by the registry
//! - `catalog`: file-backed translation catalog (one JSON file per language)
//! - `validator`: catalog consistency checks (key sets, placeholders)
//!
//! The bundled translation files and the registry must stay in lockstep:
//! every declared language has exactly one catalog file, and every catalog
//! covers the canonical key set. Tests enforce this.

mod catalog;
mod language;
mod registry;
mod validator;

pub use catalog::{Catalog, TRANSLATION_FILE_EXT};
pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use validator::{CatalogValidator, ValidationReport};
