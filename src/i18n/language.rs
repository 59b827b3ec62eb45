//! Validated language type backed by the registry.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};

/// A language that has been validated against the registry. Only declared,
/// enabled languages can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };

    /// Create a Language from a language code string.
    ///
    /// Fails for unknown codes and for declared-but-disabled languages.
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language {
                code: config.code, // Use the static str from the registry
            }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The canonical (source) language all catalogs are translated from.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Full registry configuration for this language.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for a properly constructed `Language`.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_valid() {
        let language = Language::from_code("fr").expect("Should succeed");
        assert_eq!(language.code(), "fr");
        assert_eq!(language.name(), "French");
        assert!(!language.is_canonical());
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("xx");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_canonical_returns_english() {
        let canonical = Language::canonical();
        assert_eq!(canonical.code(), "en");
        assert!(canonical.is_canonical());
    }

    #[test]
    fn test_constant_matches_from_code() {
        let from_code = Language::from_code("en").unwrap();
        assert_eq!(Language::ENGLISH, from_code);
    }

    #[test]
    fn test_native_name() {
        let german = Language::from_code("de").unwrap();
        assert_eq!(german.native_name(), "Deutsch");
    }
}
