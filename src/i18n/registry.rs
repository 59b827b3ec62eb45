//! Language registry: single source of truth for the declared languages.
//!
//! Uses a singleton with `OnceLock` for thread-safe lazy initialization. The
//! registry is immutable after first access; adding a language means adding
//! an entry here *and* a catalog file under the translation directory.

use std::sync::OnceLock;

/// Configuration for a declared language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "de")
    pub code: &'static str,

    /// English name of the language
    pub name: &'static str,

    /// Native name of the language
    pub native_name: &'static str,

    /// Whether this is the canonical/source language (only one should be true)
    pub is_canonical: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: declared_languages(),
        })
    }

    /// Look up a language configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All enabled languages.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// All declared languages, including disabled ones.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// The canonical language: the source every catalog is translated from.
    ///
    /// # Panics
    /// Panics if zero or several canonical languages are declared; that is a
    /// configuration error, not a runtime condition.
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language declared in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages declared in registry"),
        }
    }

    /// Whether a code names a declared, enabled language.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

/// The declared languages of the admin UI. One catalog file ships per entry.
fn declared_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_canonical: true,
            enabled: true,
        },
        LanguageConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            is_canonical: false,
            enabled: true,
        },
        LanguageConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            is_canonical: false,
            enabled: true,
        },
        LanguageConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            is_canonical: false,
            enabled: true,
        },
        LanguageConfig {
            code: "ja",
            name: "Japanese",
            native_name: "日本語",
            is_canonical: false,
            enabled: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_known_language() {
        let registry = LanguageRegistry::get();
        let config = registry.get_by_code("de").expect("declared");

        assert_eq!(config.code, "de");
        assert_eq!(config.name, "German");
        assert_eq!(config.native_name, "Deutsch");
        assert!(!config.is_canonical);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_unknown_language() {
        let registry = LanguageRegistry::get();
        assert!(registry.get_by_code("xx").is_none());
    }

    #[test]
    fn test_canonical_is_english() {
        let registry = LanguageRegistry::get();
        let canonical = registry.canonical();

        assert_eq!(canonical.code, "en");
        assert!(canonical.is_canonical);
    }

    #[test]
    fn test_exactly_one_canonical_language() {
        let registry = LanguageRegistry::get();
        let canonical_count = registry
            .list_all()
            .iter()
            .filter(|lang| lang.is_canonical)
            .count();

        assert_eq!(canonical_count, 1);
    }

    #[test]
    fn test_language_codes_are_unique() {
        let registry = LanguageRegistry::get();
        let all = registry.list_all();
        let mut codes: Vec<_> = all.iter().map(|lang| lang.code).collect();
        codes.sort_unstable();
        codes.dedup();

        assert_eq!(codes.len(), all.len());
    }

    #[test]
    fn test_is_enabled() {
        let registry = LanguageRegistry::get();
        assert!(registry.is_enabled("en"));
        assert!(registry.is_enabled("ja"));
        assert!(!registry.is_enabled("xx"));
    }
}
