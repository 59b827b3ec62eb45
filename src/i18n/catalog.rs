//! File-backed translation catalog.
//!
//! The translation directory holds one flat `<code>.json` key→string map per
//! declared language. Lookups fall back to the canonical language and then to
//! the key itself, so a missing string never breaks the UI — the validator
//! and the bundled-catalog tests exist to keep that fallback from ever firing
//! in a release.

use crate::i18n::{Language, LanguageRegistry};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Extension of translation resource files.
pub const TRANSLATION_FILE_EXT: &str = "json";

/// All loaded translations, keyed by language code.
#[derive(Debug, Clone)]
pub struct Catalog {
    strings: HashMap<&'static str, HashMap<String, String>>,
}

impl Catalog {
    /// Load the catalog for every enabled language from `dir`.
    ///
    /// A declared language without a parseable file is an error; the bundle
    /// and the registry are expected to be in lockstep.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut strings = HashMap::new();

        for lang in LanguageRegistry::get().list_enabled() {
            let path = dir.join(format!("{}.{}", lang.code, TRANSLATION_FILE_EXT));
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read translation file {}", path.display()))?;
            let map: HashMap<String, String> = serde_json::from_str(&raw)
                .with_context(|| format!("Invalid translation file {}", path.display()))?;
            strings.insert(lang.code, map);
        }

        Ok(Self { strings })
    }

    /// Look up a string, falling back to the canonical language, then to the
    /// key itself.
    pub fn get<'a>(&'a self, language: Language, key: &'a str) -> &'a str {
        if let Some(value) = self.strings.get(language.code()).and_then(|m| m.get(key)) {
            return value;
        }

        self.strings
            .get(Language::canonical().code())
            .and_then(|m| m.get(key))
            .map(String::as_str)
            .unwrap_or(key)
    }

    /// Look up a string and substitute `{name}` placeholders.
    pub fn format(&self, language: Language, key: &str, args: &[(&str, &str)]) -> String {
        let mut value = self.get(language, key).to_string();
        for (name, replacement) in args {
            value = value.replace(&format!("{{{}}}", name), replacement);
        }
        value
    }

    /// The key→string map for one language, if loaded.
    pub fn strings_for(&self, language: Language) -> Option<&HashMap<String, String>> {
        self.strings.get(language.code())
    }

    /// Count the translation resource files present in `dir`.
    pub fn translation_file_count(dir: impl AsRef<Path>) -> Result<usize> {
        let dir = dir.as_ref();
        let entries = fs::read_dir(dir)
            .with_context(|| format!("Failed to read translation directory {}", dir.display()))?;

        let mut count = 0;
        for entry in entries {
            let entry = entry?;
            if entry
                .path()
                .extension()
                .is_some_and(|ext| ext == TRANSLATION_FILE_EXT)
            {
                count += 1;
            }
        }
        Ok(count)
    }
}
