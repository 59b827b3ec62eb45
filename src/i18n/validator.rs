//! Catalog consistency validation.
//!
//! Checks a translated catalog against the canonical one: the key sets must
//! match, and `{placeholder}` tokens must survive translation (a lost
//! placeholder renders literally broken UI text).

use regex::Regex;
use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

/// Validation report for one translated catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    /// Problems that make the catalog unusable (missing keys, lost placeholders)
    pub errors: Vec<String>,

    /// Non-fatal oddities (stray keys not present in the canonical catalog)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

/// Validator comparing translated catalogs to the canonical one.
pub struct CatalogValidator;

impl CatalogValidator {
    /// Validate a translated key→string map against the canonical map.
    pub fn validate(
        canonical: &HashMap<String, String>,
        translated: &HashMap<String, String>,
    ) -> ValidationReport {
        let mut report = ValidationReport::new();

        for (key, canonical_value) in canonical {
            let Some(translated_value) = translated.get(key) else {
                report.errors.push(format!("Missing key: {}", key));
                continue;
            };

            let expected = Self::extract_placeholders(canonical_value);
            let found = Self::extract_placeholders(translated_value);
            if expected != found {
                report.errors.push(format!(
                    "Placeholder mismatch for {}: expected {:?}, found {:?}",
                    key, expected, found
                ));
            }
        }

        for key in translated.keys() {
            if !canonical.contains_key(key) {
                report.warnings.push(format!("Stray key: {}", key));
            }
        }

        report
    }

    /// Extract the set of `{placeholder}` names from a string.
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex =
            PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([a-z][a-z0-9_]*)\}").unwrap());

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_clean_report() {
        let report = ValidationReport::new();
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
        assert!(report.is_clean());
    }

    #[test]
    fn test_identical_catalogs_are_clean() {
        let canonical = map(&[("DELETE", "Delete"), ("CANCEL", "Cancel")]);
        let report = CatalogValidator::validate(&canonical, &canonical.clone());
        assert!(report.is_clean());
    }

    // ==================== Key Set Tests ====================

    #[test]
    fn test_missing_key_is_an_error() {
        let canonical = map(&[("DELETE", "Delete"), ("CANCEL", "Cancel")]);
        let translated = map(&[("DELETE", "Löschen")]);

        let report = CatalogValidator::validate(&canonical, &translated);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("CANCEL"));
    }

    #[test]
    fn test_stray_key_is_a_warning() {
        let canonical = map(&[("DELETE", "Delete")]);
        let translated = map(&[("DELETE", "Löschen"), ("OLD_KEY", "Alt")]);

        let report = CatalogValidator::validate(&canonical, &translated);
        assert!(!report.has_errors());
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("OLD_KEY"));
    }

    // ==================== Placeholder Tests ====================

    #[test]
    fn test_preserved_placeholders_are_clean() {
        let canonical = map(&[("PROMPT", "Delete {path}?")]);
        let translated = map(&[("PROMPT", "{path} wirklich löschen?")]);

        let report = CatalogValidator::validate(&canonical, &translated);
        assert!(report.is_clean());
    }

    #[test]
    fn test_lost_placeholder_is_an_error() {
        let canonical = map(&[("PROMPT", "Delete {path}?")]);
        let translated = map(&[("PROMPT", "Wirklich löschen?")]);

        let report = CatalogValidator::validate(&canonical, &translated);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("path"));
    }

    #[test]
    fn test_renamed_placeholder_is_an_error() {
        let canonical = map(&[("PROMPT", "Delete {path}?")]);
        let translated = map(&[("PROMPT", "Supprimer {chemin} ?")]);

        let report = CatalogValidator::validate(&canonical, &translated);
        assert!(report.has_errors());
    }

    #[test]
    fn test_extract_placeholders() {
        let found = CatalogValidator::extract_placeholders("Move {path} to {target_path}");
        let expected: BTreeSet<String> =
            ["path".to_string(), "target_path".to_string()].into_iter().collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_extract_ignores_non_placeholder_braces() {
        let found = CatalogValidator::extract_placeholders("Literal {} and {Upper} stay out");
        assert!(found.is_empty());
    }
}
