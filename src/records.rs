use serde::{Deserialize, Serialize};

/// Alt selector for the primary (default) language variant of a record.
pub const PRIMARY_ALT: &str = "_primary";

/// One language variant of a record as reported by the admin API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alternative {
    pub alt: String,
    pub exists: bool,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub name: Option<String>,
}

/// A child page or attachment summary. Opaque to the delete logic; the id and
/// label are only carried for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordChild {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
}

/// Deletion metadata for a record, returned by `GET /recordinfo`.
///
/// Immutable per fetch: the page replaces the whole value on re-fetch and
/// never mutates fields in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordInfo {
    pub can_be_deleted: bool,
    pub is_attachment: bool,
    #[serde(default)]
    pub alts: Vec<Alternative>,
    #[serde(default)]
    pub children: Vec<RecordChild>,
    #[serde(default)]
    pub attachments: Vec<RecordChild>,
}

impl RecordInfo {
    /// Number of alts that actually exist in the store.
    pub fn existing_alt_count(&self) -> usize {
        self.alts.iter().filter(|a| a.exists).count()
    }

    /// True when the record has more than one existing language variant.
    pub fn has_alts(&self) -> bool {
        self.existing_alt_count() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alt(code: &str, exists: bool) -> Alternative {
        Alternative {
            alt: code.to_string(),
            exists,
            is_primary: code == PRIMARY_ALT,
            name: None,
        }
    }

    // ==================== Deserialization Tests ====================

    #[test]
    fn test_record_info_deserialization_full() {
        let json = r#"{
            "can_be_deleted": true,
            "is_attachment": false,
            "alts": [
                {"alt": "_primary", "exists": true, "is_primary": true, "name": "English"},
                {"alt": "de", "exists": true, "name": "German"}
            ],
            "children": [{"id": "about", "label": "About"}],
            "attachments": [{"id": "hero.jpg"}]
        }"#;

        let info: RecordInfo = serde_json::from_str(json).expect("Should deserialize");
        assert!(info.can_be_deleted);
        assert!(!info.is_attachment);
        assert_eq!(info.alts.len(), 2);
        assert_eq!(info.children.len(), 1);
        assert_eq!(info.attachments.len(), 1);
        assert_eq!(info.attachments[0].id, "hero.jpg");
        assert!(info.attachments[0].label.is_none());
    }

    #[test]
    fn test_record_info_deserialization_minimal() {
        let json = r#"{"can_be_deleted": false, "is_attachment": false}"#;

        let info: RecordInfo = serde_json::from_str(json).expect("Should deserialize");
        assert!(!info.can_be_deleted);
        assert!(info.alts.is_empty());
        assert!(info.children.is_empty());
        assert!(info.attachments.is_empty());
    }

    #[test]
    fn test_record_info_tolerates_unknown_fields() {
        let json = r#"{
            "can_be_deleted": true,
            "is_attachment": true,
            "label": "hero.jpg",
            "url_path": "/gallery/hero.jpg",
            "exists": true
        }"#;

        let info: RecordInfo = serde_json::from_str(json).expect("Should deserialize");
        assert!(info.is_attachment);
    }

    // ==================== Alt Counting Tests ====================

    #[test]
    fn test_existing_alt_count_ignores_missing_alts() {
        let info = RecordInfo {
            can_be_deleted: true,
            is_attachment: false,
            alts: vec![alt(PRIMARY_ALT, true), alt("de", false), alt("fr", true)],
            children: vec![],
            attachments: vec![],
        };

        assert_eq!(info.existing_alt_count(), 2);
        assert!(info.has_alts());
    }

    #[test]
    fn test_has_alts_false_for_single_existing_alt() {
        let info = RecordInfo {
            can_be_deleted: true,
            is_attachment: false,
            alts: vec![alt(PRIMARY_ALT, true), alt("de", false)],
            children: vec![],
            attachments: vec![],
        };

        assert!(!info.has_alts());
    }

    #[test]
    fn test_has_alts_false_for_no_alts() {
        let info = RecordInfo {
            can_be_deleted: true,
            is_attachment: false,
            alts: vec![],
            children: vec![],
            attachments: vec![],
        };

        assert_eq!(info.existing_alt_count(), 0);
        assert!(!info.has_alts());
    }
}
