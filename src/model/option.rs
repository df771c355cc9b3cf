use serde::{Deserialize, Serialize};

/// Store id of the administrative/default scope. The default label of an
/// option covers this scope; a store-label entry keyed with it is invalid
/// input, not an override.
pub const ADMIN_STORE_ID: u32 = 0;

/// AttributeOption — one allowed value for a selectable attribute, staged
/// for submission to the platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttributeOption {
    /// Label in the administrative/default scope.
    pub label: String,

    /// Sort position within the attribute. 0 leaves placement to the
    /// platform default.
    #[serde(default)]
    pub sort_order: u32,

    /// Per-store translated labels. Unordered; empty when the option only
    /// carries its default label.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub store_labels: Vec<StoreLabel>,
}

impl AttributeOption {
    /// Create an option with the given default-scope label and no
    /// store-scope overrides.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            sort_order: 0,
            store_labels: Vec::new(),
        }
    }
}

/// StoreLabel — a translated option label scoped to one store view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoreLabel {
    /// Store view id. Always positive; [`ADMIN_STORE_ID`] is covered by
    /// the option's default label.
    pub store_id: u32,

    /// Translated label text.
    pub label: String,
}

/// OptionSummary — one (label, sort order) pair from the platform's
/// existing-option listing. The membership check compares labels only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OptionSummary {
    pub label: String,
    #[serde(default)]
    pub sort_order: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_json_roundtrip() {
        let o = AttributeOption {
            label: "Red".into(),
            sort_order: 100,
            store_labels: vec![StoreLabel {
                store_id: 1,
                label: "Rot".into(),
            }],
        };
        let json = serde_json::to_string(&o).unwrap();
        let back: AttributeOption = serde_json::from_str(&json).unwrap();
        assert_eq!(o, back);
    }

    #[test]
    fn new_option_has_no_store_labels() {
        let o = AttributeOption::new("Red");
        assert_eq!(o.label, "Red");
        assert_eq!(o.sort_order, 0);
        assert!(o.store_labels.is_empty());
    }

    #[test]
    fn empty_store_labels_are_omitted_from_json() {
        let json = serde_json::to_string(&AttributeOption::new("Red")).unwrap();
        assert!(!json.contains("storeLabels"));
    }
}
