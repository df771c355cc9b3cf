use serde::{Deserialize, Serialize};

/// Attribute — metadata for one EAV attribute, as returned by the platform
/// lookup. Read-only from this crate's perspective.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    /// Numeric attribute id. `None` until the platform has persisted the
    /// attribute; an attribute without an id cannot receive options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_id: Option<u32>,

    /// Attribute code, unique within an entity type (e.g. "color").
    pub attribute_code: String,

    /// Entity type code the attribute belongs to (e.g. "catalog_product").
    pub entity_type_code: String,

    /// Default storefront label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frontend_label: Option<String>,
}
