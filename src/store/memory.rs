//! In-memory implementations of the platform collaborator traits.

use std::collections::BTreeMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::model::{Attribute, AttributeOption, OptionSummary};
use crate::store::{AttributeStore, OptionStore, ScopeContext, StoreError};

/// MemoryPlatform is an in-memory stand-in for the platform services the
/// setup service runs against: an attribute registry, per-attribute option
/// lists, and the process scope flag.
///
/// Attributes are seeded with [`insert_attribute`](Self::insert_attribute);
/// options accumulate through the [`OptionStore`] impl (or are pre-seeded
/// with [`insert_option`](Self::insert_option)). The scope flag is one-way:
/// once entered, the administrative scope is never left, matching the real
/// platform's behavior during setup runs. The transition counter lets
/// callers observe how often the scope was forced.
pub struct MemoryPlatform {
    attributes: RwLock<BTreeMap<(String, String), Attribute>>,
    options: RwLock<BTreeMap<u32, Vec<AttributeOption>>>,
    scope_transitions: AtomicUsize,
}

impl MemoryPlatform {
    pub fn new() -> Self {
        Self {
            attributes: RwLock::new(BTreeMap::new()),
            options: RwLock::new(BTreeMap::new()),
            scope_transitions: AtomicUsize::new(0),
        }
    }

    /// Register an attribute, keyed by (entity type code, attribute code).
    /// Replaces any previous registration under the same key.
    pub fn insert_attribute(&self, attribute: Attribute) {
        let key = (
            attribute.entity_type_code.clone(),
            attribute.attribute_code.clone(),
        );
        let mut attributes = self.attributes.write().unwrap();
        attributes.insert(key, attribute);
    }

    /// Pre-seed an option on an attribute, bypassing the scope requirement.
    pub fn insert_option(&self, attribute_id: u32, option: AttributeOption) {
        let mut options = self.options.write().unwrap();
        options.entry(attribute_id).or_default().push(option);
    }

    /// The full options stored for an attribute, in insertion order.
    pub fn stored_options(&self, attribute_id: u32) -> Vec<AttributeOption> {
        let options = self.options.read().unwrap();
        options.get(&attribute_id).cloned().unwrap_or_default()
    }

    /// Whether the administrative scope has been entered.
    pub fn admin_scope_entered(&self) -> bool {
        self.admin_scope_transitions() > 0
    }

    /// How many times the administrative scope was entered.
    pub fn admin_scope_transitions(&self) -> usize {
        self.scope_transitions.load(Ordering::SeqCst)
    }
}

impl Default for MemoryPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl AttributeStore for MemoryPlatform {
    fn attribute(
        &self,
        entity_type: &str,
        attribute_code: &str,
    ) -> Result<Option<Attribute>, StoreError> {
        let attributes = self.attributes.read().unwrap();
        let key = (entity_type.to_string(), attribute_code.to_string());
        Ok(attributes.get(&key).cloned())
    }
}

impl OptionStore for MemoryPlatform {
    fn options(&self, attribute_id: u32) -> Result<Vec<OptionSummary>, StoreError> {
        let options = self.options.read().unwrap();
        let summaries = options
            .get(&attribute_id)
            .map(|stored| {
                stored
                    .iter()
                    .map(|o| OptionSummary {
                        label: o.label.clone(),
                        sort_order: o.sort_order,
                    })
                    .collect()
            })
            .unwrap_or_default();
        Ok(summaries)
    }

    fn add_option(&self, attribute_id: u32, option: AttributeOption) -> Result<(), StoreError> {
        if !self.admin_scope_entered() {
            return Err(StoreError::Scope(
                "option writes require the administrative scope".to_string(),
            ));
        }
        let mut options = self.options.write().unwrap();
        options.entry(attribute_id).or_default().push(option);
        Ok(())
    }
}

impl ScopeContext for MemoryPlatform {
    fn set_admin_scope(&self) -> Result<(), StoreError> {
        self.scope_transitions.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// Delegating impls so one shared instance can serve as all three
// collaborators while the caller keeps a handle for inspection.
impl AttributeStore for std::sync::Arc<MemoryPlatform> {
    fn attribute(
        &self,
        entity_type: &str,
        attribute_code: &str,
    ) -> Result<Option<Attribute>, StoreError> {
        (**self).attribute(entity_type, attribute_code)
    }
}

impl OptionStore for std::sync::Arc<MemoryPlatform> {
    fn options(&self, attribute_id: u32) -> Result<Vec<OptionSummary>, StoreError> {
        (**self).options(attribute_id)
    }

    fn add_option(&self, attribute_id: u32, option: AttributeOption) -> Result<(), StoreError> {
        (**self).add_option(attribute_id, option)
    }
}

impl ScopeContext for std::sync::Arc<MemoryPlatform> {
    fn set_admin_scope(&self) -> Result<(), StoreError> {
        (**self).set_admin_scope()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color_attribute(id: Option<u32>) -> Attribute {
        Attribute {
            attribute_id: id,
            attribute_code: "color".into(),
            entity_type_code: "catalog_product".into(),
            frontend_label: None,
        }
    }

    #[test]
    fn attribute_lookup() {
        let platform = MemoryPlatform::new();
        platform.insert_attribute(color_attribute(Some(7)));

        let found = platform.attribute("catalog_product", "color").unwrap();
        assert_eq!(found.unwrap().attribute_id, Some(7));

        let missing = platform.attribute("catalog_product", "size").unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn options_accumulate_in_order() {
        let platform = MemoryPlatform::new();
        platform.insert_option(7, AttributeOption::new("Red"));
        platform.insert_option(7, AttributeOption::new("Green"));

        let listed = platform.options(7).unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].label, "Red");
        assert_eq!(listed[1].label, "Green");
    }

    #[test]
    fn add_option_requires_admin_scope() {
        let platform = MemoryPlatform::new();

        let denied = platform.add_option(7, AttributeOption::new("Red"));
        assert!(matches!(denied, Err(StoreError::Scope(_))));
        assert!(platform.stored_options(7).is_empty());

        platform.set_admin_scope().unwrap();
        platform.add_option(7, AttributeOption::new("Red")).unwrap();
        assert_eq!(platform.stored_options(7).len(), 1);
    }

    #[test]
    fn scope_flag_is_one_way_and_counted() {
        let platform = MemoryPlatform::new();
        assert!(!platform.admin_scope_entered());

        platform.set_admin_scope().unwrap();
        platform.set_admin_scope().unwrap();

        assert!(platform.admin_scope_entered());
        assert_eq!(platform.admin_scope_transitions(), 2);
    }
}
