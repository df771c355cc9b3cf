//! Idempotent attribute-option seeding.

use std::collections::BTreeMap;

use tracing::{debug, info};

use super::{EavSetupError, EavSetupService};
use crate::model::{ADMIN_STORE_ID, AttributeOption, StoreLabel};

impl EavSetupService {
    /// Ensure an option with the given default-scope label exists on the
    /// attribute. If an existing option already carries exactly this label,
    /// nothing is written.
    pub fn add_attribute_option_if_not_exists(
        &self,
        entity_type: &str,
        attribute_code: &str,
        label: &str,
    ) -> Result<(), EavSetupError> {
        validate_codes(entity_type, attribute_code, label)?;
        self.add_option_if_missing(entity_type, attribute_code, label, Vec::new())
    }

    /// Like [`add_attribute_option_if_not_exists`](Self::add_attribute_option_if_not_exists),
    /// additionally attaching one translated label per store view.
    ///
    /// `store_labels` maps store view id to label text, string-keyed as it
    /// arrives from seed data. Keys must parse as store ids; the key `"0"`
    /// is rejected because the administrative scope is covered by
    /// `default_label`. Existence is still decided by `default_label`
    /// alone.
    pub fn add_attribute_option_if_not_exists_with_store_labels(
        &self,
        entity_type: &str,
        attribute_code: &str,
        default_label: &str,
        store_labels: &BTreeMap<String, String>,
    ) -> Result<(), EavSetupError> {
        validate_codes(entity_type, attribute_code, default_label)?;
        let store_labels = parse_store_labels(store_labels)?;
        self.add_option_if_missing(entity_type, attribute_code, default_label, store_labels)
    }

    fn add_option_if_missing(
        &self,
        entity_type: &str,
        attribute_code: &str,
        label: &str,
        store_labels: Vec<StoreLabel>,
    ) -> Result<(), EavSetupError> {
        let attribute_id = self.resolve_attribute_id(entity_type, attribute_code)?;

        if self.option_exists(attribute_id, label)? {
            debug!(
                "option '{}' already exists on {}/{}",
                label, entity_type, attribute_code
            );
            return Ok(());
        }

        let option = AttributeOption {
            label: label.to_string(),
            sort_order: 0,
            store_labels,
        };

        // The platform refuses option writes outside the administrative
        // scope. Enter it here; the previous scope is not restored.
        self.scope
            .set_admin_scope()
            .map_err(|e| EavSetupError::Scope(e.to_string()))?;

        self.options
            .add_option(attribute_id, option)
            .map_err(|e| EavSetupError::Storage(e.to_string()))?;

        info!(
            "Added option '{}' to {}/{}",
            label, entity_type, attribute_code
        );
        Ok(())
    }

    /// Resolve the attribute to its numeric id. Every lookup failure mode
    /// (including an attribute that has no id yet) surfaces as
    /// `AttributeNotFound`, so callers see a single failure category.
    fn resolve_attribute_id(
        &self,
        entity_type: &str,
        attribute_code: &str,
    ) -> Result<u32, EavSetupError> {
        let attribute = self
            .attributes
            .attribute(entity_type, attribute_code)
            .map_err(|e| {
                EavSetupError::AttributeNotFound(format!(
                    "{}/{}: {}",
                    entity_type, attribute_code, e
                ))
            })?;

        attribute.and_then(|a| a.attribute_id).ok_or_else(|| {
            EavSetupError::AttributeNotFound(format!(
                "{}/{} does not resolve to an attribute id",
                entity_type, attribute_code
            ))
        })
    }

    /// Exact-match membership test against the existing labels. No
    /// normalization: "red" and "Red" are distinct options.
    fn option_exists(&self, attribute_id: u32, label: &str) -> Result<bool, EavSetupError> {
        let existing = self
            .options
            .options(attribute_id)
            .map_err(|e| EavSetupError::Storage(e.to_string()))?;
        Ok(existing.iter().any(|o| o.label == label))
    }
}

fn validate_codes(
    entity_type: &str,
    attribute_code: &str,
    label: &str,
) -> Result<(), EavSetupError> {
    if entity_type.is_empty() {
        return Err(EavSetupError::Validation(
            "entity type code cannot be empty".into(),
        ));
    }
    if attribute_code.is_empty() {
        return Err(EavSetupError::Validation(
            "attribute code cannot be empty".into(),
        ));
    }
    if label.is_empty() {
        return Err(EavSetupError::Validation(
            "option label cannot be empty".into(),
        ));
    }
    Ok(())
}

fn parse_store_labels(
    raw: &BTreeMap<String, String>,
) -> Result<Vec<StoreLabel>, EavSetupError> {
    let mut labels = Vec::with_capacity(raw.len());
    for (key, text) in raw {
        let store_id: u32 = key.parse().map_err(|_| {
            EavSetupError::Validation(format!("store label key '{}' is not a store id", key))
        })?;
        if store_id == ADMIN_STORE_ID {
            return Err(EavSetupError::Validation(
                "store label key 0 is the admin scope; use the default label instead".into(),
            ));
        }
        labels.push(StoreLabel {
            store_id,
            label: text.clone(),
        });
    }
    Ok(labels)
}
