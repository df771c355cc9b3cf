pub mod option_setup;

use thiserror::Error;

use crate::store::{AttributeStore, OptionStore, ScopeContext};

/// Setup service error type.
#[derive(Debug, Error)]
pub enum EavSetupError {
    /// Input data is invalid: empty codes/labels, a store-label key that is
    /// not a store id, or a store-label key naming the administrative scope.
    #[error("validation: {0}")]
    Validation(String),

    /// The attribute could not be resolved to a usable id. All lookup
    /// failure modes surface as this one variant.
    #[error("attribute not found: {0}")]
    AttributeNotFound(String),

    /// The option listing or write failed in the platform backend.
    #[error("storage: {0}")]
    Storage(String),

    /// Entering the administrative scope failed.
    #[error("scope: {0}")]
    Scope(String),
}

/// EAV setup service — holds the platform collaborators and provides
/// idempotent attribute-option seeding.
pub struct EavSetupService {
    pub(crate) attributes: Box<dyn AttributeStore>,
    pub(crate) options: Box<dyn OptionStore>,
    pub(crate) scope: Box<dyn ScopeContext>,
}

impl EavSetupService {
    pub fn new(
        attributes: Box<dyn AttributeStore>,
        options: Box<dyn OptionStore>,
        scope: Box<dyn ScopeContext>,
    ) -> Self {
        Self {
            attributes,
            options,
            scope,
        }
    }
}
