pub mod memory;

pub use memory::MemoryPlatform;

use thiserror::Error;

use crate::model::{Attribute, AttributeOption, OptionSummary};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("scope error: {0}")]
    Scope(String),
}

/// AttributeStore resolves attribute metadata from the platform's EAV
/// registry.
pub trait AttributeStore: Send + Sync {
    /// Look up an attribute by entity type code and attribute code.
    /// Returns `None` when no such attribute is defined.
    fn attribute(
        &self,
        entity_type: &str,
        attribute_code: &str,
    ) -> Result<Option<Attribute>, StoreError>;
}

/// OptionStore reads and appends the option values of an attribute.
pub trait OptionStore: Send + Sync {
    /// List the existing options of an attribute, in platform order.
    fn options(&self, attribute_id: u32) -> Result<Vec<OptionSummary>, StoreError>;

    /// Append a new option to an attribute.
    fn add_option(&self, attribute_id: u32, option: AttributeOption) -> Result<(), StoreError>;
}

/// ScopeContext switches the process into the administrative scope.
///
/// The platform refuses option writes outside the administrative scope, so
/// the setup service enters it immediately before each write. The switch is
/// one-way and process-wide: the previous scope is never restored.
pub trait ScopeContext: Send + Sync {
    /// Enter the administrative scope.
    fn set_admin_scope(&self) -> Result<(), StoreError>;
}
