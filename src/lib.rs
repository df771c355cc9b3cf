pub mod model;
pub mod service;
pub mod store;

pub use model::{ADMIN_STORE_ID, Attribute, AttributeOption, OptionSummary, StoreLabel};
pub use service::{EavSetupError, EavSetupService};
pub use store::{AttributeStore, MemoryPlatform, OptionStore, ScopeContext, StoreError};
