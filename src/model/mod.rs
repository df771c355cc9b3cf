mod attribute;
mod option;

pub use attribute::*;
pub use option::*;
