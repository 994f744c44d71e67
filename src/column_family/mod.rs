//! Column family descriptors
//!
//! A table is split into column families. Each family has a name and its
//! own storage policy, and cells are addressed as `family:qualifier`.
//!
//! ```text
//! TableDescriptor("orders")
//!  ├─→ FamilyDescriptor("info")     VERSIONS => 1
//!  │     └─→ info:customer, info:total, ...
//!  └─→ FamilyDescriptor("history")  VERSIONS => 10, TTL => 86400
//!        └─→ history:status, ...
//! ```

pub mod column;
pub mod family_descriptor;
pub mod family_options;

pub use family_descriptor::{FAMILY_DESCRIPTOR_VERSION, FamilyDescriptor};
pub use family_options::{CompressionType, FOREVER, FamilyOptions};
