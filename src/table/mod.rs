//! Table descriptors
//!
//! A [`TableDescriptor`] names a table, holds its table-level attributes and
//! registers its column families. It encodes to a versioned binary form and
//! is totally ordered, with equality defined by that ordering.
//!
//! ```text
//! TableDescriptor
//!  ├─→ name               "orders"
//!  ├─→ Attributes         IS_ROOT => false, IS_META => false, READONLY => true, ...
//!  └─→ FamilyRegistry
//!       ├─→ "history" → FamilyDescriptor
//!       └─→ "info"    → FamilyDescriptor
//! ```

pub mod attributes;
pub mod catalog;
pub mod codec;
mod compare;
pub mod families;
pub mod name;
pub mod schema;
pub mod table_descriptor;

pub use attributes::{
    Attributes, DEFAULT_IN_MEMORY, DEFAULT_MAX_FILE_SIZE, DEFAULT_MEMCACHE_FLUSH_SIZE,
    DEFAULT_READONLY,
};
pub use catalog::{CATALOG_FAMILY, meta_table_desc, root_table_desc};
pub use codec::{MIN_TABLE_DESCRIPTOR_VERSION, TABLE_DESCRIPTOR_VERSION};
pub use families::FamilyRegistry;
pub use name::{META_TABLE_NAME, ROOT_TABLE_NAME, is_legal_table_name};
pub use schema::{FamilySchema, TableSchema};
pub use table_descriptor::{TableDescriptor, table_dir};
