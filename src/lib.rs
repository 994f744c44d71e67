//! Table schema descriptors for a column-oriented store catalog.
//!
//! A [`TableDescriptor`] carries a table's name, its table-level settings and
//! its column families, encodes to a versioned binary form and defines a
//! total order used both for sorted catalogs and for equality.

pub mod column_family;
pub mod table;
pub mod util;

pub use column_family::{CompressionType, FOREVER, FamilyDescriptor, FamilyOptions};
pub use table::{
    META_TABLE_NAME, ROOT_TABLE_NAME, TABLE_DESCRIPTOR_VERSION, TableDescriptor, TableSchema,
    is_legal_table_name, meta_table_desc, root_table_desc, table_dir,
};
pub use util::{Result, Slice, Status};
