//! Descriptors of the two catalog tables.
//!
//! Both are built once and only handed out as shared references, so they
//! cannot be changed after construction. Callers that need a modified
//! version clone one first.

use std::sync::LazyLock;

use crate::{
    column_family::{CompressionType, FOREVER, FamilyDescriptor, FamilyOptions},
    table::{META_TABLE_NAME, ROOT_TABLE_NAME, TableDescriptor},
};

/// Family holding the catalog tables' region information.
pub const CATALOG_FAMILY: &[u8] = b"info";

static ROOT_TABLE_DESC: LazyLock<TableDescriptor> =
    LazyLock::new(|| TableDescriptor::catalog(ROOT_TABLE_NAME, [catalog_family()]));

static META_TABLE_DESC: LazyLock<TableDescriptor> =
    LazyLock::new(|| TableDescriptor::catalog(META_TABLE_NAME, [catalog_family()]));

fn catalog_family() -> FamilyDescriptor {
    FamilyDescriptor::new(
        CATALOG_FAMILY,
        FamilyOptions {
            max_versions: 1,
            compression: CompressionType::None,
            in_memory: false,
            block_cache_enabled: false,
            max_value_length: i32::MAX,
            time_to_live: FOREVER,
            bloom_filter: false,
        },
    )
}

/// Descriptor of the `-ROOT-` catalog table.
pub fn root_table_desc() -> &'static TableDescriptor {
    &ROOT_TABLE_DESC
}

/// Descriptor of the `.META.` catalog table.
pub fn meta_table_desc() -> &'static TableDescriptor {
    &META_TABLE_DESC
}
