use std::{
    fmt,
    path::{Path, PathBuf},
};

use crate::{
    column_family::FamilyDescriptor,
    table::{
        attributes::{self, Attributes},
        families::FamilyRegistry,
        name,
    },
    util::{Result, Slice},
};

/// Schema of one table: its name, table-level attributes and column families.
///
/// Every table-level setting, including the two catalog classification
/// flags, lives in the attribute dictionary. That way settings are encoded
/// and compared like any other attribute.
///
/// `Clone` is a deep copy of the families. Attribute values are immutable
/// shared byte strings, so the copy shares their buffers.
///
/// # Example
///
/// ```
/// use tabledesc::{FamilyDescriptor, FamilyOptions, TableDescriptor};
///
/// let mut desc = TableDescriptor::new("orders")?;
/// desc.add_family(FamilyDescriptor::new("info", FamilyOptions::default()))?;
/// desc.set_read_only(true);
///
/// assert!(desc.has_family("info:customer"));
/// assert!(desc.is_read_only()?);
///
/// let decoded = TableDescriptor::decode(&desc.encode())?;
/// assert_eq!(decoded, desc);
/// # Ok::<(), tabledesc::Status>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableDescriptor {
    pub(crate) name: Slice,
    pub(crate) name_as_string: String,
    pub(crate) values: Attributes,
    pub(crate) families: FamilyRegistry,
}

impl TableDescriptor {
    /// Create a descriptor for the named table.
    ///
    /// The name must pass [`name::is_legal_table_name`], which also rejects
    /// the reserved catalog names. Catalog descriptors come from
    /// [`root_table_desc`](crate::root_table_desc) and
    /// [`meta_table_desc`](crate::meta_table_desc).
    pub fn new<N: Into<Slice>>(table_name: N) -> Result<Self> {
        let table_name = table_name.into();
        name::is_legal_table_name(table_name.data())?;
        Ok(Self::with_name(table_name))
    }

    /// Builds a catalog table descriptor, skipping name validation.
    pub(crate) fn catalog<F>(table_name: &'static [u8], families: F) -> Self
    where
        F: IntoIterator<Item = FamilyDescriptor>,
    {
        let mut desc = Self::with_name(Slice::from_static(table_name));
        for family in families {
            desc.families.insert(family);
        }
        desc
    }

    fn with_name(table_name: Slice) -> Self {
        let mut desc = TableDescriptor::default();
        desc.set_name(table_name);
        desc.set_meta_flags();
        desc
    }

    pub(crate) fn set_name(&mut self, table_name: Slice) {
        self.name_as_string = table_name.to_string_lossy();
        self.name = table_name;
    }

    fn set_meta_flags(&mut self) {
        self.set_root_region(name::is_root_name(self.name.data()));
        self.set_meta_region(name::is_catalog_name(self.name.data()));
    }

    pub fn name(&self) -> &Slice {
        &self.name
    }

    pub fn name_as_string(&self) -> &str {
        &self.name_as_string
    }

    pub fn value(&self, key: &[u8]) -> Option<&Slice> {
        self.values.get(key)
    }

    pub fn value_str(&self, key: &str) -> Option<String> {
        self.values.get_str(key)
    }

    pub fn set_value<K: Into<Slice>, V: Into<Slice>>(&mut self, key: K, value: V) {
        self.values.set(key, value);
    }

    pub fn values(&self) -> &Attributes {
        &self.values
    }

    pub fn is_root_region(&self) -> Result<bool> {
        self.values.get_bool(attributes::IS_ROOT, false)
    }

    pub(crate) fn set_root_region(&mut self, is_root: bool) {
        self.values
            .set(attributes::IS_ROOT, attributes::format_bool(is_root));
    }

    /// True for both catalog tables.
    pub fn is_meta_region(&self) -> Result<bool> {
        self.values.get_bool(attributes::IS_META, false)
    }

    pub(crate) fn set_meta_region(&mut self, is_meta: bool) {
        self.values
            .set(attributes::IS_META, attributes::format_bool(is_meta));
    }

    /// True for the meta catalog table only.
    pub fn is_meta_table(&self) -> Result<bool> {
        Ok(self.is_meta_region()? && !self.is_root_region()?)
    }

    pub fn is_in_memory(&self) -> Result<bool> {
        self.values
            .get_bool(attributes::IN_MEMORY, attributes::DEFAULT_IN_MEMORY)
    }

    pub fn set_in_memory(&mut self, in_memory: bool) {
        self.values
            .set(attributes::IN_MEMORY, attributes::format_bool(in_memory));
    }

    pub fn is_read_only(&self) -> Result<bool> {
        self.values
            .get_bool(attributes::READONLY, attributes::DEFAULT_READONLY)
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.values
            .set(attributes::READONLY, attributes::format_bool(read_only));
    }

    /// Size a store file may grow to before its region is split.
    pub fn max_file_size(&self) -> Result<i64> {
        self.values
            .get_i64(attributes::MAX_FILESIZE, attributes::DEFAULT_MAX_FILE_SIZE)
    }

    pub fn set_max_file_size(&mut self, max_file_size: i64) {
        self.values
            .set(attributes::MAX_FILESIZE, attributes::format_i64(max_file_size));
    }

    /// Memcache size at which a region flushes to disk.
    pub fn memcache_flush_size(&self) -> Result<i32> {
        self.values.get_i32(
            attributes::MEMCACHE_FLUSHSIZE,
            attributes::DEFAULT_MEMCACHE_FLUSH_SIZE,
        )
    }

    pub fn set_memcache_flush_size(&mut self, flush_size: i32) {
        self.values.set(
            attributes::MEMCACHE_FLUSHSIZE,
            attributes::format_i32(flush_size),
        );
    }

    /// Adds a column family, replacing any family with the same name.
    pub fn add_family(&mut self, family: FamilyDescriptor) -> Result<()> {
        self.families.add(family)
    }

    /// `column` is a family name or a `family:qualifier` column.
    pub fn has_family<C: AsRef<[u8]>>(&self, column: C) -> bool {
        self.families.contains(column.as_ref())
    }

    pub fn family<C: AsRef<[u8]>>(&self, column: C) -> Option<&FamilyDescriptor> {
        self.families.get(column.as_ref())
    }

    pub fn remove_family<C: AsRef<[u8]>>(&mut self, column: C) -> Option<FamilyDescriptor> {
        self.families.remove(column.as_ref())
    }

    pub fn families(&self) -> &FamilyRegistry {
        &self.families
    }

    /// Directory of this table under `root_dir`.
    pub fn table_dir(&self, root_dir: &Path) -> PathBuf {
        table_dir(root_dir, self.name.data())
    }
}

/// Directory of `table_name` under `root_dir`. Purely syntactic.
pub fn table_dir(root_dir: &Path, table_name: &[u8]) -> PathBuf {
    root_dir.join(&*String::from_utf8_lossy(table_name))
}

impl fmt::Display for TableDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{NAME => '{}'", self.name)?;
        for (key, value) in &self.values {
            write!(f, ", {key} => '{value}'")?;
        }
        write!(f, ", FAMILIES => [")?;
        for (i, family) in self.families.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{family}")?;
        }
        write!(f, "]}}")
    }
}
