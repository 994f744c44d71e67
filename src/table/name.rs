use crate::util::{Result, Status};

/// Name of the root catalog table.
pub const ROOT_TABLE_NAME: &[u8] = b"-ROOT-";

/// Name of the meta catalog table.
pub const META_TABLE_NAME: &[u8] = b".META.";

/// Checks that `name` is a legal user-space table name.
///
/// Legal names are non-empty and made only of ASCII letters, digits and
/// underscores. Returns the input unchanged on success.
pub fn is_legal_table_name(name: &[u8]) -> Result<&[u8]> {
    if name.is_empty() {
        return Err(Status::invalid_argument("Table name is empty"));
    }
    if let Some(&b) = name.iter().find(|&&b| !(b.is_ascii_alphanumeric() || b == b'_')) {
        return Err(Status::invalid_argument(format!(
            "Illegal character <{b}> in table name {}. User-space table names can \
             only contain 'word characters': i.e. [a-zA-Z_0-9]",
            String::from_utf8_lossy(name)
        )));
    }
    Ok(name)
}

pub fn is_root_name(name: &[u8]) -> bool {
    name == ROOT_TABLE_NAME
}

/// True for either reserved catalog table name.
pub fn is_catalog_name(name: &[u8]) -> bool {
    is_root_name(name) || name == META_TABLE_NAME
}
