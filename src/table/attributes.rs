//! Attribute dictionary backing every table-level setting.
//!
//! The store itself is untyped: byte-string keys map to byte-string values.
//! Typed settings go through the `parse_*`/`format_*` pairs below, which are
//! the only place text is converted to and from booleans and integers.

use std::collections::{BTreeMap, btree_map};

use crate::util::{Result, Slice, Status, hash};

pub const MAX_FILESIZE: &str = "MAX_FILESIZE";
pub const IN_MEMORY: &str = "IN_MEMORY";
pub const READONLY: &str = "READONLY";
pub const MEMCACHE_FLUSHSIZE: &str = "MEMCACHE_FLUSHSIZE";
pub const IS_ROOT: &str = "IS_ROOT";
pub const IS_META: &str = "IS_META";

/// Keys with a typed accessor on the table descriptor.
pub const WELL_KNOWN_KEYS: [&str; 6] = [
    MAX_FILESIZE,
    IN_MEMORY,
    READONLY,
    MEMCACHE_FLUSHSIZE,
    IS_ROOT,
    IS_META,
];

pub const DEFAULT_IN_MEMORY: bool = false;
pub const DEFAULT_READONLY: bool = false;
/// 256 MiB
pub const DEFAULT_MAX_FILE_SIZE: i64 = 256 * 1024 * 1024;
/// 64 MiB
pub const DEFAULT_MEMCACHE_FLUSH_SIZE: i32 = 64 * 1024 * 1024;

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Attributes {
    entries: BTreeMap<Slice, Slice>,
}

impl Attributes {
    pub fn new() -> Self {
        Attributes::default()
    }

    pub fn get(&self, key: &[u8]) -> Option<&Slice> {
        self.entries.get(key)
    }

    /// Text overload of [`Attributes::get`].
    pub fn get_str(&self, key: &str) -> Option<String> {
        self.get(key.as_bytes()).map(Slice::to_string_lossy)
    }

    /// Inserts or overwrites. The value is stored as given.
    pub fn set<K: Into<Slice>, V: Into<Slice>>(&mut self, key: K, value: V) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn contains(&self, key: &[u8]) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Slice, Slice> {
        self.entries.iter()
    }

    /// Order-independent aggregate hash of all entries.
    pub fn hash_code(&self) -> u32 {
        self.entries.iter().fold(0u32, |acc, (k, v)| {
            acc.wrapping_add(hash::hash_bytes(k.data()) ^ hash::hash_bytes(v.data()))
        })
    }

    pub fn get_bool(&self, key: &str, default: bool) -> Result<bool> {
        match self.get(key.as_bytes()) {
            Some(v) => parse_bool(key, v.data()),
            None => Ok(default),
        }
    }

    pub fn get_i64(&self, key: &str, default: i64) -> Result<i64> {
        match self.get(key.as_bytes()) {
            Some(v) => parse_i64(key, v.data()),
            None => Ok(default),
        }
    }

    pub fn get_i32(&self, key: &str, default: i32) -> Result<i32> {
        match self.get(key.as_bytes()) {
            Some(v) => parse_i32(key, v.data()),
            None => Ok(default),
        }
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a Slice, &'a Slice);
    type IntoIter = btree_map::Iter<'a, Slice, Slice>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn as_text<'a>(key: &str, value: &'a [u8]) -> Result<&'a str> {
    std::str::from_utf8(value)
        .map_err(|_| Status::parse_error(format!("{key}: value is not valid UTF-8")))
}

/// Accepts `true` or `false` in any letter case.
pub fn parse_bool(key: &str, value: &[u8]) -> Result<bool> {
    let text = as_text(key, value)?;
    if text.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if text.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(Status::parse_error(format!(
            "{key}: expected true or false, got '{text}'"
        )))
    }
}

pub fn format_bool(value: bool) -> Slice {
    Slice::from_static(if value { &b"true"[..] } else { &b"false"[..] })
}

pub fn parse_i64(key: &str, value: &[u8]) -> Result<i64> {
    let text = as_text(key, value)?;
    text.parse::<i64>()
        .map_err(|e| Status::parse_error(format!("{key}: '{text}' is not a long: {e}")))
}

pub fn format_i64(value: i64) -> Slice {
    Slice::from(value.to_string())
}

pub fn parse_i32(key: &str, value: &[u8]) -> Result<i32> {
    let text = as_text(key, value)?;
    text.parse::<i32>()
        .map_err(|e| Status::parse_error(format!("{key}: '{text}' is not an int: {e}")))
}

pub fn format_i32(value: i32) -> Slice {
    Slice::from(value.to_string())
}
