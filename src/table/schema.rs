use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    column_family::{FamilyDescriptor, FamilyOptions},
    table::{TableDescriptor, attributes},
    util::{Result, Status},
};

/// Declarative description of a table, loadable from JSON.
///
/// ```json
/// {
///   "name": "orders",
///   "max_file_size": 1073741824,
///   "read_only": false,
///   "attributes": { "OWNER": "billing" },
///   "families": [
///     { "name": "info", "max_versions": 1 },
///     { "name": "history", "max_versions": 10, "compression": "lz4" }
///   ]
/// }
/// ```
///
/// Unset settings fall back to the descriptor defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSchema {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_file_size: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memcache_flush_size: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_memory: Option<bool>,

    /// Free-form attributes. The catalog flags cannot be set this way.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,

    #[serde(default)]
    pub families: Vec<FamilySchema>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilySchema {
    pub name: String,

    #[serde(flatten)]
    pub options: FamilyOptions,
}

impl TableSchema {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds the descriptor through the validating constructor.
    pub fn build(&self) -> Result<TableDescriptor> {
        let mut desc = TableDescriptor::new(self.name.as_str())?;

        for (key, value) in &self.attributes {
            if key == attributes::IS_ROOT || key == attributes::IS_META {
                return Err(Status::invalid_argument(format!(
                    "{key} is derived from the table name and cannot be set"
                )));
            }
            desc.set_value(key.as_str(), value.as_str());
        }

        if let Some(size) = self.max_file_size {
            desc.set_max_file_size(size);
        }
        if let Some(size) = self.memcache_flush_size {
            desc.set_memcache_flush_size(size);
        }
        if let Some(read_only) = self.read_only {
            desc.set_read_only(read_only);
        }
        if let Some(in_memory) = self.in_memory {
            desc.set_in_memory(in_memory);
        }

        for family in &self.families {
            desc.add_family(FamilyDescriptor::new(
                family.name.as_str(),
                family.options.clone(),
            ))?;
        }
        Ok(desc)
    }
}

fn is_set(desc: &TableDescriptor, key: &str) -> bool {
    desc.values().contains(key.as_bytes())
}

impl TableDescriptor {
    /// Inverse of [`TableSchema::build`]. Non-UTF-8 names and attributes are
    /// rendered lossily.
    pub fn to_schema(&self) -> Result<TableSchema> {
        let extra = self
            .values
            .iter()
            .map(|(k, v)| (k.to_string_lossy(), v.to_string_lossy()))
            .filter(|(k, _)| !attributes::WELL_KNOWN_KEYS.contains(&k.as_str()))
            .collect();

        let families = self
            .families
            .iter()
            .map(|f| FamilySchema {
                name: f.name_as_string(),
                options: f.options.clone(),
            })
            .collect();

        Ok(TableSchema {
            name: self.name_as_string.clone(),
            max_file_size: is_set(self, attributes::MAX_FILESIZE)
                .then(|| self.max_file_size())
                .transpose()?,
            memcache_flush_size: is_set(self, attributes::MEMCACHE_FLUSHSIZE)
                .then(|| self.memcache_flush_size())
                .transpose()?,
            read_only: is_set(self, attributes::READONLY)
                .then(|| self.is_read_only())
                .transpose()?,
            in_memory: is_set(self, attributes::IN_MEMORY)
                .then(|| self.is_in_memory())
                .transpose()?,
            attributes: extra,
            families,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column_family::CompressionType;

    const ORDERS: &str = r#"{
        "name": "orders",
        "max_file_size": 1073741824,
        "read_only": true,
        "attributes": { "OWNER": "billing" },
        "families": [
            { "name": "info", "max_versions": 1 },
            { "name": "history", "max_versions": 10, "compression": "lz4" }
        ]
    }"#;

    #[test]
    fn test_build_from_json() {
        let desc = TableSchema::from_json(ORDERS).unwrap().build().unwrap();

        assert_eq!(desc.name_as_string(), "orders");
        assert_eq!(desc.max_file_size().unwrap(), 1 << 30);
        assert!(desc.is_read_only().unwrap());
        assert!(!desc.is_in_memory().unwrap());
        assert_eq!(desc.value_str("OWNER").as_deref(), Some("billing"));

        let history = desc.family("history").unwrap();
        assert_eq!(history.options.max_versions, 10);
        assert_eq!(history.options.compression, CompressionType::Lz4);
        assert_eq!(desc.family("info").unwrap().options.max_versions, 1);
    }

    #[test]
    fn test_schema_round_trip() {
        let schema = TableSchema::from_json(ORDERS).unwrap();
        let desc = schema.build().unwrap();
        let back = desc.to_schema().unwrap();

        assert_eq!(back.max_file_size, Some(1 << 30));
        assert_eq!(back.read_only, Some(true));
        assert_eq!(back.in_memory, None);
        assert_eq!(back.attributes.len(), 1);
        assert_eq!(back.build().unwrap(), desc);

        let json = back.to_json().unwrap();
        assert_eq!(TableSchema::from_json(&json).unwrap(), back);
    }

    #[test]
    fn test_illegal_name_rejected() {
        let schema = TableSchema::from_json(r#"{"name": "bad name"}"#).unwrap();
        assert!(schema.build().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_catalog_flag_attribute_rejected() {
        let schema =
            TableSchema::from_json(r#"{"name": "t", "attributes": {"IS_ROOT": "true"}}"#).unwrap();
        assert!(schema.build().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_malformed_json() {
        let err = TableSchema::from_json(r#"{"families": []}"#).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
