use serde::{Deserialize, Serialize};

/// Time-to-live value meaning cells never expire.
pub const FOREVER: i32 = i32::MAX;

/// Compression policy recorded for a family's store files
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum CompressionType {
    #[default]
    None = 0,
    Snappy = 1,
    Lz4 = 2,
}

impl CompressionType {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(CompressionType::None),
            1 => Some(CompressionType::Snappy),
            2 => Some(CompressionType::Lz4),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompressionType::None => "NONE",
            CompressionType::Snappy => "SNAPPY",
            CompressionType::Lz4 => "LZ4",
        }
    }
}

/// Storage policy for a single column family
///
/// # Example
///
/// ```
/// use tabledesc::{CompressionType, FamilyOptions};
///
/// let options = FamilyOptions {
///     max_versions: 1,
///     compression: CompressionType::Lz4,
///     ..Default::default()
/// };
/// assert!(!options.in_memory);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyOptions {
    /// Number of cell versions to retain
    /// Default: 3
    pub max_versions: i32,

    /// Compression for the family's store files
    /// Default: None
    pub compression: CompressionType,

    /// Keep the family's data resident in memory
    /// Default: false
    pub in_memory: bool,

    /// Cache data blocks read from store files
    /// Default: false
    pub block_cache_enabled: bool,

    /// Largest cell value accepted, in bytes
    /// Default: i32::MAX
    pub max_value_length: i32,

    /// Seconds a cell lives before it expires
    /// Default: FOREVER
    pub time_to_live: i32,

    /// Build a bloom filter over row keys
    /// Default: false
    pub bloom_filter: bool,
}

impl Default for FamilyOptions {
    fn default() -> Self {
        FamilyOptions {
            max_versions: 3,
            compression: CompressionType::None,
            in_memory: false,
            block_cache_enabled: false,
            max_value_length: i32::MAX,
            time_to_live: FOREVER,
            bloom_filter: false,
        }
    }
}
