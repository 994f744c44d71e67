use std::fmt;

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::{
    column_family::{CompressionType, FamilyOptions},
    util::{Result, Slice, Status, coding, hash},
};

/// Encoding version written in front of every family descriptor.
pub const FAMILY_DESCRIPTOR_VERSION: u8 = 1;

/// Smallest possible encoded family: version, empty name and the fixed-size
/// option fields.
pub(crate) const MIN_ENCODED_LEN: usize = 1 + 4 + 4 + 1 + 1 + 1 + 4 + 4 + 1;

/// Descriptor of one column family: its name plus storage policy.
///
/// Ordered by name first, then by options, so two descriptors compare equal
/// only when every field matches.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FamilyDescriptor {
    /// Name of the column family
    pub name: Slice,

    /// Storage policy of the column family
    pub options: FamilyOptions,
}

impl FamilyDescriptor {
    /// Create a new family descriptor
    pub fn new<N: Into<Slice>>(name: N, options: FamilyOptions) -> Self {
        FamilyDescriptor {
            name: name.into(),
            options,
        }
    }

    pub fn name(&self) -> &Slice {
        &self.name
    }

    pub fn name_as_string(&self) -> String {
        self.name.to_string_lossy()
    }

    pub fn encode_to<B: BufMut>(&self, buf: &mut B) {
        buf.put_u8(FAMILY_DESCRIPTOR_VERSION);
        coding::put_byte_array(buf, self.name.data());
        buf.put_i32(self.options.max_versions);
        buf.put_u8(self.options.compression as u8);
        coding::put_bool(buf, self.options.in_memory);
        coding::put_bool(buf, self.options.block_cache_enabled);
        buf.put_i32(self.options.max_value_length);
        buf.put_i32(self.options.time_to_live);
        coding::put_bool(buf, self.options.bloom_filter);
    }

    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(MIN_ENCODED_LEN + self.name.size());
        self.encode_to(&mut buf);
        buf.freeze()
    }

    pub fn decode_from<B: Buf>(buf: &mut B) -> Result<Self> {
        let version = coding::get_u8(buf, "family version")?;
        if version != FAMILY_DESCRIPTOR_VERSION {
            return Err(Status::not_supported(format!(
                "family descriptor version {version} is not supported"
            )));
        }

        let name = coding::get_byte_array(buf, "family name")?;
        let max_versions = coding::get_i32(buf, "family max versions")?;
        let compression_byte = coding::get_u8(buf, "family compression")?;
        let compression = CompressionType::from_u8(compression_byte).ok_or_else(|| {
            Status::corruption(format!("unknown compression type {compression_byte}"))
        })?;
        let in_memory = coding::get_bool(buf, "family in-memory flag")?;
        let block_cache_enabled = coding::get_bool(buf, "family block cache flag")?;
        let max_value_length = coding::get_i32(buf, "family max value length")?;
        let time_to_live = coding::get_i32(buf, "family time to live")?;
        let bloom_filter = coding::get_bool(buf, "family bloom filter flag")?;

        Ok(FamilyDescriptor {
            name,
            options: FamilyOptions {
                max_versions,
                compression,
                in_memory,
                block_cache_enabled,
                max_value_length,
                time_to_live,
                bloom_filter,
            },
        })
    }

    pub fn decode(data: &[u8]) -> Result<Self> {
        let mut input = data;
        Self::decode_from(&mut input)
    }

    /// Stable hash over the encoded form.
    pub fn hash_code(&self) -> u32 {
        hash::hash_bytes(&self.encode())
    }
}

impl fmt::Display for FamilyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = &self.options;
        write!(
            f,
            "{{NAME => '{}', VERSIONS => {}, COMPRESSION => '{}', IN_MEMORY => {}, \
             BLOCKCACHE => {}, LENGTH => {}, TTL => {}, BLOOMFILTER => {}}}",
            self.name,
            o.max_versions,
            o.compression.as_str(),
            o.in_memory,
            o.block_cache_enabled,
            o.max_value_length,
            o.time_to_live,
            o.bloom_filter
        )
    }
}
