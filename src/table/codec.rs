//! Binary encoding of a [`TableDescriptor`].
//!
//! Layout (integers big-endian, byte arrays `u32`-length-prefixed):
//! - Version (i32, always [`TABLE_DESCRIPTOR_VERSION`] on write)
//! - Table name (byte array)
//! - Is-root flag (1 byte)
//! - Is-meta flag (1 byte)
//! - Attribute count (u32), then per attribute: key, value (byte arrays)
//! - Family count (u32), then each family in its own encoding
//!
//! Versions below [`MIN_TABLE_DESCRIPTOR_VERSION`] never existed and are
//! rejected as `NotSupported`.

use std::io::{Read, Write};

use bytes::{Buf, BufMut, Bytes, BytesMut};
use tracing::{debug, warn};

use crate::{
    column_family::{FamilyDescriptor, family_descriptor},
    table::{TableDescriptor, attributes},
    util::{Result, Status, coding},
};

/// Version written by this build.
pub const TABLE_DESCRIPTOR_VERSION: i32 = 3;

/// Oldest version this build reads. Version 3 added the attribute map.
pub const MIN_TABLE_DESCRIPTOR_VERSION: i32 = 3;

/// Two empty length prefixes.
const MIN_ATTRIBUTE_LEN: usize = 8;

impl TableDescriptor {
    pub fn encode_to<B: BufMut>(&self, buf: &mut B) {
        buf.put_i32(TABLE_DESCRIPTOR_VERSION);
        coding::put_byte_array(buf, self.name.data());
        coding::put_bool(buf, self.flag(attributes::IS_ROOT));
        coding::put_bool(buf, self.flag(attributes::IS_META));

        buf.put_u32(self.values.len() as u32);
        for (key, value) in &self.values {
            coding::put_byte_array(buf, key.data());
            coding::put_byte_array(buf, value.data());
        }

        buf.put_u32(self.families.len() as u32);
        for family in &self.families {
            family.encode_to(buf);
        }
    }

    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::new();
        self.encode_to(&mut buf);
        buf.freeze()
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.encode())?;
        Ok(())
    }

    /// Flag byte for the header. The attribute pairs written after it carry
    /// the stored text unchanged, so anything but `true` is written as false.
    fn flag(&self, key: &str) -> bool {
        self.values
            .get(key.as_bytes())
            .is_some_and(|value| value.data().eq_ignore_ascii_case(b"true"))
    }

    /// Decodes one descriptor from the front of `buf`, leaving any following
    /// bytes unread.
    pub fn decode_from<B: Buf>(buf: &mut B) -> Result<Self> {
        let mut desc = TableDescriptor::default();
        desc.read_fields(buf)?;
        Ok(desc)
    }

    /// Decodes a buffer holding exactly one descriptor.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let mut input = data;
        let desc = Self::decode_from(&mut input)?;
        if !input.is_empty() {
            return Err(Status::corruption(format!(
                "{} trailing bytes after table descriptor",
                input.len()
            )));
        }
        Ok(desc)
    }

    /// Reads `reader` to its end and decodes it as one descriptor.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::decode(&data)
    }

    fn read_fields<B: Buf>(&mut self, buf: &mut B) -> Result<()> {
        let version = coding::get_i32(buf, "table descriptor version")?;
        if version < MIN_TABLE_DESCRIPTOR_VERSION {
            warn!(version, "rejecting table descriptor");
            return Err(Status::not_supported(format!(
                "table descriptor version {version} is not supported, minimum is \
                 {MIN_TABLE_DESCRIPTOR_VERSION}"
            )));
        }

        let name = coding::get_byte_array(buf, "table name")?;
        self.set_name(name);
        let is_root = coding::get_bool(buf, "is-root flag")?;
        let is_meta = coding::get_bool(buf, "is-meta flag")?;
        self.set_root_region(is_root);
        self.set_meta_region(is_meta);

        // The encoded attributes carry the flags as well and take precedence.
        self.values.clear();
        let num_values = coding::get_count(buf, MIN_ATTRIBUTE_LEN, "attribute count")?;
        for _ in 0..num_values {
            let key = coding::get_byte_array(buf, "attribute key")?;
            let value = coding::get_byte_array(buf, "attribute value")?;
            self.values.set(key, value);
        }

        self.families.clear();
        let num_families =
            coding::get_count(buf, family_descriptor::MIN_ENCODED_LEN, "family count")?;
        for _ in 0..num_families {
            let family = FamilyDescriptor::decode_from(buf)?;
            if family.name.is_empty() {
                return Err(Status::corruption("family with empty name"));
            }
            self.families.insert(family);
        }

        debug!(
            table = %self.name_as_string,
            version,
            attributes = num_values,
            families = num_families,
            "decoded table descriptor"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column_family::FamilyOptions;

    fn orders() -> TableDescriptor {
        let mut desc = TableDescriptor::new("orders").unwrap();
        desc.set_max_file_size(1 << 30);
        desc.set_value("OWNER", "billing");
        desc.add_family(FamilyDescriptor::new("info", FamilyOptions::default()))
            .unwrap();
        desc.add_family(FamilyDescriptor::new(
            "history",
            FamilyOptions {
                max_versions: 10,
                ..Default::default()
            },
        ))
        .unwrap();
        desc
    }

    fn encode_with_version(version: i32) -> Vec<u8> {
        let mut encoded = orders().encode().to_vec();
        encoded[..4].copy_from_slice(&version.to_be_bytes());
        encoded
    }

    #[test]
    fn test_encode_decode() {
        let desc = orders();
        let decoded = TableDescriptor::decode(&desc.encode()).unwrap();

        assert_eq!(decoded, desc);
        assert_eq!(decoded.name_as_string(), "orders");
        assert_eq!(decoded.values(), desc.values());
        assert_eq!(decoded.families(), desc.families());
        assert_eq!(decoded.max_file_size().unwrap(), 1 << 30);
    }

    #[test]
    fn test_header_layout() {
        let encoded = orders().encode();
        assert_eq!(&encoded[..4], &[0, 0, 0, 3]);
        assert_eq!(&encoded[4..8], &[0, 0, 0, 6]);
        assert_eq!(&encoded[8..14], b"orders");
        // is-root, is-meta
        assert_eq!(&encoded[14..16], &[0, 0]);
    }

    #[test]
    fn test_reject_old_versions() {
        for version in [i32::MIN, -1, 0, 1, 2] {
            let err = TableDescriptor::decode(&encode_with_version(version)).unwrap_err();
            assert!(err.is_not_supported(), "version {version}: {err}");
        }
        assert!(TableDescriptor::decode(&encode_with_version(3)).is_ok());
        assert!(TableDescriptor::decode(&encode_with_version(4)).is_ok());
    }

    #[test]
    fn test_truncated_input() {
        let encoded = orders().encode();
        for len in 0..encoded.len() {
            let err = TableDescriptor::decode(&encoded[..len]).unwrap_err();
            assert!(err.is_corruption(), "prefix of {len} bytes: {err}");
        }
    }

    #[test]
    fn test_trailing_bytes() {
        let mut encoded = orders().encode().to_vec();
        encoded.push(0);
        assert!(TableDescriptor::decode(&encoded).unwrap_err().is_corruption());
    }

    #[test]
    fn test_decode_consecutive() {
        let a = orders();
        let b = TableDescriptor::new("users").unwrap();

        let mut buf = BytesMut::new();
        a.encode_to(&mut buf);
        b.encode_to(&mut buf);

        let mut input = buf.freeze();
        assert_eq!(TableDescriptor::decode_from(&mut input).unwrap(), a);
        assert_eq!(TableDescriptor::decode_from(&mut input).unwrap(), b);
        assert!(input.is_empty());
    }

    #[test]
    fn test_empty_descriptor_round_trip() {
        let empty = TableDescriptor::default();
        let decoded = TableDescriptor::decode(&empty.encode()).unwrap();
        assert_eq!(decoded, empty);
        assert!(decoded.values().is_empty());
        assert!(!decoded.is_meta_region().unwrap());
    }

    #[test]
    fn test_catalog_flags_survive() {
        let root = crate::table::root_table_desc();
        let encoded = root.encode();
        assert_eq!(&encoded[14..16], &[1, 1]);
        let decoded = TableDescriptor::decode(&encoded).unwrap();
        assert!(decoded.is_root_region().unwrap());
        assert!(decoded.is_meta_region().unwrap());
    }

    #[test]
    fn test_unparsable_flag_round_trips() {
        let mut desc = orders();
        desc.set_value(attributes::IS_META, "yes");

        let encoded = desc.encode();
        // is-meta header byte
        assert_eq!(encoded[15], 0);

        let decoded = TableDescriptor::decode(&encoded).unwrap();
        assert_eq!(decoded, desc);
        assert_eq!(decoded.value_str(attributes::IS_META).as_deref(), Some("yes"));
        assert!(decoded.is_meta_region().unwrap_err().is_parse_error());
    }

    #[test]
    fn test_root_without_meta_is_kept() {
        let mut desc = orders();
        desc.set_value(attributes::IS_ROOT, "TRUE");

        let encoded = desc.encode();
        assert_eq!(&encoded[14..16], &[1, 0]);

        let decoded = TableDescriptor::decode(&encoded).unwrap();
        assert_eq!(decoded, desc);
        assert!(decoded.is_root_region().unwrap());
        assert!(!decoded.is_meta_region().unwrap());
    }

    #[test]
    fn test_decode_rejects_empty_family_name() {
        let mut buf = BytesMut::new();
        buf.put_i32(TABLE_DESCRIPTOR_VERSION);
        coding::put_byte_array(&mut buf, b"t");
        buf.put_slice(&[0, 0]);
        buf.put_u32(0);
        buf.put_u32(1);
        FamilyDescriptor::new("", FamilyOptions::default()).encode_to(&mut buf);

        let err = TableDescriptor::decode(&buf).unwrap_err();
        assert!(err.is_corruption());
    }
}
