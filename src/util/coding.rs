//! Fixed-width and length-prefixed encoding primitives.
//!
//! All multi-byte integers are big-endian. A byte array is written as a
//! `u32` length followed by that many bytes. Every `get_*` checks the
//! remaining input first and reports truncation as `Corruption` rather
//! than panicking inside [`Buf`].

use bytes::{Buf, BufMut};

use crate::util::{Result, Slice, Status};

pub fn put_byte_array<B: BufMut>(buf: &mut B, data: &[u8]) {
    buf.put_u32(data.len() as u32);
    buf.put_slice(data);
}

pub fn put_bool<B: BufMut>(buf: &mut B, value: bool) {
    buf.put_u8(value as u8);
}

fn ensure<B: Buf>(buf: &B, n: usize, what: &str) -> Result<()> {
    if buf.remaining() < n {
        return Err(Status::corruption(format!(
            "{what} truncated: need {n} bytes, {} left",
            buf.remaining()
        )));
    }
    Ok(())
}

pub fn get_u8<B: Buf>(buf: &mut B, what: &str) -> Result<u8> {
    ensure(buf, 1, what)?;
    Ok(buf.get_u8())
}

pub fn get_bool<B: Buf>(buf: &mut B, what: &str) -> Result<bool> {
    match get_u8(buf, what)? {
        0 => Ok(false),
        1 => Ok(true),
        b => Err(Status::corruption(format!("{what}: invalid boolean byte {b}"))),
    }
}

pub fn get_u32<B: Buf>(buf: &mut B, what: &str) -> Result<u32> {
    ensure(buf, 4, what)?;
    Ok(buf.get_u32())
}

pub fn get_i32<B: Buf>(buf: &mut B, what: &str) -> Result<i32> {
    ensure(buf, 4, what)?;
    Ok(buf.get_i32())
}

pub fn get_i64<B: Buf>(buf: &mut B, what: &str) -> Result<i64> {
    ensure(buf, 8, what)?;
    Ok(buf.get_i64())
}

/// Reads a `u32`-length-prefixed byte array.
pub fn get_byte_array<B: Buf>(buf: &mut B, what: &str) -> Result<Slice> {
    let len = get_u32(buf, what)? as usize;
    ensure(buf, len, what)?;
    Ok(Slice::from(buf.copy_to_bytes(len)))
}

/// Reads an element count and rejects counts the input cannot possibly hold,
/// given that each element occupies at least `min_element_size` bytes.
pub fn get_count<B: Buf>(buf: &mut B, min_element_size: usize, what: &str) -> Result<usize> {
    let count = get_u32(buf, what)? as usize;
    if count.saturating_mul(min_element_size) > buf.remaining() {
        return Err(Status::corruption(format!(
            "{what}: count {count} exceeds remaining input of {} bytes",
            buf.remaining()
        )));
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use bytes::BytesMut;

    use super::*;

    #[test]
    fn test_byte_array_layout() {
        let mut buf = BytesMut::new();
        put_byte_array(&mut buf, b"abc");
        assert_eq!(&buf[..], &[0, 0, 0, 3, b'a', b'b', b'c']);

        let mut input = &buf[..];
        let s = get_byte_array(&mut input, "name").unwrap();
        assert_eq!(s, Slice::from("abc"));
        assert!(input.is_empty());
    }

    #[test]
    fn test_truncated_byte_array() {
        let mut input: &[u8] = &[0, 0, 0, 9, b'x'];
        let err = get_byte_array(&mut input, "name").unwrap_err();
        assert!(err.is_corruption());
    }

    #[test]
    fn test_truncated_length_prefix() {
        let mut input: &[u8] = &[0, 0];
        assert!(get_u32(&mut input, "len").unwrap_err().is_corruption());
    }

    #[test]
    fn test_bool_rejects_other_bytes() {
        let mut input: &[u8] = &[1, 0, 7];
        assert!(get_bool(&mut input, "flag").unwrap());
        assert!(!get_bool(&mut input, "flag").unwrap());
        assert!(get_bool(&mut input, "flag").unwrap_err().is_corruption());
    }

    #[test]
    fn test_count_bounded_by_input() {
        let mut input: &[u8] = &[0xff, 0xff, 0xff, 0xff, 0, 0];
        assert!(get_count(&mut input, 4, "count").unwrap_err().is_corruption());

        let mut input: &[u8] = &[0, 0, 0, 1, 0, 0, 0, 0];
        assert_eq!(get_count(&mut input, 4, "count").unwrap(), 1);
    }
}
