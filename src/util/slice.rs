use std::{borrow::Borrow, cmp::Ordering, fmt};

use bytes::Bytes;

/// Immutable byte string.
///
/// Backed by [`Bytes`], so cloning a `Slice` shares the underlying buffer
/// instead of copying it. Ordering is unsigned lexicographic by byte value.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Slice {
    data: Bytes,
}

impl Slice {
    pub fn new(data: Vec<u8>) -> Self {
        Slice {
            data: Bytes::from(data),
        }
    }

    pub fn from_bytes(data: &[u8]) -> Self {
        Slice {
            data: Bytes::copy_from_slice(data),
        }
    }

    pub const fn from_static(data: &'static [u8]) -> Self {
        Slice {
            data: Bytes::from_static(data),
        }
    }

    pub fn empty() -> Self {
        Slice { data: Bytes::new() }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn compare(&self, other: &Slice) -> Ordering {
        self.data.cmp(&other.data)
    }

    /// Zero-copy sub-slice sharing this slice's buffer.
    pub fn slice(&self, range: std::ops::Range<usize>) -> Slice {
        Slice {
            data: self.data.slice(range),
        }
    }

    /// Text form of the bytes; invalid UTF-8 sequences become U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }
}

impl From<Bytes> for Slice {
    fn from(data: Bytes) -> Self {
        Slice { data }
    }
}

impl From<Vec<u8>> for Slice {
    fn from(data: Vec<u8>) -> Self {
        Slice::new(data)
    }
}

impl From<&[u8]> for Slice {
    fn from(data: &[u8]) -> Self {
        Slice::from_bytes(data)
    }
}

impl<const N: usize> From<&[u8; N]> for Slice {
    fn from(data: &[u8; N]) -> Self {
        Slice::from_bytes(data)
    }
}

impl From<String> for Slice {
    fn from(s: String) -> Self {
        Slice::new(s.into_bytes())
    }
}

impl From<&str> for Slice {
    fn from(s: &str) -> Self {
        Slice::from_bytes(s.as_bytes())
    }
}

impl AsRef<[u8]> for Slice {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl Borrow<[u8]> for Slice {
    fn borrow(&self) -> &[u8] {
        &self.data
    }
}

impl PartialOrd for Slice {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Slice {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl fmt::Debug for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(&self.data) {
            Ok(s) => write!(f, "Slice(\"{s}\")"),
            Err(_) => write!(f, "Slice({:?})", &self.data[..]),
        }
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(&self.data) {
            Ok(s) => write!(f, "{s}"),
            Err(_) => write!(f, "{:?}", &self.data[..]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_creation() {
        let s1 = Slice::from("hello");
        assert_eq!(s1.size(), 5);
        assert_eq!(s1.data(), b"hello");
    }

    #[test]
    fn test_slice_compare_is_unsigned() {
        let s1 = Slice::from("abc");
        let s2 = Slice::from("def");
        assert!(s1 < s2);
        assert_eq!(s1.compare(&s2), Ordering::Less);

        // 0xff sorts after ASCII
        let high = Slice::from(&[0xffu8][..]);
        assert!(Slice::from("z") < high);
    }

    #[test]
    fn test_slice_empty() {
        let s = Slice::empty();
        assert!(s.is_empty());
        assert_eq!(s.size(), 0);
        assert_eq!(s, Slice::default());
    }

    #[test]
    fn test_slice_clone_shares_buffer() {
        let s = Slice::from("shared");
        let c = s.clone();
        assert_eq!(s.data().as_ptr(), c.data().as_ptr());
    }

    #[test]
    fn test_slice_sub_slice() {
        let s = Slice::from("info:regioninfo");
        assert_eq!(s.slice(0..4), Slice::from("info"));
    }

    #[test]
    fn test_slice_lossy_string() {
        assert_eq!(Slice::from("t1").to_string_lossy(), "t1");
        assert_eq!(Slice::from(&[0x61u8, 0xff][..]).to_string_lossy(), "a\u{fffd}");
    }
}
