use crc32fast::Hasher;

/// Stable 32-bit hash of a byte string.
///
/// The value only depends on the bytes, never on process state, so it can be
/// compared across runs and builds.
pub fn hash_bytes(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}
