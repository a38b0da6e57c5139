//! Little-endian integer encoding into an output buffer.

/// Appends the low 16 bits of `value`, least significant byte first.
#[inline]
pub fn write_le16(buf: &mut Vec<u8>, value: i64) {
    buf.extend_from_slice(&(value as u16).to_le_bytes());
}

/// Appends the low 32 bits of `value`, least significant byte first.
#[inline]
pub fn write_le32(buf: &mut Vec<u8>, value: i64) {
    buf.extend_from_slice(&(value as u32).to_le_bytes());
}
