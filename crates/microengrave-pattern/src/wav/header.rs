//! Canonical 44-byte PCM WAV header.

use super::encoder::{write_le16, write_le32};
use super::format::{WavFormat, WAV_HEADER_SIZE};

/// Appends the header for `format` to `buf`.
///
/// Always appends exactly [`WAV_HEADER_SIZE`] bytes: a RIFF chunk holding a
/// 16-byte PCM `fmt ` chunk followed by the `data` chunk header. The payload
/// itself is appended afterwards by a pattern generator.
pub fn write_header(buf: &mut Vec<u8>, format: &WavFormat) {
    // RIFF header
    buf.extend_from_slice(b"RIFF");
    write_le32(buf, format.riff_len() as i64);
    buf.extend_from_slice(b"WAVE");

    // fmt chunk
    buf.extend_from_slice(b"fmt ");
    write_le32(buf, 16); // Chunk size (16 for PCM)
    write_le16(buf, 1); // Audio format (1 = PCM)
    write_le16(buf, format.channels as i64);
    write_le32(buf, format.sample_rate as i64);
    write_le32(buf, format.byte_rate() as i64);
    write_le16(buf, format.block_align() as i64);
    write_le16(buf, format.bits_per_sample as i64);

    // data chunk
    buf.extend_from_slice(b"data");
    write_le32(buf, format.data_len() as i64);
}

/// Returns the header for `format` as a standalone buffer.
pub fn header_bytes(format: &WavFormat) -> Vec<u8> {
    let mut buf = Vec::with_capacity(WAV_HEADER_SIZE);
    write_header(&mut buf, format);
    buf
}
