//! Deterministic WAV header writer.
//!
//! The header layout is fixed: 16-bit stereo PCM at 44.1 kHz with a
//! payload of exactly [`DATA_LEN`] bytes. No timestamps or optional chunks
//! are written, so identical payloads always give identical files.

mod encoder;
mod format;
mod header;
mod pcm;


// Re-export public API
pub use encoder::{write_le16, write_le32};
pub use format::{
    WavFormat, BITS_PER_SAMPLE, CHANNELS, DATA_LEN, SAMPLES, SAMPLE_RATE, TOTAL_FRAMES,
    WAV_HEADER_SIZE,
};
pub use header::{header_bytes, write_header};
pub use pcm::{payload, payload_hash, pcm_hash};
