//! Payload access and hashing for finished files.

use crate::error::{PatternError, PatternResult};

use super::format::{WavFormat, WAV_HEADER_SIZE};
use super::header::header_bytes;

/// Returns the payload of a finished file laid out according to `format`.
///
/// The first 44 bytes must be exactly the header [`header_bytes`] produces
/// for `format`, and the file must be exactly [`WavFormat::total_len`] bytes.
pub fn payload<'a>(wav_data: &'a [u8], format: &WavFormat) -> PatternResult<&'a [u8]> {
    if wav_data.len() < WAV_HEADER_SIZE {
        return Err(PatternError::HeaderLength {
            expected: WAV_HEADER_SIZE,
            actual: wav_data.len(),
        });
    }

    let expected_header = header_bytes(format);
    if let Some(offset) = expected_header
        .iter()
        .zip(&wav_data[..WAV_HEADER_SIZE])
        .position(|(want, got)| want != got)
    {
        return Err(PatternError::HeaderMismatch { offset });
    }

    if wav_data.len() != format.total_len() {
        return Err(PatternError::TotalLength {
            expected: format.total_len(),
            actual: wav_data.len(),
        });
    }

    Ok(&wav_data[WAV_HEADER_SIZE..])
}

/// BLAKE3 hash of raw PCM bytes, as lowercase hex.
pub fn pcm_hash(pcm: &[u8]) -> String {
    blake3::hash(pcm).to_hex().to_string()
}

/// Checks a finished file with [`payload`] and hashes its payload.
pub fn payload_hash(wav_data: &[u8], format: &WavFormat) -> PatternResult<String> {
    payload(wav_data, format).map(pcm_hash)
}
