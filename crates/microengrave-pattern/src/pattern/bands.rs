//! Concentric bands.

use crate::error::{PatternError, PatternResult};
use crate::wav::write_le16;

/// Sample value written for even-numbered bands.
pub const BAND_EVEN: i64 = 0x4040;

/// Sample value written for odd-numbered bands.
pub const BAND_ODD: i64 = 0x4545;

/// Splits `frames` stereo frames into `band_count` equal rings.
///
/// Each ring holds `frames / band_count` frames. When the division leaves a
/// remainder, those trailing frames are not written at all, so the caller's
/// length check will catch a band count that does not divide the payload.
pub fn bands(buf: &mut Vec<u8>, band_count: usize, frames: usize) -> PatternResult<()> {
    if band_count == 0 {
        return Err(PatternError::invalid_param(
            "band_count",
            "must be at least 1",
        ));
    }

    let per_band = frames / band_count;
    buf.reserve(per_band * band_count * 4);

    for i in 0..band_count {
        let value = if i % 2 == 0 { BAND_EVEN } else { BAND_ODD };
        for _ in 0..per_band {
            write_le16(buf, value);
            write_le16(buf, value);
        }
    }

    Ok(())
}
