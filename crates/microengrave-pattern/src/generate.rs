//! Main entry point for pattern generation.
//!
//! Builds the header, checks its size, runs exactly one generator into the
//! same buffer and checks the final size before handing the bytes back.

use crate::error::{PatternError, PatternResult};
use crate::pattern::{bands, pie, tone, Pattern, PatternParams, PieSummary};
use crate::wav::{payload_hash, write_header, WavFormat, WAV_HEADER_SIZE};

/// Result of pattern generation.
#[derive(Debug)]
pub struct GenerateResult {
    /// The pattern that was generated.
    pub pattern: Pattern,
    /// Complete WAV file bytes (header + payload).
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the payload only.
    pub pcm_hash: String,
    /// Spiral statistics, for [`Pattern::Pie`] only.
    pub pie: Option<PieSummary>,
}

impl GenerateResult {
    /// Length of the payload following the header.
    pub fn data_len(&self) -> usize {
        self.wav_data.len() - WAV_HEADER_SIZE
    }
}

/// Generates the full-length WAV for `pattern`.
pub fn generate(pattern: Pattern, params: &PatternParams) -> PatternResult<GenerateResult> {
    generate_with_format(pattern, params, &WavFormat::CD_AUDIO)
}

/// Generates a WAV for `pattern` laid out according to `format`.
///
/// [`generate`] always uses [`WavFormat::CD_AUDIO`]; shorter formats are
/// useful for previews and tests.
pub fn generate_with_format(
    pattern: Pattern,
    params: &PatternParams,
    format: &WavFormat,
) -> PatternResult<GenerateResult> {
    let expected = format.total_len();
    let mut buf = Vec::with_capacity(expected);

    write_header(&mut buf, format);
    if buf.len() != WAV_HEADER_SIZE {
        return Err(PatternError::HeaderLength {
            expected: WAV_HEADER_SIZE,
            actual: buf.len(),
        });
    }

    let mut pie_summary = None;
    match pattern {
        Pattern::Pitch => tone(&mut buf, params.frequency, format.seconds)?,
        Pattern::Bands => bands(&mut buf, params.band_count, format.frames())?,
        Pattern::Pie => pie_summary = Some(pie(&mut buf, params.wedge_width, expected)?),
    }

    if buf.len() != expected {
        return Err(PatternError::TotalLength {
            expected,
            actual: buf.len(),
        });
    }

    // Hash only a payload that sits behind the exact header for `format`
    let pcm_hash = payload_hash(&buf, format)?;
    Ok(GenerateResult {
        pattern,
        wav_data: buf,
        pcm_hash,
        pie: pie_summary,
    })
}
