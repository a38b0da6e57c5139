//! Pie slices.
//!
//! The disc is written along a spiral starting at [`DiscGeometry::start_radius`]
//! and moving outwards by one track pitch per revolution. For every
//! revolution we work out how many output bytes fit on the circumference and
//! paint four wedges of alternating byte values, so the wedges line up
//! radially and form a pie once burned.

use std::f64::consts::PI;

use crate::error::{PatternError, PatternResult};

/// Byte written in even-numbered wedges.
pub const WEDGE_EVEN: u8 = 0x40;

/// Byte written in odd-numbered wedges.
pub const WEDGE_ODD: u8 = 0x45;

/// Number of wedges painted per revolution.
const WEDGES: u32 = 4;

/// Physical layout of the spiral track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscGeometry {
    /// Radius of the first revolution, in mm.
    pub start_radius: f64,
    /// Distance between adjacent revolutions, in mm.
    pub track_pitch: f64,
    /// Scanning speed, in the same units as [`DiscGeometry::byte_length`].
    pub linear_speed: f64,
    /// Output bytes per second of playback.
    pub byte_rate: f64,
}

impl DiscGeometry {
    /// Calibration for a standard CD-R.
    // TODO: derive linear_speed from the disc's ATIP data instead of a hand-tuned value.
    pub const DEFAULT: DiscGeometry = DiscGeometry {
        start_radius: 25.0,
        track_pitch: 0.00148,
        linear_speed: 1300.0,
        byte_rate: 176_400.0,
    };

    /// Track length occupied by one output byte.
    pub fn byte_length(&self) -> f64 {
        self.linear_speed / self.byte_rate
    }

    /// Number of output bytes on one revolution at `radius`.
    pub fn circumference_bytes(&self, radius: f64) -> f64 {
        2.0 * PI * radius / self.byte_length()
    }
}

impl Default for DiscGeometry {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// What a pie run did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSummary {
    /// Revolutions started, including the one cut short by the target.
    pub revolutions: usize,
    /// Radius of the first revolution, in mm.
    pub start_radius: f64,
    /// Radius of the last revolution written, in mm.
    pub final_radius: f64,
    /// Bytes appended to the buffer.
    pub bytes_written: usize,
}

/// Paints pie wedges with [`DiscGeometry::DEFAULT`] until `buf` holds
/// `target_len` bytes.
pub fn pie(buf: &mut Vec<u8>, wedge_width: f64, target_len: usize) -> PatternResult<PieSummary> {
    pie_with_geometry(buf, &DiscGeometry::DEFAULT, wedge_width, target_len)
}

/// Paints pie wedges on `geometry` until `buf` holds `target_len` bytes.
///
/// Wedge `q` of a revolution covers byte indices from
/// `trunc(circ * w * (q - 1))` up to, not including, `trunc(circ * w * q)`.
/// Wedge 0 therefore starts at a negative index; the bounds are truncated
/// toward zero and never clamped, which fixes how many bytes each wedge gets.
pub fn pie_with_geometry(
    buf: &mut Vec<u8>,
    geometry: &DiscGeometry,
    wedge_width: f64,
    target_len: usize,
) -> PatternResult<PieSummary> {
    if !wedge_width.is_finite() || wedge_width <= 0.0 {
        return Err(PatternError::invalid_param(
            "wedge_width",
            format!("must be a positive fraction of a revolution, got {}", wedge_width),
        ));
    }

    let start_len = buf.len();
    let mut summary = PieSummary {
        revolutions: 0,
        start_radius: geometry.start_radius,
        final_radius: geometry.start_radius,
        bytes_written: 0,
    };
    if start_len >= target_len {
        return Ok(summary);
    }
    buf.reserve(target_len - start_len);

    let mut radius = geometry.start_radius;
    loop {
        summary.revolutions += 1;
        summary.final_radius = radius;

        let circ = geometry.circumference_bytes(radius);
        let wedge = circ * wedge_width;
        let before = buf.len();

        for q in 0..WEDGES {
            let from = (wedge * (q as f64 - 1.0)) as i64;
            let to = (wedge * q as f64) as i64;
            let value = if q % 2 == 0 { WEDGE_EVEN } else { WEDGE_ODD };

            let run = (to - from).max(0) as usize;
            let take = run.min(target_len - buf.len());
            buf.resize(buf.len() + take, value);

            if buf.len() >= target_len {
                summary.bytes_written = buf.len() - start_len;
                return Ok(summary);
            }
        }

        if buf.len() == before {
            return Err(PatternError::invalid_param(
                "wedge_width",
                format!(
                    "a revolution at radius {:.5} mm produced no bytes; wedges are too narrow",
                    radius
                ),
            ));
        }

        radius += geometry.track_pitch;
    }
}
