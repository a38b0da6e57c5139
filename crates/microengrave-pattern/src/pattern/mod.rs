//! Pattern generators.
//!
//! Each generator appends payload bytes to an output buffer that already
//! holds the WAV header. Generators never rewrite or truncate what is
//! already in the buffer.
//!
//! - [`tone`] - fixed-frequency calibration tone (`pitch`)
//! - [`bands`] - alternating concentric rings (`bands`)
//! - [`pie`] - alternating angular wedges (`pie`)

pub mod bands;
pub mod pie;
pub mod tone;

use std::fmt;
use std::str::FromStr;

use crate::error::PatternError;

pub use bands::{bands, BAND_EVEN, BAND_ODD};
pub use pie::{pie, DiscGeometry, PieSummary, WEDGE_EVEN, WEDGE_ODD};
pub use tone::tone;

/// The pattern to engrave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Sine test tone.
    Pitch,
    /// Concentric bands.
    Bands,
    /// Pie slices.
    Pie,
}

impl Pattern {
    /// All patterns, in declaration order.
    pub const ALL: [Pattern; 3] = [Pattern::Pitch, Pattern::Bands, Pattern::Pie];

    /// The command-line name of the pattern.
    pub fn as_str(&self) -> &'static str {
        match self {
            Pattern::Pitch => "pitch",
            Pattern::Bands => "bands",
            Pattern::Pie => "pie",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    /// Names are matched exactly; `Pie` or ` pie` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::ALL
            .into_iter()
            .find(|pattern| pattern.as_str() == s)
            .ok_or_else(|| PatternError::unknown_pattern(s))
    }
}

/// Tunable inputs for the generators.
///
/// The defaults are the values the engraving run is calibrated for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternParams {
    /// Tone frequency in Hz for [`Pattern::Pitch`].
    pub frequency: f64,
    /// Number of rings for [`Pattern::Bands`].
    pub band_count: usize,
    /// Fraction of a revolution covered by each wedge for [`Pattern::Pie`].
    pub wedge_width: f64,
}

impl PatternParams {
    /// Default tone frequency (A4).
    pub const DEFAULT_FREQUENCY: f64 = 440.0;
    /// Default number of rings.
    pub const DEFAULT_BAND_COUNT: usize = 8;
    /// Default wedge width: four quadrants.
    pub const DEFAULT_WEDGE_WIDTH: f64 = 0.25;
}

impl Default for PatternParams {
    fn default() -> Self {
        Self {
            frequency: Self::DEFAULT_FREQUENCY,
            band_count: Self::DEFAULT_BAND_COUNT,
            wedge_width: Self::DEFAULT_WEDGE_WIDTH,
        }
    }
}
