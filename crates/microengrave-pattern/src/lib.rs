//! Microengrave pattern generator
//!
//! Builds WAV files whose bytes, once burned to a CD-R as an audio track,
//! change the reflectivity of the dye layer in a visible pattern. Bits on
//! a disc are recorded at roughly 1.5 µm resolution, so long runs of the
//! same byte value show up as lighter or darker regions.
//!
//! # Patterns
//!
//! - **pitch** - a 440 Hz sine tone, for checking the burn pipeline
//! - **bands** - concentric rings of two alternating sample values
//! - **pie** - four wedges per revolution, computed from the track geometry
//!
//! # Determinism
//!
//! Output depends only on the pattern and its parameters. The header and
//! payload sizes are fixed: 44 header bytes followed by exactly
//! 246,960,000 bytes of 16-bit stereo PCM at 44.1 kHz.
//!
//! # Example
//!
//! ```ignore
//! use microengrave_pattern::{generate, Pattern, PatternParams};
//!
//! let result = generate(Pattern::Pie, &PatternParams::default())?;
//! std::fs::write("pie.wav", &result.wav_data)?;
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] - Main entry point, with header and length checks
//! - [`pattern`] - The tone, bands and pie generators
//! - [`wav`] - Byte encoding, header layout and PCM helpers

pub mod error;
pub mod generate;
pub mod pattern;
pub mod wav;

// Re-export main types at crate root
pub use error::{PatternError, PatternResult};
pub use generate::{generate, generate_with_format, GenerateResult};
pub use pattern::{DiscGeometry, Pattern, PatternParams, PieSummary};
pub use wav::WavFormat;
