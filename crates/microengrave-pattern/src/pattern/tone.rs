//! Fixed-pitch calibration tone.

use std::f64::consts::PI;

use crate::error::{PatternError, PatternResult};
use crate::wav::{write_le16, SAMPLE_RATE};

/// Peak amplitude of a full-scale 16-bit sample.
const FULL_SCALE: f64 = 32767.0;

/// Appends `seconds` repetitions of a one-second sine wave at `frequency` Hz.
///
/// The phase restarts at zero on every repetition, so the output is the same
/// one-second block repeated rather than a continuous tone. Left and right
/// carry the same sample.
///
/// A non-finite `frequency` is rejected with
/// [`PatternError::InvalidParameter`].
pub fn tone(buf: &mut Vec<u8>, frequency: f64, seconds: u32) -> PatternResult<()> {
    if !frequency.is_finite() {
        return Err(PatternError::invalid_param(
            "frequency",
            format!("must be a finite number of Hz, got {}", frequency),
        ));
    }

    buf.reserve(SAMPLE_RATE as usize * seconds as usize * 4);

    for _ in 0..seconds {
        for j in 0..SAMPLE_RATE {
            let sample = sample_at(j, frequency);
            // left
            write_le16(buf, sample);
            // right
            write_le16(buf, sample);
        }
    }

    Ok(())
}

/// 16-bit sample for step `j` within the repeated one-second block.
pub fn sample_at(j: u32, frequency: f64) -> i64 {
    let s = j as f64 / SAMPLE_RATE as f64 * 2.0 * PI;
    ((s * frequency).sin() * FULL_SCALE).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn frames(buf: &[u8]) -> Vec<(i16, i16)> {
        buf.chunks_exact(4)
            .map(|f| {
                (
                    i16::from_le_bytes([f[0], f[1]]),
                    i16::from_le_bytes([f[2], f[3]]),
                )
            })
            .collect()
    }

    #[test]
    fn test_one_second_length() {
        let mut buf = Vec::new();
        tone(&mut buf, 440.0, 1).unwrap();
        assert_eq!(buf.len(), 44_100 * 4);
    }

    #[test]
    fn test_known_sample_values() {
        assert_eq!(sample_at(0, 440.0), 0);
        // sin(2pi * 440 / 44100) * 32767 = 2052.80
        assert_eq!(sample_at(1, 440.0), 2053);
        assert_eq!(sample_at(2, 440.0), 4098);
        // Quarter period of 440 Hz is 25.06 samples
        assert_eq!(sample_at(25, 440.0), 32767);
        assert_eq!(sample_at(100, 440.0), -467);
    }

    #[test]
    fn test_samples_stay_in_range() {
        for j in 0..SAMPLE_RATE {
            let s = sample_at(j, 440.0);
            assert!((-32767..=32767).contains(&s), "sample {} out of range: {}", j, s);
        }
    }

    #[test]
    fn test_left_equals_right() {
        let mut buf = Vec::new();
        tone(&mut buf, 440.0, 1).unwrap();
        for (i, (left, right)) in frames(&buf).into_iter().enumerate() {
            assert_eq!(left, right, "frame {} differs between channels", i);
        }
    }

    #[test]
    fn test_phase_restarts_each_second() {
        // 440.5 Hz does not complete a whole number of cycles per second, so a
        // continuous phase would make the blocks differ.
        let mut buf = Vec::new();
        tone(&mut buf, 440.5, 3).unwrap();
        let block = SAMPLE_RATE as usize * 4;
        assert_eq!(buf.len(), 3 * block);
        assert_eq!(&buf[0..block], &buf[block..2 * block]);
        assert_eq!(&buf[block..2 * block], &buf[2 * block..3 * block]);
        // Every block starts from phase zero
        assert_eq!(&buf[block..block + 4], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_appends_after_existing_bytes() {
        let mut buf = vec![0xFF; 44];
        tone(&mut buf, 440.0, 1).unwrap();
        assert_eq!(&buf[..44], &[0xFF; 44][..]);
        assert_eq!(&buf[44..48], &[0, 0, 0, 0]);
        assert_eq!(i16::from_le_bytes([buf[48], buf[49]]), 2053);
    }

    #[test]
    fn test_non_finite_frequency_rejected() {
        for frequency in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut buf = vec![0xAA; 4];
            let err = tone(&mut buf, frequency, 1).unwrap_err();
            assert!(err.to_string().contains("frequency"), "{}", err);
            assert_eq!(buf, vec![0xAA; 4]);
        }
    }

    #[test]
    fn test_zero_seconds_emits_nothing() {
        let mut buf = Vec::new();
        tone(&mut buf, 440.0, 0).unwrap();
        assert!(buf.is_empty());
    }
}
