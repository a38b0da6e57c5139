//! Decodes generated files with `hound` to check they are standard WAV.

use std::io::Cursor;

use microengrave_pattern::{generate_with_format, Pattern, PatternParams, WavFormat};

fn preview_format() -> WavFormat {
    WavFormat {
        seconds: 2,
        ..WavFormat::CD_AUDIO
    }
}

#[test]
fn test_hound_reads_header() {
    for pattern in Pattern::ALL {
        let result =
            generate_with_format(pattern, &PatternParams::default(), &preview_format()).unwrap();
        let reader = hound::WavReader::new(Cursor::new(&result.wav_data)).expect("valid wav");
        let spec = reader.spec();

        assert_eq!(spec.sample_rate, 44_100);
        assert_eq!(spec.channels, 2);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_format, hound::SampleFormat::Int);
        assert_eq!(reader.duration(), 2 * 44_100, "{}", pattern);
    }
}

#[test]
fn test_hound_decodes_tone_samples() {
    let result =
        generate_with_format(Pattern::Pitch, &PatternParams::default(), &preview_format())
            .unwrap();
    let mut reader = hound::WavReader::new(Cursor::new(&result.wav_data)).unwrap();
    let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();

    assert_eq!(samples.len(), 2 * 2 * 44_100);
    assert_eq!(&samples[0..6], &[0, 0, 2053, 2053, 4098, 4098]);
    let peak = samples.iter().map(|s| s.unsigned_abs()).max().unwrap();
    assert_eq!(peak, 32767);
}

#[test]
fn test_hound_decodes_band_samples() {
    let result =
        generate_with_format(Pattern::Bands, &PatternParams::default(), &preview_format())
            .unwrap();
    let mut reader = hound::WavReader::new(Cursor::new(&result.wav_data)).unwrap();
    let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();

    // Two channels per frame, 11025 frames per band
    let per_band = 2 * 2 * 44_100 / 8;
    assert!(samples[..per_band].iter().all(|&s| s == 0x4040));
    assert!(samples[per_band..2 * per_band].iter().all(|&s| s == 0x4545));
}
