//! Fixed WAV format parameters.

/// Sample frames per second.
pub const SAMPLE_RATE: u32 = 44_100;

/// Duration of the output in seconds (about 23 minutes of audio).
pub const SAMPLES: u32 = 1_400;

/// Number of interleaved channels.
pub const CHANNELS: u16 = 2;

/// Bits per sample per channel.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Size of the canonical PCM header in bytes.
pub const WAV_HEADER_SIZE: usize = 44;

/// Total number of stereo sample frames in the payload.
pub const TOTAL_FRAMES: usize = SAMPLE_RATE as usize * SAMPLES as usize;

/// Payload size in bytes (2 channels * 2 bytes per frame).
pub const DATA_LEN: usize = TOTAL_FRAMES * 4;

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Duration in whole seconds.
    pub seconds: u32,
}

impl WavFormat {
    /// Red Book audio: 44.1 kHz, 16-bit stereo, for the full engraving run.
    pub const CD_AUDIO: WavFormat = WavFormat {
        channels: CHANNELS,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: BITS_PER_SAMPLE,
        seconds: SAMPLES,
    };

    /// Calculates bytes per sample (per channel).
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Calculates block align (bytes per sample frame).
    pub fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Calculates byte rate (bytes per second).
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }

    /// Number of sample frames in the payload.
    pub fn frames(&self) -> usize {
        self.sample_rate as usize * self.seconds as usize
    }

    /// Payload length in bytes, as declared by the data chunk.
    pub fn data_len(&self) -> usize {
        self.frames() * self.block_align() as usize
    }

    /// RIFF chunk length: everything after the first 8 bytes.
    pub fn riff_len(&self) -> usize {
        WAV_HEADER_SIZE + self.data_len() - 8
    }

    /// Header plus payload.
    pub fn total_len(&self) -> usize {
        WAV_HEADER_SIZE + self.data_len()
    }
}

impl Default for WavFormat {
    fn default() -> Self {
        Self::CD_AUDIO
    }
}
