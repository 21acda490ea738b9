//! Format constants for the AudioSet container

/// Size of the fixed header: three little-endian i32 counts
pub const HEADER_SIZE: usize = 12;

/// On-disk width of one waveform sample (little-endian i16)
pub const SAMPLE_SIZE: usize = 2;

/// Divisor between stored i16 samples and normalized amplitude
pub const SAMPLE_SCALE: f32 = 32768.0;

/// Smallest storable sample
pub const SAMPLE_MIN: f64 = i16::MIN as f64;

/// Largest storable sample
pub const SAMPLE_MAX: f64 = i16::MAX as f64;

/// Label flags packed into each byte
pub const BITS_PER_BYTE: usize = 8;

/// Domain conventions for AudioSet clips. Not enforced by the codec.
pub mod clip {
    /// Sample rate of every waveform row
    pub const SAMPLE_RATE: u32 = 16_000;

    /// Clip length in seconds
    pub const DURATION_SECS: u32 = 10;

    /// Samples per row for a full-length clip
    pub const SAMPLES_PER_CLIP: usize = (SAMPLE_RATE * DURATION_SECS) as usize;
}
