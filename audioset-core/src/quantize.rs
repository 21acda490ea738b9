//! Waveform sample quantization
//!
//! Waveforms are stored as i16. Encoding multiplies by a scale factor chosen
//! by [`ScaleMode`], clamps to the i16 range and truncates toward zero.
//! Decoding divides by 32768.

use crate::format::constants::{SAMPLE_MAX, SAMPLE_MIN, SAMPLE_SCALE};
use crate::traits::SampleElement;
use crate::{AudioSetError, Result};

/// How encode interprets the amplitude of incoming samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScaleMode {
    /// Normalized if the peak magnitude is at most 1, raw otherwise
    #[default]
    Auto,
    /// Samples are in [-1, 1] and are multiplied by 32768
    Normalized,
    /// Samples are already on the i16 scale
    Raw,
}

impl ScaleMode {
    /// Multiplier to apply to every sample, given the peak magnitude
    pub fn multiplier(self, peak: f64) -> f64 {
        match self {
            ScaleMode::Auto if peak <= 1.0 => SAMPLE_SCALE as f64,
            ScaleMode::Auto => 1.0,
            ScaleMode::Normalized => SAMPLE_SCALE as f64,
            ScaleMode::Raw => 1.0,
        }
    }

    /// Lowercase name, as accepted on command lines
    pub const fn as_str(self) -> &'static str {
        match self {
            ScaleMode::Auto => "auto",
            ScaleMode::Normalized => "normalized",
            ScaleMode::Raw => "raw",
        }
    }
}

impl core::fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Largest absolute sample value. NaN is ignored; empty input gives 0.
pub fn peak_amplitude<S: SampleElement>(samples: &[S]) -> f64 {
    samples.iter().fold(0.0, |peak, &s| {
        let v = s.to_f64();
        let magnitude = if v < 0.0 { -v } else { v };
        if magnitude > peak {
            magnitude
        } else {
            peak
        }
    })
}

/// Scale, clamp to [-32768, 32767] and truncate toward zero
#[inline]
pub fn quantize_sample(value: f64, multiplier: f64) -> i16 {
    let scaled = value * multiplier;
    if scaled.is_nan() {
        return 0;
    }
    scaled.clamp(SAMPLE_MIN, SAMPLE_MAX) as i16
}

/// Convert a stored sample back to normalized amplitude
#[inline]
pub fn dequantize_sample(sample: i16) -> f32 {
    sample as f32 / SAMPLE_SCALE
}

/// Quantize a run of samples into `out`, which must have the same length
pub fn quantize_into<S: SampleElement>(samples: &[S], multiplier: f64, out: &mut [i16]) -> Result<()> {
    if samples.len() != out.len() {
        return Err(AudioSetError::ShapeMismatch);
    }
    for (dst, &src) in out.iter_mut().zip(samples) {
        *dst = quantize_sample(src.to_f64(), multiplier);
    }
    Ok(())
}

/// Dequantize a run of stored samples into `out`, which must have the same length
pub fn dequantize_into(samples: &[i16], out: &mut [f32]) -> Result<()> {
    if samples.len() != out.len() {
        return Err(AudioSetError::ShapeMismatch);
    }
    for (dst, &src) in out.iter_mut().zip(samples) {
        *dst = dequantize_sample(src);
    }
    Ok(())
}

/// Quantize a whole waveform buffer into a fresh i16 buffer
///
/// The scale factor is resolved once from the peak of the entire buffer,
/// so all rows share it. The input is never modified.
#[cfg(feature = "alloc")]
pub fn quantize_all<S: SampleElement>(samples: &[S], mode: ScaleMode) -> Result<alloc::vec::Vec<i16>> {
    let multiplier = match mode {
        ScaleMode::Auto => mode.multiplier(peak_amplitude(samples)),
        _ => mode.multiplier(0.0),
    };
    let mut stored = alloc::vec![0i16; samples.len()];
    quantize_into(samples, multiplier, &mut stored)?;
    Ok(stored)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_scale_detection() {
        assert_eq!(ScaleMode::Auto.multiplier(0.0), 32768.0);
        assert_eq!(ScaleMode::Auto.multiplier(1.0), 32768.0);
        assert_eq!(ScaleMode::Auto.multiplier(1.5), 1.0);
        assert_eq!(ScaleMode::Normalized.multiplier(1000.0), 32768.0);
        assert_eq!(ScaleMode::Raw.multiplier(0.5), 1.0);
    }

    #[test]
    fn test_peak_amplitude() {
        assert_eq!(peak_amplitude::<f32>(&[]), 0.0);
        assert_eq!(peak_amplitude(&[0.25f32, -0.75, 0.5]), 0.75);
        assert_eq!(peak_amplitude(&[f64::NAN, -2.0]), 2.0);
        assert_eq!(peak_amplitude(&[-32768i16, 100]), 32768.0);
    }

    #[test]
    fn test_quantize_clamps_and_truncates() {
        let scale = SAMPLE_SCALE as f64;

        assert_eq!(quantize_sample(1.0, scale), 32767);
        assert_eq!(quantize_sample(-1.0, scale), -32768);
        assert_eq!(quantize_sample(0.5, scale), 16384);
        assert_eq!(quantize_sample(100_000.0, 1.0), 32767);
        assert_eq!(quantize_sample(-100_000.0, 1.0), -32768);
        // truncation toward zero, not rounding
        assert_eq!(quantize_sample(12.9, 1.0), 12);
        assert_eq!(quantize_sample(-12.9, 1.0), -12);
        assert_eq!(quantize_sample(f64::NAN, 1.0), 0);
    }

    #[test]
    fn test_dequantize() {
        assert_eq!(dequantize_sample(-32768), -1.0);
        assert_eq!(dequantize_sample(16384), 0.5);
        assert_eq!(dequantize_sample(0), 0.0);
    }

    #[test]
    fn test_quantization_error_bound() {
        let scale = SAMPLE_SCALE as f64;
        let mut value = -1.0f64;
        while value <= 1.0 {
            let restored = dequantize_sample(quantize_sample(value, scale)) as f64;
            assert!((restored - value).abs() <= 1.0 / 32768.0 + 1e-9, "{value}");
            value += 0.001;
        }
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_quantize_all_shares_scale() {
        // the 2.0 peak switches the whole buffer to raw scale
        let samples = [0.5f32, 2.0, -0.5];

        assert_eq!(quantize_all(&samples, ScaleMode::Auto).unwrap(), vec![0, 2, 0]);
        assert_eq!(
            quantize_all(&samples, ScaleMode::Normalized).unwrap(),
            vec![16384, 32767, -16384]
        );
        assert_eq!(quantize_all(&samples, ScaleMode::Raw).unwrap(), vec![0, 2, 0]);
        assert_eq!(samples, [0.5, 2.0, -0.5]);
    }

    #[test]
    fn test_length_mismatch() {
        let mut out = [0i16; 2];
        assert_eq!(
            quantize_into(&[0.0f32; 3], 1.0, &mut out),
            Err(AudioSetError::ShapeMismatch)
        );
        let mut out = [0f32; 1];
        assert_eq!(
            dequantize_into(&[0i16; 3], &mut out),
            Err(AudioSetError::ShapeMismatch)
        );
    }
}
