//! Byte views over the sample block
//!
//! The sample block is a run of little-endian i16 values. These helpers
//! let callers read into and write from an `[i16]` buffer directly,
//! swapping byte order in place on big-endian targets.

/// View a sample buffer as raw bytes
pub fn as_bytes(samples: &[i16]) -> &[u8] {
    bytemuck::cast_slice(samples)
}

/// View a sample buffer as writable raw bytes
pub fn as_bytes_mut(samples: &mut [i16]) -> &mut [u8] {
    bytemuck::cast_slice_mut(samples)
}

/// Convert native-endian samples to their little-endian representation
#[inline]
pub fn to_le_in_place(samples: &mut [i16]) {
    if cfg!(target_endian = "big") {
        for s in samples.iter_mut() {
            *s = s.to_le();
        }
    }
}

/// Convert little-endian samples, as read from disk, to native order
#[inline]
pub fn from_le_in_place(samples: &mut [i16]) {
    if cfg!(target_endian = "big") {
        for s in samples.iter_mut() {
            *s = i16::from_le(*s);
        }
    }
}
