//! AudioSet record header
//!
//! Every record starts with three little-endian i32 counts:
//!
//! ```text
//! 0x00: clip_count   (rows)
//! 0x04: sample_count (samples per waveform row)
//! 0x08: label_count  (label classes per row)
//! ```
//!
//! There is no magic number and no version field.

use super::constants::{clip, HEADER_SIZE, SAMPLE_SIZE};
use crate::packing::packed_byte_count;
use crate::validation::bounds::checked_block_size;
use crate::{AudioSetError, Result};

/// Fixed 12-byte header of an AudioSet record
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AudioSetHeader {
    /// Number of clips (rows)
    pub clip_count: i32,
    /// Samples per waveform row
    pub sample_count: i32,
    /// Number of label classes
    pub label_count: i32,
}

const _: () = assert!(core::mem::size_of::<AudioSetHeader>() == HEADER_SIZE);

impl AudioSetHeader {
    /// Size of the header in bytes
    pub const SIZE: usize = HEADER_SIZE;

    /// Create a header from raw counts without validation
    pub const fn new(clip_count: i32, sample_count: i32, label_count: i32) -> Self {
        Self {
            clip_count,
            sample_count,
            label_count,
        }
    }

    /// Build a validated header from matrix dimensions
    ///
    /// Fails with `MalformedHeader` when a dimension does not fit in an i32
    /// or when there are no label classes.
    pub fn from_dimensions(nclips: usize, nsamples: usize, nlabels: usize) -> Result<Self> {
        let to_i32 = |n: usize| i32::try_from(n).map_err(|_| AudioSetError::MalformedHeader);
        let header = Self::new(to_i32(nclips)?, to_i32(nsamples)?, to_i32(nlabels)?);
        header.validate()?;
        Ok(header)
    }

    /// Check the header invariants
    pub const fn is_valid(&self) -> bool {
        self.clip_count >= 0 && self.sample_count >= 0 && self.label_count >= 1
    }

    /// Check the header invariants, returning `MalformedHeader` on violation
    pub const fn validate(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(AudioSetError::MalformedHeader)
        }
    }

    /// Parse and validate a header from the first 12 bytes of `bytes`
    pub const fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < Self::SIZE {
            return Err(AudioSetError::TruncatedInput);
        }

        let header = Self {
            clip_count: i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            sample_count: i32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
            label_count: i32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]),
        };

        match header.validate() {
            Ok(()) => Ok(header),
            Err(err) => Err(err),
        }
    }

    /// Serialize the header (no-std compatible)
    pub const fn to_bytes_array(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        let fields = [self.clip_count, self.sample_count, self.label_count];

        let mut f = 0;
        while f < fields.len() {
            let le = fields[f].to_le_bytes();
            let mut b = 0;
            while b < 4 {
                bytes[f * 4 + b] = le[b];
                b += 1;
            }
            f += 1;
        }

        bytes
    }

    /// Number of clips as usize. Only meaningful on a valid header.
    pub const fn nclips(&self) -> usize {
        self.clip_count as usize
    }

    /// Samples per row as usize. Only meaningful on a valid header.
    pub const fn nsamples(&self) -> usize {
        self.sample_count as usize
    }

    /// Label classes as usize. Only meaningful on a valid header.
    pub const fn nlabels(&self) -> usize {
        self.label_count as usize
    }

    /// Packed label bytes per row
    pub const fn byte_count(&self) -> usize {
        packed_byte_count(self.nlabels())
    }

    /// Size of the sample block in bytes
    pub fn sample_block_size(&self) -> Result<usize> {
        checked_block_size(self.nclips(), self.nsamples(), SAMPLE_SIZE)
    }

    /// Size of the packed label block in bytes
    pub fn label_block_size(&self) -> Result<usize> {
        checked_block_size(self.nclips(), self.byte_count(), 1)
    }

    /// Total record size: header, samples and label bits
    pub fn record_size(&self) -> Result<usize> {
        self.sample_block_size()?
            .checked_add(self.label_block_size()?)
            .and_then(|n| n.checked_add(Self::SIZE))
            .ok_or(AudioSetError::SizeOverflow)
    }

    /// Clip duration in seconds, assuming the standard 16 kHz sample rate
    pub fn duration_secs(&self) -> f64 {
        self.sample_count as f64 / clip::SAMPLE_RATE as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_bytes_layout() {
        let header = AudioSetHeader::new(2, 3, 10);
        let bytes = header.to_bytes_array();

        assert_eq!(bytes, [2, 0, 0, 0, 3, 0, 0, 0, 10, 0, 0, 0]);
        assert_eq!(AudioSetHeader::from_bytes(&bytes), Ok(header));
    }

    #[test]
    fn test_header_little_endian() {
        let header = AudioSetHeader::new(0x0102_0304, 160_000, 527);
        let bytes = header.to_bytes_array();

        assert_eq!(&bytes[0..4], &[0x04, 0x03, 0x02, 0x01]);
        assert_eq!(AudioSetHeader::from_bytes(&bytes), Ok(header));
    }

    #[test]
    fn test_header_rejects_invalid_counts() {
        let negative_clips = AudioSetHeader::new(-1, 3, 10).to_bytes_array();
        let negative_samples = AudioSetHeader::new(1, -3, 10).to_bytes_array();
        let no_labels = AudioSetHeader::new(1, 3, 0).to_bytes_array();

        assert_eq!(
            AudioSetHeader::from_bytes(&negative_clips),
            Err(AudioSetError::MalformedHeader)
        );
        assert_eq!(
            AudioSetHeader::from_bytes(&negative_samples),
            Err(AudioSetError::MalformedHeader)
        );
        assert_eq!(
            AudioSetHeader::from_bytes(&no_labels),
            Err(AudioSetError::MalformedHeader)
        );
    }

    #[test]
    fn test_header_short_buffer() {
        assert_eq!(
            AudioSetHeader::from_bytes(&[1, 0, 0, 0, 2]),
            Err(AudioSetError::TruncatedInput)
        );
    }

    #[test]
    fn test_empty_dimensions_are_valid() {
        let header = AudioSetHeader::from_dimensions(0, 0, 1).unwrap();
        assert_eq!(header.record_size(), Ok(12));
    }

    #[test]
    fn test_from_dimensions_limits() {
        assert_eq!(
            AudioSetHeader::from_dimensions(1, 1, 0),
            Err(AudioSetError::MalformedHeader)
        );
        assert_eq!(
            AudioSetHeader::from_dimensions(i32::MAX as usize + 1, 1, 1),
            Err(AudioSetError::MalformedHeader)
        );
    }

    #[test]
    fn test_record_size() {
        let header = AudioSetHeader::new(2, 3, 10);

        assert_eq!(header.byte_count(), 2);
        assert_eq!(header.sample_block_size(), Ok(12));
        assert_eq!(header.label_block_size(), Ok(4));
        assert_eq!(header.record_size(), Ok(28));
    }

    #[test]
    fn test_duration() {
        let header = AudioSetHeader::new(1, clip::SAMPLES_PER_CLIP as i32, 527);
        assert_eq!(header.duration_secs(), 10.0);
    }
}
