//! AudioSet - reader and writer for AudioSet record files
//!
//! An AudioSet record pairs fixed-length mono waveforms with multi-hot
//! label vectors: a 12-byte header, an i16 sample block and a bit-packed
//! label block. This crate provides the codec over any `Read`/`Write`,
//! plus file, memory-map and HTTP helpers for getting bytes to it.
//!
//! ## Architecture
//!
//! - **audioset-core**: pure format definitions, packing and quantization (no I/O)
//! - **audioset**: the codec over byte channels, files, mmap and HTTP
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use audioset::{AudioSetFile, Codec, CodecConfig, DenseMatrix, Matrix, ScaleMode};
//!
//! fn example() -> audioset::Result<()> {
//!     let waveform = Matrix::from_rows(&[[0.5f32, -0.5, 0.0]])?;
//!     let labels = Matrix::from_rows(&[[1u8, 0, 1]])?;
//!
//!     let codec = Codec::new(CodecConfig::default().with_scale_mode(ScaleMode::Normalized));
//!     AudioSetFile::write_with("clips.dat.gz", &codec, &waveform, &labels)?;
//!
//!     let (wav, labels) = AudioSetFile::read("clips.dat.gz")?;
//!     println!("{} clips, {} classes", wav.nrows(), labels.ncols());
//!     Ok(())
//! }
//! ```

// Re-export core abstractions and format definitions
pub use audioset_core::{
    // Core traits
    DenseMatrix, LabelElement, SampleElement,
    // Format definitions
    constants, packed_byte_count, AudioSetHeader, ScaleMode,
    // Row helpers
    active_classes, peak_amplitude,
    // Error handling
    AudioSetError, ErrorCategory,
    // Validation utilities
    parse_range,
};

pub mod codec;
pub mod error;
pub mod file_io;
pub mod http_backend;
pub mod matrix;

pub use codec::{decode, encode, Codec, CodecConfig};
pub use error::{Error, Result};
pub use file_io::{AudioSetFile, RecordReader, RecordWriter};
pub use matrix::{Labels, Matrix, Waveform};

#[cfg(feature = "http")]
pub use http_backend::HttpRecord;
