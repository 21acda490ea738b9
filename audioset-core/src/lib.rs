#![cfg_attr(not(test), no_std)]

//! AudioSet Core - container format definitions
//!
//! This crate provides the on-disk layout of AudioSet record files and the
//! pure transforms the codec is built from: header parsing, label bit
//! packing and waveform sample quantization. It performs no I/O.
//!
//! A record is laid out as
//!
//! ```text
//! header      3 x i32 LE          clip_count, sample_count, label_count
//! samples     i16 LE [clips * samples]
//! label bits  u8 [clips * byte_count]   byte_count = (label_count - 1) / 8 + 1
//! ```

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod format;
pub mod packing;
pub mod quantize;
pub mod samples;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::constants;
pub use format::AudioSetHeader;
pub use packing::{active_classes, pack_row, packed_byte_count, unpack_row};
pub use quantize::{dequantize_sample, peak_amplitude, quantize_sample, ScaleMode};
pub use traits::*;
pub use validation::{checked_block_size, first_invalid_label, parse_range, validate_matrix_len};
