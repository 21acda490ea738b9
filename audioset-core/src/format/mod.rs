//! Binary format definitions for the AudioSet container
//!
//! Pure data structure definitions for the on-disk layout. No I/O.

pub mod constants;
pub mod header;

pub use header::AudioSetHeader;
