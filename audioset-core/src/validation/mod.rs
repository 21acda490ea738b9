//! Validation utilities for the AudioSet container
//!
//! Pure checks on sizes, shapes and values. No I/O.

pub mod bounds;
pub mod labels;
pub mod parsing;

pub use bounds::{checked_block_size, validate_matrix_len};
pub use labels::first_invalid_label;
pub use parsing::parse_range;
