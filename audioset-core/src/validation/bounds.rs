//! Block size and shape validation
//!
//! Overflow-checked arithmetic for the sizes declared by a header, so a
//! hostile header cannot wrap a size computation.

use crate::{AudioSetError, Result};

/// Size in bytes of a `rows x cols` block of `element_size`-byte values
///
/// Fails with `SizeOverflow` when the product does not fit in usize, or is
/// larger than `isize::MAX` and so could never back a slice.
pub const fn checked_block_size(rows: usize, cols: usize, element_size: usize) -> Result<usize> {
    let elements = match rows.checked_mul(cols) {
        Some(n) => n,
        None => return Err(AudioSetError::SizeOverflow),
    };
    let bytes = match elements.checked_mul(element_size) {
        Some(n) => n,
        None => return Err(AudioSetError::SizeOverflow),
    };
    if bytes > isize::MAX as usize {
        return Err(AudioSetError::SizeOverflow);
    }
    Ok(bytes)
}

/// Check that a flat row-major buffer matches a `rows x cols` shape
pub const fn validate_matrix_len(len: usize, rows: usize, cols: usize) -> Result<()> {
    match rows.checked_mul(cols) {
        Some(n) if n == len => Ok(()),
        Some(_) => Err(AudioSetError::ShapeMismatch),
        None => Err(AudioSetError::SizeOverflow),
    }
}
