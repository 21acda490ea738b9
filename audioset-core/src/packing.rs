//! Label bit packing
//!
//! Each row of `n` binary label flags is stored in `packed_byte_count(n)`
//! bytes. Class `i` lives in byte `i / 8` at bit `i % 8`, least significant
//! bit first. Unused high bits of the last byte are zero on write and
//! ignored on read.

use crate::format::constants::BITS_PER_BYTE;
use crate::traits::LabelElement;
use crate::{AudioSetError, Result};

/// Bytes needed to pack `label_count` flags: `floor((label_count - 1) / 8) + 1`
///
/// Returns 0 for zero labels, which the header never allows.
pub const fn packed_byte_count(label_count: usize) -> usize {
    match label_count {
        0 => 0,
        n => (n - 1) / BITS_PER_BYTE + 1,
    }
}

/// Pack one row of label flags into `out`
///
/// `out` must hold exactly `packed_byte_count(row.len())` bytes. Only the
/// low bit of each label is used.
pub fn pack_row<L: LabelElement>(row: &[L], out: &mut [u8]) -> Result<()> {
    if out.len() != packed_byte_count(row.len()) {
        return Err(AudioSetError::ShapeMismatch);
    }

    out.fill(0);
    for (class, &label) in row.iter().enumerate() {
        let bit: u8 = label.to_bit() & 1;
        out[class / BITS_PER_BYTE] |= bit << (class % BITS_PER_BYTE);
    }

    Ok(())
}

/// Unpack one row of packed bytes into 0/1 flags
///
/// `packed` must hold exactly `packed_byte_count(out.len())` bytes.
pub fn unpack_row(packed: &[u8], out: &mut [i32]) -> Result<()> {
    if packed.len() != packed_byte_count(out.len()) {
        return Err(AudioSetError::ShapeMismatch);
    }

    for (class, slot) in out.iter_mut().enumerate() {
        *slot = is_set(packed, class) as i32;
    }

    Ok(())
}

/// Test a single class bit in a packed row
#[inline]
pub const fn is_set(packed: &[u8], class: usize) -> bool {
    (packed[class / BITS_PER_BYTE] >> (class % BITS_PER_BYTE)) & 1 == 1
}

/// Iterate over the active class indices of an unpacked label row
///
/// A class is active when the low bit of its flag is set, matching what
/// [`pack_row`] stores.
pub fn active_classes<L: LabelElement>(row: &[L]) -> impl Iterator<Item = usize> + '_ {
    row.iter()
        .enumerate()
        .filter(|(_, label)| (**label).to_bit() & 1 == 1)
        .map(|(class, _)| class)
}

/// Pack a flat row-major `rows x label_count` label matrix
#[cfg(feature = "alloc")]
pub fn pack_matrix<L: LabelElement>(labels: &[L], rows: usize, label_count: usize) -> Result<alloc::vec::Vec<u8>> {
    crate::validation::validate_matrix_len(labels.len(), rows, label_count)?;

    let byte_count = packed_byte_count(label_count);
    let size = crate::validation::checked_block_size(rows, byte_count, 1)?;
    let mut packed = alloc::vec![0u8; size];

    if byte_count > 0 {
        for (row, out) in labels.chunks_exact(label_count).zip(packed.chunks_exact_mut(byte_count)) {
            pack_row(row, out)?;
        }
    }

    Ok(packed)
}

/// Unpack a flat `rows x byte_count` block into a row-major 0/1 matrix
#[cfg(feature = "alloc")]
pub fn unpack_matrix(packed: &[u8], rows: usize, label_count: usize) -> Result<alloc::vec::Vec<i32>> {
    let byte_count = packed_byte_count(label_count);
    crate::validation::validate_matrix_len(packed.len(), rows, byte_count)?;

    let size = crate::validation::checked_block_size(rows, label_count, 1)?;
    let mut labels = alloc::vec![0i32; size];

    if byte_count > 0 {
        for (bytes, out) in packed.chunks_exact(byte_count).zip(labels.chunks_exact_mut(label_count)) {
            unpack_row(bytes, out)?;
        }
    }

    Ok(labels)
}
