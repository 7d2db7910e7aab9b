//! Turns a DCT coefficient matrix into a 64-bit hash.
//!
//! The 63 AC coefficients of the top-left 8x8 block are read in row-major
//! order and compared against their mean. Coefficient `i` decides bit
//! `63 - i`, so bits 63 down to 1 are used and bit 0 stays clear.
//!
//! The layout is fixed. Selecting a 64th coefficient for bit 0 would change
//! every hash already stored by callers.

use super::types::{Matrix, PHash};

/// Side of the low-frequency block read from the DCT matrix
pub const LOW_FREQUENCY_BLOCK: usize = 8;

/// Number of coefficients that contribute to the hash
pub const LOW_FREQUENCY_COEFFICIENTS: usize = LOW_FREQUENCY_BLOCK * LOW_FREQUENCY_BLOCK - 1;

/// Collect the low-frequency AC coefficients, skipping the DC term at (0, 0)
///
/// # Panics
///
/// If the matrix is smaller than 8x8.
pub fn low_frequency(dct: &Matrix) -> Vec<f64> {
    assert!(
        dct.width() >= LOW_FREQUENCY_BLOCK && dct.height() >= LOW_FREQUENCY_BLOCK,
        "DCT matrix is {}x{}, need at least {}x{}",
        dct.width(),
        dct.height(),
        LOW_FREQUENCY_BLOCK,
        LOW_FREQUENCY_BLOCK
    );

    let mut values = Vec::with_capacity(LOW_FREQUENCY_BLOCK * LOW_FREQUENCY_BLOCK);
    for row in 0..LOW_FREQUENCY_BLOCK {
        for col in 0..LOW_FREQUENCY_BLOCK {
            if row == 0 && col == 0 {
                continue;
            }
            values.push(dct[(row, col)]);
        }
    }
    values.truncate(LOW_FREQUENCY_COEFFICIENTS);

    values
}

/// Arithmetic mean, summed in order
pub fn mean(values: &[f64]) -> f64 {
    let mut sum = 0.0;
    for &v in values {
        sum += v;
    }
    sum / values.len() as f64
}

/// Set bit `63 - i` for every value strictly above the mean
pub fn threshold_bits(values: &[f64]) -> PHash {
    debug_assert!(values.len() <= LOW_FREQUENCY_COEFFICIENTS);

    let mean = mean(values);
    let mut hash: u64 = 0;
    for (i, &value) in values.iter().enumerate() {
        if value > mean {
            hash |= 1u64 << (63 - i);
        }
    }

    PHash(hash)
}

/// Build the hash of a DCT matrix
pub fn assemble(dct: &Matrix) -> PHash {
    threshold_bits(&low_frequency(dct))
}
