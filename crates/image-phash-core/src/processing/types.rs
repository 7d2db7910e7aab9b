/// PHash newtype and the matrix passed between pipeline stages
///
use std::fmt;
use std::ops::Index;

/// A 64-bit perceptual hash
///
/// Bits 63 down to 1 each record whether one low-frequency DCT coefficient
/// lies above the coefficient mean. Bit 0 is never set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PHash(pub u64);

impl PHash {
    /// Get the underlying 64-bit hash value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<PHash> for u64 {
    fn from(hash: PHash) -> Self {
        hash.0
    }
}

/// Renders as 16 zero-padded lowercase hex digits
impl fmt::Display for PHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl fmt::LowerHex for PHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for PHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

/// Dense row-major matrix of `f64` values
///
/// Element `(row, col)` lives at `data[row * width + col]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// A `width` x `height` matrix of zeros
    pub fn zeros(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    /// Wrap a row-major buffer
    ///
    /// # Panics
    ///
    /// If `data.len() != width * height`.
    pub fn from_vec(width: usize, height: usize, data: Vec<f64>) -> Self {
        assert_eq!(
            data.len(),
            width * height,
            "buffer of {} values cannot hold a {}x{} matrix",
            data.len(),
            width,
            height
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Build a matrix by evaluating `f(row, col)` for every element
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                data.push(f(row, col));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// One row as a contiguous slice
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.width;
        &self.data[start..start + self.width]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(col < self.width, "column {} out of bounds", col);
        &self.data[row * self.width + col]
    }
}
