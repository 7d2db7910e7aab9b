//! Orthonormal DCT-II, applied separably over rows then columns.
//!
//! Every coefficient is computed by direct summation in `f64`. The hash
//! bits compare coefficients against their mean, so precision matters more
//! here than speed: a single rounding difference near the mean flips a bit.

use std::f64::consts::PI;

use super::types::Matrix;

/// Cosine terms and scale factors for one transform length
///
/// `table[k * n + i] = cos(PI * (i + 0.5) * k / n)`
pub struct CosineTable {
    n: usize,
    table: Vec<f64>,
    scale: Vec<f64>,
}

impl CosineTable {
    pub fn new(n: usize) -> Self {
        let nf = n as f64;
        let mut table = Vec::with_capacity(n * n);
        let mut scale = Vec::with_capacity(n);

        for k in 0..n {
            scale.push(if k == 0 {
                (1.0 / nf).sqrt()
            } else {
                (2.0 / nf).sqrt()
            });
            for i in 0..n {
                table.push((PI * (i as f64 + 0.5) * k as f64 / nf).cos());
            }
        }

        Self { n, table, scale }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// 1D DCT-II of `input` into `output`
    ///
    /// Both slices must have the table's length.
    #[inline]
    pub fn transform(&self, input: &[f64], output: &mut [f64]) {
        let n = self.n;
        debug_assert_eq!(input.len(), n);
        debug_assert_eq!(output.len(), n);

        for (k, out) in output.iter_mut().enumerate() {
            let cosines = &self.table[k * n..(k + 1) * n];
            let mut sum = 0.0;
            for (x, c) in input.iter().zip(cosines) {
                sum += x * c;
            }
            *out = sum * self.scale[k];
        }
    }
}

/// 1D DCT-II of a sequence
pub fn dct_1d(input: &[f64]) -> Vec<f64> {
    let mut output = vec![0.0; input.len()];
    CosineTable::new(input.len()).transform(input, &mut output);
    output
}

/// 2D DCT-II: every row is transformed, then every column of the result
pub fn dct_2d(input: &Matrix) -> Matrix {
    let (width, height) = (input.width(), input.height());
    if input.is_empty() {
        return Matrix::zeros(width, height);
    }

    let row_table = CosineTable::new(width);
    let mut rows = vec![0.0; width * height];
    for (y, out) in rows.chunks_exact_mut(width).enumerate() {
        row_table.transform(input.row(y), out);
    }

    let column_table = if height == width {
        row_table
    } else {
        CosineTable::new(height)
    };

    let mut output = vec![0.0; width * height];
    let mut column = vec![0.0; height];
    let mut transformed = vec![0.0; height];
    for x in 0..width {
        for (y, value) in column.iter_mut().enumerate() {
            *value = rows[y * width + x];
        }
        column_table.transform(&column, &mut transformed);
        for (y, &value) in transformed.iter().enumerate() {
            output[y * width + x] = value;
        }
    }

    Matrix::from_vec(width, height, output)
}
