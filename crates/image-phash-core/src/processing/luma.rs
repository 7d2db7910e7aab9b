use image::{GenericImageView, Pixel, Rgba};

use super::types::Matrix;

/// Red, green and blue weights of the luma transform
pub const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// Convert an image into a matrix of luma values, one per pixel
///
/// Row `y`, column `x` of the result holds the luma of pixel `(x, y)`.
/// An image with zero width or height gives an empty matrix.
pub fn luma_matrix<I>(img: &I) -> Matrix
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8>,
{
    let (width, height) = img.dimensions();

    Matrix::from_fn(width as usize, height as usize, |row, col| {
        pixel_luma(img.get_pixel(col as u32, row as u32).to_rgba())
    })
}

/// Luma of a single pixel, on alpha-premultiplied channels
#[inline]
pub fn pixel_luma(pixel: Rgba<u8>) -> f64 {
    let [r, g, b, a] = pixel.0;
    let [wr, wg, wb] = LUMA_WEIGHTS;

    wr * premultiply(r, a) as f64 + wg * premultiply(g, a) as f64 + wb * premultiply(b, a) as f64
}

/// Scale a channel by alpha in 16-bit space and read it back as 8 bits
///
/// Fully opaque pixels come back unchanged.
#[inline]
fn premultiply(channel: u8, alpha: u8) -> u32 {
    let wide = channel as u32 * 0x101;
    (wide * alpha as u32 / 0xff) >> 8
}
