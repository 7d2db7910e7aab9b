use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};

use crate::config::ResizeFilter;
use crate::error::{Error, Result};

use super::luma::LUMA_WEIGHTS;
use super::pipeline::HASH_INPUT_SIZE;

/// Shrinks a decoded image to the 32x32 grayscale input of the hash
///
/// Implementations must return an image of exactly
/// `HASH_INPUT_SIZE` x `HASH_INPUT_SIZE` pixels.
pub trait Preprocess {
    fn preprocess(&self, img: &DynamicImage) -> Result<RgbaImage>;
}

/// Default preprocessing: resample with the configured filter, then grayscale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImagePreprocessor {
    filter: ResizeFilter,
}

impl ImagePreprocessor {
    pub fn new(filter: ResizeFilter) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> ResizeFilter {
        self.filter
    }
}

impl Preprocess for ImagePreprocessor {
    fn preprocess(&self, img: &DynamicImage) -> Result<RgbaImage> {
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(Error::Preprocessing(format!(
                "image has no pixels ({}x{})",
                width, height
            )));
        }

        let resized = img.resize_exact(HASH_INPUT_SIZE, HASH_INPUT_SIZE, self.filter.into());
        Ok(grayscale(&resized.to_rgba8()))
    }
}

/// Grayscale with the luma weights, rounded to 8 bits
///
/// The gray level is written to all three colour channels and alpha is kept.
pub fn grayscale(img: &RgbaImage) -> RgbaImage {
    let [wr, wg, wb] = LUMA_WEIGHTS;

    RgbaImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b, a] = img.get_pixel(x, y).0;
        let level = wr * r as f64 + wg * g as f64 + wb * b as f64;
        let gray = (level + 0.5) as u8;
        Rgba([gray, gray, gray, a])
    })
}
