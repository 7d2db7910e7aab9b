use std::path::Path;
use std::time::Instant;

use image::{io::Reader as ImageReader, DynamicImage, GenericImageView};
use log::{debug, trace, warn};

use crate::config::Config;
use crate::error::{Error, Result};

use super::assembler::assemble;
use super::dct::dct_2d;
use super::luma::luma_matrix;
use super::preprocess::{ImagePreprocessor, Preprocess};
use super::types::{Matrix, PHash};

/// Side length of the grayscale image the hash is computed from
pub const HASH_INPUT_SIZE: u32 = 32;

/// Computes perceptual hashes with a fixed preprocessing step
///
/// A `Hasher` holds no mutable state and can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct Hasher<P = ImagePreprocessor> {
    preprocessor: P,
}

impl Hasher {
    /// Hasher using the default preprocessor with the configured filter
    pub fn new(config: &Config) -> Self {
        Self {
            preprocessor: ImagePreprocessor::new(config.resize_filter),
        }
    }
}

impl<P: Preprocess> Hasher<P> {
    /// Hasher with a caller-supplied preprocessing step
    pub fn with_preprocessor(preprocessor: P) -> Self {
        Self { preprocessor }
    }

    pub fn preprocessor(&self) -> &P {
        &self.preprocessor
    }

    /// Calculate the perceptual hash of a decoded image
    pub fn hash_image(&self, img: &DynamicImage) -> Result<PHash> {
        let start = Instant::now();
        let (width, height) = img.dimensions();

        let prepared = self.preprocessor.preprocess(img).map_err(|e| {
            warn!("Preprocessing {}x{} image failed: {}", width, height, e);
            e
        })?;

        if prepared.dimensions() != (HASH_INPUT_SIZE, HASH_INPUT_SIZE) {
            let (w, h) = prepared.dimensions();
            return Err(Error::Preprocessing(format!(
                "preprocessor returned {}x{}, expected {}x{}",
                w, h, HASH_INPUT_SIZE, HASH_INPUT_SIZE
            )));
        }

        let hash = hash_luma(&luma_matrix(&prepared));
        debug!(
            "pHash {} for {}x{} image computed in {:?}",
            hash,
            width,
            height,
            start.elapsed()
        );

        Ok(hash)
    }

    /// Decode an in-memory image and hash it
    pub fn hash_bytes(&self, bytes: &[u8]) -> Result<PHash> {
        let img = image::load_from_memory(bytes).map_err(|e| {
            warn!("Failed to decode {} bytes: {}", bytes.len(), e);
            Error::from(e)
        })?;
        self.hash_image(&img)
    }

    /// Open, decode and hash an image file
    pub fn hash_file<Q: AsRef<Path>>(&self, path: Q) -> Result<PHash> {
        let path = path.as_ref();
        let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
        trace!("Decoded {}", path.display());
        self.hash_image(&img)
    }
}

/// Run the DCT and bit assembly on an existing luma matrix
///
/// # Panics
///
/// If the matrix is smaller than 8x8.
pub fn hash_luma(luma: &Matrix) -> PHash {
    trace!("Hashing {}x{} luma matrix", luma.width(), luma.height());
    assemble(&dct_2d(luma))
}

/// Calculate a perceptual hash from an image in memory
pub fn phash_from_img(img: &DynamicImage) -> Result<PHash> {
    Hasher::new(&Config::default()).hash_image(img)
}

/// Calculate a perceptual hash from encoded image bytes
pub fn phash_from_bytes(bytes: &[u8]) -> Result<PHash> {
    Hasher::new(&Config::default()).hash_bytes(bytes)
}

/// Calculate a perceptual hash from an image file
pub fn phash_from_file<P: AsRef<Path>>(path: P) -> Result<PHash> {
    Hasher::new(&Config::default()).hash_file(path)
}
