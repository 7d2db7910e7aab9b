//! DCT-based perceptual hashing of images.
//!
//! A decoded image is shrunk to 32x32 grayscale, turned into a luma matrix,
//! transformed with a separable DCT-II, and the 63 lowest AC frequencies are
//! thresholded against their mean into a 64-bit [`PHash`]. Images that were
//! rescaled, recompressed or lightly edited keep most of their bits.
//!
//! ```no_run
//! use image_phash_core::{Config, Hasher};
//!
//! let hasher = Hasher::new(&Config::default());
//! let hash = hasher.hash_file("photo.jpg")?;
//! println!("{}", hash);
//! # Ok::<(), image_phash_core::Error>(())
//! ```

// -- Internal Modules --
mod error;

// -- Public Re-exports --
pub use config::*;
pub use error::{Error, Result};
pub use processing::{
    hash_luma, phash_from_bytes, phash_from_file, phash_from_img, Hasher, ImagePreprocessor,
    Matrix, PHash, Preprocess, HASH_INPUT_SIZE,
};

// -- Public Modules --
pub mod config;
pub mod logging;
pub mod processing;
