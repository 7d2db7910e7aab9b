// Pipeline stages, leaves first
pub mod luma;
pub mod dct;
pub mod assembler;

pub mod pipeline;
pub mod preprocess;
pub mod types;

// Reexport core functionality
pub use assembler::assemble;
pub use dct::{dct_2d, CosineTable};
pub use luma::luma_matrix;
pub use pipeline::{
    hash_luma, phash_from_bytes, phash_from_file, phash_from_img, Hasher, HASH_INPUT_SIZE,
};
pub use preprocess::{ImagePreprocessor, Preprocess};
pub use types::{Matrix, PHash};
