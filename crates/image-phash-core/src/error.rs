use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Custom error types for the image-phash library
#[derive(Error, Debug)]
pub enum Error {
    /// The image could not be decoded, resized or converted to grayscale
    #[error("Preprocessing failed: {0}")]
    Preprocessing(String),

    /// I/O operation error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration error
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Preprocessing(err.to_string())
    }
}
