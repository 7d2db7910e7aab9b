mod common;

use image::{DynamicImage, RgbaImage};
use image_phash_core::{
    phash_from_bytes, phash_from_file, phash_from_img, Config, Error, Hasher, ImagePreprocessor,
    PHash, Preprocess, ResizeFilter,
};

use common::*;

fn nearest() -> Hasher {
    Hasher::new(&Config {
        resize_filter: ResizeFilter::Nearest,
        ..Config::default()
    })
}

#[test]
fn test_black_image_hashes_to_zero() {
    for (w, h) in [(32, 32), (100, 60), (7, 300), (1, 1)] {
        let hash = phash_from_img(&black_image(w, h)).unwrap();
        assert_eq!(hash, PHash(0), "{}x{}", w, h);
    }
}

#[test]
fn test_transparent_image_hashes_like_black() {
    let hash = phash_from_img(&transparent_image(64, 64)).unwrap();
    assert_eq!(hash, PHash(0));
}

#[test]
fn test_hash_at_native_size() {
    // A 32x32 gray image passes through nearest-neighbour resizing unchanged
    let hash = nearest().hash_image(&split_image()).unwrap();
    assert_eq!(hash, PHash(0x77ff_ffff_ffff_fffe));
}

#[test]
fn test_deterministic() {
    let hasher = Hasher::new(&Config::default());
    let img = diagonal_image(640, 480);

    let first = hasher.hash_image(&img).unwrap();
    let second = hasher.hash_image(&img).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.as_u64() & 1, 0);
}

#[test]
fn test_bytes_match_decoded_image() {
    let img = diagonal_image(120, 90);
    let from_img = phash_from_img(&img).unwrap();
    let from_bytes = phash_from_bytes(&png_bytes(&img)).unwrap();
    assert_eq!(from_img, from_bytes);
}

#[test]
fn test_file_matches_decoded_image() {
    let dir = tempfile::tempdir().unwrap();
    let img = diagonal_image(200, 150);
    let path = write_png(dir.path(), "diagonal.png", &img);

    assert_eq!(phash_from_file(&path).unwrap(), phash_from_img(&img).unwrap());
}

#[test]
fn test_file_without_extension() {
    let dir = tempfile::tempdir().unwrap();
    let img = diagonal_image(50, 50);
    let path = write_png(dir.path(), "no_extension", &img);

    assert_eq!(phash_from_file(&path).unwrap(), phash_from_img(&img).unwrap());
}

#[test]
fn test_malformed_bytes() {
    let result = phash_from_bytes(b"definitely not an image");
    assert!(matches!(result, Err(Error::Preprocessing(_))));

    let mut truncated = png_bytes(&diagonal_image(40, 40));
    truncated.truncate(truncated.len() / 2);
    assert!(matches!(
        phash_from_bytes(&truncated),
        Err(Error::Preprocessing(_))
    ));
}

#[test]
fn test_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"\x89PNG but not really").unwrap();

    assert!(matches!(
        phash_from_file(&path),
        Err(Error::Preprocessing(_))
    ));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = phash_from_file(dir.path().join("missing.png"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_empty_image() {
    let img = DynamicImage::ImageRgba8(RgbaImage::new(0, 0));
    assert!(matches!(
        phash_from_img(&img),
        Err(Error::Preprocessing(_))
    ));
}

/// Hands back its input untouched, whatever the size
struct Passthrough;

impl Preprocess for Passthrough {
    fn preprocess(&self, img: &DynamicImage) -> image_phash_core::Result<RgbaImage> {
        Ok(img.to_rgba8())
    }
}

/// Always fails
struct Broken;

impl Preprocess for Broken {
    fn preprocess(&self, _img: &DynamicImage) -> image_phash_core::Result<RgbaImage> {
        Err(Error::Preprocessing("resampler unavailable".to_string()))
    }
}

#[test]
fn test_custom_preprocessor() {
    let hasher = Hasher::with_preprocessor(Passthrough);
    assert_eq!(
        hasher.hash_image(&split_image()).unwrap(),
        PHash(0x77ff_ffff_ffff_fffe)
    );
}

#[test]
fn test_preprocessor_wrong_size() {
    let hasher = Hasher::with_preprocessor(Passthrough);
    let result = hasher.hash_image(&diagonal_image(16, 16));
    assert!(matches!(result, Err(Error::Preprocessing(_))));
}

#[test]
fn test_preprocessor_failure_propagates() {
    let hasher = Hasher::with_preprocessor(Broken);
    match hasher.hash_image(&split_image()) {
        Err(Error::Preprocessing(msg)) => assert_eq!(msg, "resampler unavailable"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_filter_from_config() {
    let hasher = Hasher::new(&Config {
        resize_filter: ResizeFilter::Gaussian,
        ..Config::default()
    });
    assert_eq!(
        *hasher.preprocessor(),
        ImagePreprocessor::new(ResizeFilter::Gaussian)
    );
}

#[test]
fn test_shared_across_threads() {
    let hasher = Hasher::new(&Config::default());
    let img = diagonal_image(96, 64);
    let expected = hasher.hash_image(&img).unwrap();

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| assert_eq!(hasher.hash_image(&img).unwrap(), expected));
        }
    });
}
