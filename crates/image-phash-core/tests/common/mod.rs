/// Synthetic images for pipeline tests, built in memory
use image::{DynamicImage, GrayImage, ImageOutputFormat, Luma, Rgb, RgbImage, Rgba, RgbaImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// 32x32 gray image, dark left half and bright right half
pub fn split_image() -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_fn(32, 32, |x, _| {
        Luma([if x < 16 { 40 } else { 200 }])
    }))
}

/// Colour image with diagonal structure at an arbitrary size
pub fn diagonal_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        if x * height > y * width {
            Rgb([230, 120, 40])
        } else {
            Rgb([20, 60, 150])
        }
    }))
}

pub fn black_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::new(width, height))
}

pub fn transparent_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba([250, 90, 10, 0])))
}

/// Encode as PNG bytes
pub fn png_bytes(img: &DynamicImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
        .unwrap();
    bytes
}

/// Write `img` as a PNG named `name` inside `dir`
pub fn write_png(dir: &Path, name: &str, img: &DynamicImage) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, png_bytes(img)).unwrap();
    path
}
