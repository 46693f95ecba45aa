//! Shared helpers for integration tests.

use std::path::PathBuf;

use image::{Rgb, RgbImage};
use tempfile::TempDir;

pub const RESET: &str = "\x1b[0m";
pub const GLYPH: char = '\u{2585}';

/// Write `image` as a PNG into a fresh temp dir.
///
/// Keep the returned `TempDir` alive for as long as the path is used.
pub fn temp_png(name: &str, image: &RgbImage) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    image.save(&path).expect("Failed to write fixture image");
    (dir, path)
}

/// 2x2 image: red, green / blue, white.
pub fn quadrants() -> RgbImage {
    let mut img = RgbImage::new(2, 2);
    img.put_pixel(0, 0, Rgb([255, 0, 0]));
    img.put_pixel(1, 0, Rgb([0, 255, 0]));
    img.put_pixel(0, 1, Rgb([0, 0, 255]));
    img.put_pixel(1, 1, Rgb([255, 255, 255]));
    img
}

/// One cell's bytes for the given background and foreground codes.
pub fn cell(bg: u8, fg: u8) -> String {
    format!("\x1b[48;5;{}m\x1b[38;5;{}m{}", bg, fg, GLYPH)
}
