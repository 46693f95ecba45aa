//! End-to-end drawing through the library pipeline.

use image::{Rgb, RgbImage};

use draw_me::{DrawConfig, DrawError, Pipeline};

use crate::helpers::{cell, quadrants, temp_png, RESET};

fn draw_file(image: &RgbImage, width: u32) -> Result<String, DrawError> {
    let (_dir, path) = temp_png("input.png", image);
    let mut out = Vec::new();
    Pipeline::new(DrawConfig::default().with_width(width)).draw(&path, &mut out)?;
    Ok(String::from_utf8(out).expect("frame should be UTF-8"))
}

#[test]
fn quadrants_at_width_two_render_one_row() {
    let frame = draw_file(&quadrants(), 2).unwrap();

    // red over blue, green over white
    assert_eq!(frame, format!("{}{}{}", cell(9, 12), cell(10, 15), RESET));
}

#[test]
fn odd_height_last_row_has_black_foreground() {
    let mut img = RgbImage::from_pixel(3, 3, Rgb([0, 0, 255]));
    img.put_pixel(0, 2, Rgb([255, 255, 0]));

    let frame = draw_file(&img, 3).unwrap();

    let expected = format!(
        "{}{}{}{}{}{}{}",
        cell(12, 12),
        cell(12, 12),
        cell(12, 12),
        cell(11, 0),
        cell(12, 0),
        cell(12, 0),
        RESET
    );
    assert_eq!(frame, expected);
}

#[test]
fn single_row_image_renders_one_line() {
    let img = RgbImage::from_fn(4, 1, |x, _| Rgb([0, 0, (x * 80) as u8]));

    let frame = draw_file(&img, 4).unwrap();
    assert!(frame.ends_with(&format!("\x1b[38;5;0m\u{2585}{}", RESET)));
    assert_eq!(frame.matches("\x1b[38;5;0m").count(), 4);
}

#[test]
fn missing_file_is_image_load_error() {
    let mut out = Vec::new();
    let result = Pipeline::default().draw(std::path::Path::new("/nonexistent/input.png"), &mut out);

    assert!(matches!(result, Err(DrawError::ImageLoad(_))));
    assert!(out.is_empty());
}
