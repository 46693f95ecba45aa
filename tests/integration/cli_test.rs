//! Integration tests for the draw-me binary.

use std::process::Stdio;

use assert_cmd::Command;
use image::{Rgb, RgbImage};
use predicates::prelude::*;

use crate::helpers::{quadrants, temp_png, GLYPH, RESET};

fn draw_me() -> Command {
    Command::new(env!("CARGO_BIN_EXE_draw-me"))
}

// ============================================================================
// Argument Handling
// ============================================================================

#[test]
fn no_arguments_is_bad_argument() {
    draw_me()
        .assert()
        .code(1)
        .stdout("Failure: Bad argument\n");
}

#[test]
fn two_arguments_is_bad_argument() {
    draw_me()
        .args(["a.png", "b.png"])
        .assert()
        .code(1)
        .stdout("Failure: Bad argument\n");
}

#[test]
fn help_exits_0_and_shows_usage() {
    draw_me()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("<FILE>"));
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn missing_file_reports_load_failure() {
    draw_me()
        .arg("/nonexistent/path/picture.png")
        .assert()
        .code(1)
        .stdout("Failure: Couldn't load image\n");
}

#[test]
fn corrupt_file_reports_load_failure() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"\x89PNG but not really").unwrap();

    draw_me()
        .arg(&path)
        .assert()
        .code(1)
        .stdout("Failure: Couldn't load image\n");
}

#[test]
fn very_wide_image_reports_resize_failure() {
    // 80 / 1000 rounds to zero rows
    let (_dir, path) = temp_png("strip.png", &RgbImage::new(1000, 1));

    draw_me()
        .arg(&path)
        .assert()
        .code(1)
        .stdout("Failure: Resizing source image failed\n");
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn draws_frame_at_fallback_width() {
    // stdout is a pipe here, so the width falls back to 80 columns
    let (_dir, path) = temp_png("quadrants.png", &quadrants());

    let output = draw_me().arg(&path).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("\x1b[48;5;"));
    assert!(stdout.ends_with(RESET));
    assert_eq!(stdout.matches(RESET).count(), 1);
    // 80x80 pixels -> 40 rows of 80 cells
    assert_eq!(stdout.matches(GLYPH).count(), 80 * 40);
    assert!(!stdout.contains('\n'));
}

#[test]
fn uniform_image_uses_a_single_code() {
    let (_dir, path) = temp_png("red.png", &RgbImage::from_pixel(8, 8, Rgb([255, 0, 0])));

    let output = draw_me().arg(&path).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let cell = format!("\x1b[48;5;9m\x1b[38;5;9m{}", GLYPH);
    assert_eq!(stdout, format!("{}{}", cell.repeat(80 * 40), RESET));
}

#[test]
fn closed_stdout_exits_1_with_diagnostic_on_stderr() {
    // 80x320 pixels: the frame is far larger than a pipe buffer
    let (_dir, path) = temp_png("tall.png", &RgbImage::from_pixel(8, 32, Rgb([0, 128, 0])));

    let mut child = std::process::Command::new(env!("CARGO_BIN_EXE_draw-me"))
        .arg(&path)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn draw-me");
    drop(child.stdout.take());

    let output = child.wait_with_output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr);
    assert!(stderr.contains("Failure: Couldn't write output"), "stderr: {}", stderr);
    assert!(!stderr.contains("panicked"));
}
