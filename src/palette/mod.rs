//! The fixed 256-color terminal palette.
//!
//! Layout matches the standard xterm 256-color table:
//! - 0-15: system colors (8 standard + 8 bright)
//! - 16-231: 6x6x6 color cube
//! - 232-255: 24-step grayscale ramp

mod matcher;

pub use matcher::{nearest_index, ColorMatcher};

use crate::color::Color;

/// Number of entries in the palette.
pub const PALETTE_SIZE: usize = 256;

/// First index of the color cube.
pub const CUBE_START: usize = 16;

/// First index of the grayscale ramp.
pub const GRAY_START: usize = 232;

/// System colors (indices 0-15).
pub const SYSTEM_COLORS: [Color; 16] = [
    Color::new(0, 0, 0),       // 0  Black
    Color::new(128, 0, 0),     // 1  Maroon
    Color::new(0, 128, 0),     // 2  Green
    Color::new(128, 128, 0),   // 3  Olive
    Color::new(0, 0, 128),     // 4  Navy
    Color::new(128, 0, 128),   // 5  Purple
    Color::new(0, 128, 128),   // 6  Teal
    Color::new(192, 192, 192), // 7  Silver
    Color::new(128, 128, 128), // 8  Grey
    Color::new(255, 0, 0),     // 9  Red
    Color::new(0, 255, 0),     // 10 Lime
    Color::new(255, 255, 0),   // 11 Yellow
    Color::new(0, 0, 255),     // 12 Blue
    Color::new(255, 0, 255),   // 13 Fuchsia
    Color::new(0, 255, 255),   // 14 Aqua
    Color::new(255, 255, 255), // 15 White
];

/// The 256-entry reference palette.
///
/// Built once with [`Palette::build`] and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: [Color; PALETTE_SIZE],
}

impl Palette {
    /// Build the standard palette.
    pub fn build() -> Self {
        let mut entries = [Color::BLACK; PALETTE_SIZE];

        entries[..CUBE_START].copy_from_slice(&SYSTEM_COLORS);

        for r in 0..6u8 {
            for g in 0..6u8 {
                for b in 0..6u8 {
                    let index = CUBE_START + 36 * r as usize + 6 * g as usize + b as usize;
                    entries[index] = Color::new(cube_level(r), cube_level(g), cube_level(b));
                }
            }
        }

        for step in 0..24u8 {
            let level = 8 + 10 * step;
            entries[GRAY_START + step as usize] = Color::new(level, level, level);
        }

        Self { entries }
    }

    /// Color at `index`.
    pub fn get(&self, index: u8) -> Color {
        self.entries[index as usize]
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        PALETTE_SIZE
    }

    /// Always false; kept alongside `len` for clippy.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::build()
    }
}

/// Channel value of cube coordinate `v` (0..=5).
fn cube_level(v: u8) -> u8 {
    if v == 0 {
        0
    } else {
        55 + 40 * v
    }
}
