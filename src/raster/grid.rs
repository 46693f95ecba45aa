//! Read access to a grid of pixels.

use image::{GrayImage, RgbImage};

use crate::color::Color;
use crate::palette::{ColorMatcher, Palette};

/// A rectangular grid of pixels the compositor can read.
pub trait PixelGrid {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Color at column `x`, row `y`.
    ///
    /// Callers stay within `0..width()` and `0..height()`.
    fn get(&self, x: usize, y: usize) -> Color;

    /// Palette code for the pixel at (`x`, `y`).
    ///
    /// Grids that already hold palette indices override this to skip the
    /// nearest-color search.
    fn code(&self, x: usize, y: usize, matcher: &ColorMatcher<'_>) -> u8 {
        matcher.index_of(self.get(x, y))
    }
}

impl PixelGrid for RgbImage {
    fn width(&self) -> usize {
        self.dimensions().0 as usize
    }

    fn height(&self) -> usize {
        self.dimensions().1 as usize
    }

    fn get(&self, x: usize, y: usize) -> Color {
        Color::from(*self.get_pixel(x as u32, y as u32))
    }
}

/// An image whose pixels are palette codes.
#[derive(Debug, Clone)]
pub struct IndexedImage<'p> {
    indices: GrayImage,
    palette: &'p Palette,
}

impl<'p> IndexedImage<'p> {
    pub fn new(indices: GrayImage, palette: &'p Palette) -> Self {
        Self { indices, palette }
    }

    /// Palette code stored at (`x`, `y`).
    pub fn index(&self, x: usize, y: usize) -> u8 {
        self.indices.get_pixel(x as u32, y as u32).0[0]
    }

    pub fn palette(&self) -> &'p Palette {
        self.palette
    }
}

impl PixelGrid for IndexedImage<'_> {
    fn width(&self) -> usize {
        self.indices.width() as usize
    }

    fn height(&self) -> usize {
        self.indices.height() as usize
    }

    fn get(&self, x: usize, y: usize) -> Color {
        self.palette.get(self.index(x, y))
    }

    fn code(&self, x: usize, y: usize, _matcher: &ColorMatcher<'_>) -> u8 {
        self.index(x, y)
    }
}
