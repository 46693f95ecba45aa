//! Half-block compositor.
//!
//! Every character cell shows two stacked pixels: the upper pixel as the
//! background color and the lower pixel as the foreground color of a
//! lower block glyph.

mod ansi;

use std::io::Write;

pub use ansi::{push_bg, push_fg, RESET};

use crate::error::DrawError;
use crate::palette::{ColorMatcher, Palette};
use crate::raster::PixelGrid;

/// Default glyph: lower five eighths block.
pub const GLYPH: char = '\u{2585}';

/// Foreground code used when the last row has no partner.
pub const NO_SECOND_ROW: u8 = 0;

/// Bytes per cell: two escapes of up to 11 bytes plus a 3-byte glyph.
const CELL_CAPACITY: usize = 25;

/// Turns a pixel grid into an escape-coded glyph stream.
#[derive(Debug, Clone, Copy)]
pub struct Compositor<'p> {
    matcher: ColorMatcher<'p>,
    glyph: char,
}

impl<'p> Compositor<'p> {
    pub fn new(palette: &'p Palette) -> Self {
        Self {
            matcher: ColorMatcher::new(palette),
            glyph: GLYPH,
        }
    }

    pub fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    /// Build the full frame for `grid` in memory.
    ///
    /// Rows are consumed in pairs, top to bottom, left to right. An odd last
    /// row is drawn over black and its missing partner is never read.
    pub fn frame<G: PixelGrid + ?Sized>(&self, grid: &G) -> Result<String, DrawError> {
        let (width, height) = (grid.width(), grid.height());
        if width == 0 || height == 0 {
            return Err(DrawError::EmptyImage);
        }

        let cells = width * ((height + 1) / 2);
        let mut out = String::with_capacity(cells * CELL_CAPACITY + RESET.len());
        for row in (0..height).step_by(2) {
            for col in 0..width {
                let upper = grid.code(col, row, &self.matcher);
                let lower = if row + 1 < height {
                    grid.code(col, row + 1, &self.matcher)
                } else {
                    NO_SECOND_ROW
                };
                push_bg(&mut out, upper);
                push_fg(&mut out, lower);
                out.push(self.glyph);
            }
        }
        out.push_str(RESET);

        tracing::debug!(width, height, bytes = out.len(), "composited frame");
        Ok(out)
    }

    /// Render `grid` to `out` in a single write.
    ///
    /// Nothing is written when the grid is empty.
    pub fn render<G, W>(&self, grid: &G, out: &mut W) -> Result<(), DrawError>
    where
        G: PixelGrid + ?Sized,
        W: Write + ?Sized,
    {
        let frame = self.frame(grid)?;
        out.write_all(frame.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
