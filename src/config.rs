//! Run settings.

use image::imageops::FilterType;

use crate::render::GLYPH;
use crate::terminal;

/// Settings for one draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawConfig {
    /// Output width in character cells (one pixel per column).
    pub width: u32,
    /// Glyph drawn in every cell.
    pub glyph: char,
    /// Resampling filter used to fit the image to `width`.
    pub filter: FilterType,
}

impl DrawConfig {
    /// Settings sized to the current terminal.
    pub fn for_terminal() -> Self {
        Self {
            width: u32::from(terminal::width()),
            ..Self::default()
        }
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            width: u32::from(terminal::FALLBACK_WIDTH),
            glyph: GLYPH,
            filter: FilterType::Lanczos3,
        }
    }
}
