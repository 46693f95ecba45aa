//! Nearest-color search against the palette.

use super::Palette;
use crate::color::Color;

/// Index of the entry in `entries` nearest to `sample`.
///
/// Distance is squared Euclidean in RGB. On ties the lowest index wins.
/// Returns `None` only for an empty slice.
pub fn nearest_index(entries: &[Color], sample: Color) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (index, entry) in entries.iter().enumerate() {
        let distance = sample.distance_sq(*entry);
        match best {
            // Strict comparison keeps the earlier entry on ties
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
        if distance == 0 {
            break;
        }
    }
    best.map(|(index, _)| index)
}

/// Maps sampled colors to palette codes.
#[derive(Debug, Clone, Copy)]
pub struct ColorMatcher<'p> {
    palette: &'p Palette,
}

impl<'p> ColorMatcher<'p> {
    pub fn new(palette: &'p Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &'p Palette {
        self.palette
    }

    /// Palette code nearest to `sample`.
    pub fn index_of(&self, sample: Color) -> u8 {
        // A palette always has 256 entries, so the search cannot come back empty
        nearest_index(self.palette.as_slice(), sample).unwrap_or(0) as u8
    }
}
