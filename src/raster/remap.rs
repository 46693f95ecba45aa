//! Bulk quantization of an image to palette codes.

use image::imageops::{self, ColorMap};
use image::{Rgb, RgbImage};

use super::grid::IndexedImage;
use crate::error::DrawError;
use crate::palette::{ColorMatcher, Palette};

/// Quantizes a whole image against the palette ahead of rendering.
pub trait Remapper {
    fn remap<'p>(
        &self,
        image: &RgbImage,
        palette: &'p Palette,
    ) -> Result<IndexedImage<'p>, DrawError>;
}

/// Nearest-color remap through `image::imageops::index_colors`, no dithering.
#[derive(Debug, Default, Clone, Copy)]
pub struct PaletteRemapper;

impl Remapper for PaletteRemapper {
    fn remap<'p>(
        &self,
        image: &RgbImage,
        palette: &'p Palette,
    ) -> Result<IndexedImage<'p>, DrawError> {
        if image.width() == 0 || image.height() == 0 {
            return Err(DrawError::Remap);
        }
        let indices = imageops::index_colors(image, palette);
        tracing::debug!(dimensions = ?indices.dimensions(), "remapped to palette");
        Ok(IndexedImage::new(indices, palette))
    }
}

impl ColorMap for Palette {
    type Color = Rgb<u8>;

    fn index_of(&self, color: &Rgb<u8>) -> usize {
        ColorMatcher::new(self).index_of((*color).into()) as usize
    }

    fn lookup(&self, index: usize) -> Option<Rgb<u8>> {
        u8::try_from(index).ok().map(|i| self.get(i).into())
    }

    fn has_lookup(&self) -> bool {
        true
    }

    fn map_color(&self, color: &mut Rgb<u8>) {
        let index = ColorMap::index_of(self, color) as u8;
        *color = self.get(index).into();
    }
}
