//! Decode, resize, quantize and draw an image file.

use std::io::Write;
use std::path::Path;

use image::RgbImage;

use crate::config::DrawConfig;
use crate::error::DrawError;
use crate::palette::Palette;
use crate::raster::{
    target_height, Decoder, FileDecoder, LanczosResampler, PaletteRemapper, Remapper, Resampler,
};
use crate::render::Compositor;

/// Runs the image stages in order and hands the result to the compositor.
///
/// The stages are pluggable so tests can substitute in-memory images.
pub struct Pipeline {
    config: DrawConfig,
    decoder: Box<dyn Decoder>,
    resampler: Box<dyn Resampler>,
    remapper: Box<dyn Remapper>,
}

impl Pipeline {
    /// Pipeline backed by the `image` crate, resampling with `config.filter`.
    pub fn new(config: DrawConfig) -> Self {
        Self {
            config,
            decoder: Box::new(FileDecoder),
            resampler: Box::new(LanczosResampler::with_filter(config.filter)),
            remapper: Box::new(PaletteRemapper),
        }
    }

    /// Create with specific stages (for testing).
    pub fn with_stages(
        config: DrawConfig,
        decoder: Box<dyn Decoder>,
        resampler: Box<dyn Resampler>,
        remapper: Box<dyn Remapper>,
    ) -> Self {
        Self {
            config,
            decoder,
            resampler,
            remapper,
        }
    }

    pub fn config(&self) -> &DrawConfig {
        &self.config
    }

    /// Draw the image at `path` to `out`.
    ///
    /// Either the complete frame is written or nothing is.
    pub fn draw<W: Write + ?Sized>(&self, path: &Path, out: &mut W) -> Result<(), DrawError> {
        let _span = tracing::debug_span!("draw", path = %path.display()).entered();
        let source = self.decoder.decode(path)?;
        self.draw_image(&source, out)
    }

    /// Draw an already decoded image to `out`.
    pub fn draw_image<W: Write + ?Sized>(
        &self,
        source: &RgbImage,
        out: &mut W,
    ) -> Result<(), DrawError> {
        let (source_width, source_height) = source.dimensions();
        let width = self.config.width;
        let height = target_height(source_width, source_height, width)?;
        let resized = self.resampler.resample(source, width, height)?;

        let palette = Palette::build();
        let indexed = self.remapper.remap(&resized, &palette)?;

        Compositor::new(&palette)
            .with_glyph(self.config.glyph)
            .render(&indexed, out)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(DrawConfig::default())
    }
}
