//! Image decoding.

use std::path::Path;

use image::RgbImage;

use crate::error::DrawError;

/// Loads a source image into 8-bit RGB.
pub trait Decoder {
    fn decode(&self, path: &Path) -> Result<RgbImage, DrawError>;
}

/// Decodes any format the `image` crate recognizes.
///
/// Alpha is discarded; 16-bit and float images are narrowed to 8 bits.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileDecoder;

impl Decoder for FileDecoder {
    fn decode(&self, path: &Path) -> Result<RgbImage, DrawError> {
        let image = image::open(path).map_err(DrawError::ImageLoad)?;
        tracing::debug!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            color = ?image.color(),
            "decoded image"
        );
        Ok(image.to_rgb8())
    }
}
