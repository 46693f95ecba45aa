//! Aspect-preserving resize to the terminal width.

use image::imageops::{self, FilterType};
use image::RgbImage;

use crate::error::DrawError;

/// Tallest resized image, in pixel rows.
pub const MAX_HEIGHT: u32 = 65_536;

/// Height that keeps the source aspect ratio at `width` columns.
///
/// Rounds half-up. Fails with [`DrawError::ZeroDimension`] if the source has
/// a zero side and [`DrawError::Resize`] if the result would be empty or
/// taller than [`MAX_HEIGHT`].
pub fn target_height(source_width: u32, source_height: u32, width: u32) -> Result<u32, DrawError> {
    if source_width == 0 || source_height == 0 {
        return Err(DrawError::ZeroDimension);
    }
    let aspect = f64::from(source_width) / f64::from(source_height);
    let height = (f64::from(width) / aspect + 0.5).floor();
    if width == 0 || height < 1.0 || height > f64::from(MAX_HEIGHT) {
        let height = height.min(f64::from(u32::MAX)) as u32;
        return Err(DrawError::Resize { width, height });
    }
    Ok(height as u32)
}

/// Resizes an image to an exact size.
pub trait Resampler {
    fn resample(&self, image: &RgbImage, width: u32, height: u32) -> Result<RgbImage, DrawError>;
}

/// Lanczos resampling through `image::imageops`.
#[derive(Debug, Clone, Copy)]
pub struct LanczosResampler {
    filter: FilterType,
}

impl LanczosResampler {
    pub fn new() -> Self {
        Self {
            filter: FilterType::Lanczos3,
        }
    }

    pub fn with_filter(filter: FilterType) -> Self {
        Self { filter }
    }
}

impl Default for LanczosResampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Resampler for LanczosResampler {
    fn resample(&self, image: &RgbImage, width: u32, height: u32) -> Result<RgbImage, DrawError> {
        if width == 0 || height == 0 {
            return Err(DrawError::Resize { width, height });
        }
        if image.dimensions() == (width, height) {
            return Ok(image.clone());
        }
        tracing::debug!(
            from = ?image.dimensions(),
            to = ?(width, height),
            filter = ?self.filter,
            "resampling"
        );
        Ok(imageops::resize(image, width, height, self.filter))
    }
}
