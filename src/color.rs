//! RGB color value type.

use crate::error::DrawError;

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from normalized channels in `0.0..=1.0`.
    ///
    /// Each channel is scaled by 255 and rounded half-up. NaN, infinite or
    /// out-of-range channels are rejected with [`DrawError::InvalidColor`].
    pub fn from_normalized(r: f64, g: f64, b: f64) -> Result<Self, DrawError> {
        Ok(Self {
            r: normalized_channel(r)?,
            g: normalized_channel(g)?,
            b: normalized_channel(b)?,
        })
    }

    /// Squared Euclidean distance in RGB space.
    pub fn distance_sq(self, other: Color) -> u32 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        (dr * dr + dg * dg + db * db) as u32
    }
}

impl From<image::Rgb<u8>> for Color {
    fn from(pixel: image::Rgb<u8>) -> Self {
        let [r, g, b] = pixel.0;
        Self { r, g, b }
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        image::Rgb([color.r, color.g, color.b])
    }
}

fn normalized_channel(v: f64) -> Result<u8, DrawError> {
    if !v.is_finite() || !(0.0..=1.0).contains(&v) {
        return Err(DrawError::InvalidColor);
    }
    let scaled = (v * 255.0 + 0.5).floor();
    Ok(scaled.clamp(0.0, 255.0) as u8)
}
