//! Pixel access and the image stages around the compositor.
//!
//! Decoding, resampling and remapping sit behind small traits so the
//! pipeline can be driven by in-memory grids in tests. The default
//! implementations use the `image` crate.

mod decode;
mod grid;
mod remap;
mod resample;

pub use decode::{Decoder, FileDecoder};
pub use grid::{IndexedImage, PixelGrid};
pub use remap::{PaletteRemapper, Remapper};
pub use resample::{target_height, LanczosResampler, Resampler};
