//! draw-me: images as 256-color half-block text.
//!
//! An image is resized to the terminal width, quantized against the
//! standard 256-color palette and written as SGR escapes around a block
//! glyph, two pixel rows per line of text.
//!
//! ```no_run
//! use std::path::Path;
//! use draw_me::{DrawConfig, Pipeline};
//!
//! let config = DrawConfig::for_terminal();
//! let mut stdout = std::io::stdout().lock();
//! Pipeline::new(config).draw(Path::new("photo.png"), &mut stdout)?;
//! # Ok::<(), draw_me::DrawError>(())
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod palette;
pub mod pipeline;
pub mod raster;
pub mod render;
pub mod terminal;

pub use color::Color;
pub use config::DrawConfig;
pub use error::DrawError;
pub use palette::{ColorMatcher, Palette};
pub use pipeline::Pipeline;
pub use raster::{IndexedImage, PixelGrid};
pub use render::Compositor;
