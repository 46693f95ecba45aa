//! Draw an image file to stdout.

use std::io;
use std::path::Path;

use anyhow::Result;

use draw_me::{DrawConfig, Pipeline};

/// Draw the image at `file` sized to the current terminal.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: &Path) -> Result<()> {
    let config = DrawConfig::for_terminal();
    tracing::debug!(?config, "drawing");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    Pipeline::new(config).draw(file, &mut out)?;
    Ok(())
}
