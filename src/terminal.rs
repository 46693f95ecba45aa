//! Terminal geometry.

use terminal_size::{terminal_size, Width};

/// Columns assumed when stdout is not a terminal.
pub const FALLBACK_WIDTH: u16 = 80;

/// Current terminal width in columns.
///
/// Falls back to [`FALLBACK_WIDTH`] when the size can't be queried
/// (output redirected to a file or pipe).
pub fn width() -> u16 {
    match terminal_size() {
        Some((Width(cols), _)) if cols > 0 => cols,
        _ => {
            tracing::debug!(fallback = FALLBACK_WIDTH, "terminal width unavailable");
            FALLBACK_WIDTH
        }
    }
}
