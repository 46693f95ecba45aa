//! ANSI SGR escape sequences for 256-color output.

/// Resets all colors and attributes.
pub const RESET: &str = "\x1b[0m";

/// Append the background escape for palette `code`.
pub fn push_bg(buf: &mut String, code: u8) {
    buf.push_str("\x1b[48;5;");
    buf.push_str(&code.to_string());
    buf.push('m');
}

/// Append the foreground escape for palette `code`.
pub fn push_fg(buf: &mut String, code: u8) {
    buf.push_str("\x1b[38;5;");
    buf.push_str(&code.to_string());
    buf.push('m');
}
