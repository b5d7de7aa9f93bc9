//! HTML helper functions

/// Convert `#rrggbb` to `rgba(r,g,b,alpha)`.
///
/// Returns `None` for anything that is not a six-digit hex colour.
pub fn hex_to_rgba(hex: &str, alpha: f32) -> Option<String> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(format!(
        "rgba({},{},{},{})",
        channel(0)?,
        channel(2)?,
        channel(4)?,
        alpha
    ))
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
