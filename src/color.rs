//! Color handling for datasets: hex parsing, color distance and the
//! default palette.
//!
//! Channels are `f64` in `[0, 1]` throughout so the same values feed both
//! the auto-tracer's distance computation and the UI color widgets.

use once_cell::sync::Lazy;

/// Hex colors assigned to the six dataset slots at startup.
pub const DEFAULT_PALETTE: [&str; 6] = [
    "#0072B2", "#D55E00", "#009E73", "#E69F00", "#CC79A7", "#56B4E9",
];

static DEFAULT_PALETTE_RGB: Lazy<[[f64; 3]; 6]> = Lazy::new(|| DEFAULT_PALETTE.map(hex_to_rgb));

/// The default palette decoded to RGB, for swatch rendering.
pub fn default_palette() -> &'static [[f64; 3]; 6] {
    &DEFAULT_PALETTE_RGB
}

/// Parse `#RRGGBB`, `RRGGBB` or `#RGB` into RGB channels in `[0, 1]`.
///
/// Parsing is case-insensitive. The 3-digit shorthand expands by digit
/// duplication and requires the leading `#`; a bare 3-character string is
/// malformed. Malformed input of any kind decodes to black.
pub fn hex_to_rgb(hex: &str) -> [f64; 3] {
    const BLACK: [f64; 3] = [0.0, 0.0, 0.0];
    let (body, had_hash) = match hex.strip_prefix('#') {
        Some(rest) => (rest, true),
        None => (hex, false),
    };
    let expanded: String;
    let digits = if had_hash && body.len() == 3 {
        expanded = body.chars().flat_map(|c| [c, c]).collect();
        expanded.as_str()
    } else if body.len() == 6 {
        body
    } else {
        return BLACK;
    };
    let mut rgb = BLACK;
    for (i, chunk) in digits.as_bytes().chunks(2).enumerate() {
        let Ok(pair) = std::str::from_utf8(chunk) else {
            return BLACK;
        };
        match u8::from_str_radix(pair, 16) {
            Ok(v) => rgb[i] = v as f64 / 255.0,
            Err(_) => return BLACK,
        }
    }
    rgb
}

/// Euclidean distance between two colors in the unit RGB cube.
pub fn color_distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    let dr = a[0] - b[0];
    let dg = a[1] - b[1];
    let db = a[2] - b[2];
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Format RGB channels in `[0, 1]` as an uppercase `#RRGGBB` string.
pub fn rgb_to_hex(rgb: [f64; 3]) -> String {
    format!(
        "#{:02X}{:02X}{:02X}",
        channel_byte(rgb[0]),
        channel_byte(rgb[1]),
        channel_byte(rgb[2])
    )
}

/// Convert RGB channels in `[0, 1]` to an egui color.
pub fn rgb_to_color32(rgb: [f64; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(channel_byte(rgb[0]), channel_byte(rgb[1]), channel_byte(rgb[2]))
}

fn channel_byte(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}
