//! Colour token parsing and formatting.
//!
//! Scheme tables store colours as strings. This module turns those tokens into
//! [`Color32`] values and back. Bare hex (`#rgb`, `#rrggbb`, the `#` optional)
//! is read directly; any other CSS colour (`red`, `rgb(100%, 0%, 0%)`,
//! `hsl(120, 100%, 50%)`, ...) goes through `csscolorparser`. Alpha is dropped,
//! ramps are always opaque.
//!
//! # Examples
//!
//! ```
//! use transit_palette::color::{parse_color, to_hex};
//!
//! let c = parse_color("#9e0142").unwrap();
//! assert_eq!(to_hex(c), "#9e0142");
//! assert_eq!(to_hex(parse_color("rebeccapurple").unwrap()), "#663399");
//! ```

use egui::Color32;

use crate::error::PaletteError;

/// Parses a colour token into a [`Color32`].
pub fn parse_color(token: &str) -> Result<Color32, PaletteError> {
    let trimmed = token.trim();
    let parsed = parse_hex(trimmed).or_else(|| {
        csscolorparser::parse(trimmed)
            .ok()
            .map(|c| {
                let [r, g, b, _] = c.to_rgba8();
                Color32::from_rgb(r, g, b)
            })
    });

    parsed.ok_or_else(|| {
        log::warn!("unparseable color token {:?}", token);
        PaletteError::InvalidColor(token.to_string())
    })
}

fn parse_hex(hex: &str) -> Option<Color32> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color32::from_rgb(r, g, b))
        }
        3 => {
            // #abc is shorthand for #aabbcc
            let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
            Some(Color32::from_rgb(nibble(0)?, nibble(1)?, nibble(2)?))
        }
        _ => None,
    }
}

/// Formats a colour as lowercase `#rrggbb`.
pub fn to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// Formats a colour in CSS functional notation, `rgb(r, g, b)`.
pub fn to_css_rgb(color: Color32) -> String {
    format!("rgb({}, {}, {})", color.r(), color.g(), color.b())
}

/// Builds a [`Color32`] from an RGB triple.
pub fn triple_to_color32(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}
