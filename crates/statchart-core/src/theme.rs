// File: crates/statchart-core/src/theme.rs
// Summary: Classic chart theme and colour-name parsing for bar fills.

use skia_safe as skia;

use crate::error::{ChartError, Result};

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: skia::Color,
    pub plot_background: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
}

impl Theme {
    /// White figure, black spines and text.
    pub fn classic() -> Self {
        Self {
            background: skia::Color::WHITE,
            plot_background: skia::Color::WHITE,
            axis_line: skia::Color::BLACK,
            axis_label: skia::Color::BLACK,
            tick: skia::Color::BLACK,
            title: skia::Color::BLACK,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

// CSS/X11 names; only the ones charts here actually use plus a few basics.
const NAMED_COLORS: &[(&str, (u8, u8, u8))] = &[
    ("skyblue", (0x87, 0xce, 0xeb)),
    ("lightgreen", (0x90, 0xee, 0x90)),
    ("gold", (0xff, 0xd7, 0x00)),
    ("lightcoral", (0xf0, 0x80, 0x80)),
    ("steelblue", (0x46, 0x82, 0xb4)),
    ("orange", (0xff, 0xa5, 0x00)),
    ("red", (0xff, 0x00, 0x00)),
    ("green", (0x00, 0x80, 0x00)),
    ("blue", (0x00, 0x00, 0xff)),
    ("gray", (0x80, 0x80, 0x80)),
    ("black", (0x00, 0x00, 0x00)),
    ("white", (0xff, 0xff, 0xff)),
];

/// Parse `#rrggbb`, `#rgb` or a colour name (case-insensitive) into an opaque colour.
pub fn parse_color(spec: &str) -> Result<skia::Color> {
    let s = spec.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| ChartError::UnknownColor(spec.to_string()));
    }
    NAMED_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(s))
        .map(|&(_, (r, g, b))| skia::Color::from_rgb(r, g, b))
        .ok_or_else(|| ChartError::UnknownColor(spec.to_string()))
}

fn parse_hex(hex: &str) -> Option<skia::Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(skia::Color::from_rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => {
            let mut rgb = [0u8; 3];
            for (slot, c) in rgb.iter_mut().zip(hex.chars()) {
                let v = c.to_digit(16)? as u8;
                *slot = v * 16 + v;
            }
            Some(skia::Color::from_rgb(rgb[0], rgb[1], rgb[2]))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_names() {
        assert_eq!(parse_color("#ff9999").unwrap(), skia::Color::from_rgb(255, 153, 153));
        assert_eq!(parse_color("#F99").unwrap(), skia::Color::from_rgb(255, 153, 153));
        assert_eq!(parse_color("SkyBlue").unwrap(), skia::Color::from_rgb(135, 206, 235));
    }

    #[test]
    fn rejects_unknown() {
        assert!(matches!(parse_color("ultraviolet"), Err(ChartError::UnknownColor(_))));
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("#gg0000").is_err());
    }

    #[test]
    fn classic_is_the_default_theme() {
        let t = Theme::default();
        assert_eq!(t.background, skia::Color::WHITE);
        assert_eq!(t.axis_line, skia::Color::BLACK);
    }
}
