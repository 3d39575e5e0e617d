// File: crates/chart-render-skia/src/theme.rs
// Summary: Light/Dark theming for raster output and CSS color parsing for series colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    /// Used when a series color cannot be parsed.
    pub line_stroke: skia::Color,
    pub active_ring: skia::Color,
    pub link_ring: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
            active_ring: skia::Color::from_argb(255, 255, 230, 70),
            link_ring: skia::Color::from_argb(255, 235, 235, 245),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            line_stroke: skia::Color::from_argb(255, 32, 120, 200),
            active_ring: skia::Color::from_argb(255, 30, 120, 240),
            link_ring: skia::Color::from_argb(255, 20, 20, 30),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            line_stroke: skia::Color::from_argb(255, 0x00, 0xff, 0xff),
            active_ring: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
            link_ring: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}

/// Parse `#rgb`, `#rrggbb`, `#rrggbbaa` or a basic CSS color keyword.
pub fn parse_css_color(input: &str) -> Option<skia::Color> {
    let s = input.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    let (r, g, b) = match s.to_ascii_lowercase().as_str() {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "lime" => (0, 255, 0),
        "blue" => (0, 0, 255),
        "yellow" => (255, 255, 0),
        "orange" => (255, 165, 0),
        "purple" => (128, 0, 128),
        "gray" | "grey" => (128, 128, 128),
        "teal" => (0, 128, 128),
        "navy" => (0, 0, 128),
        "cyan" | "aqua" => (0, 255, 255),
        "magenta" | "fuchsia" => (255, 0, 255),
        _ => return None,
    };
    Some(skia::Color::from_argb(255, r, g, b))
}

fn parse_hex(hex: &str) -> Option<skia::Color> {
    let nibble = |c: u8| (c as char).to_digit(16).map(|d| d as u8);
    let bytes = hex.as_bytes();
    match bytes.len() {
        3 => {
            let r = nibble(bytes[0])?;
            let g = nibble(bytes[1])?;
            let b = nibble(bytes[2])?;
            Some(skia::Color::from_argb(255, r * 17, g * 17, b * 17))
        }
        6 | 8 => {
            let byte = |i: usize| Some(nibble(bytes[i])? * 16 + nibble(bytes[i + 1])?);
            let a = if bytes.len() == 8 { byte(6)? } else { 255 };
            Some(skia::Color::from_argb(a, byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}
