// File: crates/chart-core/src/types.rs
// Summary: Shared types and defaults (colors, stroke sizes, pointer-event modes, invalid point policy).

use serde::{Deserialize, Serialize};

/// Series color used when neither the series nor the renderer sets one.
pub const DEFAULT_COLOR: &str = "green";
/// Default surface width in pixels.
pub const WIDTH: u32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 640;

/// SVG `pointer-events` keyword applied to the series group and its marker list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PointerEvents {
    #[default]
    VisiblePainted,
    VisibleFill,
    VisibleStroke,
    Visible,
    Painted,
    Fill,
    Stroke,
    All,
    None,
}

impl PointerEvents {
    pub const fn as_str(&self) -> &'static str {
        match self {
            PointerEvents::VisiblePainted => "visiblePainted",
            PointerEvents::VisibleFill => "visibleFill",
            PointerEvents::VisibleStroke => "visibleStroke",
            PointerEvents::Visible => "visible",
            PointerEvents::Painted => "painted",
            PointerEvents::Fill => "fill",
            PointerEvents::Stroke => "stroke",
            PointerEvents::All => "all",
            PointerEvents::None => "none",
        }
    }

    pub const fn is_interactive(&self) -> bool {
        !matches!(self, PointerEvents::None)
    }
}

/// What happens to the marker of a datum without a finite value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvalidPointPolicy {
    /// Keep the marker at whatever position the y scale yields for NaN.
    #[default]
    Degenerate,
    /// Keep the marker in the list but flag it hidden.
    Hidden,
}

/// Stroke and marker sizes, in pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub stroke_width: f32,
    pub line_cap: String,
    pub marker_radius: f32,
    pub active_marker_radius: f32,
    pub default_color: String,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            stroke_width: 2.0,
            line_cap: "round".to_string(),
            marker_radius: 3.5,
            active_marker_radius: 5.0,
            default_color: DEFAULT_COLOR.to_string(),
        }
    }
}
