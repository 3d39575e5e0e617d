// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the line series model, scales, renderer and SVG output.

pub mod error;
pub mod geometry;
pub mod interaction;
pub mod label;
pub mod point;
pub mod render;
pub mod scale;
pub mod series;
pub mod svg;
pub mod types;

pub use error::{ChartError, Result};
pub use geometry::PixelPoint;
pub use interaction::{ChartContent, Propagation, Target};
pub use label::XLabelFormat;
pub use point::{NodeHandle, PointEvent, PointId};
pub use render::{GroupAttrs, LinePath, Marker, SeriesRenderer, SeriesView};
pub use scale::{Scale, TimeScale, ValueScale};
pub use series::{Datum, Series, SeriesId};
pub use svg::SvgDocument;
pub use types::{InvalidPointPolicy, PointerEvents, SeriesStyle, DEFAULT_COLOR};
