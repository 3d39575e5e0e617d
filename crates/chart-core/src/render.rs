// File: crates/chart-core/src/render.rs
// Summary: Line series renderer: maps a series through x/y scales into a path plus one
//          accessible, interactive marker per datum.
// Notes:
// - `render` is a pure function of the series, scales and configuration. The active
//   point is supplied by the caller on every render; nothing is kept between renders.
// - Focus and click callbacks are invoked synchronously, once per interaction, and
//   always report `Propagation::Stop` so a chart-level handler never sees the event.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, trace};

use crate::geometry::{defined_runs, PixelPoint};
use crate::interaction::Propagation;
use crate::label::{aria_label, XLabelFormat};
use crate::point::{NodeHandle, PointEvent, PointId};
use crate::scale::Scale;
use crate::series::{Datum, Series, SeriesId};
use crate::types::{InvalidPointPolicy, PointerEvents, SeriesStyle};

/// Resolves the navigation target of a datum; `None` means the marker is not a link.
pub type LinkResolver<'a, D> = Box<dyn Fn(&D, usize) -> Option<String> + 'a>;
/// Receives a freshly built event for every focus or click on a marker.
pub type PointCallback<'a> = Box<dyn Fn(&PointEvent) + 'a>;

pub struct SeriesRenderer<'a, D> {
    series: &'a Series<D>,
    x_scale: &'a dyn Scale<DateTime<Utc>>,
    y_scale: &'a dyn Scale<f64>,
    color: Option<String>,
    active_point: Option<PointId>,
    link_resolver: Option<LinkResolver<'a, D>>,
    on_focus: Option<PointCallback<'a>>,
    on_click: Option<PointCallback<'a>>,
    pointer_events: PointerEvents,
    tab_index: Option<i32>,
    style: SeriesStyle,
    invalid_points: InvalidPointPolicy,
    x_format: XLabelFormat,
}

impl<'a, D> SeriesRenderer<'a, D> {
    pub fn new(
        series: &'a Series<D>,
        x_scale: &'a dyn Scale<DateTime<Utc>>,
        y_scale: &'a dyn Scale<f64>,
    ) -> Self {
        Self {
            series,
            x_scale,
            y_scale,
            color: None,
            active_point: None,
            link_resolver: None,
            on_focus: None,
            on_click: None,
            pointer_events: PointerEvents::default(),
            tab_index: None,
            style: SeriesStyle::default(),
            invalid_points: InvalidPointPolicy::default(),
            x_format: XLabelFormat::default(),
        }
    }

    /// Overrides the series color.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn active_point(mut self, id: Option<PointId>) -> Self {
        self.active_point = id;
        self
    }

    pub fn link_resolver(mut self, resolver: impl Fn(&D, usize) -> Option<String> + 'a) -> Self {
        self.link_resolver = Some(Box::new(resolver));
        self
    }

    pub fn on_focus(mut self, callback: impl Fn(&PointEvent) + 'a) -> Self {
        self.on_focus = Some(Box::new(callback));
        self
    }

    pub fn on_click(mut self, callback: impl Fn(&PointEvent) + 'a) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    pub fn pointer_events(mut self, mode: PointerEvents) -> Self {
        self.pointer_events = mode;
        self
    }

    pub fn tab_index(mut self, tab_index: Option<i32>) -> Self {
        self.tab_index = tab_index;
        self
    }

    pub fn style(mut self, style: SeriesStyle) -> Self {
        self.style = style;
        self
    }

    pub fn invalid_points(mut self, policy: InvalidPointPolicy) -> Self {
        self.invalid_points = policy;
        self
    }

    pub fn series_id(&self) -> &SeriesId {
        &self.series.id
    }

    /// Renderer override, then series color, then the style default.
    pub fn resolved_color(&self) -> String {
        self.color
            .clone()
            .or_else(|| self.series.color.clone())
            .unwrap_or_else(|| self.style.default_color.clone())
    }

    pub fn render(&self) -> SeriesView {
        let color = self.resolved_color();
        let data = self.series.data.as_slice();

        let segments: Vec<Vec<PixelPoint>> = defined_runs(data, Datum::is_valid)
            .into_iter()
            .map(|run| data[run].iter().map(|d| self.position(d)).collect())
            .collect();

        let markers: Vec<Marker> = data
            .iter()
            .enumerate()
            .map(|(index, datum)| self.marker(index, datum, &color))
            .collect();

        debug!(
            series = %self.series.id,
            points = data.len(),
            segments = segments.len(),
            invalid = data.len() - self.series.valid_count(),
            "rendered line series"
        );

        SeriesView {
            series_id: self.series.id.clone(),
            group: GroupAttrs { tab_index: self.tab_index, pointer_events: self.pointer_events },
            path: LinePath {
                segments,
                stroke: color,
                stroke_width: self.style.stroke_width,
                line_cap: self.style.line_cap.clone(),
            },
            markers,
        }
    }

    /// Invokes `on_focus` for `marker`. Focus never reaches ancestor handlers.
    pub fn focus(&self, marker: &Marker) -> Propagation {
        trace!(point = %marker.id, "marker focus");
        if let Some(cb) = &self.on_focus {
            cb(&self.point_event(marker));
        }
        Propagation::Stop
    }

    /// Invokes `on_click` for `marker` and stops propagation, with or without a handler,
    /// so the chart-level click handler is not called a second time for the same point.
    pub fn click(&self, marker: &Marker) -> Propagation {
        trace!(point = %marker.id, "marker click");
        if let Some(cb) = &self.on_click {
            cb(&self.point_event(marker));
        }
        Propagation::Stop
    }

    pub fn point_event(&self, marker: &Marker) -> PointEvent {
        PointEvent {
            id: marker.id.clone(),
            series_id: self.series.id.clone(),
            x_value: marker.x_value,
            y_value: marker.y_value,
            link_url: marker.link_url.clone(),
            node: marker.node(),
        }
    }

    fn position(&self, datum: &Datum<D>) -> PixelPoint {
        PixelPoint::new(self.x_scale.map(datum.x), self.y_scale.map(datum.value()))
    }

    fn marker(&self, index: usize, datum: &Datum<D>, color: &str) -> Marker {
        let id = PointId::new(&self.series.id, index);
        let link_url = self
            .link_resolver
            .as_ref()
            .and_then(|resolve| resolve(&datum.datum, index))
            .filter(|url| !url.is_empty());
        let date = self.x_format.format(&datum.x);
        let active = self.active_point.as_ref() == Some(&id);
        let radius = if active { self.style.active_marker_radius } else { self.style.marker_radius };

        Marker {
            aria_label: aria_label(datum.y, &date, link_url.is_some()),
            position: self.position(datum),
            x_value: datum.x,
            y_value: datum.y,
            hidden: self.invalid_points == InvalidPointPolicy::Hidden && !datum.is_valid(),
            color: color.to_string(),
            tab_index: self.tab_index,
            id,
            index,
            active,
            radius,
            link_url,
        }
    }
}

/// Attributes of the series group and its marker list.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GroupAttrs {
    pub tab_index: Option<i32>,
    pub pointer_events: PointerEvents,
}

/// The drawn line. Always `aria-hidden` and never a pointer target.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LinePath {
    pub segments: Vec<Vec<PixelPoint>>,
    pub stroke: String,
    pub stroke_width: f32,
    pub line_cap: String,
}

impl LinePath {
    pub const POINTER_EVENTS: PointerEvents = PointerEvents::None;

    /// SVG path data, one `M` subpath per segment; empty when nothing is drawable.
    pub fn d(&self) -> String {
        let mut d = String::new();
        for segment in &self.segments {
            for (i, p) in segment.iter().enumerate() {
                let cmd = if i == 0 { 'M' } else { 'L' };
                d.push_str(&format!("{cmd}{},{}", p.x, p.y));
            }
            if segment.len() == 1 {
                d.push('Z');
            }
        }
        d
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Marker {
    pub id: PointId,
    pub index: usize,
    pub position: PixelPoint,
    pub x_value: DateTime<Utc>,
    pub y_value: Option<f64>,
    pub active: bool,
    pub hidden: bool,
    pub link_url: Option<String>,
    pub aria_label: String,
    pub color: String,
    pub radius: f32,
    pub tab_index: Option<i32>,
}

impl Marker {
    pub const ROLE: &'static str = "listitem";

    pub fn node(&self) -> NodeHandle {
        NodeHandle {
            id: self.id.clone(),
            index: self.index,
            left: self.position.x,
            top: self.position.y,
        }
    }

    pub fn is_link(&self) -> bool {
        self.link_url.is_some()
    }
}

/// Renderable output of one series: group attributes, the path and the marker list.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeriesView {
    pub series_id: SeriesId,
    pub group: GroupAttrs,
    pub path: LinePath,
    pub markers: Vec<Marker>,
}

impl SeriesView {
    pub const MARKER_LIST_ROLE: &'static str = "list";

    pub fn marker(&self, id: &PointId) -> Option<&Marker> {
        self.markers.iter().find(|m| &m.id == id)
    }

    pub fn active_marker(&self) -> Option<&Marker> {
        self.markers.iter().find(|m| m.active)
    }
}
