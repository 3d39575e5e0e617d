// File: crates/chart-core/src/point.rs
// Summary: Point identity, node handles and interaction events emitted by markers.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::series::SeriesId;

/// Deterministic marker identity derived from `(series id, index)`.
///
/// The same pair always yields the same id, so callers can keep an id between
/// renders (for example as the active point) and compare it with fresh markers.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PointId(String);

impl PointId {
    pub fn new(series: &SeriesId, index: usize) -> Self {
        Self(format!("{series}-{index}"))
    }

    /// Wrap an id that was produced earlier and threaded back by the caller.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Handle to the visual node an event originated from.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NodeHandle {
    pub id: PointId,
    pub index: usize,
    pub left: f32,
    pub top: f32,
}

/// Built fresh for every focus/click; the renderer never keeps one.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PointEvent {
    pub id: PointId,
    pub series_id: SeriesId,
    pub x_value: DateTime<Utc>,
    pub y_value: Option<f64>,
    pub link_url: Option<String>,
    pub node: NodeHandle,
}
