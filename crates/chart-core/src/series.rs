// File: crates/chart-core/src/series.rs
// Summary: Series model: time-indexed datums with optional values and an opaque caller payload.
// Notes:
// - A datum is valid when it carries a finite value. Invalid datums break the
//   drawn line but still get a marker.
// - The caller owns the series; renderers only borrow it for one render.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable identifier of a series, used as the prefix of every point id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesId(String);

impl SeriesId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SeriesId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SeriesId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Datum<D> {
    pub x: DateTime<Utc>,
    pub y: Option<f64>, // None or non-finite => not drawn on the line
    pub datum: D,
}

impl<D> Datum<D> {
    pub fn new(x: DateTime<Utc>, y: Option<f64>, datum: D) -> Self {
        Self { x, y, datum }
    }

    /// Numeric value used for positioning; absent values read as NaN.
    pub fn value(&self) -> f64 {
        self.y.unwrap_or(f64::NAN)
    }

    pub fn is_valid(&self) -> bool {
        matches!(self.y, Some(v) if v.is_finite())
    }
}

impl Datum<()> {
    /// Datum without a payload.
    pub fn point(x: DateTime<Utc>, y: f64) -> Self {
        Self { x, y: Some(y), datum: () }
    }
}

#[derive(Clone, Debug)]
pub struct Series<D> {
    pub id: SeriesId,
    pub data: Vec<Datum<D>>,
    pub color: Option<String>, // CSS color; renderer falls back to its default
}

impl<D> Series<D> {
    pub fn new(id: impl Into<SeriesId>) -> Self {
        Self { id: id.into(), data: Vec::new(), color: None }
    }

    pub fn with_data(id: impl Into<SeriesId>, data: Vec<Datum<D>>) -> Self {
        Self { id: id.into(), data, color: None }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn push(&mut self, datum: Datum<D>) {
        self.data.push(datum);
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn valid_count(&self) -> usize {
        self.data.iter().filter(|d| d.is_valid()).count()
    }

    /// Earliest and latest x over all datums, valid or not.
    pub fn time_extent(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let first = self.data.first()?.x;
        Some(self.data.iter().fold((first, first), |(lo, hi), d| (lo.min(d.x), hi.max(d.x))))
    }

    /// Min and max over valid values only.
    pub fn value_extent(&self) -> Option<(f64, f64)> {
        self.data
            .iter()
            .filter(|d| d.is_valid())
            .map(Datum::value)
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
