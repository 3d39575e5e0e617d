// File: crates/chart-core/src/scale.rs
// Summary: Time (X) and Value (Y) scale transforms feeding the series renderer.

use chrono::{DateTime, Utc};

use crate::error::{ChartError, Result};
use crate::series::Datum;

/// Monotonic mapping from a domain value to a pixel coordinate.
///
/// Any `Fn(D) -> f32` is a scale, so callers can hand the renderer a closure
/// instead of one of the concrete scales below.
pub trait Scale<D> {
    fn map(&self, value: D) -> f32;
}

impl<D, F> Scale<D> for F
where
    F: Fn(D) -> f32,
{
    fn map(&self, value: D) -> f32 {
        self(value)
    }
}

/// Horizontal time scale mapping `[start, end]` linearly onto `[range_start, range_end]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub range_start: f32,
    pub range_end: f32,
}

impl TimeScale {
    pub fn new(domain: (DateTime<Utc>, DateTime<Utc>), range: (f32, f32)) -> Result<Self> {
        let (start, end) = domain;
        if end < start {
            return Err(ChartError::InvalidDomain(format!("time domain end {end} precedes start {start}")));
        }
        check_range(range)?;
        Ok(Self { start, end, range_start: range.0, range_end: range.1 })
    }

    /// Domain spanning every datum's x value; an empty dataset gets a zero-width domain at the epoch.
    pub fn fit<D>(data: &[Datum<D>], range: (f32, f32)) -> Result<Self> {
        let domain = match data.first() {
            Some(first) => data
                .iter()
                .fold((first.x, first.x), |(lo, hi), d| (lo.min(d.x), hi.max(d.x))),
            None => (DateTime::<Utc>::UNIX_EPOCH, DateTime::<Utc>::UNIX_EPOCH),
        };
        Self::new(domain, range)
    }

    #[inline]
    pub fn to_px(&self, t: DateTime<Utc>) -> f32 {
        let span = (self.end - self.start).num_milliseconds() as f64;
        if span <= 0.0 {
            // degenerate domain: everything sits in the middle of the range
            return (self.range_start + self.range_end) * 0.5;
        }
        let offset = (t - self.start).num_milliseconds() as f64;
        let width = (self.range_end - self.range_start) as f64;
        (self.range_start as f64 + offset / span * width) as f32
    }
}

impl Scale<DateTime<Utc>> for TimeScale {
    fn map(&self, value: DateTime<Utc>) -> f32 {
        self.to_px(value)
    }
}

/// Vertical value scale mapping `[vmin, vmax]` linearly onto `[bottom_px, top_px]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: f64, vmax: f64) -> Self {
        let vmax = if (vmax - vmin).abs() < 1e-12 { vmin + 1.0 } else { vmax };
        Self { top_px, bottom_px, vmin, vmax }
    }

    /// Linear scale over the valid values with a 2% margin on both ends.
    pub fn fit<D>(data: &[Datum<D>], top_px: f32, bottom_px: f32) -> Self {
        let extent = data
            .iter()
            .filter(|d| d.is_valid())
            .map(Datum::value)
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            });
        let (lo, hi) = extent.unwrap_or((0.0, 1.0));
        let (lo, hi) = if (hi - lo).abs() < 1e-9 { (lo, lo + 1.0) } else { (lo, hi) };
        let m = (hi - lo) * 0.02;
        Self::new_linear(top_px, bottom_px, lo - m, hi + m)
    }

    /// Non-finite values map to NaN.
    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        if !y.is_finite() {
            return f32::NAN;
        }
        let t = (y - self.vmin) / (self.vmax - self.vmin);
        (self.bottom_px as f64 - t * (self.bottom_px - self.top_px) as f64) as f32
    }
}

impl Scale<f64> for ValueScale {
    fn map(&self, value: f64) -> f32 {
        self.to_px(value)
    }
}

fn check_range(range: (f32, f32)) -> Result<()> {
    if range.0.is_finite() && range.1.is_finite() {
        Ok(())
    } else {
        Err(ChartError::InvalidRange(format!("{:?}", range)))
    }
}
