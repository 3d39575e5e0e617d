// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and line segmentation.

use std::ops::Range;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PixelPoint {
    pub x: f32,
    pub y: f32,
}

impl PixelPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Maximal runs of consecutive items for which `defined` holds, in order.
pub fn defined_runs<T, F>(items: &[T], defined: F) -> Vec<Range<usize>>
where
    F: Fn(&T) -> bool,
{
    let mut runs = Vec::new();
    let mut start: Option<usize> = None;
    for (i, item) in items.iter().enumerate() {
        match (defined(item), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                runs.push(s..i);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        runs.push(s..items.len());
    }
    runs
}
