// File: crates/demo/src/input.rs
// Summary: Loads time/value CSV rows into a line series; unparsable values become gaps.

use anyhow::{Context, Result};
use chart_core::{Datum, Series};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::path::Path;
use tracing::{info, warn};

/// Load a CSV with a time column and a value column into a series.
pub fn load_series_csv(path: &Path, series_id: &str) -> Result<Series<()>> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_series(rdr, series_id)
}

pub fn read_series<R: std::io::Read>(mut rdr: csv::Reader<R>, series_id: &str) -> Result<Series<()>> {
    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    info!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_time = idx(&["time", "timestamp", "date", "datetime", "x"])
        .context("no time column (time/timestamp/date/datetime/x)")?;
    let i_value = idx(&["value", "y", "close", "price"]).context("no value column (value/y/close/price)")?;

    let mut series = Series::new(series_id);
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let Some(x) = rec.get(i_time).and_then(parse_time) else {
            warn!(row, "skipping row with unparsable time");
            continue;
        };
        let y = rec.get(i_value).and_then(|s| s.parse::<f64>().ok());
        series.push(Datum::new(x, y, ()));
    }
    Ok(series)
}

/// RFC 3339, `YYYY-MM-DD` (midnight UTC), or epoch seconds / milliseconds.
pub fn parse_time(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        // epoch ms
        if n.abs() > 10_i64.pow(12) {
            return Utc.timestamp_millis_opt(n).single();
        }
        return Utc.timestamp_opt(n, 0).single();
    }
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|t| t.and_utc())
}
