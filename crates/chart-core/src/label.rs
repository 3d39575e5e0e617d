// File: crates/chart-core/src/label.rs
// Summary: Accessible label text for point markers (date and value formatting).

use chrono::{DateTime, Utc};

/// Zero-padded day, full month name, full weekday name, e.g. `21 January Thursday`.
pub const X_LABEL_PATTERN: &str = "%d %B %A";

/// Fixed-pattern date formatter for marker labels. Formats in UTC.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct XLabelFormat {
    pattern: &'static str,
}

impl XLabelFormat {
    pub const fn new(pattern: &'static str) -> Self {
        Self { pattern }
    }

    pub fn format(&self, t: &DateTime<Utc>) -> String {
        t.format(self.pattern).to_string()
    }
}

impl Default for XLabelFormat {
    fn default() -> Self {
        Self::new(X_LABEL_PATTERN)
    }
}

/// Renders a value the way a browser stringifies a number: `5`, `5.5`, `NaN`,
/// `Infinity`, `1e+21`, `1e-7`; an absent value reads `null`.
pub fn format_value(value: Option<f64>) -> String {
    match value {
        None => "null".to_string(),
        Some(v) if v.is_nan() => "NaN".to_string(),
        Some(v) if v == f64::INFINITY => "Infinity".to_string(),
        Some(v) if v == f64::NEG_INFINITY => "-Infinity".to_string(),
        Some(v) if v == 0.0 => "0".to_string(), // also -0
        Some(v) if v.abs() >= 1e21 || v.abs() < 1e-6 => exponent_form(v),
        Some(v) => v.to_string(),
    }
}

/// Shortest round-trip mantissa with a signed exponent, e.g. `1.5e+21`.
fn exponent_form(v: f64) -> String {
    let text = format!("{v:e}");
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => text,
    }
}

pub fn aria_label(value: Option<f64>, date: &str, has_link: bool) -> String {
    let value = format_value(value);
    if has_link {
        format!("Link point, Y value: {value}, X value: {date}, click to view data point detail")
    } else {
        format!("Data point, Y value: {value}, X value: {date}")
    }
}
