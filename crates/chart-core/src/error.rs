// File: crates/chart-core/src/error.rs
// Summary: Error and Result types for scale construction and SVG output.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Domain endpoints are inverted or not finite.
    #[error("invalid scale domain: {0}")]
    InvalidDomain(String),
    #[error("invalid pixel range: {0}")]
    InvalidRange(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
