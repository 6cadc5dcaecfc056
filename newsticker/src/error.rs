use thiserror::Error;

/// Errors surfaced to callers.
///
/// Per-item animation anomalies (duplicate layout reports, degenerate
/// geometry) are absorbed internally and never halt the ticker.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickerError {
    /// The ticker was started, or content was requested, with no headlines
    /// set.
    #[error("headlines not set")]
    EmptyContent,
}
