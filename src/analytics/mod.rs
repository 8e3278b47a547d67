//! Aggregation and forecasting pipelines over the loaded dataset.

pub mod aggregate;
pub mod forecast;
pub mod ols;

use thiserror::Error;

/// Why a pipeline produced no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Unavailable {
    #[error("missing column `{0}`")]
    MissingColumn(&'static str),
    #[error("fewer than two distinct days of history")]
    InsufficientHistory,
}

/// Pipeline result that keeps "empty by design" distinguishable from a bug.
///
/// The HTTP layer collapses `Unavailable` into the wire-compatible empty
/// response; tests assert on the reason directly.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Ready(T),
    Unavailable(Unavailable),
}
