//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The top-level error type for `fleet-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("time parse error: {0}")]
    TimeParse(String),

    #[error("invalid speed {0} mph: must be finite and > 0")]
    InvalidSpeed(f64),

    #[error("invalid distance {0} miles: must be finite and >= 0")]
    InvalidDistance(f64),

    #[error("clock overflow: {at} + {by:?} is past the end of representable time")]
    ClockOverflow { at: crate::SimTime, by: std::time::Duration },
}

/// Shorthand result type for `fleet-core`.
pub type CoreResult<T> = Result<T, CoreError>;
