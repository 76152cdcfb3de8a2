use thiserror::Error;

/// Typed failures surfaced by the labeling engine.
///
/// Everything here aborts the operation with no partial result; recoverable
/// conditions (a single rejected window under the strict edge policy) are
/// reported through the observer instead.
#[derive(Debug, Error)]
pub enum MarkError {
    /// A required series or absorption-point list is empty or absent.
    #[error("empty input: {what}")]
    EmptyInput { what: &'static str },

    /// No positive window could be extracted, or no negative candidate exists.
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// Mismatched frequency/amplitude lengths or non-finite values.
    #[error("malformed series: {0}")]
    MalformedSeries(String),

    /// The configuration cannot produce a valid labeling run.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, MarkError>;
