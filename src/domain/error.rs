use thiserror::Error;

/// Errors returned by engine construction and parameter setters.
/// Out-of-range cells and rejected stamps are no-ops, not errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("grid dimensions must be positive and addressable, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("{name} must be between {min} and {max}, got {value}")]
    InvalidParameter {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

impl EngineError {
    pub(crate) fn parameter(
        name: &'static str,
        value: i64,
        range: std::ops::RangeInclusive<i64>,
    ) -> Self {
        EngineError::InvalidParameter {
            name,
            value,
            min: *range.start(),
            max: *range.end(),
        }
    }
}
