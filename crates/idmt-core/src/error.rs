use thiserror::Error;

/// Rejected sampling grid passed to [`crate::SampleRange::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    #[error("range bounds must be finite (start={start}, end={end})")]
    NonFiniteBound { start: f64, end: f64 },
    #[error("step must be finite and positive, got {0}")]
    InvalidStep(f64),
    #[error("range end {end} is below start {start}")]
    Reversed { start: f64, end: f64 },
    #[error("range would hold {count} points, more than {max}")]
    TooManyPoints { count: f64, max: usize },
}

/// Failure of the strict parameter parser. The input boundary maps every
/// variant to `0.0`, so these never reach a caller of the recompute path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("parameter is empty")]
    Empty,
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("`{0}` is not finite")]
    NonFinite(String),
}
