use thiserror::Error;

/// Errors that can occur while parsing command-line input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Digit list cannot be empty")]
    EmptyDigitList,
    #[error("Invalid number '{0}'")]
    InvalidNumber(String),
    #[error("Digits must be positive, got {0}")]
    NonPositiveDigit(i64),
    #[error("Want 2 comma-separated values, got {0}")]
    InvalidRangeParts(usize),
    #[error("Range {bound} bound must be positive, got {value}")]
    NonPositiveBound { bound: &'static str, value: i64 },
}
