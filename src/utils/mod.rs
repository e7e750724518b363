//! Parsing helpers for command-line input

mod digits;
mod errors;
mod range;

pub use digits::parse_digits;
pub use errors::UtilsError;
pub use range::parse_target_range;
