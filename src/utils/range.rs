use log::debug;

use crate::utils::digits::parse_number;
use crate::utils::errors::UtilsError;

/// Parse an inclusive `"low,high"` target range.
///
/// An inverted range is flipped rather than rejected.
///
/// # Errors
///
/// Returns an error unless there are exactly two integer parts, both positive.
pub fn parse_target_range(range: &str) -> Result<(i64, i64), UtilsError> {
    debug!("Parsing target range '{}'", range);

    let parts: Vec<&str> = range.split(',').collect();
    let [low, high] = parts.as_slice() else {
        return Err(UtilsError::InvalidRangeParts(parts.len()));
    };

    let low = parse_number(low)?;
    let high = parse_number(high)?;

    if low <= 0 {
        return Err(UtilsError::NonPositiveBound {
            bound: "lower",
            value: low,
        });
    }
    if high <= 0 {
        return Err(UtilsError::NonPositiveBound {
            bound: "upper",
            value: high,
        });
    }

    if low > high {
        debug!("Flipping inverted range {},{}", low, high);
        return Ok((high, low));
    }
    Ok((low, high))
}
