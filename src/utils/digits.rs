use log::{debug, warn};

use crate::utils::errors::UtilsError;

pub(crate) fn parse_number(part: &str) -> Result<i64, UtilsError> {
    let trimmed = part.trim();
    trimmed.parse::<i64>().map_err(|_| {
        warn!("Rejecting non-integer value '{}'", trimmed);
        UtilsError::InvalidNumber(trimmed.to_string())
    })
}

/// Parse a comma-separated list such as `"25,50,75,100,3,6"`
///
/// # Errors
///
/// Returns an error if the list is empty, or any item is not an integer
/// or is not positive.
pub fn parse_digits(list: &str) -> Result<Vec<i64>, UtilsError> {
    debug!("Parsing digit list '{}'", list);

    if list.trim().is_empty() {
        warn!("Digit list is empty");
        return Err(UtilsError::EmptyDigitList);
    }

    let digits = list
        .split(',')
        .map(|part| {
            let value = parse_number(part)?;
            if value <= 0 {
                warn!("Rejecting non-positive digit {}", value);
                return Err(UtilsError::NonPositiveDigit(value));
            }
            Ok(value)
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Parsed digits {:?}", digits);
    Ok(digits)
}
