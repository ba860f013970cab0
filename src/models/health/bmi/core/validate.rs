use tracing::trace;

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::{Measurement, Rejection, measurement::checked};

/// Returns `true` if both entries parse to finite, strictly positive numbers.
///
/// An entry fails when it is absent, empty, not a decimal number, not finite,
/// or less than or equal to zero. Surrounding whitespace is not trimmed.
///
/// This is a pure predicate; use [`Measurement::parse`] to also get the
/// validated values or the reason for a rejection.
///
/// # Examples
///
/// ```
/// use twine_bmi::models::health::bmi::validate;
///
/// assert!(validate(Some("180"), Some("72.5")));
/// assert!(!validate(Some(""), Some("72.5")));
/// assert!(!validate(Some("180"), None));
/// assert!(!validate(Some("abc"), Some("72")));
/// assert!(!validate(Some("-180"), Some("72")));
/// ```
#[must_use]
pub fn validate(height: Option<&str>, weight: Option<&str>) -> bool {
    match Measurement::parse(height, weight) {
        Ok(_) => true,
        Err(error) => {
            trace!(field = %error.field, reason = %error.reason, "measurement rejected");
            false
        }
    }
}

/// Parses one free-text entry into a finite, strictly positive number.
pub(super) fn parse_field(
    text: Option<&str>,
) -> Result<Constrained<f64, StrictlyPositive>, Rejection> {
    let text = text.ok_or(Rejection::Missing)?;
    if text.is_empty() {
        return Err(Rejection::Empty);
    }
    let value: f64 = text.parse().map_err(|_| Rejection::NotANumber)?;
    if value.is_nan() {
        return Err(Rejection::NotANumber);
    }
    checked(value)
}
