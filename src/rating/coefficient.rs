//! Range checks for coefficients in [0;1]

use crate::error::RatingError;

/// Ensure `value` lies in the closed interval [0;1].
///
/// NaN fails the check.
pub fn check_coefficient(value: f64, field: &'static str) -> Result<(), RatingError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(RatingError::InvalidCoefficient { field, value })
    }
}
