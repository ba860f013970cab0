use thiserror::Error;

use crate::support::constraint::{ConstraintError, StrictlyPositive, UnitInterval};

use super::BmiValue;

/// Linear mapping from a BMI onto a progress-bar fraction.
///
/// BMIs are clamped to `[min_bmi, max_bmi]` and mapped onto `[floor, 1]`.
/// The default maps `[10, 40]` onto `[0.1, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressScale {
    min_bmi: f64,
    max_bmi: f64,
    floor: f64,
}

/// Errors from constructing a [`ProgressScale`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProgressScaleError {
    #[error("bmi bound is invalid")]
    Bound(#[source] ConstraintError),
    #[error("bmi bound is not finite")]
    NotFinite,
    #[error("bmi range is empty: min must be below max")]
    EmptyRange,
    #[error("floor must lie in [0, 1]")]
    Floor(#[source] ConstraintError),
}

impl Default for ProgressScale {
    fn default() -> Self {
        Self {
            min_bmi: 10.0,
            max_bmi: 40.0,
            floor: 0.1,
        }
    }
}

impl ProgressScale {
    /// Constructs a validated scale.
    ///
    /// # Errors
    ///
    /// Returns a [`ProgressScaleError`] if either bound is not strictly
    /// positive and finite, if `min_bmi >= max_bmi`, or if `floor` is outside
    /// `[0, 1]`.
    pub fn new(min_bmi: f64, max_bmi: f64, floor: f64) -> Result<Self, ProgressScaleError> {
        for bound in [min_bmi, max_bmi] {
            if bound.is_infinite() {
                return Err(ProgressScaleError::NotFinite);
            }
            StrictlyPositive::new(bound).map_err(ProgressScaleError::Bound)?;
        }
        if min_bmi >= max_bmi {
            return Err(ProgressScaleError::EmptyRange);
        }
        let floor = UnitInterval::new(floor)
            .map_err(ProgressScaleError::Floor)?
            .into_inner();

        Ok(Self {
            min_bmi,
            max_bmi,
            floor,
        })
    }

    /// Maps a BMI onto `[floor, 1]`.
    #[must_use]
    pub fn fraction(&self, bmi: BmiValue) -> f64 {
        let clamped = bmi.value().clamp(self.min_bmi, self.max_bmi);
        let t = (clamped - self.min_bmi) / (self.max_bmi - self.min_bmi);
        self.floor + t * (1.0 - self.floor)
    }
}

/// Maps a BMI onto a progress fraction in `[0.1, 1.0]` using the default
/// [`ProgressScale`].
#[must_use]
pub fn progress_fraction(bmi: BmiValue) -> f64 {
    ProgressScale::default().fraction(bmi)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn progress(value: f64) -> f64 {
        progress_fraction(BmiValue::new(value).unwrap())
    }

    #[test]
    fn endpoints() {
        assert_relative_eq!(progress(10.0), 0.1);
        assert_relative_eq!(progress(40.0), 1.0);
    }

    #[test]
    fn clamps() {
        assert_relative_eq!(progress(5.0), 0.1);
        assert_relative_eq!(progress(0.0), 0.1);
        assert_relative_eq!(progress(50.0), 1.0);
        assert_relative_eq!(progress(f64::INFINITY), 1.0);
    }

    #[test]
    fn midpoint() {
        assert_relative_eq!(progress(25.0), 0.55, epsilon = 1e-12);
    }

    #[test]
    fn stays_in_range() {
        for value in [0.0, 9.9, 10.0, 18.5, 22.2, 30.0, 39.99, 40.0, 1e6] {
            let p = progress(value);
            assert!((0.1..=1.0).contains(&p), "{value} mapped to {p}");
        }
    }

    #[test]
    fn custom_scale() {
        let scale = ProgressScale::new(15.0, 35.0, 0.0).unwrap();
        assert_relative_eq!(scale.fraction(BmiValue::new(15.0).unwrap()), 0.0);
        assert_relative_eq!(scale.fraction(BmiValue::new(25.0).unwrap()), 0.5);
        assert_relative_eq!(scale.fraction(BmiValue::new(35.0).unwrap()), 1.0);
    }

    #[test]
    fn default_matches_explicit() {
        assert_eq!(ProgressScale::new(10.0, 40.0, 0.1), Ok(ProgressScale::default()));
    }

    #[test]
    fn rejects_bad_scales() {
        assert_eq!(
            ProgressScale::new(0.0, 40.0, 0.1),
            Err(ProgressScaleError::Bound(ConstraintError::Zero))
        );
        assert_eq!(
            ProgressScale::new(10.0, f64::INFINITY, 0.1),
            Err(ProgressScaleError::NotFinite)
        );
        assert_eq!(
            ProgressScale::new(f64::NEG_INFINITY, 40.0, 0.1),
            Err(ProgressScaleError::NotFinite)
        );
        assert_eq!(
            ProgressScale::new(f64::NAN, 40.0, 0.1),
            Err(ProgressScaleError::Bound(ConstraintError::NotANumber))
        );
        assert_eq!(
            ProgressScale::new(40.0, 10.0, 0.1),
            Err(ProgressScaleError::EmptyRange)
        );
        assert_eq!(
            ProgressScale::new(10.0, 40.0, 1.5),
            Err(ProgressScaleError::Floor(ConstraintError::AboveMaximum))
        );
    }
}
