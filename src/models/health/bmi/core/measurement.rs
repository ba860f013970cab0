use crate::support::constraint::{Constrained, StrictlyPositive};

use super::{InvalidMeasurementInput, Rejection, validate::parse_field};

/// A validated height and weight pair.
///
/// Both values are finite and strictly positive. They are kept as the
/// numbers the user entered; their units depend on the [`UnitSystem`]
/// they are later computed under.
///
/// [`UnitSystem`]: super::UnitSystem
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    height: f64,
    weight: f64,
}

impl Measurement {
    /// Constructs a validated measurement from numbers.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMeasurementInput`] if either value is not finite or
    /// not strictly positive. Height is checked first.
    pub fn new(height: f64, weight: f64) -> Result<Self, InvalidMeasurementInput> {
        let height = checked(height).map_err(InvalidMeasurementInput::height)?;
        let weight = checked(weight).map_err(InvalidMeasurementInput::weight)?;
        Ok(Self::from_checked(height, weight))
    }

    /// Parses and validates a measurement from free-text entries.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMeasurementInput`] if either entry is absent, empty,
    /// not a finite decimal number, or not strictly positive.
    pub fn parse(
        height: Option<&str>,
        weight: Option<&str>,
    ) -> Result<Self, InvalidMeasurementInput> {
        let height = parse_field(height).map_err(InvalidMeasurementInput::height)?;
        let weight = parse_field(weight).map_err(InvalidMeasurementInput::weight)?;
        Ok(Self::from_checked(height, weight))
    }

    /// Constructs a measurement from strictly positive values.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMeasurementInput`] if either value is infinite,
    /// which [`StrictlyPositive`] alone admits.
    pub fn from_constrained(
        height: Constrained<f64, StrictlyPositive>,
        weight: Constrained<f64, StrictlyPositive>,
    ) -> Result<Self, InvalidMeasurementInput> {
        Self::new(height.into_inner(), weight.into_inner())
    }

    fn from_checked(
        height: Constrained<f64, StrictlyPositive>,
        weight: Constrained<f64, StrictlyPositive>,
    ) -> Self {
        Self {
            height: height.into_inner(),
            weight: weight.into_inner(),
        }
    }

    /// Returns the height as entered.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the weight as entered.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Checks that a number is finite and strictly positive.
pub(super) fn checked(value: f64) -> Result<Constrained<f64, StrictlyPositive>, Rejection> {
    if value.is_infinite() {
        return Err(Rejection::NotFinite);
    }
    Ok(StrictlyPositive::new(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{
        models::health::bmi::core::{MeasurementField, UnitSystem, compute_bmi},
        support::constraint::ConstraintError,
    };

    #[test]
    #[allow(clippy::float_cmp)]
    fn accepts_positive_numbers() {
        let m = Measurement::new(180.0, 72.0).unwrap();
        assert_eq!(m.height(), 180.0);
        assert_eq!(m.weight(), 72.0);
    }

    #[test]
    fn rejects_height_before_weight() {
        let error = Measurement::new(0.0, -1.0).unwrap_err();
        assert_eq!(error.field, MeasurementField::Height);
        assert_eq!(error.reason, Rejection::Constraint(ConstraintError::Zero));

        let error = Measurement::new(170.0, -1.0).unwrap_err();
        assert_eq!(error.field, MeasurementField::Weight);
        assert_eq!(error.reason, Rejection::Constraint(ConstraintError::Negative));
    }

    #[test]
    fn rejects_non_finite_numbers() {
        let error = Measurement::new(f64::INFINITY, 70.0).unwrap_err();
        assert_eq!(error.reason, Rejection::NotFinite);

        let error = Measurement::new(170.0, f64::NAN).unwrap_err();
        assert_eq!(error.reason, Rejection::Constraint(ConstraintError::NotANumber));
    }

    #[test]
    fn from_constrained_rejects_infinity() {
        let error = Measurement::from_constrained(
            StrictlyPositive::new(f64::INFINITY).unwrap(),
            StrictlyPositive::new(150.0).unwrap(),
        )
        .unwrap_err();
        assert_eq!(error.field, MeasurementField::Height);
        assert_eq!(error.reason, Rejection::NotFinite);

        let error = Measurement::from_constrained(
            StrictlyPositive::new(5.5).unwrap(),
            StrictlyPositive::new(f64::INFINITY).unwrap(),
        )
        .unwrap_err();
        assert_eq!(error.field, MeasurementField::Weight);
    }

    #[test]
    fn from_constrained_accepts_finite_values() {
        let m = Measurement::from_constrained(
            StrictlyPositive::new(5.5).unwrap(),
            StrictlyPositive::new(150.0).unwrap(),
        )
        .unwrap();
        assert_eq!(m, Measurement::new(5.5, 150.0).unwrap());
        assert!(compute_bmi(UnitSystem::Imperial, &m).value().is_finite());
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn parses_text() {
        let m = Measurement::parse(Some("5.5"), Some("150")).unwrap();
        assert_eq!(m.height(), 5.5);
        assert_eq!(m.weight(), 150.0);
    }
}
