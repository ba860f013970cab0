use tracing::debug;
use uom::si::areal_mass_density::kilogram_per_square_meter;

use crate::support::{
    constraint::{Constrained, ConstraintResult, NonNegative},
    units::{BodyMassIndex, IMPERIAL_BMI_FACTOR, feet_inches_to_inches},
};

use super::{Measurement, UnitSystem};

/// A computed body mass index, in kg/m².
///
/// Values are never negative or `NaN`. Extreme entries may saturate to zero
/// or positive infinity; both still classify.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct BmiValue(f64);

impl BmiValue {
    /// Wraps a BMI number.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or `NaN`.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Ok(Self::from_constrained(NonNegative::new(value)?))
    }

    /// Wraps a pre-validated BMI number.
    #[must_use]
    pub fn from_constrained(value: Constrained<f64, NonNegative>) -> Self {
        Self(value.into_inner())
    }

    /// Returns the BMI as a plain number.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the BMI as a [`BodyMassIndex`] quantity.
    #[must_use]
    pub fn quantity(self) -> BodyMassIndex {
        BodyMassIndex::new::<kilogram_per_square_meter>(self.0)
    }
}

/// Computes the BMI of a measurement under a unit system.
///
/// - Metric: `kg / m²`, with height entered in centimeters.
/// - Imperial: `lb / in² × 703`, with height decoded from `feet.inches`.
///
/// The measurement is already validated, so this cannot fail.
///
/// # Examples
///
/// ```
/// use approx::assert_relative_eq;
/// use twine_bmi::models::health::bmi::{Measurement, UnitSystem, compute_bmi};
///
/// let m = Measurement::new(180.0, 72.0).unwrap();
/// let bmi = compute_bmi(UnitSystem::Metric, &m);
/// assert_relative_eq!(bmi.value(), 22.222, epsilon = 1e-3);
/// ```
#[must_use]
pub fn compute_bmi(unit: UnitSystem, measurement: &Measurement) -> BmiValue {
    let (height, weight) = (measurement.height(), measurement.weight());

    // Entered numbers only: converting through SI units shifts results by a
    // few ULP, enough to cross a category threshold.
    let value = match unit {
        UnitSystem::Metric => weight / (height / 100.0).powi(2),
        UnitSystem::Imperial => {
            weight / feet_inches_to_inches(height).powi(2) * IMPERIAL_BMI_FACTOR
        }
    };
    debug!(?unit, height, weight, bmi = value, "computed bmi");

    debug_assert!(value >= 0.0, "BMI of a validated measurement must be non-negative");
    BmiValue(value)
}
