//! Unit-aware BMI computation and classification.
//!
//! The pipeline has three pure steps:
//!
//! 1. [`Measurement::parse`] (or the [`validate`] predicate) turns two
//!    free-text entries into a validated [`Measurement`].
//! 2. [`compute_bmi`] evaluates the metric or imperial formula.
//! 3. [`classify`] maps the value onto a [`BmiCategory`] with display text.
//!
//! [`evaluate`] runs all three. Nothing here holds state between calls;
//! [`BmiForm`] is a caller-side holder for screen state.

mod classify;
mod compute;
mod error;
mod form;
mod measurement;
mod progress;
mod unit_system;
mod validate;

pub use classify::{
    BmiCategory, BmiResult, ColorTag, NORMAL_MIN, OBESE_MIN, OVERWEIGHT_MIN, classify,
};
pub use compute::{BmiValue, compute_bmi};
pub use error::{
    ALERT_MESSAGE, ALERT_TITLE, InvalidMeasurementInput, MeasurementField, Rejection,
};
pub use form::BmiForm;
pub use measurement::Measurement;
pub use progress::{ProgressScale, ProgressScaleError, progress_fraction};
pub use unit_system::UnitSystem;
pub use validate::validate;

/// Validates two entries, computes their BMI, and classifies it.
///
/// # Errors
///
/// Returns [`InvalidMeasurementInput`] if either entry is absent, empty,
/// not a finite decimal number, or not strictly positive.
pub fn evaluate(
    unit: UnitSystem,
    height: Option<&str>,
    weight: Option<&str>,
) -> Result<BmiResult, InvalidMeasurementInput> {
    let measurement = Measurement::parse(height, weight)?;
    Ok(classify(compute_bmi(unit, &measurement)))
}
