//! Body mass index model.
//!
//! [`BmiModel`] exposes the full validate, compute, and classify pipeline as
//! a [`twine_core::Model`]. The computational core lives in the internal
//! `core` module; its operations are re-exported here for callers that only
//! need one step.
//!
//! # Example
//!
//! ```
//! use twine_bmi::models::health::bmi::{BmiCategory, BmiModel, BmiRequest, UnitSystem};
//! use twine_core::Model;
//!
//! let request = BmiRequest::new(UnitSystem::Metric, "180", "72");
//! let result = BmiModel.call(&request).unwrap();
//!
//! assert_eq!(result.formatted(), "22.2");
//! assert_eq!(result.category(), BmiCategory::Normal);
//! ```

mod core;

pub use self::core::{
    ALERT_MESSAGE, ALERT_TITLE, BmiCategory, BmiForm, BmiResult, BmiValue, ColorTag,
    InvalidMeasurementInput, Measurement, MeasurementField, NORMAL_MIN, OBESE_MIN,
    OVERWEIGHT_MIN, ProgressScale, ProgressScaleError, Rejection, UnitSystem, classify,
    compute_bmi, evaluate, progress_fraction, validate,
};

use tracing::debug;
use twine_core::Model;

/// Free-text entries for one BMI calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BmiRequest {
    pub unit: UnitSystem,
    pub height: Option<String>,
    pub weight: Option<String>,
}

impl BmiRequest {
    /// Creates a request with both entries present.
    pub fn new(unit: UnitSystem, height: impl Into<String>, weight: impl Into<String>) -> Self {
        Self {
            unit,
            height: Some(height.into()),
            weight: Some(weight.into()),
        }
    }
}

/// Stateless model computing a classified BMI from a [`BmiRequest`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BmiModel;

impl Model for BmiModel {
    type Input = BmiRequest;
    type Output = BmiResult;
    type Error = InvalidMeasurementInput;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let result = evaluate(input.unit, input.height.as_deref(), input.weight.as_deref());
        if let Err(error) = &result {
            debug!(field = %error.field, reason = %error.reason, "bmi request rejected");
        }
        result
    }
}
