use tracing::debug;

use super::{BmiResult, InvalidMeasurementInput, UnitSystem, evaluate};

/// Transient state of a BMI entry screen.
///
/// The engine itself is stateless; this is the caller-side holder for the
/// selected unit system, the two text fields, and the last result.
/// Switching units or resetting clears the fields and the result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BmiForm {
    unit: UnitSystem,
    height: String,
    weight: String,
    result: Option<BmiResult>,
}

impl BmiForm {
    /// Creates an empty form in [`UnitSystem::Metric`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn unit(&self) -> UnitSystem {
        self.unit
    }

    #[must_use]
    pub fn height(&self) -> &str {
        &self.height
    }

    #[must_use]
    pub fn weight(&self) -> &str {
        &self.weight
    }

    /// The last successful result, if it has not been cleared.
    #[must_use]
    pub fn result(&self) -> Option<&BmiResult> {
        self.result.as_ref()
    }

    /// Selects a unit system and clears the fields and the result.
    ///
    /// Entries are cleared even if the unit does not change.
    pub fn set_unit(&mut self, unit: UnitSystem) {
        self.unit = unit;
        self.reset();
    }

    pub fn set_height(&mut self, text: impl Into<String>) {
        self.height = text.into();
    }

    pub fn set_weight(&mut self, text: impl Into<String>) {
        self.weight = text.into();
    }

    /// Validates the fields, then computes and stores the result.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMeasurementInput`] if either field is invalid.
    /// The form is left unchanged in that case.
    pub fn calculate(&mut self) -> Result<&BmiResult, InvalidMeasurementInput> {
        let result = evaluate(self.unit, Some(&self.height), Some(&self.weight))?;
        Ok(&*self.result.insert(result))
    }

    /// Clears both fields and the result, keeping the unit system.
    pub fn reset(&mut self) {
        debug!(unit = ?self.unit, "resetting bmi form");
        self.height.clear();
        self.weight.clear();
        self.result = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::health::bmi::core::{BmiCategory, ColorTag, MeasurementField, Rejection};

    fn filled(unit: UnitSystem, height: &str, weight: &str) -> BmiForm {
        let mut form = BmiForm::new();
        form.set_unit(unit);
        form.set_height(height);
        form.set_weight(weight);
        form
    }

    #[test]
    fn starts_empty_in_metric() {
        let form = BmiForm::new();
        assert_eq!(form.unit(), UnitSystem::Metric);
        assert_eq!(form.height(), "");
        assert_eq!(form.weight(), "");
        assert!(form.result().is_none());
    }

    #[test]
    fn calculates_metric() {
        let mut form = filled(UnitSystem::Metric, "180", "72");
        let result = form.calculate().unwrap();
        assert_eq!(result.formatted(), "22.2");
        assert_eq!(result.category(), BmiCategory::Normal);
        assert_eq!(result.color(), ColorTag::Green);
        assert!(form.result().is_some());
    }

    #[test]
    fn calculates_imperial() {
        let mut form = filled(UnitSystem::Imperial, "5.5", "150");
        let result = form.calculate().unwrap();
        // 24.96 rounds to "25.0" for display but stays in the normal band.
        assert_eq!(result.formatted(), "25.0");
        assert_eq!(result.category(), BmiCategory::Normal);
    }

    #[test]
    fn failed_calculation_keeps_state() {
        let mut form = filled(UnitSystem::Metric, "180", "72");
        form.calculate().unwrap();
        let before = form.clone();

        form.set_weight("");
        let error = form.calculate().unwrap_err();
        assert_eq!(error.field, MeasurementField::Weight);
        assert_eq!(error.reason, Rejection::Empty);

        assert_eq!(form.result(), before.result());
        assert_eq!(form.height(), "180");
    }

    #[test]
    fn unit_switch_clears_entries() {
        let mut form = filled(UnitSystem::Metric, "180", "72");
        form.calculate().unwrap();

        form.set_unit(UnitSystem::Imperial);
        assert_eq!(form.unit(), UnitSystem::Imperial);
        assert_eq!(form.height(), "");
        assert_eq!(form.weight(), "");
        assert!(form.result().is_none());
    }

    #[test]
    fn reset_keeps_unit() {
        let mut form = filled(UnitSystem::Imperial, "6", "180");
        form.calculate().unwrap();

        form.reset();
        assert_eq!(form.unit(), UnitSystem::Imperial);
        assert_eq!(form.height(), "");
        assert!(form.result().is_none());
    }
}
