use uom::si::f64::ArealMassDensity;

/// Body mass index, kg/m² in SI.
///
/// Mass divided by the square of height has the dimensions of an areal mass
/// density, so metric BMI falls out of `Mass / (Length * Length)` directly.
pub type BodyMassIndex = ArealMassDensity;

/// Scale factor of the conventional imperial BMI formula, `lb / in² × 703`.
///
/// This is the rounded factor in everyday use, not the exact conversion
/// (≈ 703.07), so imperial and metric results differ slightly for the same
/// body.
pub const IMPERIAL_BMI_FACTOR: f64 = 703.0;
