use uom::si::{f64::Length, length::inch};

/// Inches per foot.
const INCHES_PER_FOOT: f64 = 12.0;

/// Decodes a `feet.inches` decimal height into a number of inches.
///
/// The integer part is feet and the fractional part times ten is inches:
/// `feet = floor(h)`, `inches = (h - feet) * 10`.
/// Inputs are expected to be finite and strictly positive, which keeps the
/// result strictly positive as well.
#[must_use]
pub fn feet_inches_to_inches(height: f64) -> f64 {
    let feet = height.floor();
    let inches = (height - feet) * 10.0;
    feet * INCHES_PER_FOOT + inches
}

/// Decodes a `feet.inches` decimal height into a [`Length`].
///
/// See [`feet_inches_to_inches`] for the encoding.
#[must_use]
pub fn decode_feet_inches(height: f64) -> Length {
    Length::new::<inch>(feet_inches_to_inches(height))
}
