//! Extensions to [`uom`] for body measurements.
//!
//! This crate uses [`uom`] for height and weight. This module provides the
//! pieces BMI work needs that [`uom`] doesn't include directly.
//!
//! ## Decimal feet-and-inches heights
//!
//! Imperial heights are entered as a single decimal number whose integer part
//! is feet and whose first fractional digit is inches, so `5.5` reads as
//! 5 ft 5 in rather than 5½ ft. [`decode_feet_inches`] turns such a number
//! into a [`Length`](uom::si::f64::Length):
//!
//! ```
//! use approx::assert_relative_eq;
//! use twine_bmi::support::units::decode_feet_inches;
//! use uom::si::length::inch;
//!
//! let height = decode_feet_inches(5.5);
//! assert_relative_eq!(height.get::<inch>(), 65.0, epsilon = 1e-9);
//! ```
//!
//! The encoding cannot express ten or eleven inches: `5.10` and `5.1` are the
//! same number and both decode to 5 ft 1 in.

mod body_mass_index;
mod feet_inches;

pub use body_mass_index::{BodyMassIndex, IMPERIAL_BMI_FACTOR};
pub use feet_inches::{decode_feet_inches, feet_inches_to_inches};
