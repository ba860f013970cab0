use uom::si::{
    f64::{Length, Mass},
    length::centimeter,
    mass::{kilogram, pound},
};

use crate::support::units::decode_feet_inches;

/// Unit system used to interpret a height and weight pair.
///
/// Every engine call takes the unit system explicitly; nothing in the engine
/// remembers a selected mode between calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UnitSystem {
    /// Height in centimeters, weight in kilograms.
    #[default]
    Metric,

    /// Height in decimal `feet.inches`, weight in pounds.
    ///
    /// See [`decode_feet_inches`] for how heights are read.
    Imperial,
}

impl UnitSystem {
    /// Interprets a numeric height entry as a [`Length`].
    #[must_use]
    pub fn height(self, value: f64) -> Length {
        match self {
            Self::Metric => Length::new::<centimeter>(value),
            Self::Imperial => decode_feet_inches(value),
        }
    }

    /// Interprets a numeric weight entry as a [`Mass`].
    #[must_use]
    pub fn weight(self, value: f64) -> Mass {
        match self {
            Self::Metric => Mass::new::<kilogram>(value),
            Self::Imperial => Mass::new::<pound>(value),
        }
    }

    /// Prompt shown above the height field.
    #[must_use]
    pub fn height_prompt(self) -> &'static str {
        match self {
            Self::Metric => "Height (in centimeters):",
            Self::Imperial => "Height (in feet):",
        }
    }

    /// Abbreviation shown next to the height field.
    #[must_use]
    pub fn height_unit(self) -> &'static str {
        match self {
            Self::Metric => "CM",
            Self::Imperial => "FT",
        }
    }

    /// Prompt shown above the weight field.
    #[must_use]
    pub fn weight_prompt(self) -> &'static str {
        match self {
            Self::Metric => "Weight (in kilograms):",
            Self::Imperial => "Weight (in pounds):",
        }
    }

    /// Abbreviation shown next to the weight field.
    #[must_use]
    pub fn weight_unit(self) -> &'static str {
        match self {
            Self::Metric => "KG",
            Self::Imperial => "LB",
        }
    }
}
