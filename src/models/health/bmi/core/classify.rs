use std::fmt;

use tracing::trace;

use super::BmiValue;

/// Lower bound of [`BmiCategory::Normal`].
pub const NORMAL_MIN: f64 = 18.5;

/// Lower bound of [`BmiCategory::Overweight`].
pub const OVERWEIGHT_MIN: f64 = 25.0;

/// Lower bound of [`BmiCategory::Obese`].
pub const OBESE_MIN: f64 = 30.0;

/// BMI classification bands, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BmiCategory {
    /// `bmi < 18.5`
    Underweight,
    /// `18.5 ≤ bmi < 25`
    Normal,
    /// `25 ≤ bmi < 30`
    Overweight,
    /// `bmi ≥ 30`
    Obese,
}

impl BmiCategory {
    /// Returns the band a BMI falls into.
    ///
    /// Bands are closed below and open above, so a value exactly on a
    /// threshold belongs to the higher band.
    #[must_use]
    pub fn from_bmi(bmi: BmiValue) -> Self {
        let value = bmi.value();
        if value < NORMAL_MIN {
            Self::Underweight
        } else if value < OVERWEIGHT_MIN {
            Self::Normal
        } else if value < OBESE_MIN {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal Weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// Advisory text shown under the result.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Underweight => {
                "You may need to gain weight. Ask your doctor if this is a healthy weight for you."
            }
            Self::Normal => {
                "You have a healthy weight! Try not to gain or lose weight. \
                 Eat healthy and be physically active."
            }
            Self::Overweight => {
                "You may need to lose weight. Talk to your doctor or dietitian about \
                 your health risks and if you need to lose weight."
            }
            Self::Obese => {
                "You need to lose weight. Talk to your doctor or dietitian about \
                 safe and effective ways to lose weight and keep it off."
            }
        }
    }

    /// Color the result is rendered in.
    #[must_use]
    pub fn color(self) -> ColorTag {
        match self {
            Self::Underweight => ColorTag::Blue,
            Self::Normal => ColorTag::Green,
            Self::Overweight => ColorTag::Orange,
            Self::Obese => ColorTag::Red,
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Semantic color of a category; rendering is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTag {
    Blue,
    Green,
    Orange,
    Red,
}

impl ColorTag {
    /// Lowercase color name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Red => "red",
        }
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a caller needs to display a classified BMI.
#[derive(Debug, Clone, PartialEq)]
pub struct BmiResult {
    value: BmiValue,
    formatted: String,
    category: BmiCategory,
}

impl BmiResult {
    /// The unrounded BMI.
    #[must_use]
    pub fn value(&self) -> BmiValue {
        self.value
    }

    /// The BMI with exactly one decimal place, e.g. `"22.2"`.
    #[must_use]
    pub fn formatted(&self) -> &str {
        &self.formatted
    }

    #[must_use]
    pub fn category(&self) -> BmiCategory {
        self.category
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        self.category.label()
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        self.category.description()
    }

    #[must_use]
    pub fn color(&self) -> ColorTag {
        self.category.color()
    }
}

/// Classifies a BMI and prepares its display text.
///
/// # Examples
///
/// ```
/// use twine_bmi::models::health::bmi::{BmiCategory, BmiValue, ColorTag, classify};
///
/// let result = classify(BmiValue::new(22.22).unwrap());
/// assert_eq!(result.formatted(), "22.2");
/// assert_eq!(result.category(), BmiCategory::Normal);
/// assert_eq!(result.label(), "Normal Weight");
/// assert_eq!(result.color(), ColorTag::Green);
/// ```
#[must_use]
pub fn classify(bmi: BmiValue) -> BmiResult {
    let category = BmiCategory::from_bmi(bmi);
    trace!(bmi = bmi.value(), %category, "classified bmi");
    BmiResult {
        value: bmi,
        formatted: format!("{:.1}", bmi.value()),
        category,
    }
}
