use std::fmt;

use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Title of the alert a caller shows for [`InvalidMeasurementInput`].
pub const ALERT_TITLE: &str = "Invalid input!";

/// Message of the alert a caller shows for [`InvalidMeasurementInput`].
///
/// This is also the `Display` text of the error.
pub const ALERT_MESSAGE: &str = "Please enter valid height and weight";

/// The height or weight text could not be turned into a usable measurement.
///
/// This is the only error the engine produces. It is an expected outcome of
/// free-text entry: the caller shows an alert and asks for new values.
/// The offending field and the reason are kept for callers that want more
/// than the generic alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Please enter valid height and weight")]
pub struct InvalidMeasurementInput {
    /// Which field was rejected first.
    pub field: MeasurementField,

    /// Why the field was rejected.
    #[source]
    pub reason: Rejection,
}

impl InvalidMeasurementInput {
    pub(super) fn height(reason: impl Into<Rejection>) -> Self {
        Self {
            field: MeasurementField::Height,
            reason: reason.into(),
        }
    }

    pub(super) fn weight(reason: impl Into<Rejection>) -> Self {
        Self {
            field: MeasurementField::Weight,
            reason: reason.into(),
        }
    }
}

/// Identifies one of the two measurement inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasurementField {
    Height,
    Weight,
}

impl fmt::Display for MeasurementField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Height => f.write_str("height"),
            Self::Weight => f.write_str("weight"),
        }
    }
}

/// Reason a measurement field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("no value was provided")]
    Missing,
    #[error("value is empty")]
    Empty,
    #[error("value is not a decimal number")]
    NotANumber,
    #[error("value is not finite")]
    NotFinite,
    #[error(transparent)]
    Constraint(#[from] ConstraintError),
}
