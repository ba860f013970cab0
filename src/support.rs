//! Supporting utilities used by models.
//!
//! - [`constraint`]: Type-level numeric constraints.
//! - [`units`]: Extensions to [`uom`] for body measurements.

pub mod constraint;
pub mod units;
