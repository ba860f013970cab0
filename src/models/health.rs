//! Health and body-composition models.

pub mod bmi;
