//! # Twine BMI
//!
//! Unit-aware Body Mass Index computation and classification, packaged as a
//! [Twine](https://github.com/isentropic-dev/twine) model.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//!   The BMI engine lives in [`models::health::bmi`].
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events at `debug` and `trace` level and never
//! installs a subscriber; that is left to the application.

pub mod models;
pub mod support;
