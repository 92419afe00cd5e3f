//! Rational concrete dosage.
//!
//! `tables` holds the static method data, `validation` the boundary checks,
//! and `dosage` the builder and the pure calculation engine.

pub mod constants;
pub mod dosage;
pub mod error;
pub mod logger;
pub mod tables;
pub mod validation;

pub use dosage::{builder::DosageBuilder, engine::compute, engine::DosageEngine};
pub use error::DosageError;
pub use validation::validate_inputs;
