//! Boundary checks applied before the engine runs.
//!
//! The engine trusts its input and lets degenerate values propagate as
//! NaN/∞. Callers that want a hard failure instead compose
//! [`validate_inputs`] before [`crate::dosage::engine::compute`].

use crate::error::DosageError;
use dosage_schemas::inputs::DosageInputs;

fn finite(field: &'static str, value: f64) -> Result<f64, DosageError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DosageError::NonFinite { field, value })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), DosageError> {
    if finite(field, value)? > 0.0 {
        Ok(())
    } else {
        Err(DosageError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), DosageError> {
    if finite(field, value)? >= 0.0 {
        Ok(())
    } else {
        Err(DosageError::Negative { field, value })
    }
}

fn percentage(field: &'static str, value: f64) -> Result<(), DosageError> {
    if (0.0..=100.0).contains(&finite(field, value)?) {
        Ok(())
    } else {
        Err(DosageError::CoefficientOutOfRange { field, value })
    }
}

/// Returns the first violated constraint, walking project, cement,
/// aggregates and coefficients in that order.
pub fn validate_inputs(inputs: &DosageInputs) -> Result<(), DosageError> {
    let project = &inputs.project;
    positive("project.volume_total_m3", project.volume_total_m3)?;
    positive("project.fck_mpa", project.fck_mpa)?;
    positive("project.slump_mm", project.slump_mm)?;

    let cement = &inputs.cement;
    positive("cement.specific_mass", cement.specific_mass)?;
    positive("cement.unit_mass", cement.unit_mass)?;

    let aggregates = &inputs.aggregates;
    positive("aggregates.max_size_mm", aggregates.max_size_mm)?;
    positive("aggregates.sand.specific_mass", aggregates.sand.specific_mass)?;
    positive("aggregates.sand.unit_mass", aggregates.sand.unit_mass)?;
    non_negative("aggregates.sand.moisture_pct", aggregates.sand.moisture_pct)?;
    positive("aggregates.gravel.specific_mass", aggregates.gravel.specific_mass)?;
    positive("aggregates.gravel.unit_mass", aggregates.gravel.unit_mass)?;

    let coefficients = &inputs.coefficients;
    percentage("coefficients.dry_mortar_pct", coefficients.dry_mortar_pct)?;
    percentage("coefficients.fine_total_pct", coefficients.fine_total_pct)?;
    percentage("coefficients.real_mortar_pct", coefficients.real_mortar_pct)?;

    Ok(())
}
