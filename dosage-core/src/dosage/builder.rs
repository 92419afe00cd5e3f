use crate::{dosage::engine::DosageEngine, error::DosageError, validation::validate_inputs};
use dosage_schemas::{
    aggregate::AggregateData, cement::CementData, coefficients::ProportioningCoefficients,
    inputs::DosageInputs, project::ProjectData,
};

/// A fluent builder for constructing a `DosageEngine`.
///
/// Every input section must be supplied, either one by one or all at once
/// with [`DosageBuilder::with_inputs`]. Values are validated on `build`.
#[derive(Debug, Default)]
pub struct DosageBuilder {
    project: Option<ProjectData>,
    cement: Option<CementData>,
    aggregates: Option<AggregateData>,
    coefficients: Option<ProportioningCoefficients>,
}

impl DosageBuilder {
    /// Creates a new, empty `DosageBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets volume, target strength, site control, slump and exposure.
    pub fn with_project(mut self, project: ProjectData) -> Self {
        self.project = Some(project);
        self
    }

    /// Sets the cement class and its specific and unit masses.
    pub fn with_cement(mut self, cement: CementData) -> Self {
        self.cement = Some(cement);
        self
    }

    /// Sets the maximum aggregate size and the sand and gravel properties.
    pub fn with_aggregates(mut self, aggregates: AggregateData) -> Self {
        self.aggregates = Some(aggregates);
        self
    }

    /// Sets the three proportioning percentages.
    pub fn with_coefficients(mut self, coefficients: ProportioningCoefficients) -> Self {
        self.coefficients = Some(coefficients);
        self
    }

    /// Sets every section from a complete input record.
    pub fn with_inputs(self, inputs: DosageInputs) -> Self {
        self.with_project(inputs.project)
            .with_cement(inputs.cement)
            .with_aggregates(inputs.aggregates)
            .with_coefficients(inputs.coefficients)
    }

    /// Consumes the builder and returns a `DosageEngine` over valid inputs.
    ///
    /// # Errors
    ///
    /// Returns `DosageError::MissingSection` if a section was never set, or the
    /// first constraint violation reported by `validate_inputs`.
    pub fn build(self) -> Result<DosageEngine, DosageError> {
        let inputs = DosageInputs {
            project: self.project.ok_or(DosageError::MissingSection("project"))?,
            cement: self.cement.ok_or(DosageError::MissingSection("cement"))?,
            aggregates: self.aggregates.ok_or(DosageError::MissingSection("aggregates"))?,
            coefficients: self
                .coefficients
                .ok_or(DosageError::MissingSection("coefficients"))?,
        };

        validate_inputs(&inputs)?;
        Ok(DosageEngine { inputs })
    }
}
