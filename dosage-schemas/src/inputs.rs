use crate::{
    aggregate::AggregateData, cement::CementData, coefficients::ProportioningCoefficients,
    project::ProjectData,
};
use serde::{Deserialize, Serialize};

/// Everything one dosage calculation needs. `Default` yields the usual
/// starting point of a site mix: 10 m³ of 25 MPa concrete with CP-32.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DosageInputs {
    pub project: ProjectData,
    pub cement: CementData,
    pub aggregates: AggregateData,
    pub coefficients: ProportioningCoefficients,
}
