use crate::inputs::DosageInputs;
use serde::{Deserialize, Serialize};

pub const CURRENT_SCHEMA_VERSION: &str = "1.0";

#[derive(Debug, Serialize, Deserialize)]
pub struct DosageRequestFile {
    pub schema_version: String,
    pub label: String,
    pub inputs: DosageInputs,
}

impl DosageRequestFile {
    pub fn new(label: &str, inputs: DosageInputs) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION.to_string(),
            label: label.to_string(),
            inputs,
        }
    }
}
