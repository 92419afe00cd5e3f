use serde::{Deserialize, Serialize};

/// Quality-control tier of the production site. Each tier carries a fixed
/// standard deviation (MPa) used to lift fck to the target mean strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandardDeviationControl {
    Rigorous,
    Reasonable,
    Regular,
}

impl StandardDeviationControl {
    pub fn margin_mpa(self) -> f64 {
        match self {
            Self::Rigorous => 4.0,
            Self::Reasonable => 5.5,
            Self::Regular => 7.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExposureCondition {
    Ordinary,
    Aggressive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureType {
    Ordinary,
    Thin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectData {
    pub volume_total_m3: f64,
    pub fck_mpa: f64,
    pub sd_control: StandardDeviationControl,
    pub slump_mm: f64,
    pub exposure: ExposureCondition,
    pub structure_type: StructureType,
}

impl Default for ProjectData {
    fn default() -> Self {
        Self {
            volume_total_m3: 10.0,
            fck_mpa: 25.0,
            sd_control: StandardDeviationControl::Reasonable,
            slump_mm: 60.0,
            exposure: ExposureCondition::Ordinary,
            structure_type: StructureType::Ordinary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sd_control_margins() {
        assert_eq!(StandardDeviationControl::Rigorous.margin_mpa(), 4.0);
        assert_eq!(StandardDeviationControl::Reasonable.margin_mpa(), 5.5);
        assert_eq!(StandardDeviationControl::Regular.margin_mpa(), 7.0);
    }

    #[test]
    fn project_enums_use_snake_case_names() {
        let project: ProjectData = serde_json::from_str(
            r#"{
                "volume_total_m3": 2.5,
                "fck_mpa": 30.0,
                "sd_control": "rigorous",
                "slump_mm": 80.0,
                "exposure": "aggressive",
                "structure_type": "thin"
            }"#,
        )
        .unwrap();
        assert_eq!(project.sd_control, StandardDeviationControl::Rigorous);
        assert_eq!(project.exposure, ExposureCondition::Aggressive);
        assert_eq!(project.structure_type, StructureType::Thin);
    }
}
