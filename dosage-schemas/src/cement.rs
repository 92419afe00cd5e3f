use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CementClass {
    #[serde(rename = "CP-25", alias = "cp25")]
    Cp25,
    #[serde(rename = "CP-32", alias = "cp32")]
    Cp32,
    #[serde(rename = "CP-40", alias = "cp40")]
    Cp40,
}

impl CementClass {
    pub fn label(self) -> &'static str {
        match self {
            Self::Cp25 => "CP-25",
            Self::Cp32 => "CP-32",
            Self::Cp40 => "CP-40",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CementData {
    pub class: CementClass,
    /// kg per liter of solid volume.
    pub specific_mass: f64,
    /// kg per liter of loose volume.
    pub unit_mass: f64,
}

impl Default for CementData {
    fn default() -> Self {
        Self {
            class: CementClass::Cp32,
            specific_mass: 3.1,
            unit_mass: 1.4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cement_class_accepts_label_and_alias() {
        let labelled: CementClass = serde_json::from_str("\"CP-40\"").unwrap();
        let aliased: CementClass = serde_json::from_str("\"cp25\"").unwrap();
        assert_eq!(labelled, CementClass::Cp40);
        assert_eq!(aliased, CementClass::Cp25);
        assert_eq!(serde_json::to_string(&CementClass::Cp32).unwrap(), "\"CP-32\"");
        assert_eq!(CementClass::Cp32.label(), "CP-32");
    }
}
