use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SandData {
    pub specific_mass: f64,
    pub unit_mass: f64,
    /// Surface moisture, percent of dry mass.
    pub moisture_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GravelData {
    pub specific_mass: f64,
    pub unit_mass: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateData {
    pub max_size_mm: f64,
    pub sand: SandData,
    pub gravel: GravelData,
}

impl AggregateData {
    /// Arithmetic mean of the sand and gravel specific masses.
    pub fn mean_specific_mass(&self) -> f64 {
        (self.sand.specific_mass + self.gravel.specific_mass) / 2.0
    }
}

impl Default for AggregateData {
    fn default() -> Self {
        Self {
            max_size_mm: 19.0,
            sand: SandData {
                specific_mass: 2.63,
                unit_mass: 1.5,
                moisture_pct: 3.0,
            },
            gravel: GravelData {
                specific_mass: 2.65,
                unit_mass: 1.45,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_specific_mass_is_arithmetic_mean() {
        let aggregates = AggregateData::default();
        assert!((aggregates.mean_specific_mass() - 2.64).abs() < 1e-12);
    }
}
