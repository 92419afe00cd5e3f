use serde::{Deserialize, Serialize};

/// The three empirical proportioning criteria, as percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProportioningCoefficients {
    /// Dry-mortar content (usual 45-55 %).
    pub dry_mortar_pct: f64,
    /// Fine aggregate over total aggregate (usual 34-42 %).
    pub fine_total_pct: f64,
    /// Real-mortar content (usual 55-60 %).
    pub real_mortar_pct: f64,
}

impl Default for ProportioningCoefficients {
    fn default() -> Self {
        Self {
            dry_mortar_pct: 50.0,
            fine_total_pct: 40.0,
            real_mortar_pct: 60.0,
        }
    }
}
