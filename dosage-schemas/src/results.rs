use serde::{Deserialize, Serialize};

/// Cement, sand, gravel and water quantities. Masses in kg, water in L.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MaterialQuantities {
    pub cement: f64,
    pub sand_wet: f64,
    pub gravel: f64,
    pub water: f64,
}

impl MaterialQuantities {
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            cement: self.cement * factor,
            sand_wet: self.sand_wet * factor,
            gravel: self.gravel * factor,
            water: self.water * factor,
        }
    }
}

/// A unitary trace `1 : sand : gravel : water`, relative to cement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Trace {
    pub cement: f64,
    pub sand: f64,
    pub gravel: f64,
    pub water: f64,
}

/// Site quantities per 50 kg sack of cement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SackTrace {
    /// Sacks needed for the whole production volume.
    pub cement_sacks: f64,
    pub sand_volume_per_sack_l: f64,
    pub gravel_volume_per_sack_l: f64,
    pub water_volume_per_sack_l: f64,
    pub sand_cans_per_sack: f64,
    pub sand_cans_rounded: f64,
    pub gravel_cans_per_sack: f64,
    pub gravel_cans_rounded: f64,
}

/// Transport box dimensions in cm.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PadiolaSpecs {
    /// 1 or 2 trips per sack.
    pub count: u8,
    pub width_cm: f64,
    pub length_cm: f64,
    /// Height per trip before rounding.
    pub required_height_cm: f64,
    pub height_cm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padiolas {
    pub sand: PadiolaSpecs,
    pub gravel: PadiolaSpecs,
}

/// Candidate sand fractions of the total aggregate mass, one per criterion,
/// and the median that governs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProportioningBreakdown {
    pub dry_mortar_fraction: f64,
    pub fine_total_fraction: f64,
    pub real_mortar_fraction: f64,
    pub governing_fraction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DosageResults {
    pub fc28_mpa: f64,
    pub water_demand_l: f64,
    pub strength_wc_ratio: f64,
    pub durability_wc_ratio: f64,
    pub water_cement_ratio: f64,
    pub cement_content_kg: f64,

    pub total_aggregate_mass_kg: f64,
    pub proportioning: ProportioningBreakdown,
    pub sand_mass_dry_kg: f64,
    pub gravel_mass_dry_kg: f64,
    pub sand_mass_dry_corrected_kg: f64,
    pub gravel_mass_dry_corrected_kg: f64,
    pub sand_mass_wet_kg: f64,
    pub water_corrected_l: f64,

    pub per_m3: MaterialQuantities,
    pub total: MaterialQuantities,
    pub weight_trace: Trace,
    pub volume_trace: Trace,
    pub sack_trace: SackTrace,
    pub padiolas: Padiolas,
}
