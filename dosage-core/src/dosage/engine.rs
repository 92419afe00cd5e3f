use super::{
    proportioning::{sand_fractions, total_aggregate_mass},
    representations::{size_padiola, sack_trace, volume_trace, weight_trace},
};
use crate::{
    constants::STUDENT_COEFFICIENT,
    error::DosageError,
    logger::CalculationLogger,
    tables::{cement, durability, water},
};
use dosage_schemas::{
    inputs::DosageInputs,
    project::StandardDeviationControl,
    results::{DosageResults, MaterialQuantities, Padiolas},
};
use std::io;
use tracing::debug;

/// A validated set of inputs ready to be dosed. Holds no state between runs.
#[derive(Debug, Clone)]
pub struct DosageEngine {
    pub(super) inputs: DosageInputs,
}

impl DosageEngine {
    pub fn run(&self) -> DosageResults {
        compute(&self.inputs)
    }

    /// Runs the dosage and appends it to the calculation log under `label`.
    pub fn run_logged<W: io::Write>(
        &self,
        label: &str,
        logger: &mut CalculationLogger<W>,
    ) -> Result<DosageResults, DosageError> {
        let results = self.run();
        logger.log_dosage(label, &self.inputs, &results)?;
        Ok(results)
    }

    pub fn get_inputs(&self) -> &DosageInputs {
        &self.inputs
    }
}

/// Strength target, water demand and the water/cement ratio that governs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioResolution {
    pub fc28_mpa: f64,
    pub water_demand_l: f64,
    pub strength_ratio: f64,
    pub durability_ratio: f64,
    pub governing_ratio: f64,
    pub cement_content_kg: f64,
}

/// Mean 28-day strength: `fck + 1.65 × sd`.
pub fn target_strength(fck_mpa: f64, control: StandardDeviationControl) -> f64 {
    fck_mpa + STUDENT_COEFFICIENT * control.margin_mpa()
}

pub fn resolve_ratio(inputs: &DosageInputs) -> RatioResolution {
    let project = &inputs.project;
    let fc28_mpa = target_strength(project.fck_mpa, project.sd_control);
    let water_demand_l = water::lookup(project.slump_mm, inputs.aggregates.max_size_mm);

    let constants = cement::constants_for(inputs.cement.class);
    let strength_ratio = constants.a / (fc28_mpa + constants.b);
    let durability_ratio =
        durability::max_water_cement_ratio(project.structure_type, project.exposure);
    let governing_ratio = strength_ratio.min(durability_ratio);

    RatioResolution {
        fc28_mpa,
        water_demand_l,
        strength_ratio,
        durability_ratio,
        governing_ratio,
        cement_content_kg: water_demand_l / governing_ratio,
    }
}

/// Runs the full rational dosage for one m³ and scales it to the requested
/// volume. Pure: no validation, no I/O.
pub fn compute(inputs: &DosageInputs) -> DosageResults {
    let ratio = resolve_ratio(inputs);
    debug!(
        fc28 = ratio.fc28_mpa,
        water = ratio.water_demand_l,
        strength_ratio = ratio.strength_ratio,
        durability_ratio = ratio.durability_ratio,
        cement = ratio.cement_content_kg,
        "water/cement ratio resolved"
    );

    let aggregates = &inputs.aggregates;
    let mean_specific_mass = aggregates.mean_specific_mass();
    let total_aggregate_kg = total_aggregate_mass(
        ratio.cement_content_kg,
        inputs.cement.specific_mass,
        ratio.water_demand_l,
        mean_specific_mass,
    );

    let proportioning = sand_fractions(
        &inputs.coefficients,
        ratio.cement_content_kg,
        total_aggregate_kg,
        ratio.water_demand_l,
    );
    let sand_mass_dry_kg = total_aggregate_kg * proportioning.governing_fraction;
    let gravel_mass_dry_kg = total_aggregate_kg * (1.0 - proportioning.governing_fraction);
    debug!(
        total_aggregate = total_aggregate_kg,
        dry_mortar = proportioning.dry_mortar_fraction,
        fine_total = proportioning.fine_total_fraction,
        real_mortar = proportioning.real_mortar_fraction,
        governing = proportioning.governing_fraction,
        "aggregates proportioned"
    );

    // The volume balance used the blended density; give each aggregate its own back.
    let sand_mass_dry_corrected_kg =
        sand_mass_dry_kg * aggregates.sand.specific_mass / mean_specific_mass;
    let gravel_mass_dry_corrected_kg =
        gravel_mass_dry_kg * aggregates.gravel.specific_mass / mean_specific_mass;

    let sand_mass_wet_kg =
        sand_mass_dry_corrected_kg * (1.0 + aggregates.sand.moisture_pct / 100.0);
    let water_in_sand_l = sand_mass_wet_kg - sand_mass_dry_corrected_kg;
    let water_corrected_l = ratio.water_demand_l - water_in_sand_l;
    debug!(
        sand_wet = sand_mass_wet_kg,
        gravel = gravel_mass_dry_corrected_kg,
        water = water_corrected_l,
        "masses corrected"
    );

    let per_m3 = MaterialQuantities {
        cement: ratio.cement_content_kg,
        sand_wet: sand_mass_wet_kg,
        gravel: gravel_mass_dry_corrected_kg,
        water: water_corrected_l,
    };
    let total = per_m3.scaled(inputs.project.volume_total_m3);

    let weight_trace = weight_trace(&per_m3, sand_mass_dry_corrected_kg, ratio.governing_ratio);
    let volume_trace = volume_trace(inputs, &per_m3);
    let sack_trace = sack_trace(inputs.project.volume_total_m3, &per_m3, &volume_trace);
    let padiolas = Padiolas {
        sand: size_padiola(sack_trace.sand_volume_per_sack_l),
        gravel: size_padiola(sack_trace.gravel_volume_per_sack_l),
    };

    DosageResults {
        fc28_mpa: ratio.fc28_mpa,
        water_demand_l: ratio.water_demand_l,
        strength_wc_ratio: ratio.strength_ratio,
        durability_wc_ratio: ratio.durability_ratio,
        water_cement_ratio: ratio.governing_ratio,
        cement_content_kg: ratio.cement_content_kg,
        total_aggregate_mass_kg: total_aggregate_kg,
        proportioning,
        sand_mass_dry_kg,
        gravel_mass_dry_kg,
        sand_mass_dry_corrected_kg,
        gravel_mass_dry_corrected_kg,
        sand_mass_wet_kg,
        water_corrected_l,
        per_m3,
        total,
        weight_trace,
        volume_trace,
        sack_trace,
        padiolas,
    }
}
