//! Site representations of a dosage: unitary traces, per-sack quantities,
//! can counts and padiola sizing.

use crate::constants::{
    CAN_VOLUME_L, CEMENT_SACK_VOLUME_L, CEMENT_SACK_WEIGHT_KG, CM3_PER_LITER, PADIOLA_LENGTH_CM,
    PADIOLA_MAX_HEIGHT_CM, PADIOLA_WIDTH_CM,
};
use dosage_schemas::{
    inputs::DosageInputs,
    results::{MaterialQuantities, PadiolaSpecs, SackTrace, Trace},
};

/// Rounds to the nearest 0.5; halves round away from zero.
pub fn round_to_half(value: f64) -> f64 {
    (value * 2.0).round() / 2.0
}

/// Rounds up to the next 0.5.
pub fn ceil_to_half(value: f64) -> f64 {
    (value * 2.0).ceil() / 2.0
}

/// Dry-mass trace `1 : m1 : m2 : x`.
pub fn weight_trace(per_m3: &MaterialQuantities, sand_dry_kg: f64, water_cement_ratio: f64) -> Trace {
    Trace {
        cement: 1.0,
        sand: sand_dry_kg / per_m3.cement,
        gravel: per_m3.gravel / per_m3.cement,
        water: water_cement_ratio,
    }
}

/// Loose-volume trace `1 : n1 : n2 : na`. Each solid is converted with its
/// own unit mass; water counts as 1 kg/L.
pub fn volume_trace(inputs: &DosageInputs, per_m3: &MaterialQuantities) -> Trace {
    let cement_volume = per_m3.cement / inputs.cement.unit_mass;
    let sand_volume = per_m3.sand_wet / inputs.aggregates.sand.unit_mass;
    let gravel_volume = per_m3.gravel / inputs.aggregates.gravel.unit_mass;

    Trace {
        cement: 1.0,
        sand: sand_volume / cement_volume,
        gravel: gravel_volume / cement_volume,
        water: per_m3.water / cement_volume,
    }
}

pub fn sack_trace(volume_total_m3: f64, per_m3: &MaterialQuantities, volume_trace: &Trace) -> SackTrace {
    let sand_volume = volume_trace.sand * CEMENT_SACK_VOLUME_L;
    let gravel_volume = volume_trace.gravel * CEMENT_SACK_VOLUME_L;
    let sand_cans = sand_volume / CAN_VOLUME_L;
    let gravel_cans = gravel_volume / CAN_VOLUME_L;

    SackTrace {
        cement_sacks: volume_total_m3 * per_m3.cement / CEMENT_SACK_WEIGHT_KG,
        sand_volume_per_sack_l: sand_volume,
        gravel_volume_per_sack_l: gravel_volume,
        water_volume_per_sack_l: per_m3.water / per_m3.cement * CEMENT_SACK_WEIGHT_KG,
        sand_cans_per_sack: sand_cans,
        sand_cans_rounded: round_to_half(sand_cans),
        gravel_cans_per_sack: gravel_cans,
        gravel_cans_rounded: round_to_half(gravel_cans),
    }
}

/// Sizes the box that carries one sack's worth of aggregate on a fixed
/// 35 × 45 cm base. Loads taller than 30 cm are split into as many equal
/// trips as keep each one at or under 30 cm.
pub fn size_padiola(volume_per_sack_l: f64) -> PadiolaSpecs {
    let full_height = volume_per_sack_l * CM3_PER_LITER / (PADIOLA_WIDTH_CM * PADIOLA_LENGTH_CM);
    // Non-finite heights saturate the cast to 0 and fall back to one trip.
    let count = ((full_height / PADIOLA_MAX_HEIGHT_CM).ceil() as u8).max(1);
    let required_height_cm = full_height / f64::from(count);

    PadiolaSpecs {
        count,
        width_cm: PADIOLA_WIDTH_CM,
        length_cm: PADIOLA_LENGTH_CM,
        required_height_cm,
        height_cm: ceil_to_half(required_height_cm),
    }
}
