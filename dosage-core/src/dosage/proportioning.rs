//! Aggregate mass balance and the median-of-three sand proportioning.

use crate::constants::LITERS_PER_M3;
use dosage_schemas::{
    coefficients::ProportioningCoefficients, results::ProportioningBreakdown,
};

/// Total dry aggregate mass per m³ from the absolute-volume balance:
/// `(1000 - cement/γc - water) × γm`. Entrained air is ignored.
pub fn total_aggregate_mass(
    cement_kg: f64,
    cement_specific_mass: f64,
    water_l: f64,
    mean_specific_mass: f64,
) -> f64 {
    (LITERS_PER_M3 - cement_kg / cement_specific_mass - water_l) * mean_specific_mass
}

/// Middle value of three, independent of argument order.
pub fn median_of_three(a: f64, b: f64, c: f64) -> f64 {
    let mut values = [a, b, c];
    values.sort_by(|x, y| x.total_cmp(y));
    values[1]
}

/// Candidate sand fractions of the total aggregate mass `m`.
///
/// * dry mortar: `(αs (c + M) - c) / M`
/// * fine/total: `αm`
/// * real mortar: `1 - (1 - αr)(c + M + a) / M`
pub fn sand_fractions(
    coefficients: &ProportioningCoefficients,
    cement_kg: f64,
    total_aggregate_kg: f64,
    water_l: f64,
) -> ProportioningBreakdown {
    let alpha_s = coefficients.dry_mortar_pct / 100.0;
    let alpha_m = coefficients.fine_total_pct / 100.0;
    let alpha_r = coefficients.real_mortar_pct / 100.0;

    let dry_mortar_fraction =
        (alpha_s * (cement_kg + total_aggregate_kg) - cement_kg) / total_aggregate_kg;

    let fine_total_fraction = alpha_m;

    let concrete_mass = cement_kg + total_aggregate_kg + water_l;
    let gravel_mass = (1.0 - alpha_r) * concrete_mass;
    let real_mortar_fraction = (total_aggregate_kg - gravel_mass) / total_aggregate_kg;

    ProportioningBreakdown {
        dry_mortar_fraction,
        fine_total_fraction,
        real_mortar_fraction,
        governing_fraction: median_of_three(
            dry_mortar_fraction,
            fine_total_fraction,
            real_mortar_fraction,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_ignores_argument_order() {
        let (low, mid, high) = (0.31, 0.40, 0.47);
        for (a, b, c) in [
            (low, mid, high),
            (low, high, mid),
            (mid, low, high),
            (mid, high, low),
            (high, low, mid),
            (high, mid, low),
        ] {
            assert_eq!(median_of_three(a, b, c), mid);
        }
    }

    #[test]
    fn median_with_duplicates() {
        assert_eq!(median_of_three(0.5, 0.2, 0.5), 0.5);
        assert_eq!(median_of_three(0.2, 0.2, 0.9), 0.2);
    }

    #[test]
    fn each_criterion_can_govern() {
        let cement = 400.0;
        let aggregate = 1800.0;
        let water = 190.0;

        // Dry-mortar criterion lands in the middle.
        let coefficients = ProportioningCoefficients {
            dry_mortar_pct: 52.0,
            fine_total_pct: 30.0,
            real_mortar_pct: 65.0,
        };
        let breakdown = sand_fractions(&coefficients, cement, aggregate, water);
        assert!(breakdown.fine_total_fraction < breakdown.dry_mortar_fraction);
        assert!(breakdown.dry_mortar_fraction < breakdown.real_mortar_fraction);
        assert_eq!(breakdown.governing_fraction, breakdown.dry_mortar_fraction);

        // Real-mortar criterion lands in the middle.
        let coefficients = ProportioningCoefficients {
            dry_mortar_pct: 45.0,
            fine_total_pct: 60.0,
            real_mortar_pct: 60.0,
        };
        let breakdown = sand_fractions(&coefficients, cement, aggregate, water);
        assert_eq!(breakdown.governing_fraction, breakdown.real_mortar_fraction);
    }

    #[test]
    fn real_mortar_fraction_matches_gravel_balance() {
        let coefficients = ProportioningCoefficients::default();
        let breakdown = sand_fractions(&coefficients, 400.0, 1800.0, 190.0);
        // Gravel = 0.4 × 2390 = 956, sand = 844.
        assert!((breakdown.real_mortar_fraction - 844.0 / 1800.0).abs() < 1e-12);
    }

    #[test]
    fn aggregate_balance_uses_absolute_volumes() {
        // 1000 - 310/3.1 - 200 = 700 L of aggregate at 2.6 kg/L.
        let mass = total_aggregate_mass(310.0, 3.1, 200.0, 2.6);
        assert!((mass - 1820.0).abs() < 1e-9);
    }
}
