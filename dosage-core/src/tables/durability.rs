use dosage_schemas::project::{ExposureCondition, StructureType};

/// Maximum water/cement ratio allowed for durability.
pub fn max_water_cement_ratio(structure: StructureType, exposure: ExposureCondition) -> f64 {
    match (structure, exposure) {
        (StructureType::Thin, ExposureCondition::Ordinary) => 0.45,
        (StructureType::Thin, ExposureCondition::Aggressive) => 0.40,
        (StructureType::Ordinary, ExposureCondition::Ordinary) => 0.50,
        (StructureType::Ordinary, ExposureCondition::Aggressive) => 0.45,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thin_and_aggressive_is_the_strictest() {
        let strictest = max_water_cement_ratio(StructureType::Thin, ExposureCondition::Aggressive);
        for structure in [StructureType::Ordinary, StructureType::Thin] {
            for exposure in [ExposureCondition::Ordinary, ExposureCondition::Aggressive] {
                assert!(max_water_cement_ratio(structure, exposure) >= strictest);
            }
        }
        assert_eq!(
            max_water_cement_ratio(StructureType::Ordinary, ExposureCondition::Ordinary),
            0.50
        );
    }
}
