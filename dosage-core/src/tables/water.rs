use crate::constants::WATER_FALLBACK_L;

/// Slump rows, mm, ascending.
pub const SLUMP_ROWS_MM: [f64; 11] = [
    10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 80.0, 100.0, 120.0, 150.0, 180.0,
];

/// Maximum aggregate size columns, mm, ascending.
pub const MAX_SIZE_COLUMNS_MM: [f64; 4] = [9.5, 19.0, 25.0, 38.0];

/// Water demand in liters per m³ of concrete.
const WATER_DEMAND_L: [[f64; 4]; 11] = [
    [183.0, 162.0, 154.0, 143.0],
    [196.0, 173.0, 165.0, 153.0],
    [204.0, 180.0, 172.0, 159.0],
    [210.0, 186.0, 177.0, 164.0],
    [215.0, 190.0, 181.0, 167.0],
    [219.0, 193.0, 184.0, 171.0],
    [225.0, 199.0, 189.0, 176.0],
    [230.0, 203.0, 194.0, 180.0],
    [235.0, 207.0, 197.0, 183.0],
    [240.0, 212.0, 202.0, 187.0],
    [244.0, 216.0, 205.0, 190.0],
];

/// Index of the entry closest to `query`.
///
/// Equidistant entries resolve to the earlier one, which for an ascending
/// axis is the lower value. Returns `None` for a non-finite query.
pub fn nearest_index(axis: &[f64], query: f64) -> Option<usize> {
    if !query.is_finite() {
        return None;
    }

    let mut best: Option<(usize, f64)> = None;
    for (index, value) in axis.iter().enumerate() {
        let distance = (value - query).abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}

/// Resolves the table cell for a slump and max aggregate size, if any.
pub fn cell(slump_mm: f64, max_size_mm: f64) -> Option<f64> {
    let row = nearest_index(&SLUMP_ROWS_MM, slump_mm)?;
    let column = nearest_index(&MAX_SIZE_COLUMNS_MM, max_size_mm)?;
    WATER_DEMAND_L
        .get(row)
        .and_then(|cells| cells.get(column))
        .copied()
}

/// Water demand (L/m³). Never fails: an unresolvable cell yields
/// [`WATER_FALLBACK_L`].
pub fn lookup(slump_mm: f64, max_size_mm: f64) -> f64 {
    cell(slump_mm, max_size_mm).unwrap_or(WATER_FALLBACK_L)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_cells() {
        assert_eq!(lookup(60.0, 19.0), 193.0);
        assert_eq!(lookup(10.0, 9.5), 183.0);
        assert_eq!(lookup(180.0, 38.0), 190.0);
        assert_eq!(lookup(60.0, 38.0), 171.0);
    }

    #[test]
    fn nearest_row_and_column_are_chosen_independently() {
        // 95 is nearest to 100, 36 nearest to 38.
        assert_eq!(lookup(95.0, 36.0), 180.0);
        // 30 mm is nearer to 25 than to 38.
        assert_eq!(lookup(65.0, 30.0), lookup(60.0, 25.0));
        assert_eq!(lookup(65.0, 30.0), 184.0);
    }

    #[test]
    fn ties_resolve_to_the_lower_entry() {
        // 70 sits between 60 and 80, 22 between 19 and 25.
        assert_eq!(nearest_index(&SLUMP_ROWS_MM, 70.0), Some(5));
        assert_eq!(nearest_index(&MAX_SIZE_COLUMNS_MM, 22.0), Some(1));
        assert_eq!(lookup(70.0, 22.0), 193.0);
    }

    #[test]
    fn queries_outside_the_table_clamp_to_the_edges() {
        assert_eq!(lookup(0.0, 1.0), 183.0);
        assert_eq!(lookup(500.0, 100.0), 190.0);
    }

    #[test]
    fn non_finite_queries_fall_back() {
        assert_eq!(cell(f64::NAN, 19.0), None);
        assert_eq!(lookup(f64::NAN, 19.0), WATER_FALLBACK_L);
        assert_eq!(lookup(60.0, f64::INFINITY), WATER_FALLBACK_L);
    }
}
