//! Fixed physical and site-handling constants of the rational dosage method.

/// Student coefficient for a 5 % characteristic quantile.
pub const STUDENT_COEFFICIENT: f64 = 1.65;

/// Liters in one cubic meter of concrete.
pub const LITERS_PER_M3: f64 = 1000.0;

/// Water demand used when the table cannot resolve a cell.
pub const WATER_FALLBACK_L: f64 = 200.0;

pub const CEMENT_SACK_WEIGHT_KG: f64 = 50.0;
/// Reference loose volume of a 50 kg sack.
pub const CEMENT_SACK_VOLUME_L: f64 = 35.0;
/// Standard 18 L construction can.
pub const CAN_VOLUME_L: f64 = 18.0;

pub const PADIOLA_WIDTH_CM: f64 = 35.0;
pub const PADIOLA_LENGTH_CM: f64 = 45.0;
/// Above this height a padiola load is split into two trips.
pub const PADIOLA_MAX_HEIGHT_CM: f64 = 30.0;
pub const CM3_PER_LITER: f64 = 1000.0;
