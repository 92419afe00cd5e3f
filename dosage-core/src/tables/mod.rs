//! Static lookup tables of the rational dosage method.
//!
//! Cement constants and durability limits are total over closed enums, so
//! they are plain `match`es. The water table is a fixed 11×4 matrix resolved
//! by nearest match on each axis.

pub mod cement;
pub mod durability;
pub mod water;
