use dosage_schemas::cement::CementClass;

/// Coefficients of the strength law `x = A / (fc28 + B)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CementConstants {
    pub a: f64,
    pub b: f64,
}

pub fn constants_for(class: CementClass) -> CementConstants {
    match class {
        CementClass::Cp25 => CementConstants { a: 17.0, b: 9.0 },
        CementClass::Cp32 => CementConstants { a: 21.0, b: 11.0 },
        CementClass::Cp40 => CementConstants { a: 26.0, b: 14.0 },
    }
}
