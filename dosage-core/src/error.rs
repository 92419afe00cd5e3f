use thiserror::Error;

#[derive(Debug, Error)]
pub enum DosageError {
    #[error("Field '{field}' must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("Field '{field}' must be greater than zero, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("Field '{field}' must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("Coefficient '{field}' must lie within 0..=100 %, got {value}")]
    CoefficientOutOfRange { field: &'static str, value: f64 },

    #[error("Input section '{0}' is missing")]
    MissingSection(&'static str),

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to process CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),

    #[error("Failed to serialize JSON: {0}")]
    JsonParsing(#[from] serde_json::Error),
}
