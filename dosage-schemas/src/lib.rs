pub mod aggregate;
pub mod cement;
pub mod coefficients;
pub mod file_formats;
pub mod inputs;
pub mod project;
pub mod results;
