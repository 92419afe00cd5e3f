pub mod builder;
pub mod engine;
pub mod proportioning;
pub mod representations;
