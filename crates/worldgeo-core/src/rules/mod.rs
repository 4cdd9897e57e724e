//! Write-time rules: blank-field normalization and referential integrity

pub mod normalize;
pub mod validation;
