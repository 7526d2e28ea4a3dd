// src/analysis/mod.rs
pub mod entropy;
pub mod strength;

pub use entropy::CharacterComposition;
pub use strength::{analyze_password, StrengthEstimator, StrengthLabel, ZxcvbnEstimator};
