//! Pluggable functions offered by the life stages.
//!
//! Only names, descriptions and parameters are declared here; evaluating a
//! function is the simulation's business.

pub mod development;
pub mod misc;
pub mod mortality;
pub mod movement;

pub use development::EggDevelopment;
pub use misc::ConstantFunction;
pub use mortality::{ConstantMortalityRate, TemperatureDependentMortalityRate};
pub use movement::{ConstantMovementRate, DielVerticalMigrationFixedDepths, EggAscensionRate};
