//! Arrowtooth flounder egg stage: per-individual attributes and the stage
//! parameters shared by every egg.

pub mod attributes;
pub mod parameters;

pub use attributes::EggStageAttributes;
pub use parameters::EggStageParameters;
