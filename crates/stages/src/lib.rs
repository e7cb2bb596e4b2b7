//! Arrowtooth flounder life stages for the individual-based model.
//!
//! Every stage is a declaration over [`ibm_records`]: a parent, the fields it
//! adds and, for parameter types, the function categories it offers.
//!
//! ```
//! use ibm_stages::EggStageAttributes;
//!
//! let egg = EggStageAttributes::new("Egg");
//! let header = egg.csv_header(",", true);
//! assert!(header.ends_with("attached,devStage,diameter,density,temperature,salinity,rho"));
//! assert_eq!(egg.in_situ_density(), Ok(-1.0));
//! ```

pub mod base;
pub mod config;
pub mod egg;
pub mod functions;
pub mod juvenile;
pub mod larva;

pub use base::{ArrowtoothBase, LifeStageBase};
pub use config::{CategoryConfig, ConfigError, ConfigValue, EntryError, ParameterConfig};
pub use egg::{EggStageAttributes, EggStageParameters};
pub use juvenile::BenthicJuvenileStageAttributes;
pub use larva::LarvaStageAttributes;
