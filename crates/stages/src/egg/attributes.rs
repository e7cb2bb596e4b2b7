use std::sync::Arc;

use ibm_records::{FieldDef, Record, RecordError, RecordType, Schema, SchemaBuildError, TypedKey, try_schema_of};

use crate::base::{LifeStageBase, PROP_ATTACHED, PROP_SALINITY, PROP_TEMPERATURE};

pub const PROP_DEV_STAGE: &str = "egg development stage";
pub const PROP_DIAMETER: &str = "egg diameter";
pub const PROP_DENSITY: &str = "egg density";
pub const PROP_RHO: &str = "in situ density";

pub const DEV_STAGE: TypedKey<f64> = TypedKey::new(PROP_DEV_STAGE);
pub const DIAMETER: TypedKey<f64> = TypedKey::new(PROP_DIAMETER);
pub const DENSITY: TypedKey<f64> = TypedKey::new(PROP_DENSITY);
pub const RHO: TypedKey<f64> = TypedKey::new(PROP_RHO);

/// Attributes of an arrowtooth flounder egg.
///
/// Extends the generic life-history block directly (eggs do not carry the
/// size/weight block larvae and juveniles share).
#[derive(Debug, Clone, PartialEq)]
pub struct EggStageAttributes(Record);

impl RecordType for EggStageAttributes {
	const TYPE_ID: &'static str = "ibm-stages::EggStageAttributes";
	const FIELDS: &'static [FieldDef] = &[
		FieldDef::boolean(PROP_ATTACHED, PROP_ATTACHED, "attached", true),
		FieldDef::number(PROP_DEV_STAGE, PROP_DEV_STAGE, "devStage", 0.0),
		FieldDef::number(PROP_DIAMETER, PROP_DIAMETER, "diameter", 0.0),
		FieldDef::number(PROP_DENSITY, PROP_DENSITY, "density", 0.0),
		FieldDef::number(PROP_TEMPERATURE, PROP_TEMPERATURE, "temperature", -1.0),
		FieldDef::number(PROP_SALINITY, PROP_SALINITY, "salinity", -1.0),
		FieldDef::number(PROP_RHO, PROP_RHO, "rho", -1.0),
	];

	fn parent() -> Result<Option<Arc<Schema>>, SchemaBuildError> {
		try_schema_of::<LifeStageBase>().map(Some)
	}
}

ibm_records::record_newtype!(EggStageAttributes);

impl EggStageAttributes {
	pub fn development_stage(&self) -> Result<f64, RecordError> {
		self.get_typed(DEV_STAGE)
	}

	pub fn diameter(&self) -> Result<f64, RecordError> {
		self.get_typed(DIAMETER)
	}

	pub fn density(&self) -> Result<f64, RecordError> {
		self.get_typed(DENSITY)
	}

	/// In-situ water density, `-1` until the egg has been placed.
	pub fn in_situ_density(&self) -> Result<f64, RecordError> {
		self.get_typed(RHO)
	}
}
