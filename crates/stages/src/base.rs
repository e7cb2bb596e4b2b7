//! Shared attribute blocks inherited by the concrete life stages.
//!
//! [`LifeStageBase`] is the generic life-history block every stage starts
//! with. [`ArrowtoothBase`] appends the in-situ block shared by larvae and
//! benthic juveniles. Neither is instantiated directly.

use std::sync::Arc;

use ibm_records::{FieldDef, RecordType, Schema, SchemaBuildError, TypedKey, try_schema_of};

pub const PROP_TYPE_NAME: &str = "Life stage type name";
pub const PROP_ID: &str = "ID";
pub const PROP_PARENT_ID: &str = "Parent ID";
pub const PROP_ORIG_ID: &str = "Original ID";
pub const PROP_START_TIME: &str = "Start time (s)";
pub const PROP_TIME: &str = "Time (s)";
pub const PROP_HORIZ_TYPE: &str = "Horiz. position type";
pub const PROP_VERT_TYPE: &str = "Vert. position type";
pub const PROP_HORIZ_POS1: &str = "Horiz. position 1";
pub const PROP_HORIZ_POS2: &str = "Horiz. position 2";
pub const PROP_VERT_POS: &str = "Vert. position";
pub const PROP_ACTIVE: &str = "Active status";
pub const PROP_ALIVE: &str = "Alive status";
pub const PROP_AGE: &str = "Age (d)";
pub const PROP_AGE_IN_STAGE: &str = "Age in stage (d)";
pub const PROP_NUMBER: &str = "Number of individuals";

/// Generic life-history attributes common to every stage.
pub struct LifeStageBase;

impl RecordType for LifeStageBase {
	const TYPE_ID: &'static str = "ibm-stages::LifeStageBase";
	const FIELDS: &'static [FieldDef] = &[
		FieldDef::text(PROP_TYPE_NAME, PROP_TYPE_NAME, "typeName", "NULL"),
		FieldDef::number(PROP_ID, PROP_ID, "id", -1.0),
		FieldDef::number(PROP_PARENT_ID, PROP_PARENT_ID, "parentID", -1.0),
		FieldDef::number(PROP_ORIG_ID, PROP_ORIG_ID, "origID", -1.0),
		FieldDef::number(PROP_START_TIME, PROP_START_TIME, "startTime", 0.0),
		FieldDef::number(PROP_TIME, PROP_TIME, "time", 0.0),
		FieldDef::number(PROP_HORIZ_TYPE, PROP_HORIZ_TYPE, "horizType", 0.0),
		FieldDef::number(PROP_VERT_TYPE, PROP_VERT_TYPE, "vertType", 0.0),
		FieldDef::number(PROP_HORIZ_POS1, PROP_HORIZ_POS1, "horizPos1", 0.0),
		FieldDef::number(PROP_HORIZ_POS2, PROP_HORIZ_POS2, "horizPos2", 0.0),
		FieldDef::number(PROP_VERT_POS, PROP_VERT_POS, "vertPos", 0.0),
		FieldDef::boolean(PROP_ACTIVE, PROP_ACTIVE, "active", true),
		FieldDef::boolean(PROP_ALIVE, PROP_ALIVE, "alive", true),
		FieldDef::number(PROP_AGE, PROP_AGE, "age", 0.0),
		FieldDef::number(PROP_AGE_IN_STAGE, PROP_AGE_IN_STAGE, "ageInStage", 0.0),
		FieldDef::number(PROP_NUMBER, PROP_NUMBER, "number", 1.0),
	];
}

pub const PROP_ATTACHED: &str = "attached";
pub const PROP_SIZE: &str = "size (cm)";
pub const PROP_WEIGHT: &str = "weight (kg)";
pub const PROP_TEMPERATURE: &str = "temperature deg C";
pub const PROP_SALINITY: &str = "salinity";

/// In-situ attributes shared by arrowtooth larvae and benthic juveniles.
pub struct ArrowtoothBase;

impl RecordType for ArrowtoothBase {
	const TYPE_ID: &'static str = "ibm-stages::ArrowtoothBase";
	const FIELDS: &'static [FieldDef] = &[
		FieldDef::boolean(PROP_ATTACHED, PROP_ATTACHED, "attached", true),
		FieldDef::number(PROP_SIZE, PROP_SIZE, "size", 0.0),
		FieldDef::number(PROP_WEIGHT, PROP_WEIGHT, "weight", 0.0),
		FieldDef::number(PROP_TEMPERATURE, PROP_TEMPERATURE, "temperature", -1.0),
		FieldDef::number(PROP_SALINITY, PROP_SALINITY, "salinity", -1.0),
	];

	fn parent() -> Result<Option<Arc<Schema>>, SchemaBuildError> {
		try_schema_of::<LifeStageBase>().map(Some)
	}
}

/// Typed handles for the generic life-history block.
pub mod keys {
	use super::*;

	pub const ID: TypedKey<f64> = TypedKey::new(PROP_ID);
	pub const TIME: TypedKey<f64> = TypedKey::new(PROP_TIME);
	pub const VERT_POS: TypedKey<f64> = TypedKey::new(PROP_VERT_POS);
	pub const ACTIVE: TypedKey<bool> = TypedKey::new(PROP_ACTIVE);
	pub const ALIVE: TypedKey<bool> = TypedKey::new(PROP_ALIVE);
	pub const AGE: TypedKey<f64> = TypedKey::new(PROP_AGE);
	pub const AGE_IN_STAGE: TypedKey<f64> = TypedKey::new(PROP_AGE_IN_STAGE);
	pub const NUMBER: TypedKey<f64> = TypedKey::new(PROP_NUMBER);
	pub const ATTACHED: TypedKey<bool> = TypedKey::new(PROP_ATTACHED);
	pub const SIZE: TypedKey<f64> = TypedKey::new(PROP_SIZE);
	pub const WEIGHT: TypedKey<f64> = TypedKey::new(PROP_WEIGHT);
	pub const TEMPERATURE: TypedKey<f64> = TypedKey::new(PROP_TEMPERATURE);
	pub const SALINITY: TypedKey<f64> = TypedKey::new(PROP_SALINITY);
}
