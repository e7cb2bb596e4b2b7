use std::ops::{Deref, DerefMut};

use ibm_records::{FieldDef, FunctionCategoryRegistry, IbmFunction, ParameterError, ParameterRecord, ParameterType, RecordError, RecordType, TypedKey};

use crate::functions::{
	ConstantFunction, ConstantMortalityRate, ConstantMovementRate, DielVerticalMigrationFixedDepths, EggAscensionRate, EggDevelopment,
	TemperatureDependentMortalityRate, misc,
};

pub const PARAM_TYPE_NAME: &str = "LHS type name";
pub const PARAM_IS_SUPER_INDIVIDUAL: &str = "is a super-individual?";
pub const PARAM_HORIZ_RW: &str = "horizontal random walk parameter [m^2]/[s]";
pub const PARAM_MIN_STAGE_DURATION: &str = "min stage duration [d]";
pub const PARAM_MAX_STAGE_DURATION: &str = "max stage duration [d]";
pub const PARAM_MIN_DEV_STAGE: &str = "min development stage before metamorphosis";
pub const PARAM_MAX_DEV_STAGE: &str = "max development stage before death";
pub const PARAM_RANDOMIZE_TRANSITIONS: &str = "randomize transitions?";
pub const PARAM_INIT_DEV_STAGE: &str = "initial development stage [1-19]";
pub const PARAM_INIT_DIAMETER: &str = "initial egg diameter (mm)";
pub const PARAM_INIT_DENSITY: &str = "initial egg density [mg/mm^3]";

pub const IS_SUPER_INDIVIDUAL: TypedKey<bool> = TypedKey::new(PARAM_IS_SUPER_INDIVIDUAL);
pub const HORIZ_RW: TypedKey<f64> = TypedKey::new(PARAM_HORIZ_RW);
pub const MIN_STAGE_DURATION: TypedKey<f64> = TypedKey::new(PARAM_MIN_STAGE_DURATION);
pub const MAX_STAGE_DURATION: TypedKey<f64> = TypedKey::new(PARAM_MAX_STAGE_DURATION);
pub const RANDOMIZE_TRANSITIONS: TypedKey<bool> = TypedKey::new(PARAM_RANDOMIZE_TRANSITIONS);

pub const FCAT_DEVELOPMENT: &str = "stage development";
pub const FCAT_MORTALITY: &str = "mortality";
pub const FCAT_VERTICAL_MOVEMENT: &str = "vertical movement";
pub const FCAT_VERTICAL_VELOCITY: &str = "vertical velocity";

pub const FN_CONSTANT_DEVELOPMENT: &str = "Constant development rate";

/// Parameters shared by every egg in a model run.
#[derive(Debug, Clone)]
pub struct EggStageParameters(ParameterRecord);

impl RecordType for EggStageParameters {
	const TYPE_ID: &'static str = "ibm-stages::EggStageParameters";
	const FIELDS: &'static [FieldDef] = &[
		FieldDef::text(PARAM_TYPE_NAME, PARAM_TYPE_NAME, "typeName", "NULL"),
		FieldDef::flag_param(PARAM_IS_SUPER_INDIVIDUAL, "isSuperIndividual", false),
		FieldDef::number_param(PARAM_HORIZ_RW, "horizRW", 0.0),
		FieldDef::number_param(PARAM_MIN_STAGE_DURATION, "minStageDuration", 0.0),
		FieldDef::number_param(PARAM_MAX_STAGE_DURATION, "maxStageDuration", 365.0),
		FieldDef::number_param(PARAM_MIN_DEV_STAGE, "minDevStage", 19.0),
		FieldDef::number_param(PARAM_MAX_DEV_STAGE, "maxDevStage", 20.0),
		FieldDef::flag_param(PARAM_RANDOMIZE_TRANSITIONS, "randomizeTransitions", false),
		FieldDef::number_param(PARAM_INIT_DEV_STAGE, "initDevStage", 1.0),
		FieldDef::number_param(PARAM_INIT_DIAMETER, "initDiameter", 1.0),
		FieldDef::number_param(PARAM_INIT_DENSITY, "initDensity", 1000.0),
	];
}

impl ParameterType for EggStageParameters {
	fn categories() -> Result<FunctionCategoryRegistry, ParameterError> {
		let mut constant_rate = IbmFunction::of::<ConstantFunction>()
			.with_name(FN_CONSTANT_DEVELOPMENT)
			.with_description("Constant development rate [stage/day]");
		constant_rate.set_parameter_description(misc::PARAM_CONSTANT, "Constant development rate [stage/day]")?;

		let mut registry = FunctionCategoryRegistry::new();
		registry.register_category(FCAT_DEVELOPMENT, [IbmFunction::of::<EggDevelopment>(), constant_rate])?;
		registry.register_category(
			FCAT_MORTALITY,
			[IbmFunction::of::<ConstantMortalityRate>(), IbmFunction::of::<TemperatureDependentMortalityRate>()],
		)?;
		registry.register_category(
			FCAT_VERTICAL_MOVEMENT,
			[IbmFunction::of::<EggAscensionRate>(), IbmFunction::of::<DielVerticalMigrationFixedDepths>()],
		)?;
		registry.register_category(FCAT_VERTICAL_VELOCITY, [IbmFunction::of::<ConstantMovementRate>()])?;
		Ok(registry)
	}
}

impl EggStageParameters {
	pub fn new(type_name: impl Into<String>) -> Self {
		Self(ParameterRecord::of::<Self>(type_name))
	}

	/// Creates parameters from a type name followed by values in key order.
	pub fn create_instance<S: AsRef<str>>(strv: &[S]) -> Result<Self, RecordError> {
		ParameterRecord::create_instance::<Self, S>(strv).map(Self)
	}

	pub fn into_inner(self) -> ParameterRecord {
		self.0
	}

	pub fn is_super_individual(&self) -> Result<bool, RecordError> {
		self.0.record().get_typed(IS_SUPER_INDIVIDUAL)
	}

	pub fn randomize_transitions(&self) -> Result<bool, RecordError> {
		self.0.record().get_typed(RANDOMIZE_TRANSITIONS)
	}

	/// `(min, max)` stage duration in days.
	pub fn stage_duration(&self) -> Result<(f64, f64), RecordError> {
		let record = self.0.record();
		Ok((record.get_typed(MIN_STAGE_DURATION)?, record.get_typed(MAX_STAGE_DURATION)?))
	}
}

/// Placeholder instance for host registration only.
impl Default for EggStageParameters {
	fn default() -> Self {
		Self(ParameterRecord::placeholder::<Self>())
	}
}

impl Deref for EggStageParameters {
	type Target = ParameterRecord;

	fn deref(&self) -> &ParameterRecord {
		&self.0
	}
}

impl DerefMut for EggStageParameters {
	fn deref_mut(&mut self) -> &mut ParameterRecord {
		&mut self.0
	}
}
