use ibm_records::{FieldDef, FunctionType};

/// Vertical velocity of a buoyant egg, computed from egg and water densities.
pub struct EggAscensionRate;

impl FunctionType for EggAscensionRate {
	const NAME: &'static str = "Egg ascension rate";
	const DESCRIPTION: &'static str = "Ascension rate from egg diameter and density contrast [m/s]";
	const PARAMETERS: &'static [FieldDef] = &[];
}

pub const PARAM_IS_DVM: &str = "perform DVM";
pub const PARAM_DEPTH_DAY_MIN: &str = "min depth during day [m]";
pub const PARAM_DEPTH_DAY_MAX: &str = "max depth during day [m]";
pub const PARAM_DEPTH_NIGHT_MIN: &str = "min depth during night [m]";
pub const PARAM_DEPTH_NIGHT_MAX: &str = "max depth during night [m]";

/// Diel vertical migration between fixed day and night depth ranges.
pub struct DielVerticalMigrationFixedDepths;

impl FunctionType for DielVerticalMigrationFixedDepths {
	const NAME: &'static str = "DVM with fixed depth ranges";
	const DESCRIPTION: &'static str = "Diel vertical migration with fixed depth ranges";
	const PARAMETERS: &'static [FieldDef] = &[
		FieldDef::flag_param(PARAM_IS_DVM, "isDVM", true),
		FieldDef::number_param(PARAM_DEPTH_DAY_MIN, "dayMin", 40.0),
		FieldDef::number_param(PARAM_DEPTH_DAY_MAX, "dayMax", 60.0),
		FieldDef::number_param(PARAM_DEPTH_NIGHT_MIN, "nightMin", 10.0),
		FieldDef::number_param(PARAM_DEPTH_NIGHT_MAX, "nightMax", 20.0),
	];
}

pub const PARAM_RATE: &str = "rate";

pub struct ConstantMovementRate;

impl FunctionType for ConstantMovementRate {
	const NAME: &'static str = "Constant movement rate";
	const DESCRIPTION: &'static str = "Constant movement rate [m/s]";
	const PARAMETERS: &'static [FieldDef] = &[FieldDef::number_param(PARAM_RATE, "rate", 0.0)];
}
