use ibm_records::{FieldDef, FunctionType};

pub const PARAM_CONSTANT: &str = "constant";

/// Returns a single constant. Stages usually rename it for the role it fills.
pub struct ConstantFunction;

impl FunctionType for ConstantFunction {
	const NAME: &'static str = "Constant";
	const DESCRIPTION: &'static str = "Returns a constant value";
	const PARAMETERS: &'static [FieldDef] = &[FieldDef::number_param(PARAM_CONSTANT, "constant", 0.0)];
}
