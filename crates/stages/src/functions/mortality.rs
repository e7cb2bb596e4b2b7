use ibm_records::{FieldDef, FunctionType};

pub const PARAM_RATE: &str = "rate";

pub struct ConstantMortalityRate;

impl FunctionType for ConstantMortalityRate {
	const NAME: &'static str = "Constant mortality rate";
	const DESCRIPTION: &'static str = "Constant mortality rate [1/d]";
	const PARAMETERS: &'static [FieldDef] = &[FieldDef::number_param(PARAM_RATE, "rate", 0.0)];
}

/// Mortality rate driven by in-situ temperature (Houde 1989). The rate is a
/// fixed function of temperature, so it declares no parameters.
pub struct TemperatureDependentMortalityRate;

impl FunctionType for TemperatureDependentMortalityRate {
	const NAME: &'static str = "Temperature-dependent mortality (Houde 1989)";
	const DESCRIPTION: &'static str = "Temperature-dependent mortality rate [1/d]";
	const PARAMETERS: &'static [FieldDef] = &[];
}
