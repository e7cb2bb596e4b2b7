use ibm_records::{FieldDef, FunctionType};

/// Temperature-dependent egg development through the 19 embryonic stages.
///
/// The stage rate comes from in-situ temperature alone; nothing is tunable.
pub struct EggDevelopment;

impl FunctionType for EggDevelopment {
	const NAME: &'static str = "Egg development";
	const DESCRIPTION: &'static str = "Temperature-dependent egg development rate [stage/d]";
	const PARAMETERS: &'static [FieldDef] = &[];
}
