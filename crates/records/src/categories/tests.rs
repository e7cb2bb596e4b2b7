use super::*;
use crate::field::FieldDef;
use crate::function::FunctionType;
use crate::kind::Value;

struct Constant;

impl FunctionType for Constant {
	const NAME: &'static str = "Constant";
	const DESCRIPTION: &'static str = "constant rate";
	const PARAMETERS: &'static [FieldDef] = &[FieldDef::number_param("rate", "rate", 0.1)];
}

struct TempDependent;

impl FunctionType for TempDependent {
	const NAME: &'static str = "TempDependent";
	const DESCRIPTION: &'static str = "temperature-dependent rate";
	const PARAMETERS: &'static [FieldDef] = &[
		FieldDef::number_param("intercept", "a", 0.03),
		FieldDef::number_param("slope", "b", 0.01),
	];
}

fn registry() -> FunctionCategoryRegistry {
	let mut reg = FunctionCategoryRegistry::new();
	reg.register_category("Mortality", [IbmFunction::of::<Constant>(), IbmFunction::of::<TempDependent>()])
		.unwrap();
	reg.register_category("Movement", [IbmFunction::of::<Constant>()]).unwrap();
	reg
}

#[test]
fn test_nothing_selected_initially() {
	let reg = registry();
	assert!(reg.selected("Mortality").is_none());
	assert_eq!(reg.categories().collect::<Vec<_>>(), ["Mortality", "Movement"]);
	assert_eq!(
		reg.function_names("Mortality").unwrap().collect::<Vec<_>>(),
		["Constant", "TempDependent"]
	);
}

#[test]
fn test_select() {
	let mut reg = registry();
	reg.select("Mortality", "TempDependent").unwrap();
	assert_eq!(reg.selected("Mortality").map(IbmFunction::name), Some("TempDependent"));
	assert_eq!(reg.selected_name("Mortality"), Some("TempDependent"));
	assert!(reg.selected("Movement").is_none());
}

#[test]
fn test_unknown_function_keeps_selection() {
	let mut reg = registry();
	reg.select("Mortality", "Constant").unwrap();
	assert_eq!(
		reg.select("Mortality", "Houde"),
		Err(CategoryError::UnknownFunction {
			category: "Mortality".into(),
			name: "Houde".into(),
		})
	);
	assert_eq!(reg.selected_name("Mortality"), Some("Constant"));
	assert!(matches!(
		reg.select("Growth", "Constant"),
		Err(CategoryError::UnknownCategory { .. })
	));
}

#[test]
fn test_clone_rebinds_selection() {
	let mut source = registry();
	source.select("Mortality", "TempDependent").unwrap();

	let mut copy = source.clone();
	assert_eq!(copy.selected("Mortality").unwrap().name(), "TempDependent");

	copy.selected_mut("Mortality").unwrap().set_parameter_value("slope", 0.5).unwrap();
	assert_eq!(
		copy.selected("Mortality").unwrap().parameter_value("slope").unwrap(),
		&Value::Number(0.5)
	);
	assert_eq!(
		source.selected("Mortality").unwrap().parameter_value("slope").unwrap(),
		&Value::Number(0.01)
	);
}

#[test]
fn test_clone_copies_unselected_parameters() {
	let mut source = registry();
	source
		.function_mut("Mortality", "Constant")
		.unwrap()
		.set_parameter_value("rate", 0.2)
		.unwrap();
	let copy = source.clone();
	assert_eq!(copy, source);
	assert_eq!(
		copy.function("Mortality", "Constant").unwrap().parameter_as::<f64>("rate").unwrap(),
		0.2
	);
}

#[test]
fn test_duplicate_declarations() {
	let mut reg = registry();
	assert_eq!(
		reg.register_category("Mortality", Vec::<IbmFunction>::new()),
		Err(CategoryError::DuplicateCategory {
			category: "Mortality".into()
		})
	);
	assert_eq!(
		reg.register_category("Growth", [IbmFunction::of::<Constant>(), IbmFunction::of::<Constant>()]),
		Err(CategoryError::DuplicateFunction {
			category: "Growth".into(),
			name: "Constant".into(),
		})
	);
	assert_eq!(reg.len(), 2);
}

#[test]
fn test_deselect() {
	let mut reg = registry();
	reg.select("Movement", "Constant").unwrap();
	reg.deselect("Movement").unwrap();
	assert!(reg.selected("Movement").is_none());
}
