//! Pluggable functions: named algorithms carrying their own parameters.
//!
//! Evaluation is not modeled here. An [`IbmFunction`] is the container a
//! simulation reads its selected algorithm's parameter values from.

use indexmap::IndexMap;

use crate::error::FunctionError;
use crate::field::FieldDef;
use crate::kind::{FromValue, Value};

/// Declarative description of a pluggable function.
pub trait FunctionType: 'static {
	/// Default function name, unique within a category.
	const NAME: &'static str;
	const DESCRIPTION: &'static str;
	/// Parameters in declaration order.
	const PARAMETERS: &'static [FieldDef];
}

/// One named parameter of a function.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
	pub def: FieldDef,
	pub description: String,
	pub value: Value,
}

/// A pluggable function instance with independent parameter values.
#[derive(Debug, Clone, PartialEq)]
pub struct IbmFunction {
	name: String,
	description: String,
	parameters: IndexMap<&'static str, Parameter>,
}

impl IbmFunction {
	/// Instantiates `F` with every parameter at its default.
	pub fn of<F: FunctionType>() -> Self {
		Self::from_parts(F::NAME, F::DESCRIPTION, F::PARAMETERS)
	}

	pub fn from_parts(name: impl Into<String>, description: impl Into<String>, parameters: &[FieldDef]) -> Self {
		let parameters = parameters
			.iter()
			.map(|def| {
				(
					def.key,
					Parameter {
						def: *def,
						description: def.display_name.to_string(),
						value: def.default.to_value(),
					},
				)
			})
			.collect();
		Self {
			name: name.into(),
			description: description.into(),
			parameters,
		}
	}

	/// Renames the function, for generic functions offered under a
	/// category-specific name.
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = name.into();
		self
	}

	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn description(&self) -> &str {
		&self.description
	}

	/// Parameter keys in declaration order.
	pub fn parameter_names(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.parameters.keys().copied()
	}

	pub fn parameters(&self) -> impl Iterator<Item = &Parameter> {
		self.parameters.values()
	}

	pub fn parameter(&self, key: &str) -> Result<&Parameter, FunctionError> {
		self.parameters.get(key).ok_or_else(|| self.unknown(key))
	}

	fn parameter_mut(&mut self, key: &str) -> Result<&mut Parameter, FunctionError> {
		let function = &self.name;
		self.parameters.get_mut(key).ok_or_else(|| FunctionError::UnknownParameter {
			function: function.clone(),
			key: key.to_string(),
		})
	}

	fn unknown(&self, key: &str) -> FunctionError {
		FunctionError::UnknownParameter {
			function: self.name.clone(),
			key: key.to_string(),
		}
	}

	pub fn set_parameter_description(&mut self, key: &str, description: impl Into<String>) -> Result<(), FunctionError> {
		self.parameter_mut(key)?.description = description.into();
		Ok(())
	}

	pub fn parameter_value(&self, key: &str) -> Result<&Value, FunctionError> {
		self.parameter(key).map(|p| &p.value)
	}

	/// Returns a parameter value as a Rust type.
	pub fn parameter_as<T: FromValue>(&self, key: &str) -> Result<T, FunctionError> {
		let p = self.parameter(key)?;
		T::from_value(&p.value).ok_or_else(|| FunctionError::KindMismatch {
			function: self.name.clone(),
			key: key.to_string(),
			expected: p.def.kind,
			got: T::value_kind(),
		})
	}

	/// Assigns a parameter value of the parameter's declared kind.
	pub fn set_parameter_value(&mut self, key: &str, value: impl Into<Value>) -> Result<Value, FunctionError> {
		let value = value.into();
		let function = self.name.clone();
		let p = self.parameter_mut(key)?;
		if !value.matches_kind(p.def.kind) {
			return Err(FunctionError::KindMismatch {
				function,
				key: key.to_string(),
				expected: p.def.kind,
				got: value.kind(),
			});
		}
		Ok(std::mem::replace(&mut p.value, value))
	}

	pub fn value_as_string(&self, key: &str) -> Result<String, FunctionError> {
		self.parameter_value(key).map(Value::format)
	}

	pub fn set_value_from_string(&mut self, key: &str, raw: &str) -> Result<(), FunctionError> {
		let function = self.name.clone();
		let p = self.parameter_mut(key)?;
		p.value = p.def.kind.parse(raw).map_err(|_| FunctionError::Parse {
			function,
			key: key.to_string(),
			raw: raw.to_string(),
		})?;
		Ok(())
	}
}
