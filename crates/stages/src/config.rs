//! TOML description of a parameter record.
//!
//! ```toml
//! type_name = "Egg"
//!
//! [parameters]
//! "max stage duration [d]" = 30
//! "randomize transitions?" = true
//!
//! [functions.mortality]
//! selected = "Constant mortality rate"
//!
//! [functions.mortality.parameters."Constant mortality rate"]
//! rate = 0.05
//! ```
//!
//! Values are written in their natural TOML type. A quoted string is parsed
//! with the field's kind, so `"true"` and `"1e-3"` are accepted as well.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use ibm_records::{CategoryError, ParameterError, ParameterRecord, ParameterType, RecordError, Value};

/// Errors from reading, writing or applying a [`ParameterConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("failed to parse parameter config: {0}")]
	Parse(#[from] toml::de::Error),
	#[error("failed to serialize parameter config: {0}")]
	Serialize(#[from] toml::ser::Error),
	/// Entries that could not be applied. Every other entry was applied.
	#[error("{} parameter config entries rejected: {}", .0.len(), render_rejected(.0))]
	Rejected(Vec<EntryError>),
}

/// A single rejected config entry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EntryError {
	#[error(transparent)]
	Record(#[from] RecordError),
	#[error(transparent)]
	Parameter(#[from] ParameterError),
}

impl From<CategoryError> for EntryError {
	fn from(e: CategoryError) -> Self {
		EntryError::Parameter(e.into())
	}
}

fn render_rejected(errors: &[EntryError]) -> String {
	errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

/// A scalar as written in TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
	Boolean(bool),
	Number(f64),
	Text(String),
}

impl From<&Value> for ConfigValue {
	fn from(value: &Value) -> Self {
		match value {
			Value::Boolean(b) => ConfigValue::Boolean(*b),
			Value::Number(n) => ConfigValue::Number(*n),
			Value::Text(s) => ConfigValue::Text(s.clone()),
		}
	}
}

/// Selection and function parameters for one category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryConfig {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub selected: Option<String>,
	/// Function name to parameter values.
	pub parameters: IndexMap<String, IndexMap<String, ConfigValue>>,
}

/// Serializable snapshot of a [`ParameterRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterConfig {
	pub type_name: String,
	#[serde(default)]
	pub parameters: IndexMap<String, ConfigValue>,
	#[serde(default)]
	pub functions: IndexMap<String, CategoryConfig>,
}

impl ParameterConfig {
	pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(input)?)
	}

	pub fn to_toml_string(&self) -> Result<String, ConfigError> {
		Ok(toml::to_string(self)?)
	}

	/// Captures every parameter, selection and function parameter of `record`.
	pub fn from_record(record: &ParameterRecord) -> Self {
		let parameters = record
			.parameter_names()
			.iter()
			.zip(record.record().attributes())
			.map(|(key, value)| (key.to_string(), ConfigValue::from(value)))
			.collect();

		let registry = record.functions();
		let functions = registry
			.categories()
			.filter_map(|category| {
				let slot = registry.slot(category).ok()?;
				let parameters = slot
					.available()
					.filter(|function| function.parameter_names().next().is_some())
					.map(|function| {
						let values = function
							.parameters()
							.map(|p| (p.def.key.to_string(), ConfigValue::from(&p.value)))
							.collect();
						(function.name().to_string(), values)
					})
					.collect();
				let config = CategoryConfig {
					selected: slot.selected_name().map(str::to_string),
					parameters,
				};
				Some((category.to_string(), config))
			})
			.collect();

		Self {
			type_name: record.type_name().to_string(),
			parameters,
			functions,
		}
	}

	/// Applies every entry to `record`.
	///
	/// Entries are applied independently: a rejected entry does not stop the
	/// ones after it. Function parameters are applied before selections. The
	/// type name of `record` is left as is.
	pub fn apply_to(&self, record: &mut ParameterRecord) -> Result<(), ConfigError> {
		let mut rejected = Vec::new();

		for (key, value) in &self.parameters {
			let result = match value {
				ConfigValue::Text(raw) => record.set_value_from_string(key, raw),
				ConfigValue::Boolean(b) => record.set_value(key, *b),
				ConfigValue::Number(n) => record.set_value(key, *n),
			};
			if let Err(e) = result {
				rejected.push(EntryError::from(e));
			}
		}

		for (category, config) in &self.functions {
			for (function, values) in &config.parameters {
				for (key, value) in values {
					if let Err(e) = apply_function_value(record, category, function, key, value) {
						rejected.push(EntryError::from(e));
					}
				}
			}
			if let Some(name) = &config.selected
				&& let Err(e) = record.select_function(category, name)
			{
				rejected.push(EntryError::from(e));
			}
		}

		tracing::debug!(
			type_name = record.type_name(),
			parameters = self.parameters.len(),
			categories = self.functions.len(),
			rejected = rejected.len(),
			"applied parameter config"
		);

		if rejected.is_empty() { Ok(()) } else { Err(ConfigError::Rejected(rejected)) }
	}

	/// Builds a fresh parameter record of type `P` from this config.
	pub fn build<P: ParameterType>(&self) -> Result<ParameterRecord, ConfigError> {
		let mut record = ParameterRecord::of::<P>(self.type_name.as_str());
		self.apply_to(&mut record)?;
		Ok(record)
	}
}

fn apply_function_value(record: &mut ParameterRecord, category: &str, function: &str, key: &str, value: &ConfigValue) -> Result<(), ParameterError> {
	match value {
		ConfigValue::Text(raw) => {
			record.function_mut(category, function)?.set_value_from_string(key, raw)?;
			Ok(())
		}
		ConfigValue::Boolean(b) => record.set_function_parameter(category, function, key, *b),
		ConfigValue::Number(n) => record.set_function_parameter(category, function, key, *n),
	}
}
