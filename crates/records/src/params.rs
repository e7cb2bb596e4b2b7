//! Parameter records: a typed record plus a function category registry.

use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::cache::TypeCache;
use crate::categories::FunctionCategoryRegistry;
use crate::error::{CategoryError, ParameterError, RecordError};
use crate::function::IbmFunction;
use crate::kind::{FromValue, Value};
use crate::record::Record;
use crate::schema::{RecordType, Schema, schema_of};

/// A record type that also offers pluggable functions per category.
pub trait ParameterType: RecordType {
	/// Declares every category and its functions. Called once per type; the
	/// result is the prototype every new record clones.
	///
	/// Any error here is a declaration error and is fatal for the type.
	fn categories() -> Result<FunctionCategoryRegistry, ParameterError>;
}

static CATALOGS: LazyLock<TypeCache<FunctionCategoryRegistry>> = LazyLock::new(|| TypeCache::new("function catalogs"));

/// Returns the cached category prototype for `P`, building it on first use.
pub fn try_catalog_of<P: ParameterType>() -> Result<Arc<FunctionCategoryRegistry>, ParameterError> {
	CATALOGS.get_or_try_init::<P, _>(P::categories)
}

/// Returns the cached category prototype for `P`.
///
/// # Panics
///
/// Panics if [`ParameterType::categories`] fails, for instance when a
/// category or function is declared twice.
pub fn catalog_of<P: ParameterType>() -> Arc<FunctionCategoryRegistry> {
	match try_catalog_of::<P>() {
		Ok(catalog) => catalog,
		Err(e) => panic!("invalid function catalog declaration: {e}"),
	}
}

/// Notification sent to listeners when a parameter value changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterChange {
	pub key: &'static str,
	pub old: Value,
	pub new: Value,
}

pub type ChangeListener = Arc<dyn Fn(&ParameterChange) + Send + Sync>;

/// Parameter values and function selections for one life stage.
pub struct ParameterRecord {
	record: Record,
	functions: FunctionCategoryRegistry,
	listeners: Vec<ChangeListener>,
}

impl ParameterRecord {
	pub fn new(schema: Arc<Schema>, functions: FunctionCategoryRegistry, type_name: impl Into<String>) -> Self {
		Self {
			record: Record::new(schema, type_name),
			functions,
			listeners: Vec::new(),
		}
	}

	/// Creates a default-valued parameter record of type `P`.
	pub fn of<P: ParameterType>(type_name: impl Into<String>) -> Self {
		Self::new(schema_of::<P>(), (*catalog_of::<P>()).clone(), type_name)
	}

	pub fn placeholder<P: ParameterType>() -> Self {
		Self::of::<P>(crate::record::PLACEHOLDER_TYPE_NAME)
	}

	/// Creates a record of type `P` from a type name followed by parameter
	/// values in key order.
	pub fn create_instance<P: ParameterType, S: AsRef<str>>(strv: &[S]) -> Result<Self, RecordError> {
		let record = Record::create_instance(schema_of::<P>(), strv)?;
		Ok(Self {
			record,
			functions: (*catalog_of::<P>()).clone(),
			listeners: Vec::new(),
		})
	}

	pub fn record(&self) -> &Record {
		&self.record
	}

	pub fn type_name(&self) -> &str {
		self.record.type_name()
	}

	/// Parameter keys in declaration order.
	pub fn parameter_names(&self) -> &[&'static str] {
		self.record.keys()
	}

	pub fn value(&self, key: &str) -> Result<&Value, RecordError> {
		self.record.get(key)
	}

	pub fn value_as<T: FromValue>(&self, key: &str) -> Result<T, RecordError> {
		self.record.get_as(key)
	}

	/// Assigns a parameter value and notifies listeners if it changed.
	pub fn set_value(&mut self, key: &str, value: impl Into<Value>) -> Result<(), RecordError> {
		let value = value.into();
		let old = self.record.set(key, value.clone())?;
		self.notify(key, old, value);
		Ok(())
	}

	pub fn set_value_from_string(&mut self, key: &str, raw: &str) -> Result<(), RecordError> {
		let old = self.record.get(key)?.clone();
		self.record.set_value_from_string(key, raw)?;
		let new = self.record.get(key)?.clone();
		self.notify(key, old, new);
		Ok(())
	}

	/// Loads every parameter from `strv` (type name first). Listeners are not
	/// notified.
	pub fn set_all<S: AsRef<str>>(&mut self, strv: &[S]) -> Result<(), RecordError> {
		self.record.set_all(strv)
	}

	fn notify(&self, key: &str, old: Value, new: Value) {
		if old == new || self.listeners.is_empty() {
			return;
		}
		let Some(field) = self.record.schema().field(key) else {
			return;
		};
		let change = ParameterChange { key: field.key, old, new };
		for listener in &self.listeners {
			listener(&change);
		}
	}

	/// Registers a listener for parameter value changes. Clones of this
	/// record do not inherit listeners.
	pub fn subscribe(&mut self, listener: impl Fn(&ParameterChange) + Send + Sync + 'static) {
		self.listeners.push(Arc::new(listener));
	}

	pub fn clear_listeners(&mut self) {
		self.listeners.clear();
	}

	pub fn functions(&self) -> &FunctionCategoryRegistry {
		&self.functions
	}

	pub fn functions_mut(&mut self) -> &mut FunctionCategoryRegistry {
		&mut self.functions
	}

	pub fn select_function(&mut self, category: &str, name: &str) -> Result<(), CategoryError> {
		self.functions.select(category, name)
	}

	pub fn selected_function(&self, category: &str) -> Option<&IbmFunction> {
		self.functions.selected(category)
	}

	pub fn function_mut(&mut self, category: &str, name: &str) -> Result<&mut IbmFunction, CategoryError> {
		self.functions.function_mut(category, name)
	}

	/// Forwards a parameter value into a category's function, selected or not.
	pub fn set_function_parameter(&mut self, category: &str, function: &str, key: &str, value: impl Into<Value>) -> Result<(), ParameterError> {
		self.functions.function_mut(category, function)?.set_parameter_value(key, value)?;
		Ok(())
	}

	pub fn to_csv_row(&self, delimiter: &str) -> String {
		self.record.to_csv_row(delimiter)
	}

	pub fn csv_header(&self, delimiter: &str, use_short_names: bool) -> String {
		self.record.csv_header(delimiter, use_short_names)
	}
}

impl Clone for ParameterRecord {
	fn clone(&self) -> Self {
		Self {
			record: self.record.clone(),
			functions: self.functions.clone(),
			listeners: Vec::new(),
		}
	}
}

impl fmt::Debug for ParameterRecord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ParameterRecord")
			.field("record", &self.record)
			.field("functions", &self.functions)
			.field("listeners", &self.listeners.len())
			.finish()
	}
}
