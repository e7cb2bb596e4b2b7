//! Typed records: one value per schema field.

use std::sync::Arc;

use crate::error::RecordError;
use crate::kind::{FromValue, Value};
use crate::schema::{RecordType, Schema, schema_of};

/// Type name given to placeholder instances built only for registration.
pub const PLACEHOLDER_TYPE_NAME: &str = "NULL";

/// Value storage validated against a shared [`Schema`].
///
/// `values[i]` always holds a value of `schema.kinds()[i]`. Cloning copies
/// every value and shares the (immutable) schema.
#[derive(Debug, Clone)]
pub struct Record {
	schema: Arc<Schema>,
	values: Vec<Value>,
}

impl Record {
	/// Creates a record with every field at its declared default.
	pub fn new(schema: Arc<Schema>, type_name: impl Into<String>) -> Self {
		let mut values: Vec<Value> = schema.fields().iter().map(|f| f.default.to_value()).collect();
		values[0] = Value::Text(type_name.into());
		Self { schema, values }
	}

	/// Creates a default-valued record of type `T`.
	pub fn of<T: RecordType>(type_name: impl Into<String>) -> Self {
		Self::new(schema_of::<T>(), type_name)
	}

	/// Creates the placeholder instance of type `T` used for registration.
	pub fn placeholder<T: RecordType>() -> Self {
		Self::of::<T>(PLACEHOLDER_TYPE_NAME)
	}

	/// Creates a record whose type name is `strv[0]` and whose remaining
	/// fields are loaded with [`Record::set_all`].
	pub fn create_instance<S: AsRef<str>>(schema: Arc<Schema>, strv: &[S]) -> Result<Self, RecordError> {
		let Some(type_name) = strv.first() else {
			return Err(RecordError::MissingValue {
				key: schema.type_name_field().key,
				index: 0,
				values_seen: Vec::new(),
			});
		};
		let mut record = Self::new(schema, type_name.as_ref());
		record.set_all(strv)?;
		Ok(record)
	}

	pub fn schema(&self) -> &Arc<Schema> {
		&self.schema
	}

	pub fn type_name(&self) -> &str {
		self.values[0].as_str().unwrap_or_default()
	}

	fn index(&self, key: &str) -> Result<usize, RecordError> {
		self.schema.index_of(key).ok_or_else(|| RecordError::UnknownKey {
			type_id: self.schema.type_id(),
			key: key.to_string(),
		})
	}

	/// Returns the current value of `key`.
	pub fn get(&self, key: &str) -> Result<&Value, RecordError> {
		let i = self.index(key)?;
		Ok(&self.values[i])
	}

	/// Returns the value of `key` as a Rust type.
	pub fn get_as<T: FromValue>(&self, key: &str) -> Result<T, RecordError> {
		let i = self.index(key)?;
		let field = &self.schema.fields()[i];
		T::from_value(&self.values[i]).ok_or(RecordError::KindMismatch {
			key: field.key,
			expected: field.kind,
			got: T::value_kind(),
		})
	}

	pub fn number(&self, key: &str) -> Result<f64, RecordError> {
		self.get_as(key)
	}

	pub fn boolean(&self, key: &str) -> Result<bool, RecordError> {
		self.get_as(key)
	}

	/// Assigns `value` to `key`. The value must already be of the field's
	/// kind; nothing is coerced.
	///
	/// Returns the previous value.
	pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<Value, RecordError> {
		let i = self.index(key)?;
		let value = value.into();
		let field = &self.schema.fields()[i];
		if !value.matches_kind(field.kind) {
			return Err(RecordError::KindMismatch {
				key: field.key,
				expected: field.kind,
				got: value.kind(),
			});
		}
		Ok(std::mem::replace(&mut self.values[i], value))
	}

	/// Parses `raw` per the field's kind and assigns it.
	///
	/// The type-name field cannot be changed this way; doing so is a no-op.
	pub fn set_value_from_string(&mut self, key: &str, raw: &str) -> Result<(), RecordError> {
		let i = self.index(key)?;
		if i == 0 {
			return Ok(());
		}
		let field = &self.schema.fields()[i];
		self.values[i] = field.kind.parse(raw).map_err(|_| RecordError::Format {
			key: field.key,
			index: i,
			raw: raw.to_string(),
			all_raw: vec![raw.to_string()],
		})?;
		Ok(())
	}

	/// Formats the value of `key` per its kind.
	pub fn value_as_string(&self, key: &str) -> Result<String, RecordError> {
		self.get(key).map(Value::format)
	}

	/// Loads every field but the type name from an ordered sequence of
	/// strings laid out like [`Record::to_csv_row`] output.
	///
	/// `strv[0]` is the type name and is not applied. Fields are parsed and
	/// committed one at a time in schema order: on error, every field before
	/// the failing one already holds its new value and every field after it
	/// is unchanged.
	pub fn set_all<S: AsRef<str>>(&mut self, strv: &[S]) -> Result<(), RecordError> {
		let schema = Arc::clone(&self.schema);

		for (index, field) in schema.fields().iter().enumerate() {
			let Some(raw) = strv.get(index) else {
				return Err(RecordError::MissingValue {
					key: field.key,
					index,
					values_seen: strv.iter().map(|s| s.as_ref().to_string()).collect(),
				});
			};
			if index == 0 {
				continue;
			}
			let raw = raw.as_ref();
			self.values[index] = field.kind.parse(raw).map_err(|_| RecordError::Format {
				key: field.key,
				index,
				raw: raw.to_string(),
				all_raw: strv.iter().map(|s| s.as_ref().to_string()).collect(),
			})?;
		}

		if strv.len() > schema.len() {
			tracing::debug!(
				type_id = schema.type_id(),
				expected = schema.len(),
				got = strv.len(),
				"ignoring trailing values"
			);
		}
		Ok(())
	}

	/// All values in schema order, type name first.
	pub fn values(&self) -> &[Value] {
		&self.values
	}

	/// All values except the type name, in schema order.
	pub fn attributes(&self) -> &[Value] {
		&self.values[1..]
	}

	/// Keys in schema order, excluding the type name.
	pub fn keys(&self) -> &[&'static str] {
		self.schema.keys()
	}

	pub fn value_kinds(&self) -> &[crate::ValueKind] {
		self.schema.kinds()
	}

	pub fn short_names(&self) -> &[&'static str] {
		self.schema.short_names()
	}

	/// Renders the type name followed by every other formatted value.
	pub fn to_csv_row(&self, delimiter: &str) -> String {
		self.values.iter().map(Value::format).collect::<Vec<_>>().join(delimiter)
	}

	/// Renders the header line matching [`Record::to_csv_row`].
	pub fn csv_header(&self, delimiter: &str, use_short_names: bool) -> String {
		self.schema.csv_header(delimiter, use_short_names)
	}
}

impl PartialEq for Record {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.schema, &other.schema) && self.values == other.values
	}
}
