//! Value kinds and the kind-driven parse/format contract.
//!
//! Every field and every function parameter is declared with a [`ValueKind`].
//! The kind alone decides how raw text becomes a [`Value`] and back, so the
//! textual row format stays identical across records and functions.

use core::fmt;

/// The closed set of kinds a field may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
	/// Free text. Only the leading type-name field uses it.
	Text,
	/// `true`/`false`.
	Boolean,
	/// IEEE-754 double.
	Number,
}

impl ValueKind {
	/// Parses raw text into a value of this kind.
	pub fn parse(self, raw: &str) -> Result<Value, ParseValueError> {
		match self {
			ValueKind::Text => Ok(Value::Text(raw.to_string())),
			ValueKind::Boolean => parse_bool(raw).map(Value::Boolean),
			ValueKind::Number => parse_number(raw).map(Value::Number),
		}
	}

	/// Returns the lowercase name used in diagnostics.
	pub fn name(self) -> &'static str {
		match self {
			ValueKind::Text => "text",
			ValueKind::Boolean => "boolean",
			ValueKind::Number => "number",
		}
	}
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Raw text that does not parse for the requested kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} value: '{raw}'")]
pub struct ParseValueError {
	pub kind: ValueKind,
	pub raw: String,
}

/// Parses a boolean from `true`/`false` or `1`/`0`, ignoring case and
/// surrounding whitespace.
pub fn parse_bool(raw: &str) -> Result<bool, ParseValueError> {
	match raw.trim().to_ascii_lowercase().as_str() {
		"true" | "1" => Ok(true),
		"false" | "0" => Ok(false),
		_ => Err(ParseValueError {
			kind: ValueKind::Boolean,
			raw: raw.to_string(),
		}),
	}
}

/// Parses a locale-independent decimal number.
pub fn parse_number(raw: &str) -> Result<f64, ParseValueError> {
	raw.trim().parse::<f64>().map_err(|_| ParseValueError {
		kind: ValueKind::Number,
		raw: raw.to_string(),
	})
}

/// A concrete value held by a record field or function parameter.
///
/// Numbers compare by bit pattern, so `NaN` equals itself and `0` differs
/// from `-0`, in line with their formatted text.
#[derive(Debug, Clone)]
pub enum Value {
	/// Text value.
	Text(String),
	/// Boolean value.
	Boolean(bool),
	/// Numeric value.
	Number(f64),
}

impl Value {
	/// Returns the kind of this value.
	pub fn kind(&self) -> ValueKind {
		match self {
			Value::Text(_) => ValueKind::Text,
			Value::Boolean(_) => ValueKind::Boolean,
			Value::Number(_) => ValueKind::Number,
		}
	}

	/// Returns true if this value matches the given kind.
	pub fn matches_kind(&self, kind: ValueKind) -> bool {
		self.kind() == kind
	}

	/// Returns the boolean value if this is a `Boolean` variant.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Boolean(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the number if this is a `Number` variant.
	pub fn as_number(&self) -> Option<f64> {
		match self {
			Value::Number(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the text if this is a `Text` variant.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::Text(v) => Some(v),
			_ => None,
		}
	}

	/// Renders the value in its canonical textual form.
	///
	/// Numbers use the shortest representation that parses back to the same
	/// `f64`.
	pub fn format(&self) -> String {
		self.to_string()
	}
}

impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Value::Text(a), Value::Text(b)) => a == b,
			(Value::Boolean(a), Value::Boolean(b)) => a == b,
			(Value::Number(a), Value::Number(b)) => a.to_bits() == b.to_bits(),
			_ => false,
		}
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Text(v) => f.write_str(v),
			Value::Boolean(v) => write!(f, "{v}"),
			Value::Number(v) => write!(f, "{v}"),
		}
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Boolean(v)
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::Number(v)
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Text(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Text(v.to_string())
	}
}

/// Compile-time default for a declared field.
///
/// Unlike [`Value`] this is `const`-constructible, so field tables can live
/// in `static` slices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldDefault {
	Text(&'static str),
	Boolean(bool),
	Number(f64),
}

impl FieldDefault {
	/// Returns the [`ValueKind`] produced by this default.
	pub const fn kind(self) -> ValueKind {
		match self {
			FieldDefault::Text(_) => ValueKind::Text,
			FieldDefault::Boolean(_) => ValueKind::Boolean,
			FieldDefault::Number(_) => ValueKind::Number,
		}
	}

	/// Materializes the default as a [`Value`].
	pub fn to_value(self) -> Value {
		match self {
			FieldDefault::Text(v) => Value::Text(v.to_string()),
			FieldDefault::Boolean(v) => Value::Boolean(v),
			FieldDefault::Number(v) => Value::Number(v),
		}
	}
}

// Seal the FromValue trait to prevent external implementations.
mod sealed {
	pub trait Sealed {}
	impl Sealed for f64 {}
	impl Sealed for bool {}
	impl Sealed for String {}
}

/// Rust types that can be extracted from a [`Value`].
pub trait FromValue: sealed::Sealed + Sized {
	/// Extracts the value, returning `None` if the kind doesn't match.
	fn from_value(value: &Value) -> Option<Self>;

	/// Returns the kind corresponding to this Rust type.
	fn value_kind() -> ValueKind;
}

impl FromValue for f64 {
	fn from_value(value: &Value) -> Option<Self> {
		value.as_number()
	}

	fn value_kind() -> ValueKind {
		ValueKind::Number
	}
}

impl FromValue for bool {
	fn from_value(value: &Value) -> Option<Self> {
		value.as_bool()
	}

	fn value_kind() -> ValueKind {
		ValueKind::Boolean
	}
}

impl FromValue for String {
	fn from_value(value: &Value) -> Option<Self> {
		value.as_str().map(str::to_string)
	}

	fn value_kind() -> ValueKind {
		ValueKind::Text
	}
}
