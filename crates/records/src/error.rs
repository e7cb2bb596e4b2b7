//! Structured error values.
//!
//! Errors carry data only. Presenting them (dialog, log line, CLI message) is
//! left to the host.

use crate::kind::ValueKind;

/// Placeholder rendered for blank entries in diagnostics.
const MISSING_VALUE: &str = "<missing_value>";

/// Fatal schema declaration errors.
///
/// These indicate an incorrectly declared record type and abort
/// initialization of that type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaBuildError {
	/// A declared key repeats an inherited or earlier key.
	#[error("duplicate key {key:?} in schema {type_id} (first declared at index {existing})")]
	DuplicateKey { type_id: &'static str, key: &'static str, existing: usize },
	/// A root schema does not start with a text type-name field.
	#[error("schema {type_id} must start with a text type-name field")]
	MissingTypeName { type_id: &'static str },
	/// A text field appears after the type-name field.
	#[error("schema {type_id} declares text field {key:?} after the type name")]
	MisplacedText { type_id: &'static str, key: &'static str },
}

/// Errors raised by record accessors and bulk loading.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
	/// The key is not part of the record's schema.
	#[error("unknown key {key:?} for {type_id}")]
	UnknownKey { type_id: &'static str, key: String },
	/// A value of the wrong kind was assigned.
	#[error("kind mismatch for {key:?}: expected {expected}, got {got}")]
	KindMismatch { key: &'static str, expected: ValueKind, got: ValueKind },
	/// Bulk input ran out before the schema did.
	#[error("missing attribute value for {key:?} (index {index}); prior values are {}", render_seen(.values_seen))]
	MissingValue { key: &'static str, index: usize, values_seen: Vec<String> },
	/// Bulk input held text that does not parse for its field's kind.
	#[error("bad attribute value for {key:?} (index {index}): value was '{raw}'; entry was '{}'", render_entry(.all_raw))]
	Format {
		key: &'static str,
		index: usize,
		raw: String,
		all_raw: Vec<String>,
	},
}

fn render_seen(values: &[String]) -> String {
	values.join(" ")
}

fn render_entry(values: &[String]) -> String {
	values
		.iter()
		.map(|v| if v.is_empty() { MISSING_VALUE } else { v.as_str() })
		.collect::<Vec<_>>()
		.join(", ")
}

/// Errors raised by pluggable-function parameter access.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FunctionError {
	#[error("function {function:?} has no parameter {key:?}")]
	UnknownParameter { function: String, key: String },
	#[error("kind mismatch for parameter {key:?} of {function:?}: expected {expected}, got {got}")]
	KindMismatch {
		function: String,
		key: String,
		expected: ValueKind,
		got: ValueKind,
	},
	#[error("bad value for parameter {key:?} of {function:?}: '{raw}'")]
	Parse { function: String, key: String, raw: String },
}

/// Errors raised by function category registries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryError {
	#[error("unknown function category {category:?}")]
	UnknownCategory { category: String },
	/// Selection of a function not registered for the category.
	#[error("no function {name:?} registered for category {category:?}")]
	UnknownFunction { category: String, name: String },
	#[error("function category {category:?} is already registered")]
	DuplicateCategory { category: String },
	#[error("function {name:?} is registered twice in category {category:?}")]
	DuplicateFunction { category: String, name: String },
}

/// Errors raised when forwarding a value into a category's function.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterError {
	#[error(transparent)]
	Category(#[from] CategoryError),
	#[error(transparent)]
	Function(#[from] FunctionError),
}
