//! Static field declarations.

use crate::kind::{FieldDefault, ValueKind};

/// Declaration of one typed slot in a schema.
///
/// The same declaration describes record attributes, parameter-record
/// parameters and pluggable-function parameters. For parameters the display
/// name is the key itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDef {
	/// Stable lookup key, unique within a schema.
	pub key: &'static str,
	/// Name written in full CSV headers.
	pub display_name: &'static str,
	/// Name written in short CSV headers.
	pub short_name: &'static str,
	/// Kind of the values this field holds.
	pub kind: ValueKind,
	/// Value a fresh record starts with.
	pub default: FieldDefault,
}

impl FieldDef {
	/// Declares the leading type-name field.
	pub const fn text(key: &'static str, display_name: &'static str, short_name: &'static str, default: &'static str) -> Self {
		Self {
			key,
			display_name,
			short_name,
			kind: ValueKind::Text,
			default: FieldDefault::Text(default),
		}
	}

	/// Declares a boolean field.
	pub const fn boolean(key: &'static str, display_name: &'static str, short_name: &'static str, default: bool) -> Self {
		Self {
			key,
			display_name,
			short_name,
			kind: ValueKind::Boolean,
			default: FieldDefault::Boolean(default),
		}
	}

	/// Declares a numeric field.
	pub const fn number(key: &'static str, display_name: &'static str, short_name: &'static str, default: f64) -> Self {
		Self {
			key,
			display_name,
			short_name,
			kind: ValueKind::Number,
			default: FieldDefault::Number(default),
		}
	}

	/// Declares a boolean parameter whose display name is its key.
	pub const fn flag_param(key: &'static str, short_name: &'static str, default: bool) -> Self {
		Self::boolean(key, key, short_name, default)
	}

	/// Declares a numeric parameter whose display name is its key.
	pub const fn number_param(key: &'static str, short_name: &'static str, default: f64) -> Self {
		Self::number(key, key, short_name, default)
	}
}
