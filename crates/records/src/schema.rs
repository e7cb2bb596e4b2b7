//! Ordered, immutable schemas and the per-type schema registry.
//!
//! A schema is the concatenation of its parent's fields (in the parent's
//! order) and the fields its own type declares. The first field is always
//! the text type-name field. Schemas are built once per [`RecordType`] and
//! shared by every record of that type.

use std::sync::{Arc, LazyLock};

use rustc_hash::FxHashMap as HashMap;

use crate::cache::TypeCache;
use crate::error::SchemaBuildError;
use crate::field::FieldDef;
use crate::kind::ValueKind;

/// Ordered field list plus the derived views records need.
#[derive(Debug)]
pub struct Schema {
	type_id: &'static str,
	fields: Vec<FieldDef>,
	/// Index of the first field declared by this type itself.
	own_start: usize,
	index: HashMap<&'static str, usize>,
	keys: Vec<&'static str>,
	kinds: Vec<ValueKind>,
	short_names: Vec<&'static str>,
	display_names: Vec<&'static str>,
}

impl Schema {
	/// Builds a root schema. `fields[0]` must be the text type-name field.
	pub fn root(type_id: &'static str, fields: &[FieldDef]) -> Result<Self, SchemaBuildError> {
		match fields.first() {
			Some(first) if first.kind == ValueKind::Text => {}
			_ => return Err(SchemaBuildError::MissingTypeName { type_id }),
		}
		Self::compose(type_id, &[], fields)
	}

	/// Builds a schema that appends `fields` after every field of `parent`.
	pub fn extend(parent: &Schema, type_id: &'static str, fields: &[FieldDef]) -> Result<Self, SchemaBuildError> {
		Self::compose(type_id, &parent.fields, fields)
	}

	fn compose(type_id: &'static str, inherited: &[FieldDef], declared: &[FieldDef]) -> Result<Self, SchemaBuildError> {
		let total = inherited.len() + declared.len();
		let mut fields = Vec::with_capacity(total);
		let mut index = HashMap::with_capacity_and_hasher(total, Default::default());

		for (i, field) in inherited.iter().chain(declared).enumerate() {
			if i > 0 && field.kind == ValueKind::Text {
				return Err(SchemaBuildError::MisplacedText { type_id, key: field.key });
			}
			if let Some(&existing) = index.get(field.key) {
				return Err(SchemaBuildError::DuplicateKey {
					type_id,
					key: field.key,
					existing,
				});
			}
			index.insert(field.key, i);
			fields.push(*field);
		}

		let keys = fields.iter().skip(1).map(|f| f.key).collect();
		let kinds = fields.iter().map(|f| f.kind).collect();
		let short_names = fields.iter().map(|f| f.short_name).collect();
		let display_names = fields.iter().map(|f| f.display_name).collect();

		Ok(Self {
			type_id,
			fields,
			own_start: inherited.len(),
			index,
			keys,
			kinds,
			short_names,
			display_names,
		})
	}

	/// Identifier of the record type this schema belongs to.
	pub fn type_id(&self) -> &'static str {
		self.type_id
	}

	/// All fields, type name first.
	pub fn fields(&self) -> &[FieldDef] {
		&self.fields
	}

	/// Fields declared by this type itself, after the inherited ones.
	pub fn own_fields(&self) -> &[FieldDef] {
		&self.fields[self.own_start..]
	}

	/// Keys declared by this type itself. The root type's own keys exclude
	/// the type name.
	pub fn own_keys(&self) -> &[&'static str] {
		&self.keys[self.own_start.saturating_sub(1)..]
	}

	/// The leading type-name field.
	pub fn type_name_field(&self) -> &FieldDef {
		&self.fields[0]
	}

	/// Number of fields, including the type name.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	#[inline]
	pub fn index_of(&self, key: &str) -> Option<usize> {
		self.index.get(key).copied()
	}

	pub fn field(&self, key: &str) -> Option<&FieldDef> {
		self.index_of(key).map(|i| &self.fields[i])
	}

	/// Keys in schema order, excluding the type name.
	pub fn keys(&self) -> &[&'static str] {
		&self.keys
	}

	/// Value kinds in schema order, including the type name.
	pub fn kinds(&self) -> &[ValueKind] {
		&self.kinds
	}

	/// Short names in schema order, including the type name.
	pub fn short_names(&self) -> &[&'static str] {
		&self.short_names
	}

	/// Display names in schema order, including the type name.
	pub fn display_names(&self) -> &[&'static str] {
		&self.display_names
	}

	/// Renders the CSV header line for this schema.
	pub fn csv_header(&self, delimiter: &str, use_short_names: bool) -> String {
		if use_short_names {
			self.short_names.join(delimiter)
		} else {
			self.display_names.join(delimiter)
		}
	}
}

/// Declarative description of a record type.
///
/// A type names its parent (if any) and lists only the fields it adds. All
/// record behavior comes from the composed [`Schema`] and [`crate::Record`].
pub trait RecordType: 'static {
	/// Identifier used in diagnostics.
	const TYPE_ID: &'static str;

	/// Fields declared by this type, in declaration order.
	const FIELDS: &'static [FieldDef];

	/// Schema whose fields precede [`Self::FIELDS`]. Root types return `None`
	/// and must declare the type-name field first. Extending types return
	/// their parent's [`try_schema_of`], so a broken parent surfaces through
	/// the child's build.
	fn parent() -> Result<Option<Arc<Schema>>, SchemaBuildError> {
		Ok(None)
	}
}

static SCHEMAS: LazyLock<TypeCache<Schema>> = LazyLock::new(|| TypeCache::new("schemas"));

/// Returns the cached schema for `T`, building it on first use.
pub fn try_schema_of<T: RecordType>() -> Result<Arc<Schema>, SchemaBuildError> {
	SCHEMAS.get_or_try_init::<T, _>(|| match T::parent()? {
		Some(parent) => Schema::extend(&parent, T::TYPE_ID, T::FIELDS),
		None => Schema::root(T::TYPE_ID, T::FIELDS),
	})
}

/// Returns the cached schema for `T`.
///
/// # Panics
///
/// Panics if the type's declaration is invalid (see [`SchemaBuildError`]).
/// Such a type can never produce a usable record.
pub fn schema_of<T: RecordType>() -> Arc<Schema> {
	match try_schema_of::<T>() {
		Ok(schema) => schema,
		Err(e) => panic!("invalid record type declaration: {e}"),
	}
}

#[cfg(test)]
mod tests;
