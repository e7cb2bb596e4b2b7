use std::marker::PhantomData;

use crate::error::RecordError;
use crate::kind::{FromValue, Value};
use crate::record::Record;

/// Field key carrying the Rust type of its values.
pub struct TypedKey<T: FromValue> {
	key: &'static str,
	_marker: PhantomData<T>,
}

impl<T: FromValue> Clone for TypedKey<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T: FromValue> Copy for TypedKey<T> {}

impl<T: FromValue> core::fmt::Debug for TypedKey<T> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_tuple("TypedKey").field(&self.key).finish()
	}
}

impl<T: FromValue> TypedKey<T> {
	pub const fn new(key: &'static str) -> Self {
		Self { key, _marker: PhantomData }
	}

	pub const fn key(&self) -> &'static str {
		self.key
	}
}

impl Record {
	/// Reads a field through its typed key.
	pub fn get_typed<T: FromValue>(&self, key: TypedKey<T>) -> Result<T, RecordError> {
		self.get_as(key.key)
	}

	/// Writes a field through its typed key and returns the previous value.
	pub fn set_typed<T: FromValue + Into<Value>>(&mut self, key: TypedKey<T>, value: T) -> Result<T, RecordError> {
		let old = self.set(key.key, value)?;
		T::from_value(&old).ok_or(RecordError::KindMismatch {
			key: key.key,
			expected: old.kind(),
			got: T::value_kind(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::field::FieldDef;
	use crate::schema::RecordType;

	struct Larva;

	impl RecordType for Larva {
		const TYPE_ID: &'static str = "test::Larva";
		const FIELDS: &'static [FieldDef] = &[
			FieldDef::text("typeName", "type name", "typeName", "NULL"),
			FieldDef::number("size (cm)", "size (cm)", "size", 0.0),
			FieldDef::boolean("attached", "attached", "attached", true),
		];
	}

	const SIZE: TypedKey<f64> = TypedKey::new("size (cm)");
	const ATTACHED: TypedKey<bool> = TypedKey::new("attached");
	const WRONG: TypedKey<bool> = TypedKey::new("size (cm)");

	#[test]
	fn test_typed_access() {
		let mut r = Record::of::<Larva>("Larva");
		assert_eq!(r.set_typed(SIZE, 0.4).unwrap(), 0.0);
		assert_eq!(r.get_typed(SIZE).unwrap(), 0.4);
		assert!(r.get_typed(ATTACHED).unwrap());
		assert!(matches!(r.get_typed(WRONG), Err(RecordError::KindMismatch { .. })));
		assert!(r.set_typed(WRONG, true).is_err());
		assert_eq!(r.get_typed(SIZE).unwrap(), 0.4);
	}
}
