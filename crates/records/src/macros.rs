//! Declaration macros for concrete record types.

/// Implements the record surface for a newtype over [`crate::Record`].
///
/// The type must already implement [`crate::RecordType`]. Generates the
/// type-name constructor, the placeholder [`Default`], `create_instance`,
/// `schema` and `Deref`/`DerefMut` to the underlying record.
#[macro_export]
macro_rules! record_newtype {
	($name:ident) => {
		impl $name {
			/// Creates a default-valued instance with the given type name.
			pub fn new(type_name: impl Into<String>) -> Self {
				Self($crate::Record::of::<Self>(type_name))
			}

			/// Creates an instance from a type name followed by field values.
			pub fn create_instance<S: AsRef<str>>(strv: &[S]) -> Result<Self, $crate::RecordError> {
				$crate::Record::create_instance($crate::schema_of::<Self>(), strv).map(Self)
			}

			/// Shared schema of this type.
			pub fn schema() -> ::std::sync::Arc<$crate::Schema> {
				$crate::schema_of::<Self>()
			}

			pub fn into_record(self) -> $crate::Record {
				self.0
			}
		}

		/// Placeholder instance for host registration only.
		impl Default for $name {
			fn default() -> Self {
				Self($crate::Record::placeholder::<Self>())
			}
		}

		impl ::core::ops::Deref for $name {
			type Target = $crate::Record;

			fn deref(&self) -> &$crate::Record {
				&self.0
			}
		}

		impl ::core::ops::DerefMut for $name {
			fn deref_mut(&mut self) -> &mut $crate::Record {
				&mut self.0
			}
		}
	};
}
