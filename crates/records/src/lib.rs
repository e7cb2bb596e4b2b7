//! Schema-driven records for individual-based life-stage models.
//!
//! - [`schema`] - ordered field lists, composed parent-first and cached per type
//! - [`record`] - typed value storage, bulk string loading and CSV rendering
//! - [`function`] - pluggable functions with their own parameters
//! - [`categories`] - per-category function selection
//! - [`params`] - parameter records combining the two
//!
//! # Declaring a record type
//!
//! A type lists only the fields it adds and names its parent; everything else
//! comes from the composed [`Schema`]:
//!
//! ```
//! use std::sync::Arc;
//! use ibm_records::{FieldDef, Record, RecordType, Schema, SchemaBuildError, try_schema_of};
//!
//! struct Base;
//! impl RecordType for Base {
//! 	const TYPE_ID: &'static str = "doc::Base";
//! 	const FIELDS: &'static [FieldDef] = &[
//! 		FieldDef::text("typeName", "Life stage type name", "typeName", "NULL"),
//! 		FieldDef::number("age", "Age (d)", "age", 0.0),
//! 	];
//! }
//!
//! struct Egg;
//! impl RecordType for Egg {
//! 	const TYPE_ID: &'static str = "doc::Egg";
//! 	const FIELDS: &'static [FieldDef] = &[FieldDef::boolean("attached", "attached", "attached", true)];
//! 	fn parent() -> Result<Option<Arc<Schema>>, SchemaBuildError> {
//! 		try_schema_of::<Base>().map(Some)
//! 	}
//! }
//!
//! let egg = Record::of::<Egg>("Egg");
//! assert_eq!(egg.to_csv_row(","), "Egg,0,true");
//! ```

pub mod cache;
pub mod categories;
pub mod error;
pub mod field;
pub mod function;
pub mod kind;
mod macros;
pub mod params;
pub mod record;
pub mod schema;
pub mod typed_key;

pub use cache::TypeCache;
pub use categories::{FunctionCategoryRegistry, FunctionSlot};
pub use error::{CategoryError, FunctionError, ParameterError, RecordError, SchemaBuildError};
pub use field::FieldDef;
pub use function::{FunctionType, IbmFunction, Parameter};
pub use kind::{FieldDefault, FromValue, ParseValueError, Value, ValueKind};
pub use params::{ChangeListener, ParameterChange, ParameterRecord, ParameterType, catalog_of, try_catalog_of};
pub use record::{PLACEHOLDER_TYPE_NAME, Record};
pub use schema::{RecordType, Schema, schema_of, try_schema_of};
pub use typed_key::TypedKey;
