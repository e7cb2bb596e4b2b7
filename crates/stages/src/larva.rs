//! Larval stage attributes.

use std::sync::Arc;

use ibm_records::{FieldDef, Record, RecordType, Schema, SchemaBuildError, try_schema_of};

use crate::base::ArrowtoothBase;

/// Attributes of an arrowtooth flounder larva: the arrowtooth block, nothing
/// more.
#[derive(Debug, Clone, PartialEq)]
pub struct LarvaStageAttributes(Record);

impl RecordType for LarvaStageAttributes {
	const TYPE_ID: &'static str = "ibm-stages::LarvaStageAttributes";
	const FIELDS: &'static [FieldDef] = &[];

	fn parent() -> Result<Option<Arc<Schema>>, SchemaBuildError> {
		try_schema_of::<ArrowtoothBase>().map(Some)
	}
}

ibm_records::record_newtype!(LarvaStageAttributes);
