//! Benthic juvenile stage attributes.

use std::sync::Arc;

use ibm_records::{FieldDef, Record, RecordType, Schema, SchemaBuildError, try_schema_of};

use crate::base::ArrowtoothBase;

#[derive(Debug, Clone, PartialEq)]
pub struct BenthicJuvenileStageAttributes(Record);

impl RecordType for BenthicJuvenileStageAttributes {
	const TYPE_ID: &'static str = "ibm-stages::BenthicJuvenileStageAttributes";
	const FIELDS: &'static [FieldDef] = &[];

	fn parent() -> Result<Option<Arc<Schema>>, SchemaBuildError> {
		try_schema_of::<ArrowtoothBase>().map(Some)
	}
}

ibm_records::record_newtype!(BenthicJuvenileStageAttributes);
