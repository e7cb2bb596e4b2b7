use pretty_assertions::assert_eq;

use super::*;

const TYPE_NAME: FieldDef = FieldDef::text("typeName", "type name", "typeName", "NULL");

struct Base;

impl RecordType for Base {
	const TYPE_ID: &'static str = "test::Base";
	const FIELDS: &'static [FieldDef] = &[
		TYPE_NAME,
		FieldDef::number("a", "field a", "a", 0.0),
		FieldDef::boolean("b", "field b", "b", true),
	];
}

struct Child;

impl RecordType for Child {
	const TYPE_ID: &'static str = "test::Child";
	const FIELDS: &'static [FieldDef] = &[FieldDef::number("c", "field c", "c", -1.0), FieldDef::number("d", "field d", "d", 0.0)];

	fn parent() -> Result<Option<Arc<Schema>>, SchemaBuildError> {
		try_schema_of::<Base>().map(Some)
	}
}

struct Clashing;

impl RecordType for Clashing {
	const TYPE_ID: &'static str = "test::Clashing";
	const FIELDS: &'static [FieldDef] = &[FieldDef::number("a", "again", "a2", 0.0)];

	fn parent() -> Result<Option<Arc<Schema>>, SchemaBuildError> {
		try_schema_of::<Base>().map(Some)
	}
}

#[test]
fn test_extension_appends_in_declaration_order() {
	let schema = schema_of::<Child>();
	let all: Vec<_> = schema.fields().iter().map(|f| f.key).collect();
	assert_eq!(all, ["typeName", "a", "b", "c", "d"]);
	assert_eq!(schema.keys(), ["a", "b", "c", "d"]);
	assert_eq!(schema.own_fields().iter().map(|f| f.key).collect::<Vec<_>>(), ["c", "d"]);
	assert_eq!(schema.own_keys(), ["c", "d"]);
	assert_eq!(schema_of::<Base>().own_keys(), ["a", "b"]);
	assert_eq!(schema.type_name_field().kind, ValueKind::Text);
}

#[test]
fn test_schema_is_cached_per_type() {
	let first = schema_of::<Child>();
	let second = schema_of::<Child>();
	assert!(Arc::ptr_eq(&first, &second));
	assert_eq!(first.type_id(), "test::Child");
	assert_eq!(schema_of::<Base>().len(), 3);
}

#[test]
fn test_derived_views() {
	let schema = schema_of::<Child>();
	assert_eq!(
		schema.kinds(),
		[ValueKind::Text, ValueKind::Number, ValueKind::Boolean, ValueKind::Number, ValueKind::Number]
	);
	assert_eq!(schema.short_names(), ["typeName", "a", "b", "c", "d"]);
	assert_eq!(schema.index_of("c"), Some(3));
	assert_eq!(schema.field("zzz"), None);
}

#[test]
fn test_csv_header() {
	let schema = schema_of::<Child>();
	assert_eq!(schema.csv_header(",", false), "type name,field a,field b,field c,field d");
	assert_eq!(schema.csv_header("\t", true), "typeName\ta\tb\tc\td");
}

#[test]
fn test_key_collision_is_reported() {
	assert_eq!(
		try_schema_of::<Clashing>().unwrap_err(),
		SchemaBuildError::DuplicateKey {
			type_id: "test::Clashing",
			key: "a",
			existing: 1,
		}
	);
}

struct OnClashing;

impl RecordType for OnClashing {
	const TYPE_ID: &'static str = "test::OnClashing";
	const FIELDS: &'static [FieldDef] = &[FieldDef::number("e", "field e", "e", 0.0)];

	fn parent() -> Result<Option<Arc<Schema>>, SchemaBuildError> {
		try_schema_of::<Clashing>().map(Some)
	}
}

#[test]
fn test_parent_error_reaches_child() {
	assert!(matches!(
		try_schema_of::<OnClashing>(),
		Err(SchemaBuildError::DuplicateKey { type_id: "test::Clashing", .. })
	));
}

#[test]
#[should_panic(expected = "invalid record type declaration")]
fn test_key_collision_is_fatal() {
	schema_of::<Clashing>();
}

#[test]
fn test_root_requires_type_name() {
	let fields = [FieldDef::number("a", "a", "a", 0.0)];
	assert_eq!(
		Schema::root("test::NoName", &fields).unwrap_err(),
		SchemaBuildError::MissingTypeName { type_id: "test::NoName" }
	);
	assert!(matches!(
		Schema::root("test::Empty", &[]),
		Err(SchemaBuildError::MissingTypeName { .. })
	));
}

#[test]
fn test_text_only_leads() {
	let fields = [TYPE_NAME, FieldDef::text("note", "note", "note", "")];
	assert_eq!(
		Schema::root("test::Text", &fields).unwrap_err(),
		SchemaBuildError::MisplacedText {
			type_id: "test::Text",
			key: "note"
		}
	);
}
