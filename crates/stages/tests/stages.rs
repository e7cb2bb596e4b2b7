//! Integration tests for the concrete life-stage attribute types.

use std::sync::Arc;

use ibm_records::{Record, RecordError, Value};
use ibm_stages::base::keys;
use ibm_stages::egg::attributes::DEV_STAGE;
use ibm_stages::{ArrowtoothBase, BenthicJuvenileStageAttributes, EggStageAttributes, LarvaStageAttributes, LifeStageBase};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const EGG_OWN_KEYS: [&str; 7] = [
	"attached",
	"egg development stage",
	"egg diameter",
	"egg density",
	"temperature deg C",
	"salinity",
	"in situ density",
];

fn init_tracing() {
	let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn test_egg_extends_base_with_seven_fields() {
	let base = ibm_records::schema_of::<LifeStageBase>();
	let egg = EggStageAttributes::schema();

	assert_eq!(egg.len(), base.len() + 7);
	assert_eq!(&egg.keys()[..base.keys().len()], base.keys());
	assert_eq!(&egg.keys()[base.keys().len()..], EGG_OWN_KEYS);
	assert_eq!(egg.own_keys(), EGG_OWN_KEYS);
}

#[test]
fn test_egg_display_header() {
	let header = EggStageAttributes::new("Egg").csv_header(",", false);
	let names: Vec<&str> = header.split(',').collect();

	assert_eq!(names.len(), ibm_records::schema_of::<LifeStageBase>().len() + 7);
	assert_eq!(names[0], "Life stage type name");
	assert_eq!(&names[names.len() - 7..], EGG_OWN_KEYS);
}

#[test]
fn test_egg_defaults() {
	let egg = EggStageAttributes::new("Egg");
	assert_eq!(egg.type_name(), "Egg");
	assert_eq!(egg.get_typed(keys::ID).unwrap(), -1.0);
	assert_eq!(egg.get_typed(keys::NUMBER).unwrap(), 1.0);
	assert!(egg.get_typed(keys::ALIVE).unwrap());
	assert!(egg.get_typed(keys::ATTACHED).unwrap());
	assert_eq!(egg.development_stage().unwrap(), 0.0);
	assert_eq!(egg.get_typed(keys::TEMPERATURE).unwrap(), -1.0);
	assert_eq!(egg.in_situ_density().unwrap(), -1.0);
}

#[test]
fn test_larva_and_juvenile_share_the_arrowtooth_block() {
	let arrowtooth = ibm_records::schema_of::<ArrowtoothBase>();
	let larva = LarvaStageAttributes::schema();
	let juvenile = BenthicJuvenileStageAttributes::schema();

	assert_eq!(larva.keys(), arrowtooth.keys());
	assert_eq!(juvenile.keys(), arrowtooth.keys());
	assert!(larva.own_keys().is_empty());
	assert!(!Arc::ptr_eq(&larva, &juvenile));
	assert_eq!(larva.type_id(), "ibm-stages::LarvaStageAttributes");
}

#[test]
fn test_placeholder_is_registration_only() {
	let larva = LarvaStageAttributes::default();
	assert_eq!(larva.type_name(), ibm_records::PLACEHOLDER_TYPE_NAME);
	assert_eq!(larva.get_typed(keys::SIZE).unwrap(), 0.0);
}

#[test]
fn test_set_all_reports_first_bad_value() {
	init_tracing();
	let mut egg = EggStageAttributes::new("Egg");
	let mut row: Vec<String> = egg.to_csv_row(",").split(',').map(str::to_string).collect();
	let dev_index = EggStageAttributes::schema().index_of("egg development stage").unwrap();
	row[1] = "7".into();
	row[dev_index] = "late".into();

	let err = egg.set_all(row.as_slice()).unwrap_err();
	let RecordError::Format { key, index, raw, .. } = err else {
		panic!("expected a format error");
	};
	assert_eq!((key, index, raw.as_str()), ("egg development stage", dev_index, "late"));
	assert_eq!(egg.get_typed(keys::ID).unwrap(), 7.0);
	assert_eq!(egg.development_stage().unwrap(), 0.0);
}

#[test]
fn test_typed_setters_write_through_deref() {
	let mut egg = EggStageAttributes::new("Egg");
	assert_eq!(egg.set_typed(DEV_STAGE, 4.0).unwrap(), 0.0);
	egg.set("egg diameter", 1.2).unwrap();
	assert_eq!(egg.development_stage().unwrap(), 4.0);
	assert_eq!(egg.diameter().unwrap(), 1.2);
	assert_eq!(
		egg.set("egg diameter", true).unwrap_err(),
		RecordError::KindMismatch {
			key: "egg diameter",
			expected: ibm_records::ValueKind::Number,
			got: ibm_records::ValueKind::Boolean,
		}
	);
}

#[test]
fn test_clone_is_independent() {
	let mut egg = EggStageAttributes::new("Egg");
	egg.set_typed(DEV_STAGE, 3.0).unwrap();
	let mut copy = egg.clone();
	copy.set_typed(DEV_STAGE, 9.0).unwrap();

	assert_eq!(egg.development_stage().unwrap(), 3.0);
	assert_eq!(copy.development_stage().unwrap(), 9.0);
	assert!(Arc::ptr_eq(Record::schema(&copy), Record::schema(&egg)));
}

fn egg_row() -> impl Strategy<Value = Vec<String>> {
	(
		0u32..100_000,
		any::<bool>(),
		0.0f64..20.0,
		0.5f64..2.0,
		900.0f64..1100.0,
		-2.0f64..15.0,
	)
		.prop_map(|(id, alive, stage, diameter, density, temperature)| {
			let mut egg = EggStageAttributes::new("Egg");
			egg.set_typed(keys::ID, f64::from(id)).unwrap();
			egg.set_typed(keys::ALIVE, alive).unwrap();
			egg.set_typed(DEV_STAGE, stage).unwrap();
			egg.set("egg diameter", diameter).unwrap();
			egg.set("egg density", density).unwrap();
			egg.set("temperature deg C", Value::Number(temperature)).unwrap();
			egg.to_csv_row(",").split(',').map(str::to_string).collect()
		})
}

proptest! {
	#[test]
	fn prop_csv_row_reloads_to_the_same_record(row in egg_row()) {
		let loaded = EggStageAttributes::create_instance(row.as_slice()).unwrap();
		prop_assert_eq!(loaded.to_csv_row(","), row.join(","));
		prop_assert_eq!(loaded.values().len(), EggStageAttributes::schema().len());
	}
}
