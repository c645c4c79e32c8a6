//! Tests for ukb-model types.

use proptest::prelude::*;
use ukb_model::{FieldId, FieldRecord, ValueType};

proptest! {
    #[test]
    fn field_id_survives_parsing(
        field in 0u32..10_000_000,
        instance in proptest::option::of("[0-9]{1,3}"),
        array in proptest::option::of("[0-9]{1,3}"),
    ) {
        let mut input = field.to_string();
        if let Some(instance) = &instance {
            input.push('-');
            input.push_str(instance);
        }
        if let Some(array) = &array {
            input.push('.');
            input.push_str(array);
        }

        let parsed = FieldId::parse(&input).unwrap();
        prop_assert_eq!(parsed.field_id, field);
        prop_assert_eq!(parsed.instance_id, instance);
        prop_assert_eq!(parsed.array_id, array);
    }

    #[test]
    fn non_numeric_prefix_is_rejected(prefix in "[a-zA-Z_]{1,8}", field in 0u32..100_000) {
        let input = format!("{prefix}{field}");
        prop_assert!(FieldId::parse(&input).is_err());
    }
}

#[test]
fn record_serializes_with_symbolic_dtype() {
    let record = FieldRecord {
        field_id: 4,
        title: "Biometrics duration".to_string(),
        dtype: ValueType::Int,
        categories: 0,
        encoding_id: 0,
        description: "Time taken".to_string(),
    };
    let json = serde_json::to_value(&record).expect("serialize record");
    assert_eq!(json["dtype"], "INT");
    assert_eq!(json["field_id"], 4);
    assert_eq!(record.values()[2], "INT");
}

#[test]
fn value_type_serde_names_match_display() {
    for value_type in ValueType::ALL {
        let json = serde_json::to_string(&value_type).expect("serialize value type");
        assert_eq!(json, format!("\"{value_type}\""));
    }
}
