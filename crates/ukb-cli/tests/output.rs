//! Integration tests for lookup output rendering.

use ukb_cli::output::{field_table, write_delimited};
use ukb_model::{FieldRecord, ValueType};

fn records() -> Vec<FieldRecord> {
    vec![
        FieldRecord {
            field_id: 4,
            title: "Biometrics duration".to_string(),
            dtype: ValueType::Int,
            categories: 0,
            encoding_id: 0,
            description: "Time taken...".to_string(),
        },
        FieldRecord {
            field_id: 31,
            title: "Sex".to_string(),
            dtype: ValueType::CatSing,
            categories: 2,
            encoding_id: 9,
            description: "Sex of participant".to_string(),
        },
    ]
}

fn delimited(records: &[FieldRecord]) -> String {
    let mut out = Vec::new();
    write_delimited(records, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn delimited_output_drops_description() {
    let output = delimited(&records());

    insta::assert_snapshot!(output.trim_end(), @r"
    field_id;title;dtype;categories;encoding_id
    4;Biometrics duration;INT;0;0
    31;Sex;CAT_SING;2;9
    ");
}

#[test]
fn delimited_output_keeps_header_without_records() {
    assert_eq!(
        delimited(&[]),
        "field_id;title;dtype;categories;encoding_id\n"
    );
}

#[test]
fn table_shows_every_column() {
    let rendered = field_table(&records()).to_string();

    for expected in [
        "field_id",
        "description",
        "Biometrics duration",
        "CAT_SING",
        "Sex of participant",
    ] {
        assert!(rendered.contains(expected), "missing {expected}:\n{rendered}");
    }
}
