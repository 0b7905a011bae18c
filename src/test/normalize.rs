use crate::error::ReportError;
use crate::table::{Cell, MetricTable, normalize_column, normalize_columns};

fn table(rows: &[(&str, &str)]) -> MetricTable {
    MetricTable::new(
        "mem.csv",
        vec!["Flow".to_string(), "Packet Delivery Ratio".to_string()],
        rows.iter()
            .map(|(a, b)| vec![Cell::parse(a), Cell::parse(b)])
            .collect(),
    )
}

#[test]
fn percent_strings_become_plain_percentages() {
    let mut t = table(&[("1", "87.5%"), ("2", " 90 % "), ("3", "100")]);
    normalize_column(&mut t, "Packet Delivery Ratio").expect("normalize");
    assert_eq!(
        t.numeric_column("Packet Delivery Ratio").unwrap(),
        vec![87.5, 90.0, 100.0]
    );
}

#[test]
fn normalize_is_idempotent() {
    let mut once = table(&[("1", "87.5%"), ("2", "92%")]);
    normalize_column(&mut once, "Packet Delivery Ratio").expect("first pass");
    let mut twice = once.clone();
    normalize_column(&mut twice, "Packet Delivery Ratio").expect("second pass");
    assert_eq!(once, twice);
}

#[test]
fn numeric_column_is_left_untouched() {
    let original = table(&[("1", "95.0"), ("2", "90.0")]);
    let mut t = original.clone();
    normalize_columns(&mut t, &["Flow", "Packet Delivery Ratio"]).expect("normalize");
    assert_eq!(t, original);
}

#[test]
fn unparseable_cell_is_reported_with_its_row() {
    let mut t = table(&[("1", "95%"), ("2", "n/a")]);
    let err = normalize_column(&mut t, "Packet Delivery Ratio").unwrap_err();
    match err {
        ReportError::InvalidValue { row, value, .. } => {
            assert_eq!(row, 1);
            assert_eq!(value, "n/a");
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn normalize_unknown_column_is_a_schema_error() {
    let mut t = table(&[("1", "95%")]);
    let err = normalize_column(&mut t, "Throughput").unwrap_err();
    assert!(matches!(err, ReportError::Schema { .. }), "got {err:?}");
}

#[test]
fn failed_normalization_leaves_the_column_unchanged() {
    let original = table(&[("1", "95%"), ("2", "90%"), ("3", "n/a")]);
    let mut t = original.clone();
    let err = normalize_column(&mut t, "Packet Delivery Ratio").unwrap_err();
    assert!(matches!(err, ReportError::InvalidValue { row: 2, .. }), "got {err:?}");
    assert_eq!(t, original);
}
