// File: crates/eventline-core/tests/normalize.rs
// Purpose: Validate RawRow -> Record normalization: filter-map, ordering, defaults.

use chrono::NaiveDate;
use eventline_core::loader::parse_rows;
use eventline_core::{normalize, normalize_row, Dataset, RawRow, RowValidationError};

fn raw(date: &str, value: &str, event: &str) -> RawRow {
    RawRow {
        date: Some(date.to_string()),
        value: Some(value.to_string()),
        event: Some(event.to_string()),
    }
}

#[test]
fn drops_invalid_rows_keeps_valid_ones() {
    // Worked example: row with a bad date is excluded, siblings survive.
    let rows = vec![
        raw("2024-01-01", "10", ""),
        raw("bad-date", "5", ""),
        raw("2024-01-03", "20", "Launch"),
    ];
    let records = normalize(rows);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].value, 10.0);
    assert_eq!(records[1].event, "Launch");
}

#[test]
fn output_never_exceeds_input_and_preserves_order() {
    let rows = vec![
        raw("2024-02-01", "1", ""),
        raw("2024-02-02", "not-a-number", ""),
        raw("2024-02-03", "3", ""),
        raw("", "4", ""),
        raw("2024-02-05", "5", ""),
    ];
    let n = rows.len();
    let records = normalize(rows);
    assert!(records.len() <= n);
    let values: Vec<f64> = records.iter().map(|r| r.value).collect();
    assert_eq!(values, vec![1.0, 3.0, 5.0]);
}

#[test]
fn equality_when_every_row_is_valid() {
    let rows = vec![raw("2024-03-01", "1.5", "a"), raw("2024-03-02", "-2", "")];
    assert_eq!(normalize(rows).len(), 2);
}

#[test]
fn non_finite_values_are_rejected() {
    assert_eq!(
        normalize_row(&raw("2024-01-01", "NaN", "")),
        Err(RowValidationError::BadValue("NaN".to_string()))
    );
    assert_eq!(
        normalize_row(&raw("2024-01-01", "inf", "")),
        Err(RowValidationError::BadValue("inf".to_string()))
    );
}

#[test]
fn missing_fields_are_reported_distinctly() {
    let no_date = RawRow { date: None, value: Some("1".into()), event: None };
    assert_eq!(normalize_row(&no_date), Err(RowValidationError::MissingDate));
    let no_value = RawRow { date: Some("2024-01-01".into()), value: None, event: None };
    assert_eq!(normalize_row(&no_value), Err(RowValidationError::MissingValue));
}

#[test]
fn event_is_trimmed_and_defaults_to_empty() {
    let rec = normalize_row(&raw("2024-01-01", "1", "  Launch  ")).unwrap();
    assert_eq!(rec.event, "Launch");
    assert!(rec.has_event());

    let rec = normalize_row(&RawRow {
        date: Some("2024-01-01".into()),
        value: Some("1".into()),
        event: None,
    })
    .unwrap();
    assert_eq!(rec.event, "");
    assert!(!rec.has_event());
}

#[test]
fn accepts_common_date_formats() {
    for s in [
        "2024-01-02",
        "01/02/2024",
        "2024-01-02 08:30:00",
        "2024-01-02T08:30:00",
        "2024-01-02T08:30:00Z",
    ] {
        let rec = normalize_row(&raw(s, "1", "")).unwrap();
        assert_eq!(rec.date.date(), NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), "format {s:?}");
    }
}

#[test]
fn missing_event_column_parses_to_empty_events() {
    let rows = parse_rows("date,value\n2024-01-01,10\n2024-01-02,20\n").unwrap();
    let records = normalize(rows);
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| !r.has_event()));
}

#[test]
fn dataset_sorts_ascending_by_date_stably() {
    let rows = vec![
        raw("2024-01-03", "3", "later"),
        raw("2024-01-01", "1", ""),
        raw("2024-01-02", "2", ""),
        raw("2024-01-01", "9", "tie"),
    ];
    let ds = Dataset::new(normalize(rows));
    let values: Vec<f64> = ds.records().iter().map(|r| r.value).collect();
    // Stable sort: the 2024-01-01 rows keep their source order.
    assert_eq!(values, vec![1.0, 9.0, 2.0, 3.0]);
    let (min, max) = ds.date_extent().unwrap();
    assert!(min <= max);
}
