// File: crates/eventline-core/src/record.rs
// Summary: Row model and normalization: RawRow -> Record filter-map, sorted Dataset.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;

use crate::error::RowValidationError;

/// One CSV record as parsed, before validation. Ephemeral; discarded after
/// normalization.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawRow {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub event: Option<String>,
}

/// A validated data point.
/// Invariants: `date` parsed from a recognized calendar format, `value` finite.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub date: NaiveDateTime,
    pub value: f64,
    pub event: String,
}

impl Record {
    pub fn has_event(&self) -> bool { !self.event.is_empty() }
}

/// Ordered sequence of records, ascending by date. Rebuilt whole on every
/// load and never mutated in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Build from normalized records. Sorts stably, so rows sharing a date
    /// keep their source order.
    pub fn new(mut records: Vec<Record>) -> Self {
        records.sort_by_key(|r| r.date);
        Self { records }
    }

    pub fn records(&self) -> &[Record] { &self.records }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Records carrying a non-empty event tag, in dataset order.
    pub fn event_records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(|r| r.has_event())
    }

    /// Earliest and latest date, None when empty.
    pub fn date_extent(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        Some((self.records.first()?.date, self.records.last()?.date))
    }

    /// Smallest and largest value, None when empty.
    pub fn value_extent(&self) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for r in &self.records {
            min = min.min(r.value);
            max = max.max(r.value);
        }
        if self.records.is_empty() { None } else { Some((min, max)) }
    }
}

/// Validate and coerce one raw row into a typed record.
pub fn normalize_row(row: &RawRow) -> Result<Record, RowValidationError> {
    let date_str = row
        .date
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(RowValidationError::MissingDate)?;
    let date = parse_date(date_str)
        .ok_or_else(|| RowValidationError::BadDate(date_str.to_string()))?;

    let value_str = row
        .value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(RowValidationError::MissingValue)?;
    let value = value_str
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| RowValidationError::BadValue(value_str.to_string()))?;

    let event = row.event.as_deref().unwrap_or("").trim().to_string();
    Ok(Record { date, value, event })
}

/// Filter-map raw rows to records. Invalid rows are dropped with a warning;
/// surviving records keep their relative order.
pub fn normalize(rows: impl IntoIterator<Item = RawRow>) -> Vec<Record> {
    rows.into_iter()
        .enumerate()
        .filter_map(|(i, row)| match normalize_row(&row) {
            Ok(rec) => Some(rec),
            Err(err) => {
                tracing::warn!(row = i + 1, %err, "dropping row");
                None
            }
        })
        .collect()
}

/// Parse a calendar instant from the formats seen in the wild for this data:
/// RFC 3339, date-time without zone, bare date, US-style date.
fn parse_date(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    for fmt in ["%Y-%m-%d", "%m/%d/%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d.and_time(NaiveTime::MIN));
        }
    }
    None
}
