// File: crates/eventline-core/src/loader.rs
// Summary: CSV fetch + parse into a sorted Dataset; one async load per session.

use std::path::Path;

use crate::error::LoadError;
use crate::record::{normalize, Dataset, RawRow};

/// Fetch a CSV resource and produce a sorted dataset.
/// Issued once per display session; on failure the caller keeps no dataset
/// and stays in its loading state.
pub async fn load_csv(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Fetch { path: path.to_path_buf(), source })?;
    let rows = parse_rows(&text)?;
    let total = rows.len();
    let dataset = Dataset::new(normalize(rows));
    tracing::debug!(
        rows = total,
        records = dataset.len(),
        "loaded {}",
        path.display()
    );
    Ok(dataset)
}

/// Parse header-addressed, comma-delimited text into raw rows.
/// Malformed CSV (ragged rows etc.) is fatal; field-level problems are left
/// to normalization.
pub fn parse_rows(text: &str) -> Result<Vec<RawRow>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());
    let mut rows = Vec::new();
    for rec in rdr.deserialize::<RawRow>() {
        rows.push(rec?);
    }
    Ok(rows)
}
