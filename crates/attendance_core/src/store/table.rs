//! Whole-table CSV read and overwrite.

use super::{StoreError, StoreResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::path::Path;

/// Reads every row of the CSV file at `path`.
///
/// A zero-byte or header-only file yields an empty table. A non-empty
/// header row missing any of `headers` is rejected.
pub fn read_table<T: DeserializeOwned>(path: &Path, headers: &[&str]) -> StoreResult<Vec<T>> {
    let file = File::open(path).map_err(|err| StoreError::io(path, err))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(file);

    let found = reader
        .headers()
        .map_err(|err| StoreError::csv(path, err))?
        .clone();
    if !found.is_empty() {
        if let Some(missing) = headers
            .iter()
            .find(|expected| !found.iter().any(|column| column == **expected))
        {
            return Err(StoreError::InvalidData(format!(
                "{} is missing column `{missing}`",
                path.display()
            )));
        }
    }

    let rows = reader
        .deserialize::<T>()
        .map(|row| row.map_err(|err| StoreError::csv(path, err)))
        .collect();
    rows
}

/// Replaces the file at `path` with `headers` followed by `rows`.
///
/// The table is encoded in memory first and handed to the filesystem in a
/// single write.
pub fn write_table<T: Serialize>(path: &Path, headers: &[&str], rows: &[T]) -> StoreResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer
        .write_record(headers)
        .map_err(|err| StoreError::csv(path, err))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|err| StoreError::csv(path, err))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| StoreError::io(path, err.into_error()))?;
    std::fs::write(path, bytes).map_err(|err| StoreError::io(path, err))
}
