//! First-run creation of the data root and empty tables.

use super::table::write_table;
use super::{StoreError, StoreResult};
use crate::config::AttendanceConfig;
use crate::model::attendance::{AttendanceRecord, ATTENDANCE_HEADERS};
use crate::model::employee::{Employee, EMPLOYEE_HEADERS};
use log::info;
use std::path::Path;

/// Ensures the data root and both tabular files exist.
///
/// Missing files are created holding only their header row. Existing files
/// are left untouched, so repeated calls are no-ops.
///
/// # Errors
/// Any directory or file creation failure. Callers treat this as fatal.
pub fn init_storage(config: &AttendanceConfig) -> StoreResult<()> {
    let root = config.data_root();
    std::fs::create_dir_all(root).map_err(|err| StoreError::io(root, err))?;

    let roster_created =
        create_if_missing::<Employee>(&config.employee_file(), &EMPLOYEE_HEADERS)?;
    let log_created =
        create_if_missing::<AttendanceRecord>(&config.attendance_file(), &ATTENDANCE_HEADERS)?;

    info!(
        "event=storage_init module=store status=ok roster_created={} attendance_created={}",
        roster_created, log_created
    );
    Ok(())
}

fn create_if_missing<T: serde::Serialize>(path: &Path, headers: &[&str]) -> StoreResult<bool> {
    if path.exists() {
        return Ok(false);
    }
    write_table::<T>(path, headers, &[])?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::init_storage;
    use crate::config::AttendanceConfig;

    #[test]
    fn creates_header_only_files_once() {
        let dir = tempfile::tempdir().unwrap();
        let config = AttendanceConfig::new(dir.path().join("data"));

        init_storage(&config).unwrap();
        let roster = std::fs::read_to_string(config.employee_file()).unwrap();
        let log = std::fs::read_to_string(config.attendance_file()).unwrap();
        assert_eq!(roster, "ID,Name,Position\n");
        assert_eq!(log, "ID,Name,Date,Time,Status,Photo,Location\n");

        std::fs::write(config.employee_file(), "ID,Name,Position\nE1,Ada,Eng\n").unwrap();
        init_storage(&config).unwrap();
        let roster = std::fs::read_to_string(config.employee_file()).unwrap();
        assert!(roster.contains("E1,Ada,Eng"));
    }
}
