//! Attendance log repository.
//!
//! # Invariants
//! - Rows are only appended or removed in bulk by employee id; never edited.
//! - Deleting an id with no rows still rewrites the file and succeeds.

use super::RepoResult;
use crate::model::attendance::{AttendanceRecord, ATTENDANCE_HEADERS};
use crate::store::{read_table, write_table};
use log::{error, info};
use std::path::{Path, PathBuf};

/// Attendance log access used by the attendance service.
pub trait AttendanceRepository {
    /// Re-reads the whole attendance log from storage.
    fn load_all(&self) -> RepoResult<Vec<AttendanceRecord>>;
    /// Rows currently held in memory.
    fn records(&self) -> &[AttendanceRecord];
    /// Appends one row and persists the table.
    fn append(&mut self, record: AttendanceRecord) -> RepoResult<()>;
    /// Removes every row whose id equals `id`, persists, and returns the count.
    fn delete_by_employee_id(&mut self, id: &str) -> RepoResult<usize>;

    /// Distinct ids present in the log, in first-seen order.
    fn distinct_employee_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = Vec::new();
        for record in self.records() {
            if !ids.iter().any(|id| id == &record.id) {
                ids.push(record.id.clone());
            }
        }
        ids
    }
}

/// Attendance log stored as `ID,Name,Date,Time,Status,Photo,Location` CSV.
#[derive(Debug)]
pub struct CsvAttendanceRepository {
    path: PathBuf,
    rows: Vec<AttendanceRecord>,
}

impl CsvAttendanceRepository {
    /// Loads the attendance file at `path` into memory.
    pub fn load(path: impl Into<PathBuf>) -> RepoResult<Self> {
        let path = path.into();
        let rows = read_table(&path, &ATTENDANCE_HEADERS)?;
        info!(
            "event=attendance_load module=repo status=ok rows={}",
            rows.len()
        );
        Ok(Self { path, rows })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the attendance file with the in-memory rows.
    pub fn persist(&self) -> RepoResult<()> {
        Ok(write_table(&self.path, &ATTENDANCE_HEADERS, &self.rows)?)
    }
}

impl AttendanceRepository for CsvAttendanceRepository {
    fn load_all(&self) -> RepoResult<Vec<AttendanceRecord>> {
        Ok(read_table(&self.path, &ATTENDANCE_HEADERS)?)
    }

    fn records(&self) -> &[AttendanceRecord] {
        &self.rows
    }

    fn append(&mut self, record: AttendanceRecord) -> RepoResult<()> {
        let employee_id = record.id.clone();
        self.rows.push(record);

        if let Err(err) = self.persist() {
            self.rows.pop();
            error!(
                "event=attendance_append module=repo status=error employee_id={} error={}",
                employee_id, err
            );
            return Err(err);
        }

        info!(
            "event=attendance_append module=repo status=ok employee_id={} rows={}",
            employee_id,
            self.rows.len()
        );
        Ok(())
    }

    fn delete_by_employee_id(&mut self, id: &str) -> RepoResult<usize> {
        let kept: Vec<AttendanceRecord> = self
            .rows
            .iter()
            .filter(|record| record.id != id)
            .cloned()
            .collect();
        let removed = self.rows.len() - kept.len();
        let previous = std::mem::replace(&mut self.rows, kept);

        if let Err(err) = self.persist() {
            self.rows = previous;
            error!(
                "event=attendance_delete module=repo status=error employee_id={} error={}",
                id, err
            );
            return Err(err);
        }

        info!(
            "event=attendance_delete module=repo status=ok employee_id={} removed={} rows={}",
            id,
            removed,
            self.rows.len()
        );
        Ok(removed)
    }
}
