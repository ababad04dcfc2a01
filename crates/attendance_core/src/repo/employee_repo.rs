//! Employee roster repository.
//!
//! # Invariants
//! - Registration validates before touching the table.
//! - Duplicate ids are accepted; lookups return the first match.

use super::{RepoError, RepoResult};
use crate::model::employee::{Employee, EMPLOYEE_HEADERS};
use crate::store::{read_table, write_table};
use log::{error, info};
use std::path::{Path, PathBuf};

/// Roster access used by the attendance service.
pub trait EmployeeRepository {
    /// Re-reads the whole roster from storage.
    fn load_all(&self) -> RepoResult<Vec<Employee>>;
    /// Rows currently held in memory.
    fn employees(&self) -> &[Employee];
    /// First employee whose id equals `id`.
    fn find(&self, id: &str) -> Option<&Employee>;
    /// Validates, appends and persists a new employee.
    fn register(&mut self, id: &str, name: &str, position: &str) -> RepoResult<Employee>;
}

/// Roster stored as `ID,Name,Position` CSV.
#[derive(Debug)]
pub struct CsvEmployeeRepository {
    path: PathBuf,
    rows: Vec<Employee>,
}

impl CsvEmployeeRepository {
    /// Loads the roster file at `path` into memory.
    pub fn load(path: impl Into<PathBuf>) -> RepoResult<Self> {
        let path = path.into();
        let rows = read_table(&path, &EMPLOYEE_HEADERS)?;
        info!(
            "event=roster_load module=repo status=ok rows={}",
            rows.len()
        );
        Ok(Self { path, rows })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the roster file with the in-memory rows.
    pub fn persist(&self) -> RepoResult<()> {
        write_table(&self.path, &EMPLOYEE_HEADERS, &self.rows).map_err(RepoError::from)
    }
}

impl EmployeeRepository for CsvEmployeeRepository {
    fn load_all(&self) -> RepoResult<Vec<Employee>> {
        Ok(read_table(&self.path, &EMPLOYEE_HEADERS)?)
    }

    fn employees(&self) -> &[Employee] {
        &self.rows
    }

    fn find(&self, id: &str) -> Option<&Employee> {
        self.rows.iter().find(|employee| employee.id == id)
    }

    fn register(&mut self, id: &str, name: &str, position: &str) -> RepoResult<Employee> {
        let employee = Employee::new(id, name, position)?;
        let duplicate = self.find(id).is_some();

        self.rows.push(employee.clone());
        if let Err(err) = self.persist() {
            self.rows.pop();
            error!(
                "event=employee_register module=repo status=error employee_id={} error={}",
                employee.id, err
            );
            return Err(err);
        }

        info!(
            "event=employee_register module=repo status=ok employee_id={} duplicate_id={} rows={}",
            employee.id,
            duplicate,
            self.rows.len()
        );
        Ok(employee)
    }
}

#[cfg(test)]
mod tests {
    use super::{CsvEmployeeRepository, EmployeeRepository};
    use crate::config::AttendanceConfig;
    use crate::store::init_storage;

    #[test]
    fn find_returns_first_of_duplicate_ids() {
        let dir = tempfile::tempdir().unwrap();
        let config = AttendanceConfig::new(dir.path());
        init_storage(&config).unwrap();
        let mut repo = CsvEmployeeRepository::load(config.employee_file()).unwrap();

        repo.register("E1", "Ada", "Engineer").unwrap();
        repo.register("E1", "Grace", "Admiral").unwrap();

        assert_eq!(repo.employees().len(), 2);
        assert_eq!(repo.find("E1").unwrap().name, "Ada");
        assert!(repo.find("E9").is_none());
    }

    #[test]
    fn failed_persist_leaves_memory_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let config = AttendanceConfig::new(dir.path());
        init_storage(&config).unwrap();
        let mut repo = CsvEmployeeRepository::load(config.employee_file()).unwrap();

        std::fs::remove_file(config.employee_file()).unwrap();
        std::fs::create_dir(config.employee_file()).unwrap();

        assert!(repo.register("E1", "Ada", "Engineer").is_err());
        assert!(repo.employees().is_empty());
    }
}
