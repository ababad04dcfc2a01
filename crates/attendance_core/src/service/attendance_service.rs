//! Attendance use-case service.
//!
//! # Responsibility
//! - Orchestrate roster, attendance log and photo store for each use case.
//! - Keep the presentation layer free of storage details.
//!
//! # Invariants
//! - `submit_attendance` resolves the employee, validates, writes the photo,
//!   then appends. A failure at any step leaves the attendance table as it was.
//! - A photo already written stays on disk if the table write then fails.

use super::{AttendanceError, LookupError, ServiceResult};
use crate::config::AttendanceConfig;
use crate::dashboard::{summarize, DailySummary};
use crate::model::attendance::{AttendanceRecord, AttendanceSubmission};
use crate::model::employee::Employee;
use crate::photo::{DiskPhotoStore, PhotoStore};
use crate::repo::attendance_repo::{AttendanceRepository, CsvAttendanceRepository};
use crate::repo::employee_repo::{CsvEmployeeRepository, EmployeeRepository};
use crate::repo::RepoResult;
use crate::store::init_storage;
use log::{info, warn};
use std::time::Instant;

/// Service wired to the on-disk CSV tables and photo directories.
pub type AttendanceSession =
    AttendanceService<CsvEmployeeRepository, CsvAttendanceRepository, DiskPhotoStore>;

/// Successful attendance submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedAttendance {
    pub record: AttendanceRecord,
    /// Employee position at submission time; shown, not persisted.
    pub position: String,
}

/// Result of a bulk delete by employee id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionOutcome {
    pub employee_id: String,
    pub removed: usize,
}

/// Use-case service over a roster, an attendance log and a photo store.
pub struct AttendanceService<E, A, P> {
    employees: E,
    attendance: A,
    photos: P,
}

impl AttendanceSession {
    /// Starts one interaction cycle against `config`.
    ///
    /// Creates missing storage, then loads both tables fresh from disk.
    ///
    /// # Errors
    /// Storage creation or load failures; callers treat these as fatal.
    pub fn open(config: &AttendanceConfig) -> RepoResult<Self> {
        init_storage(config)?;
        Ok(Self::new(
            CsvEmployeeRepository::load(config.employee_file())?,
            CsvAttendanceRepository::load(config.attendance_file())?,
            DiskPhotoStore::new(config.clone()),
        ))
    }
}

impl<E, A, P> AttendanceService<E, A, P>
where
    E: EmployeeRepository,
    A: AttendanceRepository,
    P: PhotoStore,
{
    pub fn new(employees: E, attendance: A, photos: P) -> Self {
        Self {
            employees,
            attendance,
            photos,
        }
    }

    pub fn employees(&self) -> &[Employee] {
        self.employees.employees()
    }

    pub fn attendance_rows(&self) -> &[AttendanceRecord] {
        self.attendance.records()
    }

    /// Ids offered for deletion, in first-seen order.
    pub fn deletable_ids(&self) -> Vec<String> {
        self.attendance.distinct_employee_ids()
    }

    /// Registers an employee; duplicate ids are accepted.
    pub fn register_employee(
        &mut self,
        id: &str,
        name: &str,
        position: &str,
    ) -> ServiceResult<Employee> {
        Ok(self.employees.register(id, name, position)?)
    }

    /// Resolves the first roster row with `id`.
    pub fn employee_profile(&self, id: &str) -> ServiceResult<&Employee> {
        if self.employees.employees().is_empty() {
            return Err(LookupError::NoEmployees.into());
        }
        self.employees
            .find(id)
            .ok_or_else(|| LookupError::UnknownEmployee(id.to_string()).into())
    }

    /// Records one check-in/out with its photo.
    pub fn submit_attendance(
        &mut self,
        submission: AttendanceSubmission,
    ) -> ServiceResult<RecordedAttendance> {
        let started_at = Instant::now();
        let employee = self.employee_profile(&submission.employee_id)?.clone();

        if let Err(err) = submission.validate() {
            warn!(
                "event=attendance_submit module=service status=rejected employee_id={} reason={}",
                employee.id, err
            );
            return Err(err.into());
        }

        let photo_path = self
            .photos
            .save(&employee.id, &submission.photo.bytes)
            .map_err(AttendanceError::from)?;

        let record = AttendanceRecord {
            id: employee.id.clone(),
            name: employee.name.clone(),
            date: submission.date,
            time: submission.time,
            status: submission.status,
            photo: photo_path.display().to_string(),
            location: submission.location,
        };
        self.attendance.append(record.clone())?;

        info!(
            "event=attendance_submit module=service status=ok employee_id={} attendance_status={} duration_ms={}",
            employee.id,
            record.status,
            started_at.elapsed().as_millis()
        );
        Ok(RecordedAttendance {
            record,
            position: employee.position,
        })
    }

    /// Daily counts over the loaded attendance table.
    pub fn dashboard(&self) -> ServiceResult<DailySummary> {
        Ok(summarize(self.attendance.records())?)
    }

    /// Removes every attendance row for `employee_id`.
    ///
    /// Succeeds with `removed == 0` when nothing matched.
    pub fn delete_attendance(&mut self, employee_id: &str) -> ServiceResult<DeletionOutcome> {
        let removed = self.attendance.delete_by_employee_id(employee_id)?;
        Ok(DeletionOutcome {
            employee_id: employee_id.to_string(),
            removed,
        })
    }
}
