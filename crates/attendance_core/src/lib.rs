//! Core domain logic for the attendance tracker.
//! Owns the roster, the attendance log, photo storage and the daily dashboard.

pub mod config;
pub mod dashboard;
pub mod logging;
pub mod model;
pub mod photo;
pub mod repo;
pub mod service;
pub mod store;

pub use config::AttendanceConfig;
pub use dashboard::{summarize, DailyCount, DailySummary, DashboardError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::attendance::{
    AttendanceRecord, AttendanceStatus, AttendanceSubmission, PhotoUpload,
};
pub use model::employee::Employee;
pub use model::validation::ValidationError;
pub use photo::{DiskPhotoStore, PhotoError, PhotoStore};
pub use repo::attendance_repo::{AttendanceRepository, CsvAttendanceRepository};
pub use repo::employee_repo::{CsvEmployeeRepository, EmployeeRepository};
pub use repo::{RepoError, RepoResult};
pub use service::attendance_service::{
    AttendanceService, AttendanceSession, DeletionOutcome, RecordedAttendance,
};
pub use service::{AttendanceError, LookupError, ServiceResult};
pub use store::{init_storage, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
