//! Data root configuration and derived storage paths.
//!
//! The data root is the only configurable value. Everything else (file
//! names, photo layout) is fixed relative to it.

use std::path::{Path, PathBuf};

/// Default data root, relative to the working directory.
pub const DEFAULT_DATA_ROOT: &str = "data";
pub const EMPLOYEE_FILE_NAME: &str = "employees.csv";
pub const ATTENDANCE_FILE_NAME: &str = "attendance.csv";

/// Storage locations for one attendance deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceConfig {
    pub data_root: PathBuf,
}

impl AttendanceConfig {
    pub fn new(data_root: impl Into<PathBuf>) -> Self {
        Self {
            data_root: data_root.into(),
        }
    }

    pub fn data_root(&self) -> &Path {
        &self.data_root
    }

    /// Roster file: `<data_root>/employees.csv`.
    pub fn employee_file(&self) -> PathBuf {
        self.data_root.join(EMPLOYEE_FILE_NAME)
    }

    /// Attendance log file: `<data_root>/attendance.csv`.
    pub fn attendance_file(&self) -> PathBuf {
        self.data_root.join(ATTENDANCE_FILE_NAME)
    }

    /// Per-employee photo directory: `<data_root>/<employee_id>`.
    ///
    /// The id is used verbatim as a directory name.
    pub fn photo_dir(&self, employee_id: &str) -> PathBuf {
        self.data_root.join(employee_id)
    }
}

impl Default for AttendanceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_ROOT)
    }
}
