//! Per-employee photo storage on local disk.
//!
//! # Responsibility
//! - Write one image file per attendance submission.
//! - Return the written path for storage in the attendance row.
//!
//! # Invariants
//! - Layout is `<data_root>/<employee_id>/<employee_id>_<YYYYMMDDHHMMSS>.jpg`.
//! - Two saves for the same employee within one second target the same
//!   file; the later one overwrites the earlier.

use crate::config::AttendanceConfig;
use chrono::{Local, NaiveDateTime};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

const PHOTO_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";
const PHOTO_EXTENSION: &str = "jpg";

/// Photo write failure.
#[derive(Debug)]
pub enum PhotoError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for PhotoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to write photo `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for PhotoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Destination for attendance photos.
pub trait PhotoStore {
    /// Writes `bytes` for `employee_id` stamped with `taken_at`.
    fn save_at(
        &self,
        employee_id: &str,
        bytes: &[u8],
        taken_at: NaiveDateTime,
    ) -> Result<PathBuf, PhotoError>;

    /// Writes `bytes` for `employee_id` stamped with the local clock.
    fn save(&self, employee_id: &str, bytes: &[u8]) -> Result<PathBuf, PhotoError> {
        self.save_at(employee_id, bytes, Local::now().naive_local())
    }
}

/// Photo store writing under the configured data root.
#[derive(Debug, Clone)]
pub struct DiskPhotoStore {
    config: AttendanceConfig,
}

impl DiskPhotoStore {
    pub fn new(config: AttendanceConfig) -> Self {
        Self { config }
    }
}

/// `<employee_id>_<YYYYMMDDHHMMSS>.jpg`
pub fn photo_file_name(employee_id: &str, taken_at: NaiveDateTime) -> String {
    format!(
        "{employee_id}_{}.{PHOTO_EXTENSION}",
        taken_at.format(PHOTO_TIMESTAMP_FORMAT)
    )
}

impl PhotoStore for DiskPhotoStore {
    fn save_at(
        &self,
        employee_id: &str,
        bytes: &[u8],
        taken_at: NaiveDateTime,
    ) -> Result<PathBuf, PhotoError> {
        let dir = self.config.photo_dir(employee_id);
        std::fs::create_dir_all(&dir).map_err(|source| PhotoError::Io {
            path: dir.clone(),
            source,
        })?;

        let path = dir.join(photo_file_name(employee_id, taken_at));
        if let Err(source) = std::fs::write(&path, bytes) {
            error!(
                "event=photo_save module=photo status=error employee_id={} error={}",
                employee_id, source
            );
            return Err(PhotoError::Io { path, source });
        }

        info!(
            "event=photo_save module=photo status=ok employee_id={} bytes={}",
            employee_id,
            bytes.len()
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::{photo_file_name, DiskPhotoStore, PhotoStore};
    use crate::config::AttendanceConfig;
    use chrono::NaiveDate;

    fn at(hour: u32, min: u32, sec: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(hour, min, sec)
            .unwrap()
    }

    #[test]
    fn file_name_uses_compact_second_timestamp() {
        assert_eq!(photo_file_name("E7", at(7, 5, 3)), "E7_20240309070503.jpg");
    }

    #[test]
    fn save_creates_employee_directory_and_writes_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let store = DiskPhotoStore::new(AttendanceConfig::new(dir.path()));

        let path = store.save_at("E1", b"\xff\xd8jpeg", at(9, 0, 0)).unwrap();

        assert_eq!(path, dir.path().join("E1").join("E1_20240309090000.jpg"));
        assert_eq!(std::fs::read(&path).unwrap(), b"\xff\xd8jpeg");
    }

    #[test]
    fn same_second_save_overwrites_previous_photo() {
        let dir = tempfile::tempdir().unwrap();
        let store = DiskPhotoStore::new(AttendanceConfig::new(dir.path()));

        let first = store.save_at("E1", b"first", at(9, 0, 0)).unwrap();
        let second = store.save_at("E1", b"second", at(9, 0, 0)).unwrap();

        assert_eq!(first, second);
        assert_eq!(std::fs::read(&second).unwrap(), b"second");
    }

    #[test]
    fn save_with_local_clock_lands_in_employee_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = DiskPhotoStore::new(AttendanceConfig::new(dir.path()));

        let path = store.save("E2", b"bytes").unwrap();
        assert_eq!(path.parent().unwrap(), dir.path().join("E2"));
        assert!(path.file_name().unwrap().to_str().unwrap().starts_with("E2_"));
    }
}
