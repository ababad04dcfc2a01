//! Use-case boundary between the presentation layer and core storage.
//!
//! # Responsibility
//! - Expose register, submit, dashboard and delete as single calls.
//! - Convert every expected failure into a typed `AttendanceError`.
//!
//! # Invariants
//! - Submission writes the photo before touching the attendance table.
//! - Nothing is retried; failures surface to the caller as-is.

use crate::dashboard::DashboardError;
use crate::model::validation::ValidationError;
use crate::photo::PhotoError;
use crate::repo::RepoError;
use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod attendance_service;

pub type ServiceResult<T> = Result<T, AttendanceError>;

/// Referenced employee could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Roster holds no employees at all.
    NoEmployees,
    /// Roster has no row with this id.
    UnknownEmployee(String),
}

impl Display for LookupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoEmployees => write!(f, "no employees registered yet"),
            Self::UnknownEmployee(id) => write!(f, "employee not found: {id}"),
        }
    }
}

impl Error for LookupError {}

/// Failure returned by every attendance use case.
#[derive(Debug)]
pub enum AttendanceError {
    Validation(ValidationError),
    Lookup(LookupError),
    Store(StoreError),
    Photo(PhotoError),
    NoData,
}

impl AttendanceError {
    /// Stable error code: `validation|lookup|storage|no_data`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Lookup(_) => "lookup",
            Self::Store(_) | Self::Photo(_) => "storage",
            Self::NoData => "no_data",
        }
    }
}

impl Display for AttendanceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Lookup(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "error saving data: {err}"),
            Self::Photo(err) => write!(f, "error saving attendance: {err}"),
            Self::NoData => write!(f, "{}", DashboardError::NoData),
        }
    }
}

impl Error for AttendanceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Lookup(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Photo(err) => Some(err),
            Self::NoData => None,
        }
    }
}

impl From<ValidationError> for AttendanceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<LookupError> for AttendanceError {
    fn from(value: LookupError) -> Self {
        Self::Lookup(value)
    }
}

impl From<PhotoError> for AttendanceError {
    fn from(value: PhotoError) -> Self {
        Self::Photo(value)
    }
}

impl From<DashboardError> for AttendanceError {
    fn from(value: DashboardError) -> Self {
        match value {
            DashboardError::NoData => Self::NoData,
        }
    }
}

impl From<RepoError> for AttendanceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            RepoError::Store(err) => Self::Store(err),
        }
    }
}
