//! In-memory tables backed by whole-file CSV persistence.
//!
//! # Responsibility
//! - Own the loaded roster and attendance tables for one interaction cycle.
//! - Keep load, mutate and persist as separate steps.
//!
//! # Invariants
//! - Every mutation persists the full table before returning.
//! - A failed persist restores the in-memory table to its prior rows.

use crate::model::validation::ValidationError;
use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod attendance_repo;
pub mod employee_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository failure: rejected input or storage I/O.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    Store(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
