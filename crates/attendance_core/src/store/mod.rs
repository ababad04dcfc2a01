//! Tabular storage bootstrap and whole-file CSV I/O.
//!
//! # Responsibility
//! - Create the data root and both tabular files on first run.
//! - Read a whole table into memory and overwrite a whole table from memory.
//!
//! # Invariants
//! - Every file written by this module starts with its header row.
//! - Writes replace the entire file; there is no append path.
//! - No locking: concurrent writers race and the last full write wins.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod init;
mod table;

pub use init::init_storage;
pub use table::{read_table, write_table};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure reading or writing a tabular file.
#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Csv {
        path: PathBuf,
        source: csv::Error,
    },
    InvalidData(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Csv { path, source } => write!(f, "{}: {source}", path.display()),
            Self::InvalidData(message) => write!(f, "invalid stored data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::InvalidData(_) => None,
        }
    }
}
