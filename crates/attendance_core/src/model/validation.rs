//! Input validation failures shared by registration and submission.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Photo file extensions accepted on upload (case-insensitive).
pub const ACCEPTED_PHOTO_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// A required input was missing or unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field was empty or whitespace only.
    MissingField(&'static str),
    /// Photo upload carried zero bytes.
    EmptyPhoto,
    /// Photo file name does not end in an accepted image extension.
    UnsupportedPhotoType(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "{field} is required"),
            Self::EmptyPhoto => write!(f, "photo is required"),
            Self::UnsupportedPhotoType(name) => write!(
                f,
                "unsupported photo type `{name}`; expected one of {}",
                ACCEPTED_PHOTO_EXTENSIONS.join("|")
            ),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

pub(crate) fn require_photo_extension(file_name: &str) -> Result<(), ValidationError> {
    let accepted = file_name
        .rsplit_once('.')
        .map(|(_, ext)| {
            ACCEPTED_PHOTO_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
        .unwrap_or(false);

    if accepted {
        Ok(())
    } else {
        Err(ValidationError::UnsupportedPhotoType(file_name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{require, require_photo_extension, ValidationError};

    #[test]
    fn require_rejects_blank_values() {
        assert_eq!(require("Name", "Ada"), Ok(()));
        assert_eq!(
            require("Name", "   "),
            Err(ValidationError::MissingField("Name"))
        );
    }

    #[test]
    fn photo_extension_filter_is_case_insensitive() {
        assert!(require_photo_extension("badge.JPG").is_ok());
        assert!(require_photo_extension("selfie.png").is_ok());
        assert!(require_photo_extension("scan.jpeg").is_ok());
        assert!(matches!(
            require_photo_extension("notes.txt"),
            Err(ValidationError::UnsupportedPhotoType(name)) if name == "notes.txt"
        ));
        assert!(require_photo_extension("jpg").is_err());
    }
}
