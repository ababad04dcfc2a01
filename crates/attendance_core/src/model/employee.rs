//! Employee roster record.

use super::validation::{require, ValidationError};
use serde::{Deserialize, Serialize};

/// Column order of the roster file.
pub const EMPLOYEE_HEADERS: [&str; 3] = ["ID", "Name", "Position"];

/// One registered employee.
///
/// Created by registration and never edited afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Position")]
    pub position: String,
}

impl Employee {
    /// Builds an employee after checking every field is non-blank.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        position: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let employee = Self {
            id: id.into(),
            name: name.into(),
            position: position.into(),
        };
        employee.validate()?;
        Ok(employee)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("Employee ID", &self.id)?;
        require("Employee Name", &self.name)?;
        require("Position", &self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::Employee;
    use crate::model::validation::ValidationError;

    #[test]
    fn new_rejects_first_blank_field() {
        assert!(Employee::new("E1", "Ada", "Engineer").is_ok());
        assert_eq!(
            Employee::new("E1", "", " ").unwrap_err(),
            ValidationError::MissingField("Employee Name")
        );
    }
}
