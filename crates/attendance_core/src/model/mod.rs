//! Domain records for the employee roster and attendance log.
//!
//! # Responsibility
//! - Define the row shapes persisted in the two tabular stores.
//! - Validate user input before it reaches storage.
//!
//! # Invariants
//! - Attendance rows carry a snapshot of the employee name taken at
//!   submission time; they are never re-joined against the roster.
//! - Employee id uniqueness and attendance-to-roster references are not
//!   enforced.

pub mod attendance;
pub mod employee;
pub mod validation;
