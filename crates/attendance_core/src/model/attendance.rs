//! Attendance log record and submission input.
//!
//! # Invariants
//! - `Date` is persisted as `YYYY-MM-DD` and `Time` as `HH:MM:SS`.
//! - Reading tolerates a time-of-day suffix on `Date` cells and drops it.
//! - `name` is a copy taken at submission time, not a live roster join.

use super::validation::{require, require_photo_extension, ValidationError};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Column order of the attendance file.
pub const ATTENDANCE_HEADERS: [&str; 7] =
    ["ID", "Name", "Date", "Time", "Status", "Photo", "Location"];

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// Check-in or check-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AttendanceStatus {
    In,
    Out,
}

impl AttendanceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::In => "IN",
            Self::Out => "OUT",
        }
    }
}

impl Display for AttendanceStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "IN" => Ok(Self::In),
            "OUT" => Ok(Self::Out),
            other => Err(format!("invalid status `{other}`; expected IN|OUT")),
        }
    }
}

/// One persisted check-in/out event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Employee id; not checked against the roster.
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(
        rename = "Date",
        serialize_with = "serialize_date",
        deserialize_with = "deserialize_date"
    )]
    pub date: NaiveDate,
    #[serde(
        rename = "Time",
        serialize_with = "serialize_time",
        deserialize_with = "deserialize_time"
    )]
    pub time: NaiveTime,
    #[serde(rename = "Status")]
    pub status: AttendanceStatus,
    /// Path of the stored photo, relative to the working directory when the
    /// data root is relative.
    #[serde(rename = "Photo")]
    pub photo: String,
    #[serde(rename = "Location")]
    pub location: String,
}

/// Uploaded photo as received from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoUpload {
    /// Original file name; only its extension is inspected.
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl PhotoUpload {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Attendance form input prior to photo storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceSubmission {
    pub employee_id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: AttendanceStatus,
    pub photo: PhotoUpload,
    pub location: String,
}

impl AttendanceSubmission {
    /// Checks photo presence, photo extension and location, in that order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.photo.bytes.is_empty() {
            return Err(ValidationError::EmptyPhoto);
        }
        require_photo_extension(&self.photo.file_name)?;
        require("Location", &self.location)
    }
}

/// Parses a date cell, discarding any time-of-day component.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Some(date);
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Some(datetime.date());
        }
    }
    value
        .split(|ch: char| ch == ' ' || ch == 'T')
        .next()
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, DATE_FORMAT).ok())
}

/// Parses `HH:MM`, `HH:MM:SS` or `HH:MM:SS.fff`.
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    ["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"]
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(value, format).ok())
}

fn serialize_date<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format(DATE_FORMAT))
}

fn deserialize_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_calendar_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date `{raw}`")))
}

fn serialize_time<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&time.format(TIME_FORMAT))
}

fn deserialize_time<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_time_of_day(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid time `{raw}`")))
}
