//! Daily attendance counts for the dashboard table and chart.

use crate::model::attendance::AttendanceRecord;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Dashboard has nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardError {
    NoData,
}

impl Display for DashboardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoData => write!(f, "no attendance data available yet"),
        }
    }
}

impl Error for DashboardError {}

/// Attendance rows recorded on one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub total: usize,
}

/// Per-date counts in ascending date order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySummary {
    rows: Vec<DailyCount>,
}

impl DailySummary {
    /// Table view: one row per distinct date.
    pub fn rows(&self) -> &[DailyCount] {
        &self.rows
    }

    /// Chart view: `YYYY-MM-DD` labels paired index-wise with counts.
    pub fn series(&self) -> (Vec<String>, Vec<usize>) {
        self.rows
            .iter()
            .map(|row| (row.date.format("%Y-%m-%d").to_string(), row.total))
            .unzip()
    }

    /// Sum of all daily counts.
    pub fn total(&self) -> usize {
        self.rows.iter().map(|row| row.total).sum()
    }
}

/// Groups `records` by calendar date and counts each group.
///
/// # Errors
/// `DashboardError::NoData` when `records` is empty.
pub fn summarize(records: &[AttendanceRecord]) -> Result<DailySummary, DashboardError> {
    if records.is_empty() {
        return Err(DashboardError::NoData);
    }

    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.date).or_default() += 1;
    }

    Ok(DailySummary {
        rows: counts
            .into_iter()
            .map(|(date, total)| DailyCount { date, total })
            .collect(),
    })
}
