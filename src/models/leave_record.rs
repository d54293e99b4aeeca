//! Leave record model and related types.
//!
//! A [`LeaveRecord`] is one requested or approved absence as returned by the
//! leave service. Its `leave_type` is free text; normalization into a
//! [`LeaveCategory`](super::LeaveCategory) happens in the calculation layer.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::lenient;

/// Whether a leave request covers whole days or a single half day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// One or more whole days.
    #[default]
    #[serde(alias = "fullday", alias = "FullDay")]
    FullDay,
    /// A single half day.
    #[serde(alias = "halfday", alias = "HalfDay")]
    HalfDay,
}

/// The approval state of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting a decision.
    #[serde(alias = "Pending")]
    Pending,
    /// Approved. Only approved records are consumed.
    #[serde(alias = "Approved")]
    Approved,
    /// Rejected.
    #[serde(alias = "Rejected")]
    Rejected,
}

/// One leave request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRecord {
    /// Identifier assigned by the leave service, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// First day of the absence. `None` when the leave service sent no
    /// usable date; such a record still counts towards all-time usage but
    /// never towards the current month.
    #[serde(
        default,
        deserialize_with = "lenient::optional_calendar_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<NaiveDate>,
    /// Last day of the absence; absent for single-day requests.
    #[serde(
        default,
        deserialize_with = "lenient::optional_calendar_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<NaiveDate>,
    /// Declared duration in days. Non-numeric input and counts above
    /// [`MAX_DAYS_PER_RECORD`](super::MAX_DAYS_PER_RECORD) are read as zero.
    #[serde(default, deserialize_with = "lenient::days")]
    pub no_of_days: Decimal,
    /// Full day or half day.
    #[serde(default)]
    pub day_type: DayType,
    /// Free-form category label (e.g. "sick", "Casual Leave", "wfh").
    /// Missing labels read as empty and are never recognized.
    #[serde(default)]
    pub leave_type: String,
    /// Approval state.
    pub status: LeaveStatus,
    /// Reason given by the requester.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl LeaveRecord {
    /// Returns true if the record has been approved.
    pub fn is_approved(&self) -> bool {
        self.status == LeaveStatus::Approved
    }

    /// Returns true if the record starts in the same calendar month and year
    /// as `date`.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_engine::models::{DayType, LeaveRecord, LeaveStatus};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let record = LeaveRecord {
    ///     id: None,
    ///     start_date: NaiveDate::from_ymd_opt(2025, 1, 6),
    ///     end_date: None,
    ///     no_of_days: Decimal::ONE,
    ///     day_type: DayType::FullDay,
    ///     leave_type: "sick".to_string(),
    ///     status: LeaveStatus::Approved,
    ///     reason: None,
    /// };
    /// assert!(record.starts_in_month_of(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()));
    /// assert!(!record.starts_in_month_of(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap()));
    /// ```
    pub fn starts_in_month_of(&self, date: NaiveDate) -> bool {
        self.start_date
            .is_some_and(|start| start.year() == date.year() && start.month() == date.month())
    }
}
