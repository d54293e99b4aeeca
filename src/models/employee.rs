//! Employee profile model.
//!
//! Only the fields the accrual engine needs are modelled: an identifier
//! and the date the accrual clock starts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::lenient;

/// The slice of an employee record used for leave accrual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    /// Unique identifier for the employee.
    pub id: String,
    /// The date the employee joined. Employee services report this as the
    /// record creation timestamp, so `created_at` is accepted too.
    #[serde(
        default,
        alias = "created_at",
        deserialize_with = "lenient::optional_calendar_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub join_date: Option<NaiveDate>,
}

impl EmployeeProfile {
    /// Returns the join date, or `fallback` when the profile has none.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_engine::models::EmployeeProfile;
    /// use chrono::NaiveDate;
    ///
    /// let fallback = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let profile = EmployeeProfile { id: "emp_001".to_string(), join_date: None };
    /// assert_eq!(profile.join_date_or(fallback), fallback);
    /// ```
    pub fn join_date_or(&self, fallback: NaiveDate) -> NaiveDate {
        self.join_date.unwrap_or(fallback)
    }
}
