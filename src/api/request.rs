//! Request types for the Leave Accrual Engine API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeProfile, LeaveRecord};

/// Request body for both `/leave-summary` endpoints.
///
/// `records` is optional on the wire so that a missing list can be told
/// apart from an empty one: an employee with no leave sends `[]`, while a
/// caller whose leave fetch failed sends nothing or `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// The employee the records belong to.
    pub employee: EmployeeProfile,
    /// The employee's leave records.
    #[serde(default)]
    pub records: Option<Vec<LeaveRecord>>,
    /// The date to compute balances for. Defaults to today (UTC).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of: Option<NaiveDate>,
}

impl SummaryRequest {
    /// Returns the leave records.
    ///
    /// # Errors
    ///
    /// Returns `MissingInput` if the request carried no records list.
    pub fn records(&self) -> EngineResult<&[LeaveRecord]> {
        self.records
            .as_deref()
            .ok_or_else(|| EngineError::MissingInput {
                field: "records".to_string(),
            })
    }

    /// Returns the requested date, or `today` if none was given.
    pub fn as_of_or(&self, today: NaiveDate) -> NaiveDate {
        self.as_of.unwrap_or(today)
    }
}
