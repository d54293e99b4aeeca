//! Leave category model.
//!
//! Leave requests arrive with free-form labels; the engine only ever
//! accounts against this closed set of categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A canonical leave category.
///
/// # Example
///
/// ```
/// use leave_engine::models::LeaveCategory;
///
/// assert_eq!(LeaveCategory::WorkFromHome.label(), "WFH");
/// assert!(LeaveCategory::SickLeave.is_paid_leave());
/// assert!(!LeaveCategory::WorkFromHome.is_paid_leave());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveCategory {
    /// Sick leave.
    SickLeave,
    /// Casual leave.
    CasualLeave,
    /// Working from home. Tracked like leave but never paid leave.
    WorkFromHome,
}

impl LeaveCategory {
    /// All categories in display order.
    pub const ALL: [LeaveCategory; 3] = [
        LeaveCategory::SickLeave,
        LeaveCategory::CasualLeave,
        LeaveCategory::WorkFromHome,
    ];

    /// The human-readable label shown on dashboards.
    pub fn label(self) -> &'static str {
        match self {
            LeaveCategory::SickLeave => "Sick Leave",
            LeaveCategory::CasualLeave => "Casual Leave",
            LeaveCategory::WorkFromHome => "WFH",
        }
    }

    /// Returns true for categories that draw on the paid-leave allowance.
    ///
    /// The monthly view collapses every paid category into a single pool.
    pub fn is_paid_leave(self) -> bool {
        !matches!(self, LeaveCategory::WorkFromHome)
    }
}

impl fmt::Display for LeaveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
