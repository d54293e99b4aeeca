//! Leave category normalization.

use crate::config::{LeavePolicy, normalize_key};
use crate::models::LeaveCategory;

/// Maps a free-form leave label onto a canonical category.
///
/// The label is trimmed and lowercased, then looked up in the policy's
/// synonym table. `None` means the label is unrecognized; callers exclude
/// such records rather than failing.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::normalize_category;
/// use leave_engine::config::LeavePolicy;
/// use leave_engine::models::LeaveCategory;
///
/// let policy = LeavePolicy::default();
/// assert_eq!(normalize_category("  Sick Leave ", &policy), Some(LeaveCategory::SickLeave));
/// assert_eq!(normalize_category("WFH", &policy), Some(LeaveCategory::WorkFromHome));
/// assert_eq!(normalize_category("Festival", &policy), None);
/// ```
pub fn normalize_category(raw_leave_type: &str, policy: &LeavePolicy) -> Option<LeaveCategory> {
    policy.synonym(&normalize_key(raw_leave_type))
}
