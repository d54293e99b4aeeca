//! Entry points for the two balance views.

use chrono::NaiveDate;

use crate::config::LeavePolicy;
use crate::models::{EmployeeProfile, LeaveRecord, LeaveSummary, MonthlySummary};

use super::ledger::{ConsumptionTally, LeaveLedger, MonthlyEntitlements, project_monthly};

/// Computes the per-category balances for an employee who joined on
/// `join_date`.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::summarize;
/// use leave_engine::config::LeavePolicy;
/// use leave_engine::models::{DayType, LeaveCategory, LeaveRecord, LeaveStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let records = vec![LeaveRecord {
///     id: None,
///     start_date: NaiveDate::from_ymd_opt(2025, 1, 6),
///     end_date: None,
///     no_of_days: Decimal::from(2),
///     day_type: DayType::FullDay,
///     leave_type: "sick leave".to_string(),
///     status: LeaveStatus::Approved,
///     reason: None,
/// }];
///
/// let summary = summarize(
///     &records,
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
///     &LeavePolicy::default(),
/// );
/// assert_eq!(summary.balance(LeaveCategory::SickLeave).unwrap().used.to_string(), "2.0");
/// ```
pub fn summarize(
    records: &[LeaveRecord],
    join_date: NaiveDate,
    now: NaiveDate,
    policy: &LeavePolicy,
) -> LeaveSummary {
    LeaveLedger::build(records, join_date, now, policy).category_summary()
}

/// Computes the monthly paid/unpaid view against entitlements the caller
/// already knows.
///
/// Use [`LeaveLedger::monthly_summary`] to derive the entitlements from
/// the policy's accrual rates instead.
pub fn summarize_monthly(
    records: &[LeaveRecord],
    entitlements: MonthlyEntitlements,
    now: NaiveDate,
    policy: &LeavePolicy,
) -> MonthlySummary {
    let consumption = ConsumptionTally::tally(records, now, policy, 1);
    let steps = consumption.audit_steps.clone();
    project_monthly(now, &consumption, entitlements, steps)
}

/// Builds the ledger for an employee profile.
///
/// Profiles without a join date fall back to the policy's default join
/// date.
pub fn summarize_for_employee(
    records: &[LeaveRecord],
    profile: &EmployeeProfile,
    now: NaiveDate,
    policy: &LeavePolicy,
) -> LeaveLedger {
    let join_date = profile.join_date_or(policy.defaults().join_date);
    LeaveLedger::build(records, join_date, now, policy)
}
