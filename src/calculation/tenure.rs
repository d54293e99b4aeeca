//! Tenure calculation functionality.
//!
//! Converts a join date into the number of whole months of leave accrual an
//! employee has earned as of a given date.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::config::TenureRules;
use crate::models::AuditStep;

/// The result of a tenure calculation, including the months and audit step.
#[derive(Debug, Clone)]
pub struct TenureResult {
    /// The join date the calculation started from.
    pub join_date: NaiveDate,
    /// Whole months of accrual, within `[0, max_accrual_months]`.
    pub months_worked: u32,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the whole months of accrual between `join_date` and `now`.
///
/// The calendar-month difference is reduced by one while `now` is before the
/// vesting day of its month, then clamped to `[0, max_accrual_months]`. A
/// join date after `now` yields zero.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::compute_months_worked;
/// use leave_engine::config::TenureRules;
/// use chrono::NaiveDate;
///
/// let rules = TenureRules { vesting_day: 15, max_accrual_months: 12 };
/// let join = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
///
/// let on_20th = NaiveDate::from_ymd_opt(2024, 7, 20).unwrap();
/// let on_10th = NaiveDate::from_ymd_opt(2024, 7, 10).unwrap();
/// assert_eq!(compute_months_worked(join, on_20th, &rules), 6);
/// assert_eq!(compute_months_worked(join, on_10th, &rules), 5);
/// ```
pub fn compute_months_worked(join_date: NaiveDate, now: NaiveDate, rules: &TenureRules) -> u32 {
    unclamped_months(join_date, now, rules).clamp(0, i64::from(rules.max_accrual_months)) as u32
}

fn unclamped_months(join_date: NaiveDate, now: NaiveDate, rules: &TenureRules) -> i64 {
    let months = i64::from(now.year() - join_date.year()) * 12
        + (i64::from(now.month()) - i64::from(join_date.month()));

    if now.day() < rules.vesting_day {
        months - 1
    } else {
        months
    }
}

/// Calculates tenure and records an audit step for it.
pub fn calculate_tenure(
    join_date: NaiveDate,
    now: NaiveDate,
    rules: &TenureRules,
    step_number: u32,
) -> TenureResult {
    let months_worked = compute_months_worked(join_date, now, rules);
    let before_vesting = now.day() < rules.vesting_day;
    let capped = unclamped_months(join_date, now, rules) > i64::from(rules.max_accrual_months);

    debug!(
        join_date = %join_date,
        as_of = %now,
        months_worked,
        "Computed months worked"
    );

    let reasoning = if join_date > now {
        format!("Join date {} is after {}; no months accrued", join_date, now)
    } else {
        let mut reasoning = format!(
            "Calendar months from {} to {}{}",
            join_date,
            now,
            if before_vesting {
                format!(
                    ", less one because day {} is before vesting day {}",
                    now.day(),
                    rules.vesting_day
                )
            } else {
                String::new()
            }
        );
        if capped {
            reasoning.push_str(&format!(", capped at {} months", rules.max_accrual_months));
        }
        reasoning.push_str(&format!(" = {} months", months_worked));
        reasoning
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "tenure".to_string(),
        rule_name: "Months Worked".to_string(),
        policy_ref: "tenure".to_string(),
        input: serde_json::json!({
            "join_date": join_date.to_string(),
            "as_of": now.to_string(),
            "vesting_day": rules.vesting_day,
            "max_accrual_months": rules.max_accrual_months
        }),
        output: serde_json::json!({
            "months_worked": months_worked,
            "before_vesting_day": before_vesting,
            "capped": capped
        }),
        reasoning,
    };

    TenureResult {
        join_date,
        months_worked,
        audit_step,
    }
}
