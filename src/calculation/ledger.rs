//! The leave ledger.
//!
//! A [`LeaveLedger`] runs tenure, entitlement and consumption once for an
//! employee and projects the result into either output shape: the
//! per-category [`LeaveSummary`] or the paid/unpaid [`MonthlySummary`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::LeavePolicy;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, CategoryBalance, LeaveCategory, LeaveRecord,
    LeaveSummary, MonthlySummary,
};

use super::category::normalize_category;
use super::consumption::consumed_days;
use super::entitlement::{CategoryDays, calculate_entitlements};
use super::rounding::round_half_up;
use super::spillover::{spillover_audit_step, split_paid_unpaid};
use super::tenure::calculate_tenure;

/// Decimal places of the per-category view.
const CATEGORY_VIEW_DP: u32 = 1;

/// Decimal places of the monthly view.
const MONTHLY_VIEW_DP: u32 = 2;

/// Warning code for approved records whose leave type is not recognized.
pub const UNRECOGNIZED_LEAVE_TYPE: &str = "UNRECOGNIZED_LEAVE_TYPE";

/// Warning code for counted records without a usable start date.
pub const MISSING_START_DATE: &str = "MISSING_START_DATE";

/// All-time entitlements used by the monthly view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthlyEntitlements {
    /// Paid leave entitlement across every paid category.
    pub paid_leave: Decimal,
    /// Work-from-home entitlement.
    pub work_from_home: Decimal,
}

/// Days consumed by the approved, recognized records of a list.
#[derive(Debug, Clone, Default)]
pub struct ConsumptionTally {
    /// Days used per category across all time.
    pub used_all_time: CategoryDays,
    /// Paid days used this month, up to the monthly cap.
    pub paid_used_this_month: Decimal,
    /// Paid-category days this month beyond the cap.
    pub unpaid_used_this_month: Decimal,
    /// Work-from-home days used this month.
    pub wfh_used_this_month: Decimal,
    /// Records that counted towards consumption.
    pub counted_records: usize,
    /// Audit steps for spillover decisions and the consumption total.
    pub audit_steps: Vec<AuditStep>,
    /// Warnings for approved records that were excluded or could not be
    /// placed in a month.
    pub warnings: Vec<AuditWarning>,
}

impl ConsumptionTally {
    /// Tallies consumption for `records` as of `now`.
    ///
    /// Only approved records with a recognized category count. They are
    /// visited in start date order so that the monthly cap is applied to the
    /// earliest leave first. Records without a start date count towards
    /// all-time usage only. Audit steps are numbered from `first_step`.
    ///
    /// Totals saturate rather than overflow.
    pub fn tally(
        records: &[LeaveRecord],
        now: NaiveDate,
        policy: &LeavePolicy,
        first_step: u32,
    ) -> Self {
        let cap = policy.monthly().paid_leave_cap;
        let mut tally = Self::default();
        let mut step_number = first_step;

        let mut counted: Vec<(&LeaveRecord, LeaveCategory)> = Vec::new();
        for record in records.iter().filter(|r| r.is_approved()) {
            match normalize_category(&record.leave_type, policy) {
                Some(category) => counted.push((record, category)),
                None => {
                    warn!(
                        record_id = record.id.as_deref().unwrap_or("-"),
                        leave_type = %record.leave_type,
                        "Excluding approved leave with unrecognized type"
                    );
                    tally.warnings.push(AuditWarning {
                        code: UNRECOGNIZED_LEAVE_TYPE.to_string(),
                        message: format!(
                            "Approved leave {}{} has unrecognized type '{}' and was not counted",
                            record_label(record),
                            start_label(record),
                            record.leave_type
                        ),
                        severity: "medium".to_string(),
                    });
                }
            }
        }
        counted.sort_by_key(|(record, _)| record.start_date);

        for (record, category) in &counted {
            let days = consumed_days(record);
            tally.used_all_time.add(*category, days);

            if record.start_date.is_none() {
                warn!(
                    record_id = record.id.as_deref().unwrap_or("-"),
                    "Approved leave without a start date counted towards all-time usage only"
                );
                tally.warnings.push(AuditWarning {
                    code: MISSING_START_DATE.to_string(),
                    message: format!(
                        "Approved {} leave {}has no usable start date and was not counted towards this month",
                        category.label(),
                        record_label(record)
                    ),
                    severity: "low".to_string(),
                });
                continue;
            }

            if !record.starts_in_month_of(now) {
                continue;
            }

            if !category.is_paid_leave() {
                tally.wfh_used_this_month = tally.wfh_used_this_month.saturating_add(days);
                continue;
            }

            let paid_before = tally.paid_used_this_month;
            let split = split_paid_unpaid(paid_before, days, cap);
            tally.paid_used_this_month = paid_before.saturating_add(split.paid);
            tally.unpaid_used_this_month = tally.unpaid_used_this_month.saturating_add(split.unpaid);

            if split.spilled() {
                tally.audit_steps.push(spillover_audit_step(
                    record.id.as_deref(),
                    paid_before,
                    days,
                    cap,
                    split,
                    step_number,
                ));
                step_number += 1;
            }
        }
        tally.counted_records = counted.len();

        let used = &tally.used_all_time;
        tally.audit_steps.push(AuditStep {
            step_number,
            rule_id: "leave_consumption".to_string(),
            rule_name: "Leave Consumption".to_string(),
            policy_ref: "monthly.paid_leave_cap".to_string(),
            input: serde_json::json!({
                "records": records.len(),
                "counted": tally.counted_records,
                "unrecognized": tally
                    .warnings
                    .iter()
                    .filter(|w| w.code == UNRECOGNIZED_LEAVE_TYPE)
                    .count(),
                "as_of": now.to_string()
            }),
            output: serde_json::json!({
                "sick_leave": used.sick_leave.normalize().to_string(),
                "casual_leave": used.casual_leave.normalize().to_string(),
                "work_from_home": used.work_from_home.normalize().to_string(),
                "paid_used_this_month": tally.paid_used_this_month.normalize().to_string(),
                "unpaid_used_this_month": tally.unpaid_used_this_month.normalize().to_string(),
                "wfh_used_this_month": tally.wfh_used_this_month.normalize().to_string()
            }),
            reasoning: format!(
                "{} of {} records are approved with a recognized type; {} paid and {} unpaid days this month",
                tally.counted_records,
                records.len(),
                tally.paid_used_this_month.normalize(),
                tally.unpaid_used_this_month.normalize()
            ),
        });

        tally
    }
}

/// `"<id> "` for records that carry an id.
fn record_label(record: &LeaveRecord) -> String {
    record
        .id
        .as_deref()
        .map(|id| format!("{} ", id))
        .unwrap_or_default()
}

fn start_label(record: &LeaveRecord) -> String {
    match record.start_date {
        Some(start) => format!("starting {}", start),
        None => "without a start date".to_string(),
    }
}

/// Entitlement and consumption for one employee as of one date.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::LeaveLedger;
/// use leave_engine::config::LeavePolicy;
/// use leave_engine::models::LeaveCategory;
/// use chrono::NaiveDate;
///
/// let policy = LeavePolicy::default();
/// let join = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let now = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
///
/// let ledger = LeaveLedger::build(&[], join, now, &policy);
/// assert_eq!(ledger.months_worked(), 12);
///
/// let summary = ledger.category_summary();
/// let sick = summary.balance(LeaveCategory::SickLeave).unwrap();
/// assert_eq!(sick.total.to_string(), "12.0");
/// assert_eq!(sick.used.to_string(), "0.0");
/// ```
#[derive(Debug, Clone)]
pub struct LeaveLedger {
    as_of: NaiveDate,
    join_date: NaiveDate,
    months_worked: u32,
    entitlements: CategoryDays,
    consumption: ConsumptionTally,
    steps: Vec<AuditStep>,
}

impl LeaveLedger {
    /// Builds the ledger for `records` of an employee who joined on
    /// `join_date`.
    pub fn build(
        records: &[LeaveRecord],
        join_date: NaiveDate,
        now: NaiveDate,
        policy: &LeavePolicy,
    ) -> Self {
        let tenure = calculate_tenure(join_date, now, policy.tenure(), 1);
        let entitlement = calculate_entitlements(tenure.months_worked, policy.accrual(), 2);
        let consumption = ConsumptionTally::tally(records, now, policy, 3);

        debug!(
            months_worked = tenure.months_worked,
            records = records.len(),
            counted = consumption.counted_records,
            "Built leave ledger"
        );

        let mut steps = vec![tenure.audit_step, entitlement.audit_step];
        steps.extend(consumption.audit_steps.iter().cloned());

        Self {
            as_of: now,
            join_date,
            months_worked: tenure.months_worked,
            entitlements: entitlement.entitlements,
            consumption,
            steps,
        }
    }

    /// The date the ledger was built for.
    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    /// The join date accrual started from.
    pub fn join_date(&self) -> NaiveDate {
        self.join_date
    }

    /// Whole months of accrual.
    pub fn months_worked(&self) -> u32 {
        self.months_worked
    }

    /// Unrounded entitlement per category.
    pub fn entitlements(&self) -> &CategoryDays {
        &self.entitlements
    }

    /// Unrounded consumption.
    pub fn consumption(&self) -> &ConsumptionTally {
        &self.consumption
    }

    /// Entitlements of the monthly view, derived from the accrual rates.
    ///
    /// Paid leave is the sum over every paid category.
    pub fn monthly_entitlements(&self) -> MonthlyEntitlements {
        MonthlyEntitlements {
            paid_leave: self.entitlements.paid_total(),
            work_from_home: self.entitlements.work_from_home,
        }
    }

    /// Projects the per-category view.
    pub fn category_summary(&self) -> LeaveSummary {
        let balances = LeaveCategory::ALL
            .into_iter()
            .map(|category| CategoryBalance {
                category,
                label: category.label().to_string(),
                used: round_half_up(
                    self.consumption.used_all_time.get(category),
                    CATEGORY_VIEW_DP,
                ),
                total: round_half_up(self.entitlements.get(category), CATEGORY_VIEW_DP),
            })
            .collect();

        LeaveSummary {
            as_of: self.as_of,
            months_worked: self.months_worked,
            balances,
            audit_trace: AuditTrace {
                steps: self.steps.clone(),
                warnings: self.consumption.warnings.clone(),
            },
        }
    }

    /// Projects the monthly view using the ledger's own entitlements.
    pub fn monthly_summary(&self) -> MonthlySummary {
        self.monthly_summary_with(self.monthly_entitlements())
    }

    /// Projects the monthly view against entitlements computed elsewhere.
    pub fn monthly_summary_with(&self, entitlements: MonthlyEntitlements) -> MonthlySummary {
        project_monthly(self.as_of, &self.consumption, entitlements, self.steps.clone())
    }
}

/// Builds the monthly view from a tally, appending a projection step to
/// `steps`.
pub(crate) fn project_monthly(
    as_of: NaiveDate,
    consumption: &ConsumptionTally,
    entitlements: MonthlyEntitlements,
    mut steps: Vec<AuditStep>,
) -> MonthlySummary {
    let paid_used_all_time = consumption.used_all_time.paid_total();
    let wfh_used_all_time = consumption.used_all_time.work_from_home;

    let paid_left = entitlements
        .paid_leave
        .saturating_sub(paid_used_all_time)
        .max(Decimal::ZERO);
    let wfh_left = entitlements
        .work_from_home
        .saturating_sub(wfh_used_all_time)
        .max(Decimal::ZERO);

    let step_number = steps.last().map_or(1, |step| step.step_number + 1);
    steps.push(AuditStep {
        step_number,
        rule_id: "monthly_balance".to_string(),
        rule_name: "Monthly Balance".to_string(),
        policy_ref: "monthly".to_string(),
        input: serde_json::json!({
            "paid_entitlement": entitlements.paid_leave.normalize().to_string(),
            "wfh_entitlement": entitlements.work_from_home.normalize().to_string(),
            "paid_used_all_time": paid_used_all_time.normalize().to_string(),
            "wfh_used_all_time": wfh_used_all_time.normalize().to_string()
        }),
        output: serde_json::json!({
            "paid_left": paid_left.normalize().to_string(),
            "wfh_left": wfh_left.normalize().to_string()
        }),
        reasoning: format!(
            "Paid: {} - {} = {} left; WFH: {} - {} = {} left",
            entitlements.paid_leave.normalize(),
            paid_used_all_time.normalize(),
            paid_left.normalize(),
            entitlements.work_from_home.normalize(),
            wfh_used_all_time.normalize(),
            wfh_left.normalize()
        ),
    });

    MonthlySummary {
        as_of,
        paid_used: round_half_up(consumption.paid_used_this_month, MONTHLY_VIEW_DP),
        unpaid_used: round_half_up(consumption.unpaid_used_this_month, MONTHLY_VIEW_DP),
        paid_left: round_half_up(paid_left, MONTHLY_VIEW_DP),
        wfh_left: round_half_up(wfh_left, MONTHLY_VIEW_DP),
        audit_trace: AuditTrace {
            steps,
            warnings: consumption.warnings.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayType, LeaveStatus};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(id: &str, start: NaiveDate, days: &str, leave_type: &str) -> LeaveRecord {
        LeaveRecord {
            id: Some(id.to_string()),
            start_date: Some(start),
            end_date: None,
            no_of_days: dec(days),
            day_type: DayType::FullDay,
            leave_type: leave_type.to_string(),
            status: LeaveStatus::Approved,
            reason: None,
        }
    }

    fn now() -> NaiveDate {
        date(2025, 1, 20)
    }

    fn join() -> NaiveDate {
        date(2024, 1, 1)
    }

    #[test]
    fn test_tally_spills_over_cap_in_start_date_order() {
        let policy = LeavePolicy::default();
        // Listed out of order: the 1-day record started first and is capped first.
        let records = vec![
            record("lv_002", date(2025, 1, 13), "2", "casual"),
            record("lv_001", date(2025, 1, 6), "1", "sick"),
        ];

        let tally = ConsumptionTally::tally(&records, now(), &policy, 1);

        assert_eq!(tally.paid_used_this_month, dec("1.5"));
        assert_eq!(tally.unpaid_used_this_month, dec("1.5"));
        assert_eq!(tally.used_all_time.sick_leave, dec("1"));
        assert_eq!(tally.used_all_time.casual_leave, dec("2"));

        assert_eq!(tally.audit_steps.len(), 2);
        assert_eq!(tally.audit_steps[0].rule_id, "monthly_spillover");
        assert_eq!(tally.audit_steps[0].input["record_id"].as_str(), Some("lv_002"));
        assert_eq!(tally.audit_steps[1].rule_id, "leave_consumption");
        assert_eq!(tally.audit_steps[1].step_number, 2);
    }

    #[test]
    fn test_tally_previous_months_do_not_touch_monthly_cap() {
        let policy = LeavePolicy::default();
        let records = vec![
            record("lv_001", date(2024, 12, 2), "3", "sick"),
            record("lv_002", date(2024, 1, 8), "1", "casual"),
        ];

        let tally = ConsumptionTally::tally(&records, now(), &policy, 1);

        assert_eq!(tally.paid_used_this_month, Decimal::ZERO);
        assert_eq!(tally.unpaid_used_this_month, Decimal::ZERO);
        assert_eq!(tally.used_all_time.paid_total(), dec("4"));
    }

    #[test]
    fn test_tally_same_month_of_another_year_is_not_this_month() {
        let policy = LeavePolicy::default();
        let records = vec![record("lv_001", date(2024, 1, 22), "2", "sick")];

        let tally = ConsumptionTally::tally(&records, now(), &policy, 1);
        assert_eq!(tally.paid_used_this_month, Decimal::ZERO);
    }

    #[test]
    fn test_tally_wfh_is_never_capped() {
        let policy = LeavePolicy::default();
        let records = vec![record("lv_001", date(2025, 1, 6), "5", "wfh")];

        let tally = ConsumptionTally::tally(&records, now(), &policy, 1);

        assert_eq!(tally.wfh_used_this_month, dec("5"));
        assert_eq!(tally.paid_used_this_month, Decimal::ZERO);
        assert_eq!(tally.unpaid_used_this_month, Decimal::ZERO);
    }

    #[test]
    fn test_tally_warns_for_unrecognized_approved_records_only() {
        let policy = LeavePolicy::default();
        let mut pending = record("lv_002", date(2025, 1, 6), "1", "Bereavement");
        pending.status = LeaveStatus::Pending;
        let records = vec![record("lv_001", date(2025, 1, 6), "1", "Festival"), pending];

        let tally = ConsumptionTally::tally(&records, now(), &policy, 1);

        assert_eq!(tally.counted_records, 0);
        assert_eq!(tally.used_all_time, CategoryDays::default());
        assert_eq!(tally.warnings.len(), 1);
        assert_eq!(tally.warnings[0].code, UNRECOGNIZED_LEAVE_TYPE);
        assert!(tally.warnings[0].message.contains("Festival"));
        assert!(tally.warnings[0].message.contains("lv_001"));
    }

    #[test]
    fn test_ledger_step_numbers_are_sequential() {
        let policy = LeavePolicy::default();
        let records = vec![
            record("lv_001", date(2025, 1, 6), "1", "sick"),
            record("lv_002", date(2025, 1, 8), "2", "sick"),
        ];

        let ledger = LeaveLedger::build(&records, join(), now(), &policy);
        let summary = ledger.monthly_summary();

        let numbers: Vec<u32> = summary
            .audit_trace
            .steps
            .iter()
            .map(|step| step.step_number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
        assert_eq!(summary.audit_trace.steps[4].rule_id, "monthly_balance");
    }

    #[test]
    fn test_category_summary_rounds_to_one_decimal() {
        let policy = LeavePolicy::default();
        let mut half = record("lv_001", date(2024, 6, 3), "1", "casual");
        half.day_type = DayType::HalfDay;
        let records = vec![half, record("lv_002", date(2024, 7, 1), "2", "sick leave")];

        let summary = LeaveLedger::build(&records, join(), now(), &policy).category_summary();

        let labels: Vec<LeaveCategory> = summary.balances.iter().map(|b| b.category).collect();
        assert_eq!(labels, LeaveCategory::ALL.to_vec());

        let casual = summary.balance(LeaveCategory::CasualLeave).unwrap();
        assert_eq!(casual.used.to_string(), "0.5");
        assert_eq!(casual.total.to_string(), "6.0");

        let sick = summary.balance(LeaveCategory::SickLeave).unwrap();
        assert_eq!(sick.used.to_string(), "2.0");
    }

    #[test]
    fn test_monthly_summary_uses_ledger_entitlements() {
        let policy = LeavePolicy::default();
        let records = vec![
            record("lv_001", date(2025, 1, 6), "1", "sick"),
            record("lv_002", date(2025, 1, 8), "2", "casual"),
            record("lv_003", date(2024, 11, 4), "3", "wfh"),
        ];

        let ledger = LeaveLedger::build(&records, join(), now(), &policy);
        assert_eq!(
            ledger.monthly_entitlements(),
            MonthlyEntitlements {
                paid_leave: dec("18"),
                work_from_home: dec("12"),
            }
        );

        let summary = ledger.monthly_summary();
        assert_eq!(summary.paid_used.to_string(), "1.50");
        assert_eq!(summary.unpaid_used.to_string(), "1.50");
        assert_eq!(summary.paid_left.to_string(), "15.00");
        assert_eq!(summary.wfh_left.to_string(), "9.00");
    }

    #[test]
    fn test_monthly_left_never_negative() {
        let policy = LeavePolicy::default();
        let records = vec![record("lv_001", date(2024, 3, 4), "40", "sick")];

        let ledger = LeaveLedger::build(&records, join(), now(), &policy);
        let summary = ledger.monthly_summary_with(MonthlyEntitlements {
            paid_leave: dec("18"),
            work_from_home: dec("12"),
        });

        assert_eq!(summary.paid_left, Decimal::ZERO);
        assert_eq!(summary.paid_left.to_string(), "0.00");
    }

    #[test]
    fn test_tally_counts_undated_record_all_time_only() {
        let policy = LeavePolicy::default();
        let mut undated = record("lv_002", now(), "3", "sick");
        undated.start_date = None;
        let records = vec![record("lv_001", date(2025, 1, 6), "2", "sick"), undated];

        let tally = ConsumptionTally::tally(&records, now(), &policy, 1);

        assert_eq!(tally.counted_records, 2);
        assert_eq!(tally.used_all_time.sick_leave, dec("5"));
        assert_eq!(tally.paid_used_this_month, dec("1.5"));
        assert_eq!(tally.unpaid_used_this_month, dec("0.5"));
        assert_eq!(tally.warnings.len(), 1);
        assert_eq!(tally.warnings[0].code, MISSING_START_DATE);
        assert!(tally.warnings[0].message.contains("lv_002"));
        assert_eq!(tally.audit_steps.last().unwrap().input["unrecognized"], 0);
    }

    #[test]
    fn test_unrecognized_undated_record_warns_once() {
        let policy = LeavePolicy::default();
        let mut undated = record("lv_001", now(), "1", "");
        undated.start_date = None;

        let tally = ConsumptionTally::tally(&[undated], now(), &policy, 1);

        assert_eq!(tally.counted_records, 0);
        assert_eq!(tally.warnings.len(), 1);
        assert_eq!(tally.warnings[0].code, UNRECOGNIZED_LEAVE_TYPE);
        assert!(tally.warnings[0].message.contains("without a start date"));
    }

    #[test]
    fn test_huge_day_counts_saturate_instead_of_panicking() {
        let policy = LeavePolicy::default();
        let records = vec![
            record("lv_001", date(2025, 1, 6), "50000000000000000000000000000", "sick"),
            record("lv_002", date(2025, 1, 7), "50000000000000000000000000000", "sick"),
            record("lv_003", date(2024, 5, 6), "50000000000000000000000000000", "wfh"),
            record("lv_004", date(2025, 1, 8), "50000000000000000000000000000", "wfh"),
        ];

        let ledger = LeaveLedger::build(&records, join(), now(), &policy);
        let summary = ledger.category_summary();
        let monthly = ledger.monthly_summary();

        assert_eq!(ledger.consumption().used_all_time.sick_leave, Decimal::MAX);
        assert_eq!(ledger.consumption().wfh_used_this_month, dec("50000000000000000000000000000"));
        assert!(summary.balances.iter().all(|b| b.used >= Decimal::ZERO));
        assert_eq!(monthly.paid_used, dec("1.5"));
        assert_eq!(monthly.paid_left, Decimal::ZERO);
        assert_eq!(monthly.wfh_left, Decimal::ZERO);
    }
}
