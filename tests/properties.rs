//! Property tests for the accrual and consumption rules.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use leave_engine::calculation::{
    LeaveLedger, compute_months_worked, split_paid_unpaid, summarize,
};
use leave_engine::config::LeavePolicy;
use leave_engine::models::{DayType, LeaveCategory, LeaveRecord, LeaveStatus};

const LEAVE_TYPES: [&str; 7] = ["sick", "Sick Leave", "casual", "CASUAL LEAVE", "wfh", "work", "Festival"];

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..3650).prop_map(|offset| base_date() + Days::new(offset))
}

fn status_strategy() -> impl Strategy<Value = LeaveStatus> {
    prop_oneof![
        Just(LeaveStatus::Pending),
        Just(LeaveStatus::Approved),
        Just(LeaveStatus::Rejected),
    ]
}

fn day_type_strategy() -> impl Strategy<Value = DayType> {
    prop_oneof![Just(DayType::FullDay), Just(DayType::HalfDay)]
}

/// Half-day steps between -2 and 10 days.
fn days_strategy() -> impl Strategy<Value = Decimal> {
    (-4i64..=20).prop_map(|halves| Decimal::new(halves * 5, 1))
}

fn record_strategy() -> impl Strategy<Value = LeaveRecord> {
    (
        date_strategy(),
        days_strategy(),
        day_type_strategy(),
        0..LEAVE_TYPES.len(),
        status_strategy(),
    )
        .prop_map(|(start_date, no_of_days, day_type, type_index, status)| LeaveRecord {
            id: None,
            start_date: Some(start_date),
            end_date: None,
            no_of_days,
            day_type,
            leave_type: LEAVE_TYPES[type_index].to_string(),
            status,
            reason: None,
        })
}

fn used(records: &[LeaveRecord], now: NaiveDate) -> Vec<Decimal> {
    let policy = LeavePolicy::default();
    summarize(records, base_date(), now, &policy)
        .balances
        .iter()
        .map(|b| b.used)
        .collect()
}

proptest! {
    #[test]
    fn months_worked_stays_within_bounds(join in date_strategy(), now in date_strategy()) {
        let policy = LeavePolicy::default();
        let months = compute_months_worked(join, now, policy.tenure());
        prop_assert!(months <= policy.tenure().max_accrual_months);
        if join > now {
            prop_assert_eq!(months, 0);
        }
    }

    #[test]
    fn total_is_rate_times_months(join in date_strategy(), now in date_strategy()) {
        let policy = LeavePolicy::default();
        let summary = summarize(&[], join, now, &policy);
        let months = Decimal::from(summary.months_worked);

        for balance in &summary.balances {
            let expected = (policy.accrual().rate(balance.category) * months).round_dp(1);
            prop_assert_eq!(balance.total, expected);
        }
    }

    #[test]
    fn total_never_decreases_with_tenure(join in date_strategy(), now in date_strategy(), later in 0u64..400) {
        let policy = LeavePolicy::default();
        let earlier = LeaveLedger::build(&[], join, now, &policy);
        let after = LeaveLedger::build(&[], join, now + Days::new(later), &policy);

        for category in LeaveCategory::ALL {
            prop_assert!(after.entitlements().get(category) >= earlier.entitlements().get(category));
        }
    }

    #[test]
    fn used_is_never_negative(records in prop::collection::vec(record_strategy(), 0..30), now in date_strategy()) {
        for value in used(&records, now) {
            prop_assert!(value >= Decimal::ZERO);
        }
    }

    #[test]
    fn adding_an_approved_record_never_lowers_used(
        records in prop::collection::vec(record_strategy(), 0..30),
        extra in record_strategy(),
        now in date_strategy(),
    ) {
        let before = used(&records, now);

        let mut extra = extra;
        extra.status = LeaveStatus::Approved;
        let mut more = records.clone();
        more.push(extra);
        let after = used(&more, now);

        for (b, a) in before.iter().zip(after.iter()) {
            prop_assert!(a >= b);
        }
    }

    #[test]
    fn unapproved_records_change_nothing(
        records in prop::collection::vec(record_strategy(), 0..30),
        extra in record_strategy(),
        now in date_strategy(),
    ) {
        prop_assume!(extra.status != LeaveStatus::Approved);
        let mut more = records.clone();
        more.push(extra);
        prop_assert_eq!(used(&records, now), used(&more, now));
    }

    #[test]
    fn spillover_conserves_days(
        paid_halves in 0i64..10,
        day_halves in 0i64..20,
        cap_halves in 0i64..6,
    ) {
        let paid_before = Decimal::new(paid_halves * 5, 1);
        let days = Decimal::new(day_halves * 5, 1);
        let cap = Decimal::new(cap_halves * 5, 1);

        let split = split_paid_unpaid(paid_before, days, cap);
        prop_assert_eq!(split.paid + split.unpaid, days);
        prop_assert!(split.paid >= Decimal::ZERO);
        prop_assert!(split.unpaid >= Decimal::ZERO);
        prop_assert!(paid_before + split.paid <= cap.max(paid_before));
    }

    #[test]
    fn monthly_paid_used_never_exceeds_cap(
        records in prop::collection::vec(record_strategy(), 0..30),
        now in date_strategy(),
    ) {
        let policy = LeavePolicy::default();
        let summary = LeaveLedger::build(&records, base_date(), now, &policy).monthly_summary();

        prop_assert!(summary.paid_used <= policy.monthly().paid_leave_cap);
        prop_assert!(summary.unpaid_used >= Decimal::ZERO);
        prop_assert!(summary.paid_left >= Decimal::ZERO);
        prop_assert!(summary.wfh_left >= Decimal::ZERO);
    }
}
