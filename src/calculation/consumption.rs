//! Leave consumption for a single record.

use rust_decimal::Decimal;

use crate::models::{DayType, LeaveRecord};

/// Consumption of a half-day request, regardless of its declared days.
pub const HALF_DAY: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Returns the days a record consumes if it counts.
///
/// A half-day record always consumes 0.5. Otherwise the declared
/// `no_of_days` is used, floored at zero. Whether the record counts at all
/// (approved, recognized category) is decided by the caller.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::consumed_days;
/// use leave_engine::models::{DayType, LeaveRecord, LeaveStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let record = LeaveRecord {
///     id: None,
///     start_date: NaiveDate::from_ymd_opt(2025, 1, 6),
///     end_date: None,
///     no_of_days: Decimal::from(3),
///     day_type: DayType::HalfDay,
///     leave_type: "sick".to_string(),
///     status: LeaveStatus::Approved,
///     reason: None,
/// };
/// assert_eq!(consumed_days(&record), Decimal::from_str("0.5").unwrap());
/// ```
pub fn consumed_days(record: &LeaveRecord) -> Decimal {
    match record.day_type {
        DayType::HalfDay => HALF_DAY,
        DayType::FullDay => record.no_of_days.max(Decimal::ZERO),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LeaveStatus;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn record(day_type: DayType, no_of_days: &str) -> LeaveRecord {
        LeaveRecord {
            id: Some("lv_001".to_string()),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 6),
            end_date: None,
            no_of_days: dec(no_of_days),
            day_type,
            leave_type: "casual".to_string(),
            status: LeaveStatus::Approved,
            reason: None,
        }
    }

    #[test]
    fn test_half_day_constant() {
        assert_eq!(HALF_DAY, dec("0.5"));
    }

    #[test]
    fn test_half_day_ignores_declared_days() {
        assert_eq!(consumed_days(&record(DayType::HalfDay, "3")), dec("0.5"));
        assert_eq!(consumed_days(&record(DayType::HalfDay, "0")), dec("0.5"));
    }

    #[test]
    fn test_full_day_uses_declared_days() {
        assert_eq!(consumed_days(&record(DayType::FullDay, "2")), dec("2"));
        assert_eq!(consumed_days(&record(DayType::FullDay, "1.5")), dec("1.5"));
    }

    #[test]
    fn test_negative_declared_days_consume_nothing() {
        assert_eq!(consumed_days(&record(DayType::FullDay, "-2")), Decimal::ZERO);
    }

    #[test]
    fn test_status_is_not_considered_here() {
        let mut pending = record(DayType::FullDay, "2");
        pending.status = LeaveStatus::Pending;
        assert_eq!(consumed_days(&pending), dec("2"));
    }
}
