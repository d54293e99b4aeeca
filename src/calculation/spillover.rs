//! Monthly paid-leave cap and spillover to unpaid leave.
//!
//! Paid leave taken within one calendar month is capped. Days of a record
//! that do not fit under the cap are reclassified as unpaid even though the
//! request itself was approved as paid leave.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// How a record's days split between paid and unpaid leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpilloverSplit {
    /// Days counted as paid leave.
    pub paid: Decimal,
    /// Days beyond the monthly cap, counted as unpaid leave.
    pub unpaid: Decimal,
}

impl SpilloverSplit {
    /// Returns true if any days spilled over to unpaid.
    pub fn spilled(&self) -> bool {
        self.unpaid > Decimal::ZERO
    }
}

/// Splits `days` given the paid leave already used this month.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::split_paid_unpaid;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s| Decimal::from_str(s).unwrap();
/// let split = split_paid_unpaid(dec("1.0"), dec("2"), dec("1.5"));
/// assert_eq!(split.paid, dec("0.5"));
/// assert_eq!(split.unpaid, dec("1.5"));
/// ```
pub fn split_paid_unpaid(
    paid_used_this_month: Decimal,
    days: Decimal,
    monthly_cap: Decimal,
) -> SpilloverSplit {
    let available = monthly_cap
        .saturating_sub(paid_used_this_month)
        .max(Decimal::ZERO);

    if available >= days {
        SpilloverSplit {
            paid: days,
            unpaid: Decimal::ZERO,
        }
    } else {
        SpilloverSplit {
            paid: available,
            unpaid: days - available,
        }
    }
}

/// Records a spillover decision as an audit step.
pub(crate) fn spillover_audit_step(
    record_id: Option<&str>,
    paid_used_before: Decimal,
    days: Decimal,
    monthly_cap: Decimal,
    split: SpilloverSplit,
    step_number: u32,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "monthly_spillover".to_string(),
        rule_name: "Monthly Paid Leave Cap".to_string(),
        policy_ref: "monthly.paid_leave_cap".to_string(),
        input: serde_json::json!({
            "record_id": record_id,
            "days": days.normalize().to_string(),
            "paid_used_before": paid_used_before.normalize().to_string(),
            "monthly_cap": monthly_cap.normalize().to_string()
        }),
        output: serde_json::json!({
            "paid": split.paid.normalize().to_string(),
            "unpaid": split.unpaid.normalize().to_string()
        }),
        reasoning: format!(
            "{} days requested with {} of {} paid days left this month: {} paid, {} unpaid",
            days.normalize(),
            monthly_cap
                .saturating_sub(paid_used_before)
                .max(Decimal::ZERO)
                .normalize(),
            monthly_cap.normalize(),
            split.paid.normalize(),
            split.unpaid.normalize()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_fits_under_cap() {
        let split = split_paid_unpaid(dec("0"), dec("1.5"), dec("1.5"));
        assert_eq!(split.paid, dec("1.5"));
        assert_eq!(split.unpaid, Decimal::ZERO);
        assert!(!split.spilled());
    }

    #[test]
    fn test_partial_spillover() {
        let split = split_paid_unpaid(dec("1.0"), dec("2"), dec("1.5"));
        assert_eq!(split.paid, dec("0.5"));
        assert_eq!(split.unpaid, dec("1.5"));
        assert!(split.spilled());
    }

    #[test]
    fn test_cap_exhausted_everything_unpaid() {
        let split = split_paid_unpaid(dec("1.5"), dec("0.5"), dec("1.5"));
        assert_eq!(split.paid, Decimal::ZERO);
        assert_eq!(split.unpaid, dec("0.5"));
    }

    #[test]
    fn test_zero_cap() {
        let split = split_paid_unpaid(Decimal::ZERO, dec("3"), Decimal::ZERO);
        assert_eq!(split.paid, Decimal::ZERO);
        assert_eq!(split.unpaid, dec("3"));
    }

    #[test]
    fn test_split_conserves_days() {
        for (used, days) in [("0", "4"), ("0.5", "1"), ("1.5", "2"), ("1.0", "0.5")] {
            let split = split_paid_unpaid(dec(used), dec(days), dec("1.5"));
            assert_eq!(split.paid + split.unpaid, dec(days));
        }
    }

    #[test]
    fn test_audit_step_reasoning() {
        let split = split_paid_unpaid(dec("1.0"), dec("2"), dec("1.5"));
        let step = spillover_audit_step(Some("lv_009"), dec("1.0"), dec("2"), dec("1.5"), split, 4);

        assert_eq!(step.step_number, 4);
        assert_eq!(step.rule_id, "monthly_spillover");
        assert_eq!(step.input["record_id"].as_str(), Some("lv_009"));
        assert_eq!(step.output["unpaid"].as_str(), Some("1.5"));
        assert!(step.reasoning.contains("0.5 paid, 1.5 unpaid"));
    }
}
