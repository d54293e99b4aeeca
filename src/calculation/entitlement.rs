//! Entitlement calculation functionality.
//!
//! Entitlement is the monthly accrual rate of each category multiplied by
//! the months worked.

use rust_decimal::Decimal;

use crate::config::EntitlementTable;
use crate::models::{AuditStep, LeaveCategory};

/// A day amount for each leave category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryDays {
    /// Sick leave days.
    pub sick_leave: Decimal,
    /// Casual leave days.
    pub casual_leave: Decimal,
    /// Work-from-home days.
    pub work_from_home: Decimal,
}

impl CategoryDays {
    /// Returns the amount for `category`.
    pub fn get(&self, category: LeaveCategory) -> Decimal {
        match category {
            LeaveCategory::SickLeave => self.sick_leave,
            LeaveCategory::CasualLeave => self.casual_leave,
            LeaveCategory::WorkFromHome => self.work_from_home,
        }
    }

    /// Adds `days` to the amount for `category`, saturating at the largest
    /// representable amount.
    pub fn add(&mut self, category: LeaveCategory, days: Decimal) {
        let slot = match category {
            LeaveCategory::SickLeave => &mut self.sick_leave,
            LeaveCategory::CasualLeave => &mut self.casual_leave,
            LeaveCategory::WorkFromHome => &mut self.work_from_home,
        };
        *slot = slot.saturating_add(days);
    }

    /// Sum over every paid-leave category, saturating like [`add`](Self::add).
    pub fn paid_total(&self) -> Decimal {
        LeaveCategory::ALL
            .into_iter()
            .filter(|category| category.is_paid_leave())
            .fold(Decimal::ZERO, |total, category| {
                total.saturating_add(self.get(category))
            })
    }
}

/// The result of an entitlement calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct EntitlementResult {
    /// Unrounded entitlement per category.
    pub entitlements: CategoryDays,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates `rate × months_worked` for every category.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::calculate_entitlements;
/// use leave_engine::config::LeavePolicy;
/// use leave_engine::models::LeaveCategory;
/// use rust_decimal::Decimal;
///
/// let policy = LeavePolicy::default();
/// let result = calculate_entitlements(12, policy.accrual(), 2);
/// assert_eq!(result.entitlements.get(LeaveCategory::CasualLeave), Decimal::from(6));
/// ```
pub fn calculate_entitlements(
    months_worked: u32,
    table: &EntitlementTable,
    step_number: u32,
) -> EntitlementResult {
    let months = Decimal::from(months_worked);
    let mut entitlements = CategoryDays::default();

    for category in LeaveCategory::ALL {
        entitlements.add(category, table.rate(category) * months);
    }

    let reasoning = LeaveCategory::ALL
        .into_iter()
        .map(|category| {
            format!(
                "{}: {} x {} months = {}",
                category.label(),
                table.rate(category).normalize(),
                months_worked,
                entitlements.get(category).normalize()
            )
        })
        .collect::<Vec<_>>()
        .join("; ");

    let audit_step = AuditStep {
        step_number,
        rule_id: "entitlement".to_string(),
        rule_name: "Leave Entitlement".to_string(),
        policy_ref: "accrual".to_string(),
        input: serde_json::json!({
            "months_worked": months_worked,
            "sick_leave_rate": table.sick_leave.normalize().to_string(),
            "casual_leave_rate": table.casual_leave.normalize().to_string(),
            "work_from_home_rate": table.work_from_home.normalize().to_string()
        }),
        output: serde_json::json!({
            "sick_leave": entitlements.sick_leave.normalize().to_string(),
            "casual_leave": entitlements.casual_leave.normalize().to_string(),
            "work_from_home": entitlements.work_from_home.normalize().to_string()
        }),
        reasoning,
    };

    EntitlementResult {
        entitlements,
        audit_step,
    }
}
