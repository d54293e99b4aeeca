//! Leave summary models for the Leave Accrual Engine.
//!
//! This module contains the two output shapes handed to the display layer,
//! [`LeaveSummary`] (per category) and [`MonthlySummary`] (paid/unpaid this
//! month), together with the audit trace both carry.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LeaveCategory;

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The policy setting this rule draws on (e.g. "accrual.sick_leave").
    pub policy_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag records that were left out of the balances so that an
/// administrator can follow up on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a summary.
///
/// # Example
///
/// ```
/// use leave_engine::models::AuditTrace;
///
/// let trace = AuditTrace::default();
/// assert!(trace.steps.is_empty());
/// assert!(trace.warnings.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// Used and total days for one leave category.
///
/// # Example
///
/// ```
/// use leave_engine::models::{CategoryBalance, LeaveCategory};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let balance = CategoryBalance {
///     category: LeaveCategory::SickLeave,
///     label: "Sick Leave".to_string(),
///     used: Decimal::from_str("2.0").unwrap(),
///     total: Decimal::from_str("12.0").unwrap(),
/// };
/// assert_eq!(balance.total - balance.used, Decimal::from_str("10.0").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBalance {
    /// The leave category.
    #[serde(rename = "type")]
    pub category: LeaveCategory,
    /// Display label for the category.
    pub label: String,
    /// Days consumed by approved leave, rounded to 1 decimal.
    pub used: Decimal,
    /// Days accrued, rounded to 1 decimal.
    pub total: Decimal,
}

/// Per-category balance view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveSummary {
    /// The date the summary was computed for.
    pub as_of: NaiveDate,
    /// Whole months of accrual credited to the employee.
    pub months_worked: u32,
    /// One entry per category: sick leave, casual leave, work from home.
    pub balances: Vec<CategoryBalance>,
    /// Audit trace of the calculation.
    pub audit_trace: AuditTrace,
}

impl LeaveSummary {
    /// Returns the balance for `category`.
    pub fn balance(&self, category: LeaveCategory) -> Option<&CategoryBalance> {
        self.balances.iter().find(|b| b.category == category)
    }
}

/// Monthly paid/unpaid view with all-time remaining balances.
///
/// All amounts are rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// The date the summary was computed for.
    pub as_of: NaiveDate,
    /// Paid leave taken this month, up to the monthly cap.
    pub paid_used: Decimal,
    /// Leave taken this month beyond the monthly paid cap.
    pub unpaid_used: Decimal,
    /// Paid leave entitlement left across all time.
    pub paid_left: Decimal,
    /// Work-from-home entitlement left across all time.
    pub wfh_left: Decimal,
    /// Audit trace of the calculation.
    pub audit_trace: AuditTrace,
}
