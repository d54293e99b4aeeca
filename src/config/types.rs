//! Configuration types for leave accrual.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML policy files.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::LeaveCategory;

/// Metadata identifying a leave policy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PolicyMetadata {
    /// Short policy code (e.g. "standard").
    pub code: String,
    /// The human-readable name of the policy.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
}

/// Monthly accrual rate per category, in days per month worked.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EntitlementTable {
    /// Sick leave accrued per month worked.
    pub sick_leave: Decimal,
    /// Casual leave accrued per month worked.
    pub casual_leave: Decimal,
    /// Work-from-home days accrued per month worked.
    pub work_from_home: Decimal,
}

impl EntitlementTable {
    /// Returns the monthly accrual rate for `category`.
    pub fn rate(&self, category: LeaveCategory) -> Decimal {
        match category {
            LeaveCategory::SickLeave => self.sick_leave,
            LeaveCategory::CasualLeave => self.casual_leave,
            LeaveCategory::WorkFromHome => self.work_from_home,
        }
    }
}

/// Rules for turning a join date into months of accrual.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TenureRules {
    /// A month only counts once this day of the month is reached.
    pub vesting_day: u32,
    /// Accrual stops growing after this many months.
    pub max_accrual_months: u32,
}

/// Rules for the monthly paid-leave view.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MonthlyRules {
    /// Paid leave days allowed per calendar month; the rest spills to unpaid.
    pub paid_leave_cap: Decimal,
}

/// Fallback values used when an input is missing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PolicyDefaults {
    /// Join date used when the employee profile has none.
    pub join_date: NaiveDate,
}

/// Policy file structure (policy.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyFile {
    /// Policy metadata.
    pub policy: PolicyMetadata,
    /// Accrual rates.
    pub accrual: EntitlementTable,
    /// Tenure rules.
    pub tenure: TenureRules,
    /// Monthly view rules.
    pub monthly: MonthlyRules,
    /// Fallback values.
    pub defaults: PolicyDefaults,
}

/// Category synonyms file structure (categories.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct CategoriesConfig {
    /// Map of free-form leave label to canonical category.
    pub synonyms: HashMap<String, LeaveCategory>,
}

/// The complete leave policy.
///
/// Synonym keys are stored trimmed and lowercased, and every category's
/// display label is always recognized.
#[derive(Debug, Clone, PartialEq)]
pub struct LeavePolicy {
    metadata: PolicyMetadata,
    accrual: EntitlementTable,
    tenure: TenureRules,
    monthly: MonthlyRules,
    defaults: PolicyDefaults,
    synonyms: HashMap<String, LeaveCategory>,
}

impl LeavePolicy {
    /// Creates a validated policy from its component parts.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPolicy` if a rate or the monthly cap is negative or
    /// above [`MAX_DAYS_PER_MONTH`], the vesting day is outside 1..=28, or
    /// two synonyms that normalize to the same label point at different
    /// categories.
    pub fn new(file: PolicyFile, categories: CategoriesConfig) -> EngineResult<Self> {
        for category in LeaveCategory::ALL {
            let rate = file.accrual.rate(category);
            if rate < Decimal::ZERO {
                return Err(invalid(
                    format!("accrual.{}", category_key(category)),
                    "accrual rate cannot be negative",
                ));
            }
            if rate > MAX_DAYS_PER_MONTH {
                return Err(invalid(
                    format!("accrual.{}", category_key(category)),
                    format!("accrual rate cannot exceed {} days per month", MAX_DAYS_PER_MONTH),
                ));
            }
        }

        if !(1..=28).contains(&file.tenure.vesting_day) {
            return Err(invalid("tenure.vesting_day", "must be between 1 and 28"));
        }

        if file.monthly.paid_leave_cap < Decimal::ZERO {
            return Err(invalid(
                "monthly.paid_leave_cap",
                "paid leave cap cannot be negative",
            ));
        }

        if file.monthly.paid_leave_cap > MAX_DAYS_PER_MONTH {
            return Err(invalid(
                "monthly.paid_leave_cap",
                format!("paid leave cap cannot exceed {} days", MAX_DAYS_PER_MONTH),
            ));
        }

        let mut synonyms = HashMap::new();
        let labels = LeaveCategory::ALL
            .into_iter()
            .map(|category| (category.label().to_string(), category));

        for (raw, category) in labels.chain(categories.synonyms) {
            let key = normalize_key(&raw);
            match synonyms.insert(key.clone(), category) {
                Some(existing) if existing != category => {
                    return Err(invalid(
                        format!("synonyms.{}", key),
                        format!("maps to both {} and {}", existing, category),
                    ));
                }
                _ => {}
            }
        }

        Ok(Self {
            metadata: file.policy,
            accrual: file.accrual,
            tenure: file.tenure,
            monthly: file.monthly,
            defaults: file.defaults,
            synonyms,
        })
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        &self.metadata
    }

    /// Returns the accrual rates.
    pub fn accrual(&self) -> &EntitlementTable {
        &self.accrual
    }

    /// Returns the tenure rules.
    pub fn tenure(&self) -> &TenureRules {
        &self.tenure
    }

    /// Returns the monthly view rules.
    pub fn monthly(&self) -> &MonthlyRules {
        &self.monthly
    }

    /// Returns the fallback values.
    pub fn defaults(&self) -> &PolicyDefaults {
        &self.defaults
    }

    /// Looks up an already-normalized label.
    pub fn synonym(&self, normalized: &str) -> Option<LeaveCategory> {
        self.synonyms.get(normalized).copied()
    }
}

/// Synonyms shipped with the standard policy.
pub(crate) const STANDARD_SYNONYMS: [(&str, LeaveCategory); 6] = [
    ("sick", LeaveCategory::SickLeave),
    ("sick leave", LeaveCategory::SickLeave),
    ("casual", LeaveCategory::CasualLeave),
    ("casual leave", LeaveCategory::CasualLeave),
    ("work", LeaveCategory::WorkFromHome),
    ("wfh", LeaveCategory::WorkFromHome),
];

impl Default for LeavePolicy {
    /// The standard policy: 1 sick, 0.5 casual and 1 WFH day per month,
    /// vesting on the 15th, capped at 12 months, 1.5 paid days per month.
    fn default() -> Self {
        let mut synonyms: HashMap<String, LeaveCategory> = LeaveCategory::ALL
            .into_iter()
            .map(|category| (normalize_key(category.label()), category))
            .collect();
        synonyms.extend(
            STANDARD_SYNONYMS
                .iter()
                .map(|(raw, category)| (raw.to_string(), *category)),
        );

        Self {
            metadata: PolicyMetadata {
                code: "standard".to_string(),
                name: "Standard Leave Policy".to_string(),
                version: "2024-01-01".to_string(),
            },
            accrual: EntitlementTable {
                sick_leave: Decimal::ONE,
                casual_leave: Decimal::new(5, 1),
                work_from_home: Decimal::ONE,
            },
            tenure: TenureRules {
                vesting_day: 15,
                max_accrual_months: 12,
            },
            monthly: MonthlyRules {
                paid_leave_cap: Decimal::new(15, 1),
            },
            defaults: PolicyDefaults {
                join_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or(NaiveDate::MIN),
            },
            synonyms,
        }
    }
}

/// Trims and lowercases a leave label for lookup.
pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn category_key(category: LeaveCategory) -> &'static str {
    match category {
        LeaveCategory::SickLeave => "sick_leave",
        LeaveCategory::CasualLeave => "casual_leave",
        LeaveCategory::WorkFromHome => "work_from_home",
    }
}

/// Upper bound for a monthly accrual rate and for the monthly paid cap.
pub const MAX_DAYS_PER_MONTH: Decimal = Decimal::from_parts(31, 0, 0, false, 0);

fn invalid(field: impl Into<String>, message: impl Into<String>) -> EngineError {
    EngineError::InvalidPolicy {
        field: field.into(),
        message: message.into(),
    }
}
