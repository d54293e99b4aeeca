//! Calculation logic for the Leave Accrual Engine.
//!
//! This module contains the rules that turn a join date and a list of leave
//! records into balances: months worked, entitlement per category, category
//! normalization, per-record consumption, the monthly paid-leave cap, and the
//! ledger that both balance views are projected from.

mod category;
mod consumption;
mod entitlement;
mod ledger;
mod rounding;
mod spillover;
mod summary;
mod tenure;

pub use category::normalize_category;
pub use consumption::{HALF_DAY, consumed_days};
pub use entitlement::{CategoryDays, EntitlementResult, calculate_entitlements};
pub use ledger::{
    ConsumptionTally, LeaveLedger, MISSING_START_DATE, MonthlyEntitlements, UNRECOGNIZED_LEAVE_TYPE,
};
pub use rounding::round_half_up;
pub use spillover::{SpilloverSplit, split_paid_unpaid};
pub use summary::{summarize, summarize_for_employee, summarize_monthly};
pub use tenure::{TenureResult, calculate_tenure, compute_months_worked};
