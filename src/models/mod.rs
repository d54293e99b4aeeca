//! Core data models for the Leave Accrual Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod leave_category;
mod leave_record;
pub(crate) mod lenient;
mod summary;

pub use employee::EmployeeProfile;
pub use leave_category::LeaveCategory;
pub use leave_record::{DayType, LeaveRecord, LeaveStatus};
pub use lenient::{MAX_DAYS_PER_RECORD, parse_calendar_date};
pub use summary::{
    AuditStep, AuditTrace, AuditWarning, CategoryBalance, LeaveSummary, MonthlySummary,
};
