//! Leave Accrual Engine
//!
//! This crate computes leave balances for an employee: entitlement accrued
//! per month worked, days consumed by approved leave, and the monthly
//! paid-leave cap with spillover to unpaid leave. Policies are loaded from
//! YAML, and an HTTP API exposes both balance views.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
