//! Configuration loading and management for the Leave Accrual Engine.
//!
//! This module loads leave policies from YAML files: accrual rates, tenure
//! rules, the monthly paid-leave cap, fallback values, and the synonyms
//! used to recognize free-form leave labels.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/standard").unwrap();
//! println!("Loaded policy: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub(crate) use types::normalize_key;
pub use types::{
    CategoriesConfig, EntitlementTable, LeavePolicy, MAX_DAYS_PER_MONTH, MonthlyRules,
    PolicyDefaults, PolicyFile, PolicyMetadata, TenureRules,
};
