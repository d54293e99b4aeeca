//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading leave
//! policies from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{CategoriesConfig, LeavePolicy, PolicyFile, PolicyMetadata};

/// Loads and provides access to a leave policy.
///
/// # Directory Structure
///
/// ```text
/// config/standard/
/// ├── policy.yaml       # Metadata, accrual rates, tenure rules, monthly cap, defaults
/// └── categories.yaml   # Leave-type synonyms
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::ConfigLoader;
/// use leave_engine::models::LeaveCategory;
///
/// let loader = ConfigLoader::load("./config/standard").unwrap();
/// let rate = loader.policy().accrual().rate(LeaveCategory::SickLeave);
/// println!("Sick leave accrues {} days per month", rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: LeavePolicy,
}

impl ConfigLoader {
    /// Loads a policy from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the policy directory (e.g., "./config/standard")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The policy fails validation
    ///
    /// # Example
    ///
    /// ```no_run
    /// use leave_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/standard")?;
    /// # Ok::<(), leave_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy_file = Self::load_yaml::<PolicyFile>(&path.join("policy.yaml"))?;
        let categories = Self::load_yaml::<CategoriesConfig>(&path.join("categories.yaml"))?;

        let policy = LeavePolicy::new(policy_file, categories)?;
        debug!(
            policy = %policy.metadata().code,
            version = %policy.metadata().version,
            "Loaded leave policy"
        );

        Ok(Self { policy })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying leave policy.
    pub fn policy(&self) -> &LeavePolicy {
        &self.policy
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        self.policy.metadata()
    }
}

impl From<LeavePolicy> for ConfigLoader {
    fn from(policy: LeavePolicy) -> Self {
        Self { policy }
    }
}
