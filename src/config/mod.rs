//! Configuration for the eligibility engine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemeError};
use crate::rules::UnsetFieldPolicy;

/// Environment variable that overrides the configured catalog path
pub const CATALOG_PATH_ENV: &str = "SCHEME_MATCH_CATALOG";

/// Configuration for the eligibility engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchConfig {
    /// How a marital-status rule treats a profile with no marital status
    pub marital_status_policy: UnsetFieldPolicy,
    /// Whether to evaluate large catalogs in parallel
    pub use_parallel: bool,
    /// Minimum catalog size for parallel evaluation
    pub parallel_threshold: usize,
    /// Catalog file used by the command-line tool
    pub catalog_path: Option<PathBuf>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            marital_status_policy: UnsetFieldPolicy::FailClosed,
            use_parallel: true,
            parallel_threshold: 512,
            catalog_path: None,
        }
    }
}

impl MatchConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder for constructing configuration
    #[must_use]
    pub fn builder() -> MatchConfigBuilder {
        MatchConfigBuilder::new()
    }

    /// Load configuration from a JSON file
    ///
    /// Missing keys keep their default values.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| SchemeError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Catalog path with the environment override applied
    #[must_use]
    pub fn resolved_catalog_path(&self) -> Option<PathBuf> {
        std::env::var_os(CATALOG_PATH_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(|| self.catalog_path.clone())
    }

    /// Whether a catalog of `len` schemes should be evaluated in parallel
    #[must_use]
    pub const fn should_parallelize(&self, len: usize) -> bool {
        self.use_parallel && len >= self.parallel_threshold
    }
}

/// Builder for constructing engine configuration
#[derive(Debug, Clone, Default)]
pub struct MatchConfigBuilder {
    config: MatchConfig,
}

impl MatchConfigBuilder {
    /// Create a new builder with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: MatchConfig::default(),
        }
    }

    /// Set the marital-status policy
    #[must_use]
    pub const fn marital_status_policy(mut self, policy: UnsetFieldPolicy) -> Self {
        self.config.marital_status_policy = policy;
        self
    }

    /// Set whether to use parallel evaluation
    #[must_use]
    pub const fn use_parallel(mut self, parallel: bool) -> Self {
        self.config.use_parallel = parallel;
        self
    }

    /// Set the parallel evaluation threshold
    #[must_use]
    pub const fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.config.parallel_threshold = threshold;
        self
    }

    /// Set the catalog path
    #[must_use]
    pub fn catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.catalog_path = Some(path.into());
        self
    }

    /// Build the configuration
    #[must_use]
    pub fn build(self) -> MatchConfig {
        self.config
    }
}
