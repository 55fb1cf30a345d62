//! Registry configuration.

use serde::{Deserialize, Serialize};

use stockledger_core::{DomainError, DomainResult};

use crate::search::SearchStrategy;
use crate::sort::SortStrategy;

/// Number of movements each product keeps unless configured otherwise.
pub const DEFAULT_HISTORY_CAPACITY: usize = 4;

pub const ENV_HISTORY_CAPACITY: &str = "STOCKLEDGER_HISTORY_CAPACITY";
pub const ENV_SEARCH: &str = "STOCKLEDGER_SEARCH";
pub const ENV_SORT: &str = "STOCKLEDGER_SORT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Movements retained per product (must be > 0).
    pub history_capacity: usize,
    pub search: SearchStrategy,
    pub sort: SortStrategy,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            search: SearchStrategy::default(),
            sort: SortStrategy::default(),
        }
    }
}

impl RegistryConfig {
    /// Read overrides from `STOCKLEDGER_*` environment variables.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup; unset keys keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_HISTORY_CAPACITY) {
            config.history_capacity = raw.trim().parse().map_err(|_| {
                DomainError::invalid_input(format!("{ENV_HISTORY_CAPACITY} must be a positive integer, got '{raw}'"))
            })?;
        }
        if let Some(raw) = lookup(ENV_SEARCH) {
            config.search = raw.trim().parse()?;
        }
        if let Some(raw) = lookup(ENV_SORT) {
            config.sort = raw.trim().parse()?;
        }

        Ok(config)
    }
}
