//! Binary configuration, read from `STOCKLEDGER_*` environment variables.

use std::sync::Arc;

use stockledger_core::{DomainError, DomainResult, IdGenerator, SequentialIdGenerator, UuidV7Generator};
use stockledger_inventory::RegistryConfig;

pub const ENV_ID_MODE: &str = "STOCKLEDGER_IDS";

/// How event ids are generated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum IdMode {
    /// Time-ordered UUIDv7.
    #[default]
    Uuid,
    /// `ACT-000001`, `ACT-000002`, ... for reproducible output.
    Sequential,
}

impl IdMode {
    pub fn generator(self) -> Arc<dyn IdGenerator> {
        match self {
            IdMode::Uuid => Arc::new(UuidV7Generator),
            IdMode::Sequential => Arc::new(SequentialIdGenerator::new()),
        }
    }
}

impl core::str::FromStr for IdMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uuid" => Ok(IdMode::Uuid),
            "sequential" => Ok(IdMode::Sequential),
            other => Err(DomainError::invalid_input(format!(
                "{ENV_ID_MODE} must be uuid or sequential, got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CliConfig {
    pub registry: RegistryConfig,
    pub ids: IdMode,
}

impl CliConfig {
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let ids = match lookup(ENV_ID_MODE) {
            Some(raw) => raw.parse()?,
            None => IdMode::default(),
        };
        Ok(Self {
            registry: RegistryConfig::from_lookup(&lookup)?,
            ids,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_uuid_ids() {
        let config = CliConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.ids, IdMode::Uuid);
        assert_eq!(config.registry, RegistryConfig::default());
    }

    #[test]
    fn sequential_mode_yields_deterministic_ids() {
        let config = CliConfig::from_lookup(|key| (key == ENV_ID_MODE).then(|| "Sequential".to_string())).unwrap();
        assert_eq!(config.ids, IdMode::Sequential);

        let ids = config.ids.generator();
        assert_eq!(ids.next_event_id().as_str(), "ACT-000001");
    }

    #[test]
    fn rejects_unknown_id_mode() {
        let err = CliConfig::from_lookup(|key| (key == ENV_ID_MODE).then(|| "random".to_string())).unwrap_err();
        assert_eq!(err.code(), "invalid_input");
    }
}
