//! Strongly-typed identifiers and the id-generation port.

use core::str::FromStr;
use core::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of a product (caller-assigned, non-blank).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

/// Identifier of a recorded stock movement (generated).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

macro_rules! impl_string_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Build an identifier, rejecting empty or whitespace-only input.
            pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(DomainError::invalid_input(concat!($name, " cannot be empty")));
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

impl_string_newtype!(ProductId, "product id");
impl_string_newtype!(EventId, "event id");

/// Prefix shared by every generated event id.
pub const EVENT_ID_PREFIX: &str = "ACT-";

/// Source of fresh event identifiers.
///
/// The ledger never reaches for the clock or a global RNG itself; whoever
/// owns the ledger hands it a generator. Tests use [`SequentialIdGenerator`]
/// for deterministic ids.
pub trait IdGenerator: Send + Sync {
    fn next_event_id(&self) -> EventId;
}

impl<G: IdGenerator + ?Sized> IdGenerator for std::sync::Arc<G> {
    fn next_event_id(&self) -> EventId {
        (**self).next_event_id()
    }
}

/// Time-ordered UUIDv7 ids (`ACT-<uuid>`).
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV7Generator;

impl IdGenerator for UuidV7Generator {
    fn next_event_id(&self) -> EventId {
        EventId(format!("{EVENT_ID_PREFIX}{}", Uuid::now_v7()))
    }
}

/// Deterministic, monotonically increasing ids (`ACT-000001`, `ACT-000002`, ...).
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting from `first` instead of 1.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first.saturating_sub(1)),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_event_id(&self) -> EventId {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        EventId(format!("{EVENT_ID_PREFIX}{n:06}"))
    }
}
