//! `stockledger-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO): the error model,
//! typed identifiers, the id-generation port and the bounded history
//! container used to keep the last few stock movements of a product.

pub mod entity;
pub mod error;
pub mod history;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use history::BoundedHistory;
pub use id::{EventId, IdGenerator, ProductId, SequentialIdGenerator, UuidV7Generator};
pub use value_object::ValueObject;
