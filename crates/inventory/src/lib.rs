//! Inventory domain module.
//!
//! Products, their per-product stock ledgers with a bounded movement history,
//! the lookup and ordering strategies used on them, and the in-memory
//! registry that ties them together. Pure in-process logic (no IO).

pub mod config;
pub mod event;
pub mod ledger;
pub mod product;
pub mod registry;
pub mod search;
pub mod sort;

pub use config::{DEFAULT_HISTORY_CAPACITY, RegistryConfig};
pub use event::{MovementKind, StockEvent};
pub use ledger::StockLedger;
pub use product::Product;
pub use registry::Registry;
pub use search::{BinarySearch, LinearSearch, ProductSearch, SearchStrategy};
pub use sort::{ActivitySort, BubbleSort, PartitionSort, SortStrategy};
