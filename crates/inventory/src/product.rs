use chrono::NaiveDate;

use stockledger_core::{DomainError, DomainResult, Entity, IdGenerator, ProductId};

use crate::event::{MovementKind, StockEvent};
use crate::ledger::StockLedger;
use crate::sort::{ActivitySort, BubbleSort};

/// A tracked product: identity, descriptive data, and its stock ledger.
///
/// The product exclusively owns its ledger (and through it, its movement
/// history). Quantity only changes through [`Product::record_event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    entry_date: NaiveDate,
    ledger: StockLedger,
}

impl Product {
    /// New product with zero stock and an empty history of `history_capacity` slots.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        entry_date: NaiveDate,
        history_capacity: usize,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::invalid_input("product name cannot be empty"));
        }
        Ok(Self {
            id,
            name,
            entry_date,
            ledger: StockLedger::new(history_capacity)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entry_date(&self) -> NaiveDate {
        self.entry_date
    }

    pub fn quantity(&self) -> i64 {
        self.ledger.quantity()
    }

    /// Maximum number of movements kept in the history.
    pub fn history_capacity(&self) -> usize {
        self.ledger.history().capacity()
    }

    /// Record a stock movement.
    ///
    /// Refuses removals larger than the current stock with
    /// [`DomainError::InsufficientStock`] and leaves the product untouched.
    pub fn record_event(
        &mut self,
        kind: MovementKind,
        quantity: i64,
        date: NaiveDate,
        ids: &dyn IdGenerator,
    ) -> DomainResult<StockEvent> {
        if quantity < 0 {
            return Err(DomainError::InvalidQuantity(quantity));
        }
        if kind == MovementKind::RemoveFromStock && quantity > self.quantity() {
            return Err(DomainError::insufficient_stock(self.quantity(), quantity));
        }
        self.ledger.apply_event(kind, quantity, date, ids)
    }

    /// Retained movements, most-recent-first.
    pub fn history(&self) -> Vec<StockEvent> {
        self.ledger.history().to_ordered_vec()
    }

    /// Retained movements ordered by ascending quantity (ties keep recency order).
    pub fn history_sorted_by_quantity(&self) -> Vec<StockEvent> {
        self.history_sorted_with(&BubbleSort)
    }

    /// Retained movements ordered by `sorter`.
    pub fn history_sorted_with(&self, sorter: &dyn ActivitySort) -> Vec<StockEvent> {
        let mut events = self.history();
        sorter.sort_by_quantity(&mut events);
        events
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
