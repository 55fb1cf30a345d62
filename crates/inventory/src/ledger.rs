//! Per-product stock ledger: running quantity plus the last few movements.

use chrono::NaiveDate;

use stockledger_core::{BoundedHistory, DomainError, DomainResult, IdGenerator};

use crate::event::{MovementKind, StockEvent};

/// Running stock quantity and the bounded history of movements that produced it.
///
/// Invariant: `quantity >= 0` at all times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockLedger {
    quantity: i64,
    history: BoundedHistory<StockEvent>,
}

impl StockLedger {
    /// Empty ledger (quantity 0) keeping at most `capacity` movements.
    pub fn new(capacity: usize) -> DomainResult<Self> {
        Ok(Self {
            quantity: 0,
            history: BoundedHistory::new(capacity)?,
        })
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn history(&self) -> &BoundedHistory<StockEvent> {
        &self.history
    }

    /// Apply a movement to the running quantity and record it.
    ///
    /// Removals that would drive stock below zero floor it at zero; the
    /// recorded event still carries the requested quantity. Callers wanting
    /// to refuse such removals check [`StockLedger::quantity`] first.
    pub fn apply_event(
        &mut self,
        kind: MovementKind,
        quantity: i64,
        date: NaiveDate,
        ids: &dyn IdGenerator,
    ) -> DomainResult<StockEvent> {
        if quantity < 0 {
            return Err(DomainError::InvalidQuantity(quantity));
        }

        self.quantity = match kind {
            MovementKind::AddToStock => self.quantity.saturating_add(quantity),
            MovementKind::RemoveFromStock => (self.quantity - quantity).max(0),
        };

        let event = StockEvent::new(ids.next_event_id(), kind, quantity, date);
        if let Some(evicted) = self.history.push_front(event.clone()) {
            tracing::debug!(event_id = %evicted.id(), "evicted oldest stock movement");
        }

        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockledger_core::SequentialIdGenerator;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn new_ledger_rejects_zero_capacity() {
        assert_eq!(StockLedger::new(0).unwrap_err(), DomainError::InvalidCapacity(0));
    }

    #[test]
    fn add_increases_quantity_and_records_event() {
        let ids = SequentialIdGenerator::new();
        let mut ledger = StockLedger::new(4).unwrap();

        let event = ledger.apply_event(MovementKind::AddToStock, 10, date(1), &ids).unwrap();
        assert_eq!(ledger.quantity(), 10);
        assert_eq!(event.id().as_str(), "ACT-000001");
        assert_eq!(event.kind(), MovementKind::AddToStock);
        assert_eq!(event.quantity(), 10);
        assert_eq!(event.date(), date(1));
        assert_eq!(ledger.history().front(), Some(&event));
    }

    #[test]
    fn remove_decreases_quantity() {
        let ids = SequentialIdGenerator::new();
        let mut ledger = StockLedger::new(4).unwrap();
        ledger.apply_event(MovementKind::AddToStock, 10, date(1), &ids).unwrap();

        ledger.apply_event(MovementKind::RemoveFromStock, 4, date(2), &ids).unwrap();
        assert_eq!(ledger.quantity(), 6);
    }

    #[test]
    fn over_removal_floors_at_zero_but_records_requested_quantity() {
        let ids = SequentialIdGenerator::new();
        let mut ledger = StockLedger::new(4).unwrap();
        ledger.apply_event(MovementKind::AddToStock, 10, date(1), &ids).unwrap();

        let event = ledger
            .apply_event(MovementKind::RemoveFromStock, 15, date(2), &ids)
            .unwrap();
        assert_eq!(ledger.quantity(), 0);
        assert_eq!(event.quantity(), 15);
        assert_eq!(ledger.history().len(), 2);
    }

    #[test]
    fn negative_quantity_is_rejected_without_side_effects() {
        let ids = SequentialIdGenerator::new();
        let mut ledger = StockLedger::new(4).unwrap();
        ledger.apply_event(MovementKind::AddToStock, 10, date(1), &ids).unwrap();

        let err = ledger
            .apply_event(MovementKind::AddToStock, -5, date(2), &ids)
            .unwrap_err();
        assert_eq!(err, DomainError::InvalidQuantity(-5));
        assert_eq!(ledger.quantity(), 10);
        assert_eq!(ledger.history().len(), 1);
    }

    #[test]
    fn zero_quantity_is_accepted() {
        let ids = SequentialIdGenerator::new();
        let mut ledger = StockLedger::new(4).unwrap();
        ledger.apply_event(MovementKind::RemoveFromStock, 0, date(1), &ids).unwrap();
        assert_eq!(ledger.quantity(), 0);
        assert_eq!(ledger.history().len(), 1);
    }

    #[test]
    fn history_keeps_last_four_movements() {
        let ids = SequentialIdGenerator::new();
        let mut ledger = StockLedger::new(4).unwrap();
        for q in [10, 5, 6, 7, 8, 9] {
            ledger.apply_event(MovementKind::AddToStock, q, date(1), &ids).unwrap();
        }

        let kept: Vec<i64> = ledger.history().iter().map(StockEvent::quantity).collect();
        assert_eq!(kept, vec![9, 8, 7, 6]);
        assert_eq!(ledger.quantity(), 45);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: additions raise the quantity by exactly q.
            #[test]
            fn add_is_exact(start in 0i64..1_000_000, q in 0i64..1_000_000) {
                let ids = SequentialIdGenerator::new();
                let mut ledger = StockLedger::new(4).unwrap();
                ledger.apply_event(MovementKind::AddToStock, start, date(1), &ids).unwrap();

                ledger.apply_event(MovementKind::AddToStock, q, date(2), &ids).unwrap();
                prop_assert_eq!(ledger.quantity(), start + q);
            }

            /// Property: removals lower the quantity by q, floored at zero.
            #[test]
            fn remove_is_exact_or_floored(start in 0i64..1_000_000, q in 0i64..2_000_000) {
                let ids = SequentialIdGenerator::new();
                let mut ledger = StockLedger::new(4).unwrap();
                ledger.apply_event(MovementKind::AddToStock, start, date(1), &ids).unwrap();

                let event = ledger.apply_event(MovementKind::RemoveFromStock, q, date(2), &ids).unwrap();
                if q <= start {
                    prop_assert_eq!(ledger.quantity(), start - q);
                } else {
                    prop_assert_eq!(ledger.quantity(), 0);
                }
                prop_assert_eq!(event.quantity(), q);
            }

            /// Property: quantity never goes negative whatever the movement sequence.
            #[test]
            fn quantity_never_negative(moves in prop::collection::vec((any::<bool>(), 0i64..1_000), 0..40)) {
                let ids = SequentialIdGenerator::new();
                let mut ledger = StockLedger::new(4).unwrap();
                for (add, q) in moves {
                    let kind = if add { MovementKind::AddToStock } else { MovementKind::RemoveFromStock };
                    ledger.apply_event(kind, q, date(1), &ids).unwrap();
                    prop_assert!(ledger.quantity() >= 0);
                    prop_assert!(ledger.history().len() <= 4);
                }
            }
        }
    }
}
