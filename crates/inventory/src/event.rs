use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockledger_core::{DomainError, EventId, ValueObject};

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementKind {
    AddToStock,
    RemoveFromStock,
}

impl MovementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::AddToStock => "AddToStock",
            MovementKind::RemoveFromStock => "RemoveFromStock",
        }
    }
}

impl core::fmt::Display for MovementKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for MovementKind {
    type Err = DomainError;

    /// Only the two known kinds are accepted; any other label is rejected
    /// instead of being recorded as a no-op movement.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AddToStock" | "add_to_stock" | "add" => Ok(MovementKind::AddToStock),
            "RemoveFromStock" | "remove_from_stock" | "remove" => Ok(MovementKind::RemoveFromStock),
            other => Err(DomainError::invalid_input(format!(
                "unknown movement kind '{other}' (expected AddToStock or RemoveFromStock)"
            ))),
        }
    }
}

/// A recorded stock movement.
///
/// `quantity` is the amount requested when the movement was accepted, even if
/// the running total was floored at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEvent {
    id: EventId,
    kind: MovementKind,
    quantity: i64,
    date: NaiveDate,
}

impl StockEvent {
    pub(crate) fn new(id: EventId, kind: MovementKind, quantity: i64, date: NaiveDate) -> Self {
        Self {
            id,
            kind,
            quantity,
            date,
        }
    }

    pub fn id(&self) -> &EventId {
        &self.id
    }

    pub fn kind(&self) -> MovementKind {
        self.kind
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl ValueObject for StockEvent {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_kinds() {
        assert_eq!("AddToStock".parse::<MovementKind>().unwrap(), MovementKind::AddToStock);
        assert_eq!("add".parse::<MovementKind>().unwrap(), MovementKind::AddToStock);
        assert_eq!(
            "RemoveFromStock".parse::<MovementKind>().unwrap(),
            MovementKind::RemoveFromStock
        );
        assert_eq!(
            "remove_from_stock".parse::<MovementKind>().unwrap(),
            MovementKind::RemoveFromStock
        );
    }

    #[test]
    fn rejects_unknown_kinds() {
        for label in ["AddStock", "RemoveToStock", "InvalidType", ""] {
            match label.parse::<MovementKind>() {
                Err(DomainError::InvalidInput(msg)) => assert!(msg.contains("unknown movement kind")),
                other => panic!("expected InvalidInput for {label:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for kind in [MovementKind::AddToStock, MovementKind::RemoveFromStock] {
            assert_eq!(kind.to_string().parse::<MovementKind>().unwrap(), kind);
        }
    }
}
