//! JSON views over domain values.

use chrono::NaiveDate;
use serde::Serialize;

use stockledger_core::Entity;
use stockledger_inventory::{Product, StockEvent};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub entry_date: NaiveDate,
    pub quantity: i64,
    /// Most-recent-first.
    pub history: Vec<StockEvent>,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.name().to_string(),
            entry_date: product.entry_date(),
            quantity: product.quantity(),
            history: product.history(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordedView {
    pub product_id: String,
    pub event: StockEvent,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeletedView {
    pub deleted: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryView {
    pub product_id: String,
    pub quantity: i64,
    /// Ordered by ascending quantity.
    pub events: Vec<StockEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListView {
    pub count: usize,
    pub products: Vec<ProductView>,
}

/// Successful result of one script command.
///
/// Serialized without a tag: each line is the bare view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CommandOutput {
    Product(ProductView),
    Recorded(RecordedView),
    Deleted(DeletedView),
    History(HistoryView),
    List(ListView),
}
