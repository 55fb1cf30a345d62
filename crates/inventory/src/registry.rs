//! In-memory product registry.

use std::sync::Arc;

use chrono::NaiveDate;

use stockledger_core::{
    BoundedHistory, DomainError, DomainResult, Entity, IdGenerator, ProductId, UuidV7Generator,
};

use crate::config::RegistryConfig;
use crate::event::{MovementKind, StockEvent};
use crate::product::Product;
use crate::search::ProductSearch;

/// Ordered collection of products, unique by id.
///
/// Uniqueness is checked on [`Registry::create`]; insertion order is kept for
/// listing. Lookups go through the configured [`ProductSearch`] strategy.
pub struct Registry {
    products: Vec<Product>,
    config: RegistryConfig,
    ids: Arc<dyn IdGenerator>,
}

impl core::fmt::Debug for Registry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Registry")
            .field("products", &self.products)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            config: RegistryConfig::default(),
            ids: Arc::new(UuidV7Generator),
        }
    }
}

impl Registry {
    /// Empty registry with default configuration and UUIDv7 event ids.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty registry with explicit configuration and id source.
    ///
    /// Fails with [`DomainError::InvalidCapacity`] if the configured history
    /// capacity is zero, before any product exists.
    pub fn with_config(config: RegistryConfig, ids: Arc<dyn IdGenerator>) -> DomainResult<Self> {
        BoundedHistory::<StockEvent>::validate_capacity(config.history_capacity)?;
        Ok(Self {
            products: Vec::new(),
            config,
            ids,
        })
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Register a new product and record its initial stock as an AddToStock movement.
    pub fn create(
        &mut self,
        id: &str,
        name: &str,
        entry_date: NaiveDate,
        initial_quantity: i64,
    ) -> DomainResult<&Product> {
        let product_id = ProductId::parse(id)?;
        if name.trim().is_empty() {
            return Err(DomainError::invalid_input("product name cannot be empty"));
        }
        if initial_quantity < 0 {
            return Err(DomainError::invalid_input(format!(
                "initial quantity cannot be negative (got {initial_quantity})"
            )));
        }
        if self.config.search.find(&self.products, id).is_some() {
            tracing::warn!(product_id = %product_id, "rejected duplicate product id");
            return Err(DomainError::duplicate_id(id));
        }

        let mut product = Product::new(product_id, name, entry_date, self.config.history_capacity)?;
        product.record_event(
            MovementKind::AddToStock,
            initial_quantity,
            entry_date,
            self.ids.as_ref(),
        )?;

        tracing::info!(
            product_id = %product.id(),
            name = product.name(),
            quantity = product.quantity(),
            "product created"
        );

        self.products.push(product);
        let created = self.products.len() - 1;
        Ok(&self.products[created])
    }

    /// Remove a product (and its history). Returns the removed product.
    pub fn delete(&mut self, id: &str) -> DomainResult<Product> {
        let idx = self
            .config
            .search
            .position(&self.products, id)
            .ok_or_else(DomainError::not_found)?;
        let removed = self.products.remove(idx);
        tracing::info!(product_id = %removed.id(), "product deleted");
        Ok(removed)
    }

    pub fn find(&self, id: &str) -> DomainResult<&Product> {
        self.config
            .search
            .find(&self.products, id)
            .ok_or_else(DomainError::not_found)
    }

    /// Record a stock movement against the product with `id`.
    ///
    /// Lookup, stock check, quantity update and history insert happen as one
    /// step under `&mut self`.
    pub fn record_event(
        &mut self,
        id: &str,
        kind: MovementKind,
        quantity: i64,
        date: NaiveDate,
    ) -> DomainResult<StockEvent> {
        let idx = self
            .config
            .search
            .position(&self.products, id)
            .ok_or_else(DomainError::not_found)?;
        let product = &mut self.products[idx];

        match product.record_event(kind, quantity, date, self.ids.as_ref()) {
            Ok(event) => {
                tracing::debug!(
                    product_id = %product.id(),
                    event_id = %event.id(),
                    kind = %kind,
                    quantity,
                    stock = product.quantity(),
                    "stock movement recorded"
                );
                Ok(event)
            }
            Err(err) => {
                tracing::warn!(
                    product_id = %product.id(),
                    kind = %kind,
                    quantity,
                    stock = product.quantity(),
                    error = %err,
                    "stock movement rejected"
                );
                Err(err)
            }
        }
    }

    /// History of the product with `id`, ordered by the configured sort strategy.
    pub fn history_sorted_by_quantity(&self, id: &str) -> DomainResult<Vec<StockEvent>> {
        let product = self.find(id)?;
        Ok(product.history_sorted_with(&self.config.sort))
    }

    /// Owned snapshot of every product, in insertion order.
    ///
    /// Mutating the returned products has no effect on the registry.
    pub fn list(&self) -> Vec<Product> {
        self.products.clone()
    }
}
