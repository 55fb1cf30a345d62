//! Product lookup by identifier.
//!
//! [`LinearSearch`] scans the collection in order and returns the first match.
//! [`BinarySearch`] sorts a copy of the index by id and bisects it. Both report
//! the same found/not-found outcome for any input; with duplicate ids they may
//! pick different (equal-id) products.

use serde::{Deserialize, Serialize};

use stockledger_core::Entity;

use crate::product::Product;

/// Locates a product by id in an unordered slice.
///
/// Blank ids and empty slices always yield `None`.
pub trait ProductSearch {
    /// Index of a product whose id equals `id`.
    fn position(&self, products: &[Product], id: &str) -> Option<usize>;

    fn find<'a>(&self, products: &'a [Product], id: &str) -> Option<&'a Product> {
        self.position(products, id).map(|idx| &products[idx])
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LinearSearch;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BinarySearch;

impl ProductSearch for LinearSearch {
    fn position(&self, products: &[Product], id: &str) -> Option<usize> {
        if id.trim().is_empty() {
            return None;
        }
        products.iter().position(|p| p.has_key(id))
    }
}

impl ProductSearch for BinarySearch {
    fn position(&self, products: &[Product], id: &str) -> Option<usize> {
        if id.trim().is_empty() || products.is_empty() {
            return None;
        }

        // Sort a copy of the indices; the caller's slice keeps its order.
        let mut order: Vec<usize> = (0..products.len()).collect();
        order.sort_by(|&a, &b| products[a].id().cmp(products[b].id()));

        // Half-open window [low, high).
        let mut low = 0;
        let mut high = order.len();
        while low < high {
            let mid = low + (high - low) / 2;
            let candidate = order[mid];
            match products[candidate].cmp_key(id) {
                core::cmp::Ordering::Equal => return Some(candidate),
                core::cmp::Ordering::Less => low = mid + 1,
                core::cmp::Ordering::Greater => high = mid,
            }
        }
        None
    }
}

/// Runtime-selectable search strategy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStrategy {
    #[default]
    Linear,
    Binary,
}

impl ProductSearch for SearchStrategy {
    fn position(&self, products: &[Product], id: &str) -> Option<usize> {
        match self {
            SearchStrategy::Linear => LinearSearch.position(products, id),
            SearchStrategy::Binary => BinarySearch.position(products, id),
        }
    }
}

impl core::str::FromStr for SearchStrategy {
    type Err = stockledger_core::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(SearchStrategy::Linear),
            "binary" => Ok(SearchStrategy::Binary),
            other => Err(stockledger_core::DomainError::invalid_input(format!(
                "unknown search strategy '{other}' (expected linear or binary)"
            ))),
        }
    }
}
