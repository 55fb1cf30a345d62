//! Fixed-capacity, most-recent-first retention container.

use std::collections::VecDeque;

use crate::error::{DomainError, DomainResult};

/// Large capacities grow on demand instead of allocating up front.
const PREALLOCATE_LIMIT: usize = 64;

/// Keeps only the last `capacity` items pushed into it.
///
/// The front is the most recently inserted item. Pushing into a full history
/// evicts exactly one item: the oldest one (the back). Capacity is fixed for
/// the lifetime of the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedHistory<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedHistory<T> {
    /// Checks a capacity without building a history.
    pub fn validate_capacity(capacity: usize) -> DomainResult<()> {
        if capacity == 0 {
            return Err(DomainError::InvalidCapacity(capacity));
        }
        Ok(())
    }

    /// Create an empty history. `capacity` must be positive.
    pub fn new(capacity: usize) -> DomainResult<Self> {
        Self::validate_capacity(capacity)?;
        Ok(Self {
            // One spare slot so a push never reallocates before the eviction.
            items: VecDeque::with_capacity(capacity.min(PREALLOCATE_LIMIT) + 1),
            capacity,
        })
    }

    /// Insert `item` as the most recent element.
    ///
    /// Returns the evicted oldest element, if the push overflowed capacity.
    pub fn push_front(&mut self, item: T) -> Option<T> {
        self.items.push_front(item);
        if self.items.len() > self.capacity {
            self.items.pop_back()
        } else {
            None
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Most recent element.
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Borrowing iterator, most-recent-first.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }
}

impl<T: Clone> BoundedHistory<T> {
    /// Owned snapshot of the retained elements, most-recent-first.
    ///
    /// The returned vector is independent of the history: later pushes and
    /// evictions are not visible through it.
    pub fn to_ordered_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}
