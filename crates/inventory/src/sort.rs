//! Ordering of stock movements by quantity.
//!
//! Two interchangeable strategies sit behind [`ActivitySort`]:
//!
//! - [`BubbleSort`] (default): adjacent swaps with early exit; stable.
//! - [`PartitionSort`]: partitioning around the last element of each range,
//!   comparing `(quantity, original position)` so it is stable as well.
//!
//! Both strategies yield the same order, ties included, so either can back a
//! registry. Histories are tiny (a handful of events), so the quadratic worst
//! case of both does not matter.

use serde::{Deserialize, Serialize};

use crate::event::StockEvent;

/// Sorts a slice of stock movements by ascending quantity, in place.
pub trait ActivitySort {
    fn sort_by_quantity(&self, events: &mut [StockEvent]);
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BubbleSort;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PartitionSort;

impl ActivitySort for BubbleSort {
    fn sort_by_quantity(&self, events: &mut [StockEvent]) {
        bubble_sort_by_key(events, StockEvent::quantity);
    }
}

impl ActivitySort for PartitionSort {
    fn sort_by_quantity(&self, events: &mut [StockEvent]) {
        partition_sort_by_key(events, &StockEvent::quantity);
    }
}

/// Runtime-selectable sort strategy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortStrategy {
    #[default]
    Bubble,
    Partition,
}

impl ActivitySort for SortStrategy {
    fn sort_by_quantity(&self, events: &mut [StockEvent]) {
        match self {
            SortStrategy::Bubble => BubbleSort.sort_by_quantity(events),
            SortStrategy::Partition => PartitionSort.sort_by_quantity(events),
        }
    }
}

impl core::str::FromStr for SortStrategy {
    type Err = stockledger_core::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bubble" => Ok(SortStrategy::Bubble),
            "partition" => Ok(SortStrategy::Partition),
            other => Err(stockledger_core::DomainError::invalid_input(format!(
                "unknown sort strategy '{other}' (expected bubble or partition)"
            ))),
        }
    }
}

/// Stable bubble sort; stops after the first pass without swaps.
pub fn bubble_sort_by_key<T, K, F>(items: &mut [T], key: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let n = items.len();
    if n < 2 {
        return;
    }

    for pass in 0..n - 1 {
        let mut swapped = false;
        // The last `pass` slots already hold the largest keys.
        for j in 0..n - 1 - pass {
            // Strict comparison keeps equal keys in input order.
            if key(&items[j]) > key(&items[j + 1]) {
                items.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Stable partition (quick) sort using the last element of each range as pivot.
///
/// Keys are tagged with their input position and sorted as `(key, position)`
/// pairs, then `items` is rearranged to match. Only the smaller side of each
/// split is recursed into, so stack depth stays logarithmic on sorted input.
pub fn partition_sort_by_key<T, K, F>(items: &mut [T], key: &F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    if items.len() < 2 {
        return;
    }

    let mut tagged: Vec<(K, usize)> = items.iter().map(key).zip(0..).collect();
    quick_sort(&mut tagged);
    let order: Vec<usize> = tagged.into_iter().map(|(_, position)| position).collect();
    apply_order(items, &order);
}

fn quick_sort<E: Ord>(mut items: &mut [E]) {
    while items.len() > 1 {
        let pivot = partition(items);
        let (left, right) = core::mem::take(&mut items).split_at_mut(pivot);
        // right[0] is the pivot, already in its final slot.
        let right = &mut right[1..];
        if left.len() < right.len() {
            quick_sort(left);
            items = right;
        } else {
            quick_sort(right);
            items = left;
        }
    }
}

/// Moves every element <= the last one in front of it and returns the
/// pivot's final index. `items` must be non-empty.
fn partition<E: Ord>(items: &mut [E]) -> usize {
    let high = items.len() - 1;

    let mut store = 0;
    for j in 0..high {
        if items[j] <= items[high] {
            items.swap(store, j);
            store += 1;
        }
    }
    items.swap(store, high);
    store
}

/// Rearranges `items` so slot `i` holds the element that started at `order[i]`.
fn apply_order<T>(items: &mut [T], order: &[usize]) {
    for i in 0..items.len() {
        let mut source = order[i];
        // Earlier swaps moved that element; follow them to its current slot.
        while source < i {
            source = order[source];
        }
        items.swap(i, source);
    }
}
