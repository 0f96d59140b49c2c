//! In-memory record store
//!
//! A caller-side fetcher for lists held in memory. It answers the same query
//! a SQL caller would issue for a cursor:
//!
//! ```sql
//! SELECT * FROM t WHERE {order} >= {value} ORDER BY {order} ASC LIMIT {offset}, {count + 1}
//! ```
//!
//! (with `<=` and `DESC` for descending cursors). Ordering is the store's
//! concern, not the cursor algebra's: values that both parse as numbers
//! compare numerically, anything else compares as text. Two values compare
//! equal only when their tokens are identical, so `1` and `1.0` are adjacent
//! but distinct.

use crate::cursor::Cursor;
use crate::pagination::{self, ValueProvider};
use crate::types::Direction;
use std::cmp::Ordering;
use tracing::debug;

/// One page fetched from a [`MemoryStore`]
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    /// Records to show, lookahead excluded
    pub items: Vec<&'a T>,
    /// Cursor for the following page
    pub next: Option<Cursor>,
    /// Cursor for the preceding page
    pub prev: Option<Cursor>,
}

/// An ordered-on-demand list of records
#[derive(Debug, Clone, Default)]
pub struct MemoryStore<T> {
    items: Vec<T>,
}

impl<T: ValueProvider> MemoryStore<T> {
    /// Create a store over `items`
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Fetch the records for `cursor`
    ///
    /// Returns up to `count + 1` records when `prefetch` is set, `count`
    /// otherwise. Records with equal values keep their insertion order.
    pub fn fetch(&self, cursor: &Cursor, prefetch: bool) -> Vec<&T> {
        let mut rows: Vec<(String, &T)> = self
            .items
            .iter()
            .map(|item| (item.value_for(&cursor.order), item))
            .collect();

        rows.sort_by(|(a, _), (b, _)| match cursor.direction {
            Direction::Asc => compare_values(a, b),
            Direction::Desc => compare_values(b, a),
        });

        let limit = pagination::fetch_limit(cursor, prefetch);
        let fetched: Vec<&T> = rows
            .into_iter()
            .filter(|(value, _)| in_range(cursor, value))
            .skip(cursor.offset)
            .take(limit)
            .map(|(_, item)| item)
            .collect();

        debug!(
            "Fetched {} of {} records (order {}, value {:?}, offset {}, limit {})",
            fetched.len(),
            self.items.len(),
            cursor.order,
            cursor.value,
            cursor.offset,
            limit
        );
        fetched
    }

    /// Fetch one page and derive its neighbouring cursors
    pub fn page(&self, cursor: &Cursor, prefetch: bool) -> Page<'_, T> {
        let fetched = self.fetch(cursor, prefetch);
        let next = pagination::next(cursor, &fetched, prefetch);
        let prev = pagination::prev(cursor, &fetched);

        Page {
            items: pagination::page_items(cursor, &fetched).to_vec(),
            next,
            prev,
        }
    }
}

impl<T: ValueProvider> From<Vec<T>> for MemoryStore<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

/// Whether `value` lies at or past the cursor position
fn in_range(cursor: &Cursor, value: &str) -> bool {
    if cursor.value.is_empty() {
        return true;
    }
    match cursor.direction {
        Direction::Asc => compare_values(value, &cursor.value) != Ordering::Less,
        Direction::Desc => compare_values(value, &cursor.value) != Ordering::Greater,
    }
}

/// Numeric comparison when both sides are numbers, text comparison otherwise
///
/// Numerically equal tokens fall back to text order, keeping `Equal`
/// aligned with token equality.
pub fn compare_values(a: &str, b: &str) -> Ordering {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) if x.is_finite() && y.is_finite() => {
            x.total_cmp(&y).then_with(|| a.cmp(b))
        }
        _ => a.cmp(b),
    }
}
