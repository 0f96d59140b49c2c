//! Pagination types and traits
//!
//! Defines the capability items must offer to be paged.

use crate::types::StringMap;
use std::rc::Rc;
use std::sync::Arc;

/// Exposes the ordering token of an item for a given ordering key
///
/// Tokens are compared for equality only, never ordered. They must be equal
/// exactly when the backing store considers the ordering values equal; their
/// formatting is otherwise free (`"7"` and `"1700000000"` are both fine
/// without zero padding). Ordering itself is the fetch query's job.
///
/// Unknown keys yield a fixed sentinel, usually the empty string.
pub trait ValueProvider {
    /// Ordering token of this item under `order`
    fn value_for(&self, order: &str) -> String;
}

impl<T: ValueProvider + ?Sized> ValueProvider for &T {
    fn value_for(&self, order: &str) -> String {
        (**self).value_for(order)
    }
}

impl<T: ValueProvider + ?Sized> ValueProvider for Box<T> {
    fn value_for(&self, order: &str) -> String {
        (**self).value_for(order)
    }
}

impl<T: ValueProvider + ?Sized> ValueProvider for Rc<T> {
    fn value_for(&self, order: &str) -> String {
        (**self).value_for(order)
    }
}

impl<T: ValueProvider + ?Sized> ValueProvider for Arc<T> {
    fn value_for(&self, order: &str) -> String {
        (**self).value_for(order)
    }
}

impl ValueProvider for StringMap {
    fn value_for(&self, order: &str) -> String {
        self.get(order).cloned().unwrap_or_default()
    }
}
