//! Next/previous cursor derivation
//!
//! Every function here is pure: it reads a cursor and one fetched page and
//! returns a fresh cursor. Fetching is the caller's business. A caller that
//! prefetches asks its store for [`fetch_limit`] records (page size plus one
//! lookahead) starting at `cursor.value`, skipping `cursor.offset` records
//! that carry exactly that value.
//!
//! # Boundaries and ties
//!
//! The next cursor points at the boundary record: the lookahead record when
//! one was fetched, otherwise the last record of the page. Records on the
//! page sharing the boundary's ordering value are counted into the new
//! offset so the next fetch skips them. When a whole page is one tie run
//! continuing the current cursor's run, the offsets add up instead.

use super::types::ValueProvider;
use crate::cursor::Cursor;
use crate::types::Direction;
use tracing::debug;

/// Cursor for the page after `items`
///
/// `prefetched` states that the caller asked for one lookahead record; a
/// page without it is then the last one and the result is `None`.
pub fn next<T: ValueProvider>(cursor: &Cursor, items: &[T], prefetched: bool) -> Option<Cursor> {
    if prefetched && items.len() <= cursor.count {
        debug!(
            "No lookahead record ({} fetched, page size {}), last page",
            items.len(),
            cursor.count
        );
        return None;
    }
    let boundary = boundary_index(cursor, items)?;
    after(cursor, items, boundary, cursor.direction)
}

/// Cursor for the page before `items`
///
/// Anchored on the first record of the page, walking the opposite
/// direction. `None` only for an empty page.
pub fn prev<T: ValueProvider>(cursor: &Cursor, items: &[T]) -> Option<Cursor> {
    after(cursor, items, 0, cursor.direction.invert())
}

/// Number of records to fetch for one page
pub fn fetch_limit(cursor: &Cursor, prefetch: bool) -> usize {
    if prefetch {
        cursor.count + 1
    } else {
        cursor.count
    }
}

/// The records to show for this page, without the lookahead record
pub fn page_items<'a, T>(cursor: &Cursor, items: &'a [T]) -> &'a [T] {
    &items[..items.len().min(cursor.count)]
}

/// Index whose value becomes the next cursor's value
///
/// The last record of a short page, or the lookahead record at `count` when
/// more than a page was fetched.
fn boundary_index<T>(cursor: &Cursor, items: &[T]) -> Option<usize> {
    if items.len() > cursor.count {
        Some(cursor.count)
    } else {
        items.len().checked_sub(1)
    }
}

/// Records among the first `count` that tie with `value`
fn tie_count<T: ValueProvider>(cursor: &Cursor, items: &[T], value: &str) -> usize {
    page_items(cursor, items)
        .iter()
        .filter(|item| item.value_for(&cursor.order) == value)
        .count()
}

fn after<T: ValueProvider>(
    cursor: &Cursor,
    items: &[T],
    boundary: usize,
    direction: Direction,
) -> Option<Cursor> {
    let value = items.get(boundary)?.value_for(&cursor.order);
    let ties = tie_count(cursor, items, &value);

    let offset = if ties == cursor.count && value == cursor.value {
        // Whole page continues the previous tie run
        ties + cursor.offset
    } else {
        ties
    };

    debug!(
        "Boundary {} value {:?}: {} ties, offset {} -> {}",
        boundary, value, ties, cursor.offset, offset
    );

    Some(Cursor {
        value,
        offset,
        count: cursor.count,
        order: cursor.order.clone(),
        direction,
    })
}

impl Cursor {
    /// Cursor for the page after `items`, see [`next`]
    pub fn next<T: ValueProvider>(&self, items: &[T], prefetched: bool) -> Option<Cursor> {
        next(self, items, prefetched)
    }

    /// Cursor for the page before `items`, see [`prev`]
    pub fn prev<T: ValueProvider>(&self, items: &[T]) -> Option<Cursor> {
        prev(self, items)
    }
}
