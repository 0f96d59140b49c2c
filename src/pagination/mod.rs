//! Pagination module
//!
//! Derives the next and previous [`Cursor`](crate::cursor::Cursor) from one
//! fetched page.
//!
//! # Overview
//!
//! A request flows through the module like this:
//!
//! 1. decode a cursor from the request (see [`crate::cursor::decode`])
//! 2. fetch up to [`fetch_limit`] records ordered by `cursor.order` in
//!    `cursor.direction`, starting at `cursor.value` and skipping
//!    `cursor.offset` records tied with it
//! 3. call [`next`] and [`prev`] with the cursor and the fetched records
//! 4. encode the results into outgoing URLs
//!
//! Records only need to implement [`ValueProvider`]. The algebra compares
//! ordering tokens for equality and never orders them, so any sequence the
//! caller can fetch in a stable order can be paged.

mod engine;
mod types;

pub use engine::{fetch_limit, next, page_items, prev};
pub use types::ValueProvider;

#[cfg(test)]
mod tests;
