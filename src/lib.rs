// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # stable-cursor
//!
//! Stable forward and backward page cursors over any ordered sequence: SQL
//! rows, key-value scans, in-memory lists.
//!
//! A cursor is an ordering value plus a tie-break offset. Given one fetched
//! page, the next cursor points at the first record of the following page
//! and counts the records sharing its ordering value that were already
//! shown, so runs of duplicate values never make a page skip or repeat
//! records.
//!
//! ## Features
//!
//! - **Tolerant decoding**: every malformed query parameter is reported,
//!   none aborts the decode
//! - **URL round trip**: cursors encode onto a URL without touching its
//!   other parameters
//! - **Lookahead end detection**: fetch one record past the page size and
//!   the last page is known without a second query
//! - **Storage agnostic**: records only expose an ordering token
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stable_cursor::{cursor, pagination, Defaults, Direction, NextLink};
//!
//! let defaults = Defaults::none()
//!     .with_count(20)
//!     .with_order("updated_at")
//!     .with_direction(Direction::Desc);
//!
//! // 1. Cursor from the request
//! let (cursor, errors) = cursor::decode_url(&request_url, &defaults);
//!
//! // 2. Fetch `pagination::fetch_limit(&cursor, true)` rows from the store
//! let rows = fetch_comments(&cursor)?;
//!
//! // 3. Derive the neighbouring cursors
//! let next = pagination::next(&cursor, &rows, true);
//! let prev = pagination::prev(&cursor, &rows);
//!
//! // 4. Respond
//! let link = NextLink::new(next.as_ref(), &request_url);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │  request URL ──decode──▶ Cursor ──▶ caller fetches count + 1  │
//! └───────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┴───────────┬────────────────────┐
//! │   cursor     │       pagination          │     response       │
//! ├──────────────┼───────────────────────────┼────────────────────┤
//! │ decode       │ next (lookahead boundary) │ NextLink           │
//! │ encode       │ prev (first record)       │ { "next": url }    │
//! │ Defaults     │ ValueProvider             │                    │
//! └──────────────┴───────────────────────────┴────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Cursor values and their query string codec
pub mod cursor;

/// Next/previous cursor derivation
pub mod pagination;

/// JSON records as pageable items
pub mod record;

/// Next page link for response bodies
pub mod response;

/// In-memory record store
pub mod store;

/// Pagination defaults configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use cursor::{Cursor, DecodeErrors, DecodeFailure, Defaults};
pub use pagination::ValueProvider;
pub use response::NextLink;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
