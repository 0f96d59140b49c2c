//! Cursor, defaults and decode failure types

use crate::types::Direction;
use serde::{Deserialize, Serialize};
use std::num::ParseIntError;
use thiserror::Error;

/// Page size used when neither the request nor the defaults supply one
pub const DEFAULT_COUNT: usize = 10;

/// Query parameter names of the cursor wire form, in encoding order
pub const CURSOR_PARAMS: [&str; 5] = ["value", "offset", "count", "order", "direction"];

// ============================================================================
// Cursor
// ============================================================================

/// A resumable position in an ordered sequence
///
/// `value` is the ordering token of the record the next fetch starts at and
/// `offset` is how many records carrying that same token the fetch must skip.
/// Cursors are plain values: every pagination operation returns a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cursor {
    /// Opaque ordering token of the boundary record
    pub value: String,
    /// Number of records sharing `value` to skip
    pub offset: usize,
    /// Page size
    pub count: usize,
    /// Ordering key passed to [`ValueProvider::value_for`](crate::pagination::ValueProvider::value_for)
    pub order: String,
    /// Sort direction
    pub direction: Direction,
}

impl Cursor {
    /// Create a cursor positioned at the start of a sequence
    pub fn new(order: impl Into<String>, direction: Direction, count: usize) -> Self {
        Self {
            value: String::new(),
            offset: 0,
            count,
            order: order.into(),
            direction,
        }
    }

    /// Position the cursor at `value`, skipping `offset` tied records
    #[must_use]
    pub fn at(mut self, value: impl Into<String>, offset: usize) -> Self {
        self.value = value.into();
        self.offset = offset;
        self
    }

    /// Whether this cursor points at the start of the sequence
    pub fn is_initial(&self) -> bool {
        self.value.is_empty() && self.offset == 0
    }

    /// Wire form as `(name, value)` pairs
    pub fn query_pairs(&self) -> [(&'static str, String); 5] {
        [
            ("value", self.value.clone()),
            ("offset", self.offset.to_string()),
            ("count", self.count.to_string()),
            ("order", self.order.clone()),
            ("direction", self.direction.as_i64().to_string()),
        ]
    }

    /// Wire form as an urlencoded query string
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query_pairs())
            .finish()
    }
}

// ============================================================================
// Defaults
// ============================================================================

/// Fallback values for fields a request leaves unset
///
/// A decoded field takes the default when it is missing or holds its zero
/// value (empty string or `0`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Defaults {
    /// Default ordering token
    pub value: Option<String>,
    /// Default tie-break offset
    pub offset: Option<usize>,
    /// Default page size
    pub count: Option<usize>,
    /// Default ordering key
    pub order: Option<String>,
    /// Default direction
    pub direction: Option<Direction>,
    /// Whether callers fetch one lookahead record past the page size
    pub prefetch: bool,
}

impl Defaults {
    /// Defaults that supply nothing
    pub fn none() -> Self {
        Self::default()
    }

    /// Set the default page size
    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Set the default ordering key
    #[must_use]
    pub fn with_order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    /// Set the default direction
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Set the prefetch flag
    #[must_use]
    pub fn with_prefetch(mut self, prefetch: bool) -> Self {
        self.prefetch = prefetch;
        self
    }
}

// ============================================================================
// Decode Errors
// ============================================================================

/// A single malformed cursor parameter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeFailure {
    /// An integer field did not parse
    #[error("invalid {field} '{raw}': {source}")]
    Parse {
        /// Parameter name
        field: &'static str,
        /// Raw parameter value
        raw: String,
        /// Underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// The direction parsed but is neither `1` nor `-1`
    #[error("'{raw}' is not a supported direction, use 1 (asc) or -1 (desc)")]
    InvalidDirection {
        /// Raw parameter value
        raw: String,
    },
}

impl DecodeFailure {
    /// Name of the offending parameter
    pub fn field(&self) -> &'static str {
        match self {
            Self::Parse { field, .. } => field,
            Self::InvalidDirection { .. } => "direction",
        }
    }

    /// Raw value that failed
    pub fn raw(&self) -> &str {
        match self {
            Self::Parse { raw, .. } | Self::InvalidDirection { raw } => raw,
        }
    }
}

/// Every failure found while decoding one cursor
///
/// Empty when the query string decoded cleanly.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("failed to decode cursor: {}", join_failures(.failures))]
pub struct DecodeErrors {
    failures: Vec<DecodeFailure>,
}

fn join_failures(failures: &[DecodeFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl DecodeErrors {
    /// Create an empty aggregate
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure
    pub fn push(&mut self, failure: DecodeFailure) {
        self.failures.push(failure);
    }

    /// Whether nothing failed
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of failures
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Failures in the order they were found
    pub fn iter(&self) -> std::slice::Iter<'_, DecodeFailure> {
        self.failures.iter()
    }

    /// Failures as a slice
    pub fn failures(&self) -> &[DecodeFailure] {
        &self.failures
    }

    /// `Ok(())` when empty, otherwise the aggregate as an error
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl IntoIterator for DecodeErrors {
    type Item = DecodeFailure;
    type IntoIter = std::vec::IntoIter<DecodeFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}

impl<'a> IntoIterator for &'a DecodeErrors {
    type Item = &'a DecodeFailure;
    type IntoIter = std::slice::Iter<'a, DecodeFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}
