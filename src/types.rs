//! Common types used throughout stable-cursor
//!
//! This module contains shared type definitions and type aliases
//! used across multiple modules.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

// ============================================================================
// Direction
// ============================================================================

/// Sort direction of a paged sequence
///
/// On the wire a direction is its integer discriminant: `1` for ascending,
/// `-1` for descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order
    #[default]
    Asc = 1,
    /// Descending order
    Desc = -1,
}

impl Direction {
    /// Integer form used in query strings
    pub fn as_i64(self) -> i64 {
        self as i64
    }

    /// Parse the integer wire form
    ///
    /// Returns `None` for anything other than `1` or `-1`.
    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            1 => Some(Self::Asc),
            -1 => Some(Self::Desc),
            _ => None,
        }
    }

    /// The opposite direction
    #[must_use]
    pub fn invert(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Lowercase name (`asc` / `desc`)
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// SQL keyword for an `ORDER BY` clause
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
