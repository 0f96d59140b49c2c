//! Response packaging
//!
//! The one response shape this crate defines: the URL of the next page, or
//! `null` when there is none.
//!
//! ```json
//! { "next": "https://api.example.com/comments?value=5&offset=2&count=2&order=updated_at&direction=-1" }
//! ```

use crate::cursor::{encode, Cursor};
use serde::{Deserialize, Serialize};
use url::Url;

/// Link to the next page for an outgoing response body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextLink {
    /// Next page URL, `None` on the last page
    pub next: Option<String>,
}

impl NextLink {
    /// Encode `next` onto `base`, or an empty link when there is no next page
    pub fn new(next: Option<&Cursor>, base: &Url) -> Self {
        Self {
            next: next.map(|cursor| encode(cursor, base).to_string()),
        }
    }

    /// Whether another page exists
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}
