//! Cursor module
//!
//! A [`Cursor`] is the resumable position handed back and forth between a
//! client and a paged endpoint. On the wire it is five query parameters:
//!
//! ```text
//! ?value=1700000000&offset=2&count=20&order=created_at&direction=-1
//! ```
//!
//! [`decode`] turns a query string plus [`Defaults`] into a cursor and a list
//! of every malformed parameter; [`encode`] writes a cursor back onto a URL
//! without disturbing the URL's other parameters.

mod codec;
mod types;

pub use codec::{decode, decode_url, encode};
pub use types::{
    Cursor, DecodeErrors, DecodeFailure, Defaults, CURSOR_PARAMS, DEFAULT_COUNT,
};
