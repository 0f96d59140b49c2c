//! Query string codec for cursors
//!
//! Decoding is tolerant: every malformed parameter is recorded and the
//! remaining parameters are still applied, so callers always get a usable
//! cursor and decide for themselves whether to reject the request.

use super::types::{
    Cursor, DecodeErrors, DecodeFailure, Defaults, CURSOR_PARAMS, DEFAULT_COUNT,
};
use crate::types::Direction;
use std::collections::HashMap;
use std::str::FromStr;
use tracing::debug;
use url::Url;

/// Decode a cursor from a query string, filling unset fields from `defaults`
///
/// A leading `?` is ignored. When a parameter repeats, its first occurrence
/// wins. The returned [`DecodeErrors`] is empty when every parameter decoded.
pub fn decode(query: &str, defaults: &Defaults) -> (Cursor, DecodeErrors) {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut params: HashMap<String, String> = HashMap::new();
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        if CURSOR_PARAMS.contains(&key.as_ref()) {
            params
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }
    }

    let mut errors = DecodeErrors::new();

    let value = params.get("value").cloned();
    let offset = parse_int::<usize>(&params, "offset", &mut errors);
    let count = parse_int::<usize>(&params, "count", &mut errors);
    let order = params.get("order").cloned();
    let direction = parse_direction(&params, &mut errors);

    // Zero values count as unset
    let cursor = Cursor {
        value: value
            .filter(|v| !v.is_empty())
            .or_else(|| defaults.value.clone())
            .unwrap_or_default(),
        offset: offset
            .filter(|&o| o != 0)
            .or(defaults.offset)
            .unwrap_or(0),
        count: count
            .filter(|&c| c != 0)
            .or(defaults.count)
            .filter(|&c| c != 0)
            .unwrap_or(DEFAULT_COUNT),
        order: order
            .filter(|o| !o.is_empty())
            .or_else(|| defaults.order.clone())
            .unwrap_or_default(),
        direction: direction.or(defaults.direction).unwrap_or_default(),
    };

    (cursor, errors)
}

/// Decode a cursor from the query component of `url`
pub fn decode_url(url: &Url, defaults: &Defaults) -> (Cursor, DecodeErrors) {
    decode(url.query().unwrap_or_default(), defaults)
}

/// Encode `cursor` into a copy of `base`
///
/// Parameters of `base` unrelated to cursors are kept in their original
/// order; stale cursor parameters are replaced.
pub fn encode(cursor: &Cursor, base: &Url) -> Url {
    let retained: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(key, _)| !CURSOR_PARAMS.contains(&key.as_ref()))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut url = base.clone();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(retained)
        .extend_pairs(cursor.query_pairs());
    url
}

fn parse_int<T>(
    params: &HashMap<String, String>,
    field: &'static str,
    errors: &mut DecodeErrors,
) -> Option<T>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    let raw = params.get(field)?;
    match raw.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(source) => {
            debug!("Malformed cursor parameter {}={:?}: {}", field, raw, source);
            errors.push(DecodeFailure::Parse {
                field,
                raw: raw.clone(),
                source,
            });
            None
        }
    }
}

fn parse_direction(
    params: &HashMap<String, String>,
    errors: &mut DecodeErrors,
) -> Option<Direction> {
    let raw = params.get("direction")?;
    match parse_int::<i64>(params, "direction", errors)? {
        0 => None,
        value => {
            let direction = Direction::from_i64(value);
            if direction.is_none() {
                debug!("Unsupported cursor direction {:?}", raw);
                errors.push(DecodeFailure::InvalidDirection { raw: raw.clone() });
            }
            direction
        }
    }
}
