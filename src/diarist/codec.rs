//! # Persistence Codec
//!
//! The key-value store only holds strings. This module is the single place where
//! those strings are turned into typed values and back:
//!
//! - the entry collection is a JSON array of `{text, date, direction, fontFamily}`
//!   objects, in creation order;
//! - the theme preference is the literal string `true` or `false`.
//!
//! Decoding never fails outward. A missing value, a JSON `null`, or anything that
//! does not parse decodes to the fallback ([`Decoded::Fallback`] carries the reason
//! so callers can log it).

use crate::error::Result;
use crate::model::Entry;

/// Outcome of decoding a stored string.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded<T> {
    /// The stored value was present and well formed.
    Value(T),
    /// Nothing was stored under the key.
    Missing,
    /// Something was stored but could not be decoded.
    Fallback { reason: String },
}

pub fn encode_entries(entries: &[Entry]) -> Result<String> {
    Ok(serde_json::to_string(entries)?)
}

pub fn decode_entries(raw: Option<&str>) -> Decoded<Vec<Entry>> {
    let Some(raw) = raw else {
        return Decoded::Missing;
    };
    match serde_json::from_str::<Option<Vec<Entry>>>(raw) {
        Ok(Some(entries)) => Decoded::Value(entries),
        Ok(None) => Decoded::Missing,
        Err(err) => Decoded::Fallback {
            reason: err.to_string(),
        },
    }
}

pub fn encode_theme(is_dark: bool) -> String {
    is_dark.to_string()
}

pub fn decode_theme(raw: Option<&str>) -> Decoded<bool> {
    match raw.map(str::trim) {
        None => Decoded::Missing,
        Some("true") => Decoded::Value(true),
        Some("false") => Decoded::Value(false),
        Some(other) => Decoded::Fallback {
            reason: format!("expected true or false, found {:?}", other),
        },
    }
}
