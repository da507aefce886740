//! Query String Codec
//!
//! Stateless conversion between URL search strings and [`QueryMap`], using
//! `application/x-www-form-urlencoded` rules: `+` stands for space, bytes
//! outside the unreserved set are percent-encoded. Parsing is permissive and
//! never fails; malformed percent escapes are kept literally and non-UTF-8
//! sequences are replaced lossily.

use crate::query::QueryMap;

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Parse a URL search string into a [`QueryMap`].
///
/// A single leading `?` is ignored, empty segments are skipped, a segment
/// without `=` yields an empty-string value, and the last occurrence of a
/// duplicate key wins (the first occurrence fixes its position).
pub fn parse(search: &str) -> QueryMap {
    let search = search.strip_prefix('?').unwrap_or(search);
    let mut query = QueryMap::new();
    for segment in search.split('&') {
        if segment.is_empty() {
            continue;
        }
        let (key, value) = match segment.split_once('=') {
            Some((key, value)) => (key, value),
            None => (segment, ""),
        };
        query.insert(percent_decode(key), percent_decode(value));
    }
    query
}

/// Serialize a [`QueryMap`] into a canonical search string (no leading `?`).
///
/// Entries with empty values are omitted, so an empty-string value is the
/// way to drop a key from the resulting URL. Output order is the map's
/// insertion order.
pub fn build(query: &QueryMap) -> String {
    let mut out = String::new();
    for (key, value) in query.iter() {
        if value.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('&');
        }
        percent_encode_into(&mut out, key);
        out.push('=');
        percent_encode_into(&mut out, value);
    }
    out
}

/// Decode one form-urlencoded component. Total: invalid escapes pass through
/// as literal text.
fn percent_decode(component: &str) -> String {
    let bytes = component.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            other => {
                out.push(other);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn percent_encode_into(out: &mut String, component: &str) {
    for &byte in component.as_bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'*' | b'-' | b'.' | b'_' => {
                out.push(byte as char);
            }
            b' ' => out.push('+'),
            _ => {
                out.push('%');
                out.push(HEX_UPPER[(byte >> 4) as usize] as char);
                out.push(HEX_UPPER[(byte & 0x0f) as usize] as char);
            }
        }
    }
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
