//! Default Back-Fill
//!
//! Fills missing keys of a parsed query from a caller-supplied default
//! mapping. Presence is decided by non-emptiness, not truthiness: `"0"` and
//! `"false"` are ordinary non-empty values and are kept.

use crate::query::QueryMap;

/// Merge `raw` with `defaults`.
///
/// For each key of `defaults`, the output holds the raw value if it is
/// present and non-empty, otherwise the default. Keys present only in `raw`
/// pass through unchanged, so `keys(output) ⊇ keys(defaults)` always holds.
/// No validation and no type coercion happen here.
pub fn merge_defaults(raw: &QueryMap, defaults: &QueryMap) -> QueryMap {
    let mut merged = raw.clone();
    for (key, fallback) in defaults.iter() {
        match raw.get(key) {
            Some(value) if !value.is_empty() => {}
            _ => {
                merged.insert(key, fallback);
            }
        }
    }
    merged
}
