//! Property-based tests for codec and merge guarantees

use proptest::prelude::*;
use query_filters::codec;
use query_filters::defaults::merge_defaults;
use query_filters::query::QueryMap;

/// Build/parse round-trip over maps with non-empty values.
#[test]
fn test_roundtrip_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &proptest::collection::vec((".{0,8}", ".{1,8}"), 0..8),
            |pairs| {
                // Collecting canonicalizes duplicate keys (last wins), which
                // is also what parse does.
                let map: QueryMap = pairs.into_iter().collect();
                let rebuilt = codec::parse(&codec::build(&map));
                prop_assert_eq!(rebuilt, map);
                Ok(())
            },
        )
        .unwrap();
}

/// Parsing never fails, whatever the input looks like.
#[test]
fn test_parse_totality_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&any::<String>(), |search| {
            let parsed = codec::parse(&search);
            // Re-serializing the parse result must also never fail.
            let _ = codec::build(&parsed);
            Ok(())
        })
        .unwrap();
}

/// Every default key is present after the merge, and raw-only keys pass
/// through.
#[test]
fn test_merge_totality_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    let entries = || proptest::collection::vec(("[a-z]{1,4}", ".{0,6}"), 0..6);
    runner
        .run(&(entries(), entries()), |(raw_pairs, default_pairs)| {
            let raw: QueryMap = raw_pairs.into_iter().collect();
            let defaults: QueryMap = default_pairs.into_iter().collect();

            let merged = merge_defaults(&raw, &defaults);
            for key in defaults.keys() {
                prop_assert!(merged.contains_key(key));
            }
            for key in raw.keys() {
                prop_assert!(merged.contains_key(key));
            }
            Ok(())
        })
        .unwrap();
}
