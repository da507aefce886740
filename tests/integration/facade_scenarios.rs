//! End-to-end scenarios through the facade and an in-memory router

use query_filters::error::FilterError;
use query_filters::facade::UrlQueryFilters;
use query_filters::query::QueryMap;
use query_filters::router::MemoryRouter;
use query_filters::transform::FilterConfig;

fn identity_facade(
    search: &str,
    defaults: QueryMap,
) -> UrlQueryFilters<MemoryRouter, QueryMap, QueryMap> {
    UrlQueryFilters::new(MemoryRouter::new(search), FilterConfig::identity(defaults))
}

#[test]
fn test_defaults_fill_missing_keys() {
    let defaults: QueryMap = [("city", ""), ("adult", "false")].into_iter().collect();
    let filters = identity_facade("?city=Moscow", defaults);

    let current = filters.current_filters().unwrap();
    assert_eq!(current.get("city"), Some("Moscow"));
    assert_eq!(current.get("adult"), Some("false"));
}

#[test]
fn test_transform_produces_typed_frozen_filters() {
    #[derive(Debug, PartialEq)]
    struct Filters {
        adult: bool,
    }

    let defaults: QueryMap = [("adult", "false")].into_iter().collect();
    let config = FilterConfig::with_transforms(
        defaults,
        |merged: &QueryMap| {
            Ok(Filters {
                adult: merged.get("adult") == Some("true"),
            })
        },
        |patch: Filters| {
            Ok([("adult", patch.adult.to_string())]
                .into_iter()
                .collect::<QueryMap>())
        },
    );
    let filters = UrlQueryFilters::new(MemoryRouter::new("?adult=true"), config);

    let current = filters.current_filters().unwrap();
    assert_eq!(*current, Filters { adult: true });
}

#[test]
fn test_upsert_preserves_unrelated_keys() {
    let filters = identity_facade("?city=Moscow&name=Bob", QueryMap::new());

    let patch: QueryMap = [("city", "London")].into_iter().collect();
    filters.upsert(patch).unwrap();

    assert_eq!(filters.router().search(), "city=London&name=Bob");
}

#[test]
fn test_set_drops_unrelated_keys() {
    let filters = identity_facade("?city=Moscow&name=Bob", QueryMap::new());

    let patch: QueryMap = [("city", "London")].into_iter().collect();
    filters.set(patch).unwrap();

    assert_eq!(filters.router().search(), "city=London");
}

#[test]
fn test_upsert_with_empty_value_drops_key() {
    let filters = identity_facade("?city=Moscow&name=Bob", QueryMap::new());

    let patch: QueryMap = [("name", "")].into_iter().collect();
    filters.upsert(patch).unwrap();

    assert_eq!(filters.router().search(), "city=Moscow");
}

#[test]
fn test_default_write_mode_pushes() {
    let filters = identity_facade("?a=1", QueryMap::new());
    let patch: QueryMap = [("a", "2")].into_iter().collect();
    filters.upsert(patch).unwrap();

    assert_eq!(filters.router().history(), vec!["?a=1", "a=2"]);
}

#[test]
fn test_configured_replace_mode() {
    let filters = UrlQueryFilters::new(
        MemoryRouter::new("?a=1"),
        FilterConfig::identity(QueryMap::new()).replace(true),
    );
    let patch: QueryMap = [("a", "2")].into_iter().collect();
    filters.upsert(patch).unwrap();

    assert_eq!(filters.router().history(), vec!["a=2"]);
}

#[test]
fn test_typed_round_trip_through_writes() {
    #[derive(Debug, PartialEq)]
    struct Filters {
        city: String,
        page: u32,
    }

    let defaults: QueryMap = [("city", ""), ("page", "1")].into_iter().collect();
    let config = FilterConfig::with_transforms(
        defaults,
        |merged: &QueryMap| {
            let page = merged
                .get("page")
                .unwrap_or("1")
                .parse::<u32>()
                .map_err(FilterError::to_filters)?;
            Ok(Filters {
                city: merged.get("city").unwrap_or_default().to_string(),
                page,
            })
        },
        |patch: Filters| {
            Ok([("city", patch.city), ("page", patch.page.to_string())]
                .into_iter()
                .collect::<QueryMap>())
        },
    );
    let filters = UrlQueryFilters::new(MemoryRouter::new(""), config);

    filters
        .set(Filters {
            city: "London".to_string(),
            page: 3,
        })
        .unwrap();
    assert_eq!(filters.router().search(), "city=London&page=3");

    let current = filters.current_filters().unwrap();
    assert_eq!(
        *current,
        Filters {
            city: "London".to_string(),
            page: 3,
        }
    );
}
