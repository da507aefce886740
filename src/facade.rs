//! Query Filter Facade
//!
//! Composes the codec, the default back-fill, the shape transforms and the
//! freeze guard into the read/write contract: `current_filters` derives the
//! frozen filter shape from the router's search string (memoized until the
//! search string changes), `upsert` merges a patch over the current raw
//! query and navigates, `set` replaces the query wholesale.

use crate::codec;
use crate::defaults::merge_defaults;
use crate::error::FilterError;
use crate::freeze::Frozen;
use crate::query::QueryMap;
use crate::router::{NavigationMode, Router};
use crate::transform::FilterConfig;
use parking_lot::Mutex;
use tracing::{debug, trace};

struct ReadCache<F> {
    search: String,
    filters: Frozen<F>,
}

/// Synchronizes typed filter state with the URL owned by a [`Router`].
///
/// One instance owns its configuration for its whole lifetime and keeps a
/// single memoization cell keyed by the last-seen search string. Reads are
/// synchronous and run to completion; writes are fire-and-forget and issue
/// exactly one navigation call each.
pub struct UrlQueryFilters<R: Router, F = QueryMap, P = QueryMap> {
    router: R,
    config: FilterConfig<F, P>,
    cache: Mutex<Option<ReadCache<F>>>,
}

impl<R: Router, F, P> UrlQueryFilters<R, F, P> {
    pub fn new(router: R, config: FilterConfig<F, P>) -> Self {
        UrlQueryFilters {
            router,
            config,
            cache: Mutex::new(None),
        }
    }

    /// The router this facade reads from and writes to.
    pub fn router(&self) -> &R {
        &self.router
    }

    /// The current search string parsed into a query map, without defaults
    /// applied.
    pub fn raw_query(&self) -> QueryMap {
        codec::parse(&self.router.current_search())
    }

    /// The current filter shape: parsed, default-filled, transformed and
    /// frozen.
    ///
    /// Recomputes only when the router's search string differs from the one
    /// seen on the previous call; otherwise the memoized guard is returned
    /// and `Frozen::ptr_eq` holds between the two results. A transform
    /// failure leaves the previous memoized value intact.
    pub fn current_filters(&self) -> Result<Frozen<F>, FilterError> {
        let search = self.router.current_search();
        let mut cache = self.cache.lock();
        if let Some(cached) = cache.as_ref() {
            if cached.search == search {
                trace!(search = %search, "search unchanged, returning memoized filters");
                return Ok(cached.filters.clone());
            }
        }

        let raw = codec::parse(&search);
        let merged = merge_defaults(&raw, &self.config.default_query);
        let filters = Frozen::new((self.config.to_filters)(&merged)?);
        debug!(search = %search, "recomputed filters from search string");
        *cache = Some(ReadCache {
            search,
            filters: filters.clone(),
        });
        Ok(filters)
    }

    /// Merge `patch` over the current raw query (not the default-filled
    /// merge) and navigate with the configured write mode.
    ///
    /// An empty-string value in the patch drops that key from the resulting
    /// search string, since the codec omits empty values on build.
    pub fn upsert(&self, patch: P) -> Result<(), FilterError> {
        self.upsert_with(patch, self.config.write_mode())
    }

    /// [`upsert`](Self::upsert) with an explicit navigation mode.
    pub fn upsert_with(&self, patch: P, mode: NavigationMode) -> Result<(), FilterError> {
        let raw = codec::parse(&self.router.current_search());
        let next = raw.merged(&(self.config.to_query)(patch)?);
        self.navigate(&next, mode);
        Ok(())
    }

    /// Replace the query wholesale with `patch`, discarding every existing
    /// key not present in it, and navigate with the configured write mode.
    pub fn set(&self, patch: P) -> Result<(), FilterError> {
        self.set_with(patch, self.config.write_mode())
    }

    /// [`set`](Self::set) with an explicit navigation mode.
    pub fn set_with(&self, patch: P, mode: NavigationMode) -> Result<(), FilterError> {
        let next = (self.config.to_query)(patch)?;
        self.navigate(&next, mode);
        Ok(())
    }

    fn navigate(&self, query: &QueryMap, mode: NavigationMode) {
        let search = codec::build(query);
        debug!(search = %search, ?mode, "navigating");
        self.router.navigate(&search, mode);
    }
}
