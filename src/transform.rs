//! Shape Transforms and Facade Configuration
//!
//! `FilterConfig` bundles everything one facade instance owns: the total
//! default query, the caller-supplied bidirectional transforms between the
//! string-valued query shape and the typed filter shape, and the default
//! write mode. When no transforms are supplied the query shape is the filter
//! shape (identity in both directions).
//!
//! Transforms must be pure and run exactly once per read or write. Their
//! errors propagate unmodified; the facade never retries or swallows them.

use crate::error::FilterError;
use crate::query::QueryMap;
use crate::router::NavigationMode;
use std::fmt;

/// Read-path transform: default-filled query to filter shape.
pub type ToFilters<F> = Box<dyn Fn(&QueryMap) -> Result<F, FilterError> + Send + Sync>;

/// Write-path transform: filter patch to query shape.
pub type ToQuery<P> = Box<dyn Fn(P) -> Result<QueryMap, FilterError> + Send + Sync>;

/// Configuration of one [`UrlQueryFilters`](crate::facade::UrlQueryFilters)
/// instance. `F` is the filter shape produced on reads, `P` the patch type
/// accepted by writes.
pub struct FilterConfig<F = QueryMap, P = QueryMap> {
    pub(crate) default_query: QueryMap,
    pub(crate) to_filters: ToFilters<F>,
    pub(crate) to_query: ToQuery<P>,
    pub(crate) replace: bool,
}

impl FilterConfig<QueryMap, QueryMap> {
    /// Untransformed configuration: the merged query is the filter shape and
    /// write patches are query maps already.
    pub fn identity(default_query: QueryMap) -> Self {
        FilterConfig {
            default_query,
            to_filters: Box::new(|merged| Ok(merged.clone())),
            to_query: Box::new(|patch| Ok(patch)),
            replace: false,
        }
    }
}

impl<F, P> FilterConfig<F, P> {
    /// Typed configuration with both transforms supplied by the caller.
    ///
    /// `default_query` must cover every filter key the application reads;
    /// a missing key silently yields an absent value downstream.
    pub fn with_transforms(
        default_query: QueryMap,
        to_filters: impl Fn(&QueryMap) -> Result<F, FilterError> + Send + Sync + 'static,
        to_query: impl Fn(P) -> Result<QueryMap, FilterError> + Send + Sync + 'static,
    ) -> Self {
        FilterConfig {
            default_query,
            to_filters: Box::new(to_filters),
            to_query: Box::new(to_query),
            replace: false,
        }
    }

    /// Set the default write mode: `true` replaces the current history
    /// entry, `false` (the default) pushes a new one.
    pub fn replace(mut self, replace: bool) -> Self {
        self.replace = replace;
        self
    }

    /// The default query supplied at construction.
    pub fn default_query(&self) -> &QueryMap {
        &self.default_query
    }

    pub(crate) fn write_mode(&self) -> NavigationMode {
        if self.replace {
            NavigationMode::Replace
        } else {
            NavigationMode::Push
        }
    }
}

impl<F, P> fmt::Debug for FilterConfig<F, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterConfig")
            .field("default_query", &self.default_query)
            .field("replace", &self.replace)
            .finish_non_exhaustive()
    }
}
