//! Error types for the query filter pipeline.

use thiserror::Error;

/// Boxed error produced by a caller-supplied transform.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by the filter facade.
///
/// The codec itself is total and never fails; the only failure sites are the
/// caller-supplied transforms, whose errors pass through unmodified. A
/// default query missing a key is not detected here (caller responsibility).
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("query-to-filters transform failed: {0}")]
    ToFilters(#[source] BoxError),

    #[error("filters-to-query transform failed: {0}")]
    ToQuery(#[source] BoxError),
}

impl FilterError {
    /// Wrap a read-path transform failure.
    pub fn to_filters(err: impl Into<BoxError>) -> Self {
        FilterError::ToFilters(err.into())
    }

    /// Wrap a write-path transform failure.
    pub fn to_query(err: impl Into<BoxError>) -> Self {
        FilterError::ToQuery(err.into())
    }
}
