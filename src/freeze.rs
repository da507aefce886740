//! Frozen Values
//!
//! Read-only guard over the read-path output so UI layers cannot mutate
//! shared derived state. `Frozen<T>` hands out shared references only;
//! clones share one allocation, which is what makes the facade's
//! memoization observable through [`Frozen::ptr_eq`]. Freezing is idempotent
//! by construction: there is no re-freeze or unfreeze operation, and
//! ownership keeps the frozen value tree acyclic, so no recursive walk is
//! needed.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Immutable, cheaply-cloneable wrapper around a computed filter value.
pub struct Frozen<T>(Arc<T>);

impl<T> Frozen<T> {
    /// Freeze `value`. The wrapper is the only owner; mutation is no longer
    /// reachable through any handle.
    pub fn new(value: T) -> Self {
        Frozen(Arc::new(value))
    }

    /// Whether two guards share the same allocation.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl<T> Clone for Frozen<T> {
    fn clone(&self) -> Self {
        Frozen(Arc::clone(&self.0))
    }
}

impl<T> Deref for Frozen<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> AsRef<T> for Frozen<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for Frozen<T> {
    fn from(value: T) -> Self {
        Frozen::new(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Frozen<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Frozen").field(&self.0).finish()
    }
}

impl<T: PartialEq> PartialEq for Frozen<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: Eq> Eq for Frozen<T> {}
