//! Query Filters: URL Query String / Filter State Synchronization
//!
//! A framework-agnostic pipeline that keeps application filter state in sync
//! with a URL's query string. The read path parses the current search string,
//! back-fills defaults, applies a caller-supplied shape transform and hands
//! out a frozen, memoized result. The write path transforms filter values
//! back to query shape, serializes them and instructs a router collaborator
//! to navigate.

pub mod codec;
pub mod defaults;
pub mod error;
pub mod facade;
pub mod freeze;
pub mod query;
pub mod router;
pub mod transform;
