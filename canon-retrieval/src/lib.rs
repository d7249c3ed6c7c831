//! # canon-retrieval
//!
//! Confidence-scored, domain-routed retrieval: embed the query with the
//! index's pinned model, shortlist candidate domains against the routing
//! vectors, rank records within those domains, and derive a confidence from
//! the top-result score margin.
//!
//! Strictly read-only against one loaded index generation — a query never
//! blocks on or triggers a rebuild.

pub mod engine;
pub mod ops;
pub mod routing;
pub mod similarity;

pub use engine::RetrievalEngine;
