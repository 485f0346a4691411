// ABOUTME: Predicate-driven search over HtmlNode scopes and the named query methods built on it.
// ABOUTME: One engine serves child, descendant, and sibling scopes with first/all cardinality.

//! Tree queries.
//!
//! [`engine::search`] applies a [`NodeMatcher`] over a [`Scope`] and stops
//! early or collects everything depending on the [`Cardinality`]. The
//! `child_*`, `descendant_*` and `sibling_*` methods on
//! [`HtmlNode`](crate::HtmlNode) are fixed instantiations of it.

pub mod engine;
pub mod named;
pub mod predicate;

pub use self::engine::{all, first, search, Cardinality, Scope, ScopeIter};
pub use self::predicate::{NodeMatcher, Predicate};
