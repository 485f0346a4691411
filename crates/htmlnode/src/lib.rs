// ABOUTME: Main library entry point for navigating and querying parsed HTML trees.
// ABOUTME: Re-exports HtmlDocument, HtmlNode, the query engine types, options, and errors.

//! Navigable, queryable handles over a parsed HTML document.
//!
//! Parsing and serialization come from `scraper`; this crate adds a
//! copyable [`HtmlNode`] handle with parent/child/sibling navigation, text
//! and attribute extraction, and scoped searches by tag, attribute and text.
//!
//! # Example
//!
//! ```
//! use digests_htmlnode::HtmlDocument;
//!
//! let doc = HtmlDocument::parse(
//!     r#"<div id="a"><span class="x">Hi</span><span class="y">Yo</span></div>"#,
//! );
//! let div = doc.root().descendant_with_attribute_value("id", "a").unwrap();
//!
//! assert_eq!(div.children_with_attribute("class").len(), 2);
//! assert_eq!(div.child_with_class("y").unwrap().text_content(), "Yo");
//! assert_eq!(div.descendant_of_tag_containing("span", "i").unwrap().class_value(), "x");
//! ```
//!
//! Handles borrow the document, so the tree cannot be mutated while any
//! handle is alive. Nothing here is fallible: missing nodes are `None` or
//! empty vectors, missing content is `""`.

pub mod convert;
pub mod dom;
pub mod error;
pub mod extractors;
pub mod options;
pub mod query;
pub mod render;

pub use crate::dom::document::HtmlDocument;
pub use crate::dom::kind::ElementType;
pub use crate::dom::node::HtmlNode;
pub use crate::dom::sequence::{ElementChildren, Elements};
pub use crate::error::{ErrorCode, NodeError, Result};
pub use crate::extractors::attributes::AttributeMap;
pub use crate::options::{ConversionOptions, ConversionOptionsBuilder};
pub use crate::query::{Cardinality, NodeMatcher, Predicate, Scope};
pub use crate::render::{RenderSubtree, ScraperRenderer};
