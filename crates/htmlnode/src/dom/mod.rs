// ABOUTME: Node handles over scraper's HTML tree: the handle itself, classification, ordering, and sequences.
// ABOUTME: HtmlDocument owns a parsed tree; HtmlNode borrows positions in it.

//! DOM handles for parsed HTML documents.
//!
//! This module wraps positions in a `scraper::Html` tree as [`HtmlNode`]
//! handles. Handles never own or modify the tree; they only navigate it.

pub mod document;
pub mod kind;
pub mod node;
pub mod order;
pub mod sequence;
