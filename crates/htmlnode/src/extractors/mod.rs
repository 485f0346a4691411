// ABOUTME: Content extraction for HtmlNode: attributes, text, and markup.
// ABOUTME: Every accessor degrades to an empty value instead of failing.

//! Content extractors.
//!
//! These modules add accessor methods to [`HtmlNode`](crate::HtmlNode).
//! None of them can fail: missing attributes read as `""`, missing text as
//! an empty string, and a null handle yields empty values throughout.

pub mod attributes;
pub mod markup;
pub mod text;
