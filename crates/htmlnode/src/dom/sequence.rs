// ABOUTME: Lazy, restartable element sequences over a node's children, siblings, or subtree.
// ABOUTME: Built on the search engine's ScopeIter; text and comment nodes are skipped, not terminal.

use crate::dom::node::HtmlNode;
use crate::query::engine::{Scope, ScopeIter};

/// Element nodes of one scope, in document order.
///
/// Interleaved text, comment and other non-element nodes are skipped and
/// iteration continues, so `children()` always agrees with `child_at` and
/// `child_count`.
pub struct Elements<'a> {
    inner: ScopeIter<'a>,
}

/// The direct element children of a node.
pub type ElementChildren<'a> = Elements<'a>;

impl<'a> Elements<'a> {
    fn new(start: HtmlNode<'a>, scope: Scope) -> Self {
        Self {
            inner: ScopeIter::new(start, scope),
        }
    }
}

impl<'a> Iterator for Elements<'a> {
    type Item = HtmlNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find(|node| node.is_element_node() == Some(true))
    }
}

impl<'a> HtmlNode<'a> {
    /// Direct element children. Each call starts again from the first child.
    pub fn children(&self) -> ElementChildren<'a> {
        Elements::new(*self, Scope::Child)
    }

    /// Elements after this node among its siblings.
    pub fn element_siblings(&self) -> Elements<'a> {
        Elements::new(*self, Scope::Sibling)
    }

    /// Every element below this node, depth-first pre-order.
    pub fn element_descendants(&self) -> Elements<'a> {
        Elements::new(*self, Scope::Descendant)
    }
}

impl<'a> IntoIterator for HtmlNode<'a> {
    type Item = HtmlNode<'a>;
    type IntoIter = ElementChildren<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.children()
    }
}

impl<'a> IntoIterator for &HtmlNode<'a> {
    type Item = HtmlNode<'a>;
    type IntoIter = ElementChildren<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.children()
    }
}
