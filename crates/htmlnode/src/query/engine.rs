// ABOUTME: Scoped, cardinality-aware search over an HtmlNode's children, subtree, or forward siblings.
// ABOUTME: Every named query and the sequence views run through ScopeIter and search.

use ego_tree::iter::{Children, Descendants, NextSiblings};
use scraper::Node;
use tracing::trace;

use crate::dom::node::HtmlNode;
use crate::query::predicate::NodeMatcher;

/// Which nodes relative to a start node a search considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Direct children of the start node.
    Child,
    /// The whole subtree below the start node, depth-first pre-order.
    Descendant,
    /// Siblings after the start node. Never descends.
    Sibling,
}

/// Whether a search stops at the first match or collects all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    First,
    All,
}

/// Lazy frontier of candidate nodes for a scope.
///
/// Yields every node kind; filtering is left to the matcher.
pub enum ScopeIter<'a> {
    Child(Children<'a, Node>),
    Descendant(Descendants<'a, Node>),
    Sibling(NextSiblings<'a, Node>),
    Empty,
}

impl<'a> ScopeIter<'a> {
    pub fn new(start: HtmlNode<'a>, scope: Scope) -> Self {
        let Some(node) = start.node_ref() else {
            return ScopeIter::Empty;
        };
        match scope {
            Scope::Child => ScopeIter::Child(node.children()),
            Scope::Descendant => {
                let mut descendants = node.descendants();
                // descendants() starts with the node itself
                descendants.next();
                ScopeIter::Descendant(descendants)
            }
            Scope::Sibling => ScopeIter::Sibling(node.next_siblings()),
        }
    }
}

impl<'a> Iterator for ScopeIter<'a> {
    type Item = HtmlNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = match self {
            ScopeIter::Child(iter) => iter.next(),
            ScopeIter::Descendant(iter) => iter.next(),
            ScopeIter::Sibling(iter) => iter.next(),
            ScopeIter::Empty => None,
        };
        next.map(HtmlNode::new)
    }
}

/// Run `matcher` over the nodes `scope` selects from `start`.
///
/// With [`Cardinality::First`] the scan stops at the first match and the
/// result holds at most one node. With [`Cardinality::All`] every match is
/// collected; a matching node does not prune its own subtree.
pub fn search<'a, M>(
    start: HtmlNode<'a>,
    scope: Scope,
    matcher: &M,
    cardinality: Cardinality,
) -> Vec<HtmlNode<'a>>
where
    M: NodeMatcher + ?Sized,
{
    let mut candidates = ScopeIter::new(start, scope).filter(|node| matcher.matches(node));
    let found: Vec<HtmlNode<'a>> = match cardinality {
        Cardinality::First => candidates.next().into_iter().collect(),
        Cardinality::All => candidates.collect(),
    };
    trace!(
        ?scope,
        ?cardinality,
        start = start.tag_name(),
        matches = found.len(),
        "node search"
    );
    found
}

/// First node in `scope` accepted by `matcher`.
pub fn first<'a, M>(start: HtmlNode<'a>, scope: Scope, matcher: &M) -> Option<HtmlNode<'a>>
where
    M: NodeMatcher + ?Sized,
{
    search(start, scope, matcher, Cardinality::First)
        .into_iter()
        .next()
}

/// Every node in `scope` accepted by `matcher`, in document order.
pub fn all<'a, M>(start: HtmlNode<'a>, scope: Scope, matcher: &M) -> Vec<HtmlNode<'a>>
where
    M: NodeMatcher + ?Sized,
{
    search(start, scope, matcher, Cardinality::All)
}
