// ABOUTME: Document-order comparison for HtmlNode handles.
// ABOUTME: Equality means same tree and same position; null handles never compare equal.

use std::cmp::Ordering;

use ego_tree::NodeRef;
use scraper::Node;

use crate::dom::node::HtmlNode;

impl<'a> HtmlNode<'a> {
    /// Sibling indices from the tree root down to this node.
    ///
    /// Comparing two paths lexicographically gives document order: an
    /// ancestor's path is a prefix of its descendants' paths.
    pub fn document_path(&self) -> Vec<usize> {
        let Some(node) = self.node_ref() else {
            return Vec::new();
        };
        let mut path: Vec<usize> = std::iter::once(node)
            .chain(node.ancestors())
            .filter(|n| n.parent().is_some())
            .map(|n| n.prev_siblings().count())
            .collect();
        path.reverse();
        path
    }

    /// Position of `self` relative to `other` in document order.
    ///
    /// `None` when either handle is null or the handles come from
    /// different trees.
    pub fn compare_document_position(&self, other: &HtmlNode<'_>) -> Option<Ordering> {
        let (a, b) = (self.node_ref()?, other.node_ref()?);
        if a == b {
            return Some(Ordering::Equal);
        }
        // NodeRef equality includes the tree, so differing roots mean differing trees
        if tree_root(a) != tree_root(b) {
            return None;
        }
        Some(self.document_path().cmp(&other.document_path()))
    }
}

fn tree_root<'t>(node: NodeRef<'t, Node>) -> NodeRef<'t, Node> {
    node.ancestors().last().unwrap_or(node)
}

impl PartialEq for HtmlNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        matches!((self.node_ref(), other.node_ref()), (Some(a), Some(b)) if a == b)
    }
}

impl PartialOrd for HtmlNode<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare_document_position(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::document::HtmlDocument;

    const MARKUP: &str = "<div><p>a</p><p>b<i>c</i></p></div><span>d</span>";

    #[test]
    fn test_separately_built_handles_are_equal() {
        let doc = HtmlDocument::parse(MARKUP);
        let via_search = doc.root().descendant_of_tag("span").unwrap();
        let via_links = doc
            .root_element()
            .child_at(1)
            .unwrap()
            .last_child()
            .unwrap();
        assert_eq!(via_search, via_links);
    }

    #[test]
    fn test_document_order() {
        let doc = HtmlDocument::parse(MARKUP);
        let div = doc.root().descendant_of_tag("div").unwrap();
        let i = doc.root().descendant_of_tag("i").unwrap();
        let span = doc.root().descendant_of_tag("span").unwrap();

        assert!(div < i);
        assert!(i < span);
        assert!(span > div);
        assert_eq!(div.compare_document_position(&div), Some(Ordering::Equal));
    }

    #[test]
    fn test_null_never_equal() {
        let doc = HtmlDocument::parse(MARKUP);
        let null = HtmlNode::null();
        assert!(null != doc.root());
        assert!(doc.root() != null);
        assert!(null != HtmlNode::null());
        assert_eq!(null.partial_cmp(&null), None);
        assert!(null.document_path().is_empty());
    }

    #[test]
    fn test_equality_agrees_with_position() {
        let doc = HtmlDocument::parse("<ul><li>a</li><li>b</li><li>c</li></ul>");
        let items: Vec<HtmlNode<'_>> = doc.root().descendants_of_tag("li");
        for (i, a) in items.iter().enumerate() {
            for (j, b) in items.iter().enumerate() {
                assert_eq!(a == b, i == j);
                assert_eq!(a == b, a.compare_document_position(b) == Some(Ordering::Equal));
            }
        }
    }

    #[test]
    fn test_membership_in_wide_sibling_list() {
        let markup = format!("<ul>{}</ul>", "<li>x</li>".repeat(3000));
        let doc = HtmlDocument::parse(&markup);
        let items = doc.root().descendants_of_tag("li");
        let last = items[items.len() - 1];

        assert_eq!(items.len(), 3000);
        assert!(items.contains(&last));
        assert_eq!(items.iter().filter(|n| **n == last).count(), 1);
    }

    #[test]
    fn test_different_documents_are_unordered() {
        let one = HtmlDocument::parse(MARKUP);
        let two = HtmlDocument::parse(MARKUP);
        assert!(one.root() != two.root());
        assert_eq!(one.root().partial_cmp(&two.root()), None);
    }
}
