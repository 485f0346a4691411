// ABOUTME: Text extraction for HtmlNode: raw, trimmed, whitespace-collapsed, and per-child/descendant.
// ABOUTME: Text is gathered from the node's subtree the way DOM textContent does.

use scraper::Node;

use crate::dom::node::HtmlNode;

/// Collapses runs of whitespace into single spaces, trimming both ends.
pub(crate) fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl<'a> HtmlNode<'a> {
    /// Text of the node, unmodified.
    ///
    /// Elements and documents concatenate every descendant text node. Text,
    /// comment and processing-instruction nodes give their own data.
    pub fn raw_text_content(&self) -> String {
        let Some(node) = self.node_ref() else {
            return String::new();
        };
        match node.value() {
            Node::Comment(comment) => (**comment).to_string(),
            Node::ProcessingInstruction(pi) => (**pi).to_string(),
            Node::Doctype(_) => String::new(),
            _ => node
                .descendants()
                .filter_map(|n| n.value().as_text())
                .map(|text| &**text)
                .collect(),
        }
    }

    /// [`raw_text_content`](Self::raw_text_content) with surrounding whitespace removed.
    pub fn text_content(&self) -> String {
        self.raw_text_content().trim().to_string()
    }

    /// Text with every whitespace run collapsed to one space.
    pub fn text_content_collapsing_whitespace(&self) -> String {
        normalize_whitespace(&self.raw_text_content())
    }

    /// Trimmed text of each direct child node, empty strings included.
    pub fn text_content_of_children(&self) -> Vec<String> {
        self.node_ref()
            .map(|node| {
                node.children()
                    .map(|child| HtmlNode::new(child).text_content())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Trimmed text of every descendant node, depth-first pre-order.
    pub fn text_content_of_descendants(&self) -> Vec<String> {
        self.node_ref()
            .map(|node| {
                node.descendants()
                    .skip(1)
                    .map(|n| HtmlNode::new(n).text_content())
                    .collect()
            })
            .unwrap_or_default()
    }
}
