// ABOUTME: Match rules applied by the search engine: tag, attribute presence/value, and tag+text.
// ABOUTME: NodeMatcher is the seam; Predicate and plain closures both implement it.

use scraper::Node;

use crate::dom::node::HtmlNode;
use crate::extractors::attributes::qualified_attrs;

/// Something that can accept or reject a node during a search.
pub trait NodeMatcher {
    fn matches(&self, node: &HtmlNode<'_>) -> bool;
}

impl<F> NodeMatcher for F
where
    F: Fn(&HtmlNode<'_>) -> bool,
{
    fn matches(&self, node: &HtmlNode<'_>) -> bool {
        self(node)
    }
}

/// A literal, case-sensitive test over an element.
///
/// Only element nodes can match. Attribute lists are scanned in document
/// order and the first attribute with the requested name decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate<'p> {
    HasTagName(&'p str),
    HasAttribute(&'p str),
    AttributeEquals(&'p str, &'p str),
    AttributeContains(&'p str, &'p str),
    /// Tag matches and the first text child equals the value.
    TagTextEquals(&'p str, &'p str),
    /// Tag matches and the first text child contains the value.
    TagTextContains(&'p str, &'p str),
}

impl<'p> Predicate<'p> {
    pub fn tag(name: &'p str) -> Self {
        Predicate::HasTagName(name)
    }

    pub fn attribute(name: &'p str) -> Self {
        Predicate::HasAttribute(name)
    }

    pub fn attribute_equals(name: &'p str, value: &'p str) -> Self {
        Predicate::AttributeEquals(name, value)
    }

    pub fn attribute_contains(name: &'p str, value: &'p str) -> Self {
        Predicate::AttributeContains(name, value)
    }

    pub fn class(value: &'p str) -> Self {
        Predicate::AttributeEquals("class", value)
    }

    pub fn tag_text_equals(tag: &'p str, text: &'p str) -> Self {
        Predicate::TagTextEquals(tag, text)
    }

    pub fn tag_text_contains(tag: &'p str, text: &'p str) -> Self {
        Predicate::TagTextContains(tag, text)
    }
}

impl NodeMatcher for Predicate<'_> {
    fn matches(&self, node: &HtmlNode<'_>) -> bool {
        let Some(element) = node.value().and_then(Node::as_element) else {
            return false;
        };
        let attribute = |name: &str| {
            qualified_attrs(element)
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value)
        };

        match *self {
            Predicate::HasTagName(tag) => element.name() == tag,
            Predicate::HasAttribute(name) => attribute(name).is_some(),
            Predicate::AttributeEquals(name, value) => attribute(name) == Some(value),
            Predicate::AttributeContains(name, value) => {
                attribute(name).is_some_and(|v| v.contains(value))
            }
            Predicate::TagTextEquals(tag, text) => {
                element.name() == tag && first_text(node).is_some_and(|t| t == text)
            }
            Predicate::TagTextContains(tag, text) => {
                element.name() == tag && first_text(node).is_some_and(|t| t.contains(text))
            }
        }
    }
}

/// Raw content of the node's first text child.
fn first_text<'a>(node: &HtmlNode<'a>) -> Option<&'a str> {
    node.node_ref()?
        .children()
        .find_map(|child| child.value().as_text())
        .map(|text| &**text)
}
