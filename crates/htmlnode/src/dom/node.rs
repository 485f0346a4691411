// ABOUTME: HtmlNode handle: a copyable, non-owning position in a scraper tree.
// ABOUTME: Provides raw-link navigation, element-child indexing, and node classification.

use ego_tree::NodeRef;
use scraper::{ElementRef, Node};

use crate::dom::kind::ElementType;

/// A lightweight handle to one position in a parsed HTML tree.
///
/// A handle is either valid (it wraps a live `NodeRef`) or null. Every
/// accessor on a null handle returns the zero value of its result type
/// instead of failing. Handles borrow the tree; dropping one never affects
/// the document.
#[derive(Debug, Clone, Copy)]
pub struct HtmlNode<'a> {
    node: Option<NodeRef<'a, Node>>,
    kind: Option<ElementType>,
}

impl<'a> HtmlNode<'a> {
    /// Wrap a tree position.
    pub fn new(node: NodeRef<'a, Node>) -> Self {
        Self {
            node: Some(node),
            kind: Some(ElementType::from(node.value())),
        }
    }

    /// A handle that points nowhere.
    pub fn null() -> Self {
        Self {
            node: None,
            kind: None,
        }
    }

    pub(crate) fn wrap(node: Option<NodeRef<'a, Node>>) -> Option<Self> {
        node.map(Self::new)
    }

    /// The underlying tree position, if any.
    pub fn node_ref(&self) -> Option<NodeRef<'a, Node>> {
        self.node
    }

    /// The underlying element, if this handle points at one.
    pub fn element_ref(&self) -> Option<ElementRef<'a>> {
        self.node.and_then(ElementRef::wrap)
    }

    pub fn is_null(&self) -> bool {
        self.node.is_none()
    }

    pub fn is_valid(&self) -> bool {
        self.node.is_some()
    }

    pub fn parent(&self) -> Option<Self> {
        Self::wrap(self.node?.parent())
    }

    pub fn next_sibling(&self) -> Option<Self> {
        Self::wrap(self.node?.next_sibling())
    }

    pub fn previous_sibling(&self) -> Option<Self> {
        Self::wrap(self.node?.prev_sibling())
    }

    pub fn first_child(&self) -> Option<Self> {
        Self::wrap(self.node?.first_child())
    }

    pub fn last_child(&self) -> Option<Self> {
        Self::wrap(self.node?.last_child())
    }

    /// The element child at `index`, counting element children only.
    pub fn child_at(&self, index: usize) -> Option<Self> {
        self.children().nth(index)
    }

    /// Number of direct element children.
    pub fn child_count(&self) -> usize {
        match self.node {
            Some(node) => node.children().filter(|c| c.value().is_element()).count(),
            None => 0,
        }
    }

    /// Element local name, or `""` for anything that is not an element.
    pub fn tag_name(&self) -> &'a str {
        self.node
            .and_then(|n| n.value().as_element())
            .map(|el| el.name())
            .unwrap_or("")
    }

    pub fn element_type(&self) -> Option<ElementType> {
        self.kind
    }

    /// Label of the node classification, `""` for a null handle.
    pub fn element_type_label(&self) -> &'static str {
        self.kind.map(ElementType::label).unwrap_or("")
    }

    pub fn is_attribute_node(&self) -> Option<bool> {
        self.kind.map(|k| k == ElementType::Attribute)
    }

    pub fn is_document_node(&self) -> Option<bool> {
        self.kind.map(ElementType::is_document)
    }

    pub fn is_element_node(&self) -> Option<bool> {
        self.kind.map(|k| k == ElementType::Element)
    }

    pub fn is_text_node(&self) -> Option<bool> {
        self.kind.map(|k| k == ElementType::Text)
    }

    pub(crate) fn value(&self) -> Option<&'a Node> {
        self.node.map(|n| n.value())
    }
}

impl Default for HtmlNode<'_> {
    fn default() -> Self {
        Self::null()
    }
}

impl<'a> From<NodeRef<'a, Node>> for HtmlNode<'a> {
    fn from(node: NodeRef<'a, Node>) -> Self {
        Self::new(node)
    }
}

impl<'a> From<ElementRef<'a>> for HtmlNode<'a> {
    fn from(element: ElementRef<'a>) -> Self {
        Self::new(*element)
    }
}
