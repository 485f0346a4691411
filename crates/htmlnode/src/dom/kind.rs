// ABOUTME: ElementType classification for tree nodes, with raw-code and label mappings.
// ABOUTME: Maps scraper node variants onto the conventional 21-entry node type table.

use std::fmt;

use scraper::Node;

/// Classification of a node in a parsed document.
///
/// The discriminants follow the conventional DOM/libxml node type numbering,
/// so raw codes coming from other tree providers can be mapped with
/// [`ElementType::from_raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Element = 1,
    Attribute = 2,
    Text = 3,
    CData = 4,
    EntityRef = 5,
    Entity = 6,
    ProcessingInstruction = 7,
    Comment = 8,
    Document = 9,
    DocumentType = 10,
    DocumentFragment = 11,
    Notation = 12,
    HtmlDocument = 13,
    Dtd = 14,
    ElementDecl = 15,
    AttributeDecl = 16,
    EntityDecl = 17,
    NamespaceDecl = 18,
    XIncludeStart = 19,
    XIncludeEnd = 20,
    DocBookDocument = 21,
}

impl ElementType {
    /// Map a raw node type code. Unknown codes yield `None`.
    pub fn from_raw(code: u32) -> Option<Self> {
        let kind = match code {
            1 => ElementType::Element,
            2 => ElementType::Attribute,
            3 => ElementType::Text,
            4 => ElementType::CData,
            5 => ElementType::EntityRef,
            6 => ElementType::Entity,
            7 => ElementType::ProcessingInstruction,
            8 => ElementType::Comment,
            9 => ElementType::Document,
            10 => ElementType::DocumentType,
            11 => ElementType::DocumentFragment,
            12 => ElementType::Notation,
            13 => ElementType::HtmlDocument,
            14 => ElementType::Dtd,
            15 => ElementType::ElementDecl,
            16 => ElementType::AttributeDecl,
            17 => ElementType::EntityDecl,
            18 => ElementType::NamespaceDecl,
            19 => ElementType::XIncludeStart,
            20 => ElementType::XIncludeEnd,
            21 => ElementType::DocBookDocument,
            _ => return None,
        };
        Some(kind)
    }

    /// The raw node type code.
    pub fn raw(self) -> u32 {
        self as u32
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            ElementType::Element => "Element",
            ElementType::Attribute => "Attribute",
            ElementType::Text => "Text",
            ElementType::CData => "CDATA",
            ElementType::EntityRef => "Entity Reference",
            ElementType::Entity => "Entity",
            ElementType::ProcessingInstruction => "Processing Instruction",
            ElementType::Comment => "Comment",
            ElementType::Document => "Document",
            ElementType::DocumentType => "Document Type",
            ElementType::DocumentFragment => "Document Fragment",
            ElementType::Notation => "Notation",
            ElementType::HtmlDocument => "HTML Document",
            ElementType::Dtd => "DTD",
            ElementType::ElementDecl => "Element Declaration",
            ElementType::AttributeDecl => "Attribute Declaration",
            ElementType::EntityDecl => "Entity Declaration",
            ElementType::NamespaceDecl => "Namespace Declaration",
            ElementType::XIncludeStart => "XInclude Start",
            ElementType::XIncludeEnd => "XInclude End",
            ElementType::DocBookDocument => "DocBook Document",
        }
    }

    /// True for the document-like classifications.
    pub fn is_document(self) -> bool {
        matches!(
            self,
            ElementType::Document
                | ElementType::HtmlDocument
                | ElementType::DocBookDocument
                | ElementType::DocumentFragment
        )
    }
}

impl From<&Node> for ElementType {
    fn from(node: &Node) -> Self {
        match node {
            Node::Document => ElementType::HtmlDocument,
            Node::Fragment => ElementType::DocumentFragment,
            Node::Doctype(_) => ElementType::Dtd,
            Node::Comment(_) => ElementType::Comment,
            Node::Text(_) => ElementType::Text,
            Node::Element(_) => ElementType::Element,
            Node::ProcessingInstruction(_) => ElementType::ProcessingInstruction,
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_codes_round_trip_through_from_raw() {
        for code in 1..=21 {
            let kind = ElementType::from_raw(code).expect("known code");
            assert_eq!(kind.raw(), code);
            assert!(!kind.label().is_empty());
        }
    }

    #[test]
    fn test_unknown_raw_codes_do_not_map() {
        assert_eq!(ElementType::from_raw(0), None);
        assert_eq!(ElementType::from_raw(22), None);
        assert_eq!(ElementType::from_raw(u32::MAX), None);
    }

    #[test]
    fn test_scraper_nodes_classify() {
        assert_eq!(ElementType::from(&Node::Document), ElementType::HtmlDocument);
        assert_eq!(ElementType::from(&Node::Fragment), ElementType::DocumentFragment);
        assert!(ElementType::HtmlDocument.is_document());
        assert!(!ElementType::Element.is_document());
        assert_eq!(ElementType::CData.to_string(), "CDATA");
    }
}
