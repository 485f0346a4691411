// ABOUTME: HtmlDocument owns a parsed scraper::Html and hands out HtmlNode root handles.
// ABOUTME: Parsing itself is delegated to scraper/html5ever.

use scraper::Html;

use crate::dom::node::HtmlNode;

/// An owned, parsed HTML document.
///
/// The document owns the tree; every [`HtmlNode`] obtained from it borrows
/// the document and cannot outlive it.
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse a full HTML document.
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// Parse an HTML fragment.
    pub fn parse_fragment(markup: &str) -> Self {
        Self {
            html: Html::parse_fragment(markup),
        }
    }

    /// The document node at the top of the tree.
    pub fn root(&self) -> HtmlNode<'_> {
        HtmlNode::new(self.html.tree.root())
    }

    /// The `<html>` element.
    pub fn root_element(&self) -> HtmlNode<'_> {
        HtmlNode::from(self.html.root_element())
    }

    /// The parsed scraper document.
    pub fn html(&self) -> &Html {
        &self.html
    }

    /// Parse errors reported by html5ever.
    pub fn errors(&self) -> &[std::borrow::Cow<'static, str>] {
        &self.html.errors
    }
}

impl From<Html> for HtmlDocument {
    fn from(html: Html) -> Self {
        Self { html }
    }
}
