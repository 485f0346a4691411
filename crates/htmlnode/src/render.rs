// ABOUTME: RenderSubtree seam for serializing a node and its subtree back to markup.
// ABOUTME: ScraperRenderer is the default, backed by scraper's html5ever serializer.

use scraper::{ElementRef, Node};

use crate::dom::node::HtmlNode;
use crate::error::{NodeError, Result};

/// Serializes a node and everything below it to markup text.
pub trait RenderSubtree {
    fn render(&self, node: &HtmlNode<'_>) -> Result<String>;
}

/// Renders through scraper; elements use `ElementRef::html`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScraperRenderer;

impl RenderSubtree for ScraperRenderer {
    fn render(&self, node: &HtmlNode<'_>) -> Result<String> {
        let node_ref = node
            .node_ref()
            .ok_or_else(|| NodeError::render("render_subtree", Some(anyhow::anyhow!("null node"))))?;

        let mut out = String::new();
        match node_ref.value() {
            Node::Element(_) => {
                if let Some(element) = ElementRef::wrap(node_ref) {
                    out.push_str(&element.html());
                }
            }
            Node::Document | Node::Fragment => {
                for child in node_ref.children() {
                    out.push_str(&self.render(&HtmlNode::new(child))?);
                }
            }
            Node::Text(text) => {
                let raw = node_ref
                    .parent()
                    .and_then(|parent| parent.value().as_element())
                    .is_some_and(|parent| RAW_TEXT_ELEMENTS.contains(&parent.name()));
                if raw {
                    out.push_str(text);
                } else {
                    out.push_str(&escape_text(text));
                }
            }
            Node::Comment(comment) => {
                out.push_str("<!--");
                out.push_str(comment);
                out.push_str("-->");
            }
            Node::Doctype(doctype) => {
                out.push_str("<!DOCTYPE ");
                out.push_str(doctype.name());
                out.push('>');
            }
            Node::ProcessingInstruction(pi) => {
                out.push_str("<?");
                out.push_str(&pi.target);
                out.push(' ');
                out.push_str(pi);
                out.push('>');
            }
        }
        Ok(out)
    }
}

// Elements whose text html5ever serializes verbatim
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "style",
    "script",
    "xmp",
    "iframe",
    "noembed",
    "noframes",
    "plaintext",
    "noscript",
];

/// Escape text content for inclusion between tags.
fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\u{a0}', "&nbsp;")
}
