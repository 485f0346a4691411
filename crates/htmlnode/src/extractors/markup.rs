// ABOUTME: Markup dump for HtmlNode through a RenderSubtree implementation.
// ABOUTME: Render failures and null nodes read as "".

use tracing::debug;

use crate::dom::node::HtmlNode;
use crate::render::{RenderSubtree, ScraperRenderer};

impl<'a> HtmlNode<'a> {
    /// The node and its subtree as trimmed HTML.
    pub fn markup(&self) -> String {
        self.markup_with(&ScraperRenderer)
    }

    /// Like [`markup`](Self::markup) with a caller-supplied renderer.
    pub fn markup_with(&self, renderer: &dyn RenderSubtree) -> String {
        if self.is_null() {
            return String::new();
        }
        match renderer.render(self) {
            Ok(markup) => markup.trim().to_string(),
            Err(err) => {
                debug!(error = %err, tag = self.tag_name(), "markup render failed");
                String::new()
            }
        }
    }
}
