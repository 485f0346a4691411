// ABOUTME: Attribute accessors for HtmlNode: single values, convenience wrappers, and the full map.
// ABOUTME: Missing attributes read as "", a null node has no map at all.

use std::borrow::Cow;
use std::collections::HashMap;

use scraper::node::Element;

use crate::dom::node::HtmlNode;

/// Attribute name to value, built fresh per call.
pub type AttributeMap = HashMap<String, String>;

/// Attributes of `element` in document order, keyed by qualified name.
///
/// Namespaced attributes keep their prefix (`xlink:href`), so they never
/// collide with an unprefixed attribute of the same local name.
pub(crate) fn qualified_attrs<'e>(
    element: &'e Element,
) -> impl Iterator<Item = (Cow<'e, str>, &'e str)> + 'e {
    element.attrs.iter().map(|(name, value)| {
        let key = match name.prefix {
            Some(ref prefix) => Cow::Owned(format!("{}:{}", &**prefix, &*name.local)),
            None => Cow::Borrowed(&*name.local),
        };
        (key, &**value)
    })
}

impl<'a> HtmlNode<'a> {
    /// Value of the first attribute called `name`, or `""`.
    pub fn attribute_value(&self, name: &str) -> &'a str {
        self.element_ref()
            .and_then(|el| qualified_attrs(el.value()).find(|(key, _)| *key == name))
            .map(|(_, value)| value)
            .unwrap_or("")
    }

    /// All attributes of the node.
    ///
    /// `None` only for a null handle; non-element nodes give an empty map.
    /// When a name repeats, the first occurrence wins.
    pub fn attributes(&self) -> Option<AttributeMap> {
        self.node_ref()?;
        let mut map = AttributeMap::new();
        if let Some(el) = self.element_ref() {
            for (key, value) in qualified_attrs(el.value()) {
                map.entry(key.into_owned())
                    .or_insert_with(|| value.to_string());
            }
        }
        Some(map)
    }

    pub fn class_value(&self) -> &'a str {
        self.attribute_value("class")
    }

    pub fn href_value(&self) -> &'a str {
        self.attribute_value("href")
    }

    pub fn src_value(&self) -> &'a str {
        self.attribute_value("src")
    }
}
