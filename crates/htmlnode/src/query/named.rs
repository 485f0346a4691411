// ABOUTME: Named query methods on HtmlNode, each a fixed scope/predicate/cardinality search.
// ABOUTME: child_*/descendant_*/sibling_* return the first match, the plural forms return all.

use crate::dom::node::HtmlNode;
use crate::query::engine::{self, Scope};
use crate::query::predicate::Predicate;

impl<'a> HtmlNode<'a> {
    /// First node in `scope` matching `predicate`.
    pub fn find_first(&self, scope: Scope, predicate: Predicate<'_>) -> Option<HtmlNode<'a>> {
        engine::first(*self, scope, &predicate)
    }

    /// Every node in `scope` matching `predicate`.
    pub fn find_all(&self, scope: Scope, predicate: Predicate<'_>) -> Vec<HtmlNode<'a>> {
        engine::all(*self, scope, &predicate)
    }

    // child scope: direct children

    /// First child having attribute `name`.
    pub fn child_with_attribute(&self, name: &str) -> Option<HtmlNode<'a>> {
        self.find_first(Scope::Child, Predicate::attribute(name))
    }

    /// Every child having attribute `name`.
    pub fn children_with_attribute(&self, name: &str) -> Vec<HtmlNode<'a>> {
        self.find_all(Scope::Child, Predicate::attribute(name))
    }

    pub fn child_with_attribute_value(&self, name: &str, value: &str) -> Option<HtmlNode<'a>> {
        self.find_first(Scope::Child, Predicate::attribute_equals(name, value))
    }

    pub fn children_with_attribute_value(&self, name: &str, value: &str) -> Vec<HtmlNode<'a>> {
        self.find_all(Scope::Child, Predicate::attribute_equals(name, value))
    }

    pub fn child_with_attribute_containing(&self, name: &str, value: &str) -> Option<HtmlNode<'a>> {
        self.find_first(Scope::Child, Predicate::attribute_contains(name, value))
    }

    pub fn children_with_attribute_containing(&self, name: &str, value: &str) -> Vec<HtmlNode<'a>> {
        self.find_all(Scope::Child, Predicate::attribute_contains(name, value))
    }

    /// First child whose `class` attribute equals `class`.
    pub fn child_with_class(&self, class: &str) -> Option<HtmlNode<'a>> {
        self.find_first(Scope::Child, Predicate::class(class))
    }

    /// Every child whose `class` attribute equals `class`.
    pub fn children_with_class(&self, class: &str) -> Vec<HtmlNode<'a>> {
        self.find_all(Scope::Child, Predicate::class(class))
    }

    pub fn child_of_tag(&self, tag: &str) -> Option<HtmlNode<'a>> {
        self.find_first(Scope::Child, Predicate::tag(tag))
    }

    pub fn children_of_tag(&self, tag: &str) -> Vec<HtmlNode<'a>> {
        self.find_all(Scope::Child, Predicate::tag(tag))
    }

    /// First child named `tag` whose first text child equals `value`.
    pub fn child_of_tag_with_value(&self, tag: &str, value: &str) -> Option<HtmlNode<'a>> {
        self.find_first(Scope::Child, Predicate::tag_text_equals(tag, value))
    }

    /// Every child named `tag` whose first text child equals `value`.
    pub fn children_of_tag_with_value(&self, tag: &str, value: &str) -> Vec<HtmlNode<'a>> {
        self.find_all(Scope::Child, Predicate::tag_text_equals(tag, value))
    }

    pub fn child_of_tag_containing(&self, tag: &str, value: &str) -> Option<HtmlNode<'a>> {
        self.find_first(Scope::Child, Predicate::tag_text_contains(tag, value))
    }

    pub fn children_of_tag_containing(&self, tag: &str, value: &str) -> Vec<HtmlNode<'a>> {
        self.find_all(Scope::Child, Predicate::tag_text_contains(tag, value))
    }

    // descendant scope: the subtree, depth-first pre-order

    /// First descendant having attribute `name`.
    pub fn descendant_with_attribute(&self, name: &str) -> Option<HtmlNode<'a>> {
        self.find_first(Scope::Descendant, Predicate::attribute(name))
    }

    /// Every descendant having attribute `name`.
    pub fn descendants_with_attribute(&self, name: &str) -> Vec<HtmlNode<'a>> {
        self.find_all(Scope::Descendant, Predicate::attribute(name))
    }

    pub fn descendant_with_attribute_value(&self, name: &str, value: &str) -> Option<HtmlNode<'a>> {
        self.find_first(Scope::Descendant, Predicate::attribute_equals(name, value))
    }

    pub fn descendants_with_attribute_value(&self, name: &str, value: &str) -> Vec<HtmlNode<'a>> {
        self.find_all(Scope::Descendant, Predicate::attribute_equals(name, value))
    }

    pub fn descendant_with_attribute_containing(&self, name: &str, value: &str) -> Option<HtmlNode<'a>> {
        self.find_first(Scope::Descendant, Predicate::attribute_contains(name, value))
    }

    pub fn descendants_with_attribute_containing(&self, name: &str, value: &str) -> Vec<HtmlNode<'a>> {
        self.find_all(Scope::Descendant, Predicate::attribute_contains(name, value))
    }

    /// First descendant whose `class` attribute equals `class`.
    pub fn descendant_with_class(&self, class: &str) -> Option<HtmlNode<'a>> {
        self.find_first(Scope::Descendant, Predicate::class(class))
    }

    /// Every descendant whose `class` attribute equals `class`.
    pub fn descendants_with_class(&self, class: &str) -> Vec<HtmlNode<'a>> {
        self.find_all(Scope::Descendant, Predicate::class(class))
    }

    pub fn descendant_of_tag(&self, tag: &str) -> Option<HtmlNode<'a>> {
        self.find_first(Scope::Descendant, Predicate::tag(tag))
    }

    pub fn descendants_of_tag(&self, tag: &str) -> Vec<HtmlNode<'a>> {
        self.find_all(Scope::Descendant, Predicate::tag(tag))
    }

    /// First descendant named `tag` whose first text child equals `value`.
    pub fn descendant_of_tag_with_value(&self, tag: &str, value: &str) -> Option<HtmlNode<'a>> {
        self.find_first(Scope::Descendant, Predicate::tag_text_equals(tag, value))
    }

    /// Every descendant named `tag` whose first text child equals `value`.
    pub fn descendants_of_tag_with_value(&self, tag: &str, value: &str) -> Vec<HtmlNode<'a>> {
        self.find_all(Scope::Descendant, Predicate::tag_text_equals(tag, value))
    }

    pub fn descendant_of_tag_containing(&self, tag: &str, value: &str) -> Option<HtmlNode<'a>> {
        self.find_first(Scope::Descendant, Predicate::tag_text_contains(tag, value))
    }

    pub fn descendants_of_tag_containing(&self, tag: &str, value: &str) -> Vec<HtmlNode<'a>> {
        self.find_all(Scope::Descendant, Predicate::tag_text_contains(tag, value))
    }

    // sibling scope: the following siblings

    /// First sibling having attribute `name`.
    pub fn sibling_with_attribute(&self, name: &str) -> Option<HtmlNode<'a>> {
        self.find_first(Scope::Sibling, Predicate::attribute(name))
    }

    /// Every sibling having attribute `name`.
    pub fn siblings_with_attribute(&self, name: &str) -> Vec<HtmlNode<'a>> {
        self.find_all(Scope::Sibling, Predicate::attribute(name))
    }

    pub fn sibling_with_attribute_value(&self, name: &str, value: &str) -> Option<HtmlNode<'a>> {
        self.find_first(Scope::Sibling, Predicate::attribute_equals(name, value))
    }

    pub fn siblings_with_attribute_value(&self, name: &str, value: &str) -> Vec<HtmlNode<'a>> {
        self.find_all(Scope::Sibling, Predicate::attribute_equals(name, value))
    }

    pub fn sibling_with_attribute_containing(&self, name: &str, value: &str) -> Option<HtmlNode<'a>> {
        self.find_first(Scope::Sibling, Predicate::attribute_contains(name, value))
    }

    pub fn siblings_with_attribute_containing(&self, name: &str, value: &str) -> Vec<HtmlNode<'a>> {
        self.find_all(Scope::Sibling, Predicate::attribute_contains(name, value))
    }

    /// First sibling whose `class` attribute equals `class`.
    pub fn sibling_with_class(&self, class: &str) -> Option<HtmlNode<'a>> {
        self.find_first(Scope::Sibling, Predicate::class(class))
    }

    /// Every sibling whose `class` attribute equals `class`.
    pub fn siblings_with_class(&self, class: &str) -> Vec<HtmlNode<'a>> {
        self.find_all(Scope::Sibling, Predicate::class(class))
    }

    pub fn sibling_of_tag(&self, tag: &str) -> Option<HtmlNode<'a>> {
        self.find_first(Scope::Sibling, Predicate::tag(tag))
    }

    pub fn siblings_of_tag(&self, tag: &str) -> Vec<HtmlNode<'a>> {
        self.find_all(Scope::Sibling, Predicate::tag(tag))
    }

    /// First sibling named `tag` whose first text child equals `value`.
    pub fn sibling_of_tag_with_value(&self, tag: &str, value: &str) -> Option<HtmlNode<'a>> {
        self.find_first(Scope::Sibling, Predicate::tag_text_equals(tag, value))
    }

    /// Every sibling named `tag` whose first text child equals `value`.
    pub fn siblings_of_tag_with_value(&self, tag: &str, value: &str) -> Vec<HtmlNode<'a>> {
        self.find_all(Scope::Sibling, Predicate::tag_text_equals(tag, value))
    }

    pub fn sibling_of_tag_containing(&self, tag: &str, value: &str) -> Option<HtmlNode<'a>> {
        self.find_first(Scope::Sibling, Predicate::tag_text_contains(tag, value))
    }

    pub fn siblings_of_tag_containing(&self, tag: &str, value: &str) -> Vec<HtmlNode<'a>> {
        self.find_all(Scope::Sibling, Predicate::tag_text_contains(tag, value))
    }
}
