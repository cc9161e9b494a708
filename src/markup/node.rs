//! Minimal markup tree used as the output of every serializer.
//!
//! Attribute order is insertion order and rendering is a straight walk, so the same tree always
//! renders to the same bytes.

use std::fmt::Write;

/// HTML elements that never carry children or a closing tag.
const VOID_TAGS: &[&str] = &["source", "track", "meta", "link", "img", "br"];

#[derive(Clone, Debug, PartialEq, Eq)]
/// A child of a markup node.
pub enum Child {
    /// Nested element.
    Node(MarkupNode),
    /// Text content, escaped on output.
    Text(String),
    /// Trusted inline markup, emitted verbatim.
    Raw(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One markup element with ordered attributes and children.
pub struct MarkupNode {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Child>,
}

impl MarkupNode {
    /// Empty element.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attribute value, if present.
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Attributes in output order.
    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    /// Children in output order.
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Element children only.
    pub fn child_nodes(&self) -> impl Iterator<Item = &MarkupNode> {
        self.children.iter().filter_map(|c| match c {
            Child::Node(n) => Some(n),
            _ => None,
        })
    }

    /// Depth-first search for the first element with `tag` (including `self`).
    pub fn find(&self, tag: &str) -> Option<&MarkupNode> {
        if self.tag == tag {
            return Some(self);
        }
        self.child_nodes().find_map(|n| n.find(tag))
    }

    /// Every element with `tag` in document order (including `self`).
    pub fn find_all<'a>(&'a self, tag: &str) -> Vec<&'a MarkupNode> {
        let mut out = Vec::new();
        self.collect(tag, &mut out);
        out
    }

    fn collect<'a>(&'a self, tag: &str, out: &mut Vec<&'a MarkupNode>) {
        if self.tag == tag {
            out.push(self);
        }
        for n in self.child_nodes() {
            n.collect(tag, out);
        }
    }

    /// Set an attribute. A repeated name replaces the earlier value in place.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set an attribute only when `value` is present.
    pub fn attr_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.attr(name, v),
            None => self,
        }
    }

    /// Marker attribute whose value repeats its name (`autoplay="autoplay"`), only when `on`.
    pub fn flag(self, name: &str, on: bool) -> Self {
        if on { self.attr(name, name) } else { self }
    }

    /// In-place form of [`MarkupNode::attr`].
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Append a child element.
    pub fn child(mut self, node: MarkupNode) -> Self {
        self.children.push(Child::Node(node));
        self
    }

    /// Append several child elements in order.
    pub fn children_from(mut self, nodes: impl IntoIterator<Item = MarkupNode>) -> Self {
        self.children.extend(nodes.into_iter().map(Child::Node));
        self
    }

    /// Move every child of `self` into `wrapper` and make `wrapper` the only child.
    pub fn wrap_contents(mut self, mut wrapper: MarkupNode) -> Self {
        wrapper.children.append(&mut self.children);
        self.children.push(Child::Node(wrapper));
        self
    }

    /// Append escaped text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Child::Text(text.into()));
        self
    }

    /// Append trusted markup verbatim.
    pub fn raw(mut self, markup: impl Into<String>) -> Self {
        self.children.push(Child::Raw(markup.into()));
        self
    }

    /// Render into `out`.
    pub fn write_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (k, v) in &self.attrs {
            // Writing into a String cannot fail.
            let _ = write!(out, " {}=\"{}\"", k, escape_attr(v));
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }
        for c in &self.children {
            match c {
                Child::Node(n) => n.write_to(out),
                Child::Text(t) => out.push_str(&escape_text(t)),
                Child::Raw(r) => out.push_str(r),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }

    /// Render to a new string.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }
}

/// Escape an attribute value.
pub fn escape_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape text content.
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
#[path = "../../tests/unit/markup/node.rs"]
mod tests;
