//! Content Tree
//!
//! Renderers build plain `Element` trees; nothing here touches a page.
//! The host adapter serialises them with a `MarkupPolicy`.

use std::fmt::Write as _;

/// How data-sourced strings are interpolated when a tree is serialised.
///
/// `Trusted` writes text and attribute values verbatim, so markup inside the
/// data document is interpreted by the browser. Only safe when the data
/// source is a trusted static file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkupPolicy {
    #[default]
    Trusted,
    Escaped,
}

impl MarkupPolicy {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "trusted" | "raw" => Some(MarkupPolicy::Trusted),
            "escaped" | "escape" => Some(MarkupPolicy::Escaped),
            _ => None,
        }
    }
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }

    pub fn to_html(&self, policy: MarkupPolicy) -> String {
        let mut out = String::new();
        self.write_html(&mut out, policy);
        out
    }

    pub fn write_html(&self, out: &mut String, policy: MarkupPolicy) {
        match self {
            Node::Text(text) => match policy {
                MarkupPolicy::Trusted => out.push_str(text),
                MarkupPolicy::Escaped => out.push_str(&escape_html(text)),
            },
            Node::Element(el) => el.write_html(out, policy),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    pub fn style(self, style: &str) -> Self {
        self.attr("style", style)
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    // ------------------------------------------------------------------------
    // Queries (used by tests and the host adapter)
    // ------------------------------------------------------------------------

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|c| c.split_whitespace().any(|x| x == class))
            .unwrap_or(false)
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    /// Child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// All descendant elements matching `pred`, in document order.
    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&Element) -> bool) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.walk(pred, &mut found);
        found
    }

    fn walk<'a>(&'a self, pred: &dyn Fn(&Element) -> bool, found: &mut Vec<&'a Element>) {
        for child in self.child_elements() {
            if pred(child) {
                found.push(child);
            }
            child.walk(pred, found);
        }
    }

    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.find_all(&|el: &Element| el.has_class(class))
    }

    pub fn first_by_class(&self, class: &str) -> Option<&Element> {
        self.find_by_class(class).into_iter().next()
    }

    // ------------------------------------------------------------------------
    // Serialisation
    // ------------------------------------------------------------------------

    pub fn to_html(&self, policy: MarkupPolicy) -> String {
        let mut out = String::with_capacity(256);
        self.write_html(&mut out, policy);
        out
    }

    pub fn write_html(&self, out: &mut String, policy: MarkupPolicy) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            let value = match policy {
                MarkupPolicy::Trusted => value.clone(),
                MarkupPolicy::Escaped => escape_html(value),
            };
            // writing into a String cannot fail
            let _ = write!(out, " {}=\"{}\"", name, value);
        }
        out.push('>');
        for child in &self.children {
            child.write_html(out, policy);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}
