//! Host Page
//!
//! `HostPage` is the seam between the pure renderers and whatever page the
//! portal runs in. `Document` is an in-memory implementation holding the
//! skeleton elements the portal writes into; it backs the preview binary
//! and the tests.
//!
//! Host contract (ids): `portal-title`, `email-text`, `contact-email`,
//! `portal-description`, `overview-content`, `<tab>-content`,
//! `subscribe-btn`, `access-btn`. Tab selectors carry class `tab` and a
//! `data-tab` attribute; content regions carry class `tab-content`.

use std::fmt::Write as _;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::error::{PortalError, Result};
use crate::markup::{escape_html, MarkupPolicy, Node};
use crate::tabs::Tab;

/// How `scroll_to_top` moves the viewport. Shortcut links scroll smoothly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
}

/// Operations the renderers and controllers perform on the page.
///
/// Every id-addressed operation fails with `PortalError::MissingElement`
/// when the page lacks the element.
pub trait HostPage {
    fn require(&self, id: &str) -> Result<()>;

    /// Replace the element's content with plain text.
    fn set_text(&mut self, id: &str, text: &str) -> Result<()>;

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> Result<()>;

    /// Replace the element's content with rendered markup.
    fn replace_children(&mut self, id: &str, children: Vec<Node>) -> Result<()>;

    fn append_child(&mut self, id: &str, child: Node) -> Result<()>;

    fn set_class(&mut self, id: &str, class: &str, on: bool) -> Result<()>;

    /// `data-tab` values of all tab selectors, in document order.
    fn tab_selectors(&self) -> Vec<String>;

    /// Toggle `active` on every selector whose `data-tab` equals `tab`.
    fn set_tab_active(&mut self, tab: &str, active: bool);

    /// Ids of all tab content regions, in document order.
    fn content_regions(&self) -> Vec<String>;

    fn scroll_to_top(&mut self, behavior: ScrollBehavior);

    /// Synchronous user-facing notification (a browser `alert`).
    fn notify(&mut self, message: &str);
}

// ============================================================================
// In-memory document
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct HostElement {
    pub id: Option<String>,
    pub tag: &'static str,
    pub classes: SmallVec<[String; 2]>,
    pub attrs: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<Node>,
    parent: Option<usize>,
}

impl HostElement {
    pub fn new(tag: &'static str) -> Self {
        Self {
            id: None,
            tag,
            classes: SmallVec::new(),
            attrs: Vec::new(),
            text: String::new(),
            children: Vec::new(),
            parent: None,
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn set_attr(&mut self, name: &str, value: &str) {
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.attrs.push((name.to_string(), value.to_string())),
        }
    }

    fn toggle_class(&mut self, class: &str, on: bool) {
        if on {
            if !self.has_class(class) {
                self.classes.push(class.to_string());
            }
        } else {
            self.classes.retain(|c| c != class);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    elements: Vec<HostElement>,
    index: FxHashMap<String, usize>,
    policy: MarkupPolicy,
    scrolls: Vec<ScrollBehavior>,
    notifications: Vec<String>,
}

impl Document {
    pub fn new(policy: MarkupPolicy) -> Self {
        Self {
            elements: Vec::new(),
            index: FxHashMap::default(),
            policy,
            scrolls: Vec::new(),
            notifications: Vec::new(),
        }
    }

    /// Standard trust portal page with every host contract element present.
    /// The overview tab starts active.
    pub fn skeleton(policy: MarkupPolicy) -> Self {
        let mut doc = Self::new(policy);

        let header = doc.push(HostElement::new("header").with_class("portal-header"), None);
        doc.push(
            HostElement::new("h1").with_id("portal-title").with_text("Trust Center"),
            Some(header),
        );
        doc.push(
            HostElement::new("div").with_id("portal-description").with_class("portal-description"),
            Some(header),
        );
        let contact = doc.push(
            HostElement::new("a")
                .with_id("contact-email")
                .with_class("contact-link")
                .with_attr("href", "#"),
            Some(header),
        );
        doc.push(
            HostElement::new("span").with_id("email-text").with_text("Contact us"),
            Some(contact),
        );
        doc.push(
            HostElement::new("button")
                .with_id("subscribe-btn")
                .with_class("btn")
                .with_class("btn-secondary")
                .with_text("Subscribe to updates"),
            Some(header),
        );
        doc.push(
            HostElement::new("button")
                .with_id("access-btn")
                .with_class("btn")
                .with_class("btn-primary")
                .with_text("Request access"),
            Some(header),
        );

        let nav = doc.push(HostElement::new("nav").with_class("tabs"), None);
        for tab in Tab::ALL {
            let mut selector = HostElement::new("button")
                .with_class("tab")
                .with_attr("data-tab", tab.as_str())
                .with_text(tab.label());
            if tab == Tab::default() {
                selector = selector.with_class("active");
            }
            doc.push(selector, Some(nav));
        }

        let main = doc.push(HostElement::new("main").with_class("portal-main"), None);
        for tab in Tab::ALL {
            let mut region = HostElement::new("div")
                .with_id(&tab.content_id())
                .with_class("tab-content");
            if tab == Tab::default() {
                region = region.with_class("active");
            }
            doc.push(region, Some(main));
        }

        doc
    }

    /// Append an element, optionally nested under an earlier one.
    pub fn push(&mut self, mut element: HostElement, parent: Option<usize>) -> usize {
        let idx = self.elements.len();
        element.parent = parent.filter(|p| *p < idx);
        if let Some(id) = &element.id {
            self.index.insert(id.clone(), idx);
        }
        self.elements.push(element);
        idx
    }

    /// Remove an element; its nested elements move up to its parent.
    pub fn remove_element(&mut self, id: &str) -> Option<HostElement> {
        let idx = *self.index.get(id)?;
        let removed = self.elements.remove(idx);

        for el in &mut self.elements {
            el.parent = match el.parent {
                Some(p) if p == idx => removed.parent,
                Some(p) if p > idx => Some(p - 1),
                other => other,
            };
        }
        self.reindex();
        Some(removed)
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (idx, el) in self.elements.iter().enumerate() {
            if let Some(id) = &el.id {
                self.index.insert(id.clone(), idx);
            }
        }
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut HostElement> {
        let idx = *self
            .index
            .get(id)
            .ok_or_else(|| PortalError::MissingElement(id.to_string()))?;
        Ok(&mut self.elements[idx])
    }

    // ------------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------------

    pub fn policy(&self) -> MarkupPolicy {
        self.policy
    }

    pub fn element(&self, id: &str) -> Option<&HostElement> {
        self.index.get(id).map(|idx| &self.elements[*idx])
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.element(id).map(|el| el.text.as_str())
    }

    pub fn attribute(&self, id: &str, name: &str) -> Option<&str> {
        self.element(id).and_then(|el| el.attr(name))
    }

    pub fn children(&self, id: &str) -> Option<&[Node]> {
        self.element(id).map(|el| el.children.as_slice())
    }

    /// Rendered markup of an element's content, as the browser would hold it.
    pub fn inner_html(&self, id: &str) -> Option<String> {
        self.children(id).map(|nodes| {
            let mut out = String::new();
            for node in nodes {
                node.write_html(&mut out, self.policy);
            }
            out
        })
    }

    pub fn active_tabs(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter(|el| el.has_class("tab") && el.has_class("active"))
            .filter_map(|el| el.attr("data-tab"))
            .collect()
    }

    pub fn visible_regions(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter(|el| el.has_class("tab-content") && el.has_class("active"))
            .filter_map(|el| el.id.as_deref())
            .collect()
    }

    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    pub fn last_scroll(&self) -> Option<ScrollBehavior> {
        self.scrolls.last().copied()
    }

    // ------------------------------------------------------------------------
    // Serialisation
    // ------------------------------------------------------------------------

    pub fn to_html(&self) -> String {
        let title = self.text("portal-title").unwrap_or("Trust Center");
        let mut out = String::with_capacity(8192);
        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta charset=\"UTF-8\">\n");
        let _ = writeln!(out, "<title>{}</title>", escape_html(title));
        out.push_str("</head>\n<body>\n");
        for idx in 0..self.elements.len() {
            if self.elements[idx].parent.is_none() {
                self.write_element(idx, &mut out);
                out.push('\n');
            }
        }
        out.push_str("</body>\n</html>\n");
        out
    }

    fn write_element(&self, idx: usize, out: &mut String) {
        let el = &self.elements[idx];
        out.push('<');
        out.push_str(el.tag);
        if let Some(id) = &el.id {
            let _ = write!(out, " id=\"{}\"", escape_html(id));
        }
        if !el.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape_html(&el.classes.join(" ")));
        }
        for (name, value) in &el.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape_html(value));
        }
        out.push('>');

        out.push_str(&escape_html(&el.text));
        for node in &el.children {
            node.write_html(out, self.policy);
        }
        for (child_idx, child) in self.elements.iter().enumerate() {
            if child.parent == Some(idx) {
                self.write_element(child_idx, out);
            }
        }

        out.push_str("</");
        out.push_str(el.tag);
        out.push('>');
    }
}

impl HostPage for Document {
    fn require(&self, id: &str) -> Result<()> {
        if self.index.contains_key(id) {
            Ok(())
        } else {
            Err(PortalError::MissingElement(id.to_string()))
        }
    }

    fn set_text(&mut self, id: &str, text: &str) -> Result<()> {
        let el = self.get_mut(id)?;
        el.text = text.to_string();
        el.children.clear();
        Ok(())
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> Result<()> {
        self.get_mut(id)?.set_attr(name, value);
        Ok(())
    }

    fn replace_children(&mut self, id: &str, children: Vec<Node>) -> Result<()> {
        let el = self.get_mut(id)?;
        el.text.clear();
        el.children = children;
        Ok(())
    }

    fn append_child(&mut self, id: &str, child: Node) -> Result<()> {
        self.get_mut(id)?.children.push(child);
        Ok(())
    }

    fn set_class(&mut self, id: &str, class: &str, on: bool) -> Result<()> {
        self.get_mut(id)?.toggle_class(class, on);
        Ok(())
    }

    fn tab_selectors(&self) -> Vec<String> {
        self.elements
            .iter()
            .filter(|el| el.has_class("tab"))
            .filter_map(|el| el.attr("data-tab"))
            .map(str::to_string)
            .collect()
    }

    fn set_tab_active(&mut self, tab: &str, active: bool) {
        for el in &mut self.elements {
            if el.has_class("tab") && el.attr("data-tab") == Some(tab) {
                el.toggle_class("active", active);
            }
        }
    }

    fn content_regions(&self) -> Vec<String> {
        self.elements
            .iter()
            .filter(|el| el.has_class("tab-content"))
            .filter_map(|el| el.id.clone())
            .collect()
    }

    fn scroll_to_top(&mut self, behavior: ScrollBehavior) {
        self.scrolls.push(behavior);
    }

    fn notify(&mut self, message: &str) {
        tracing::info!("Notification: {}", message);
        self.notifications.push(message.to_string());
    }
}
