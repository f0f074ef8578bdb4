//! Overview Sub-renderers
//!
//! Each module turns one `Section` variant into a `<section>` element.
//! All of them share the header/card shell defined here.

pub mod certifications;
pub mod trusted_by;
pub mod documentation;
pub mod controls;
pub mod subprocessors;

use crate::markup::Element;
use crate::tabs::Tab;

const LINK_STYLE: &str =
    "color: var(--color-content-secondary); text-decoration: none; font-size: 0.875rem;";
const ROW_SEPARATOR: &str = "border-bottom: 1px solid var(--color-border-subtle);";

/// Gradient used behind generated initial-letter glyphs.
pub(crate) const GLYPH_BACKGROUND: &str =
    "background: linear-gradient(135deg, var(--color-blue-bright), var(--color-teal));";

/// Shortcut from a preview section into one of the full tabs.
#[derive(Debug, Clone, Copy)]
pub struct ShortcutLink<'a> {
    pub text: &'a str,
    pub target: Tab,
}

impl<'a> ShortcutLink<'a> {
    /// Previews without `link_text` get no shortcut.
    pub fn from_parts(text: Option<&'a str>, target: Tab) -> Option<Self> {
        text.map(|text| Self { text, target })
    }

    fn render(&self) -> Element {
        Element::new("a")
            .attr("href", "#")
            .class("tab-link")
            .attr("data-tab", self.target.as_str())
            .style(LINK_STYLE)
            .text(format!("{} →", self.text))
    }
}

/// `<section>` with a title header, an optional shortcut, and a card body.
pub(crate) fn section_shell(title: &str, link: Option<ShortcutLink<'_>>, body: Vec<Element>) -> Element {
    let mut header = Element::new("div")
        .class("section-header")
        .child(Element::new("h2").class("section-title").text(title));
    if let Some(link) = link {
        header = header.child(link.render());
    }

    Element::new("section")
        .class("content-section")
        .child(header)
        .child(Element::new("div").class("section-card").children(body))
}

/// Separator drawn under every row except the last.
pub(crate) fn row_separator(index: usize, len: usize) -> Option<&'static str> {
    (index + 1 < len).then_some(ROW_SEPARATOR)
}

/// First character of a name, used as a stand-in logo. Empty for an empty name.
pub(crate) fn initial_glyph(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}
