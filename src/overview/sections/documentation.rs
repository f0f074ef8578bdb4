//! Documentation preview rows.
//!
//! The action button depends only on `access`: public documents get
//! "📄 View", everything else gets "🔒 Request access".

use super::{row_separator, section_shell, ShortcutLink};
use crate::data::{Access, DocumentationItem};
use crate::markup::Element;

/// Button class and label for a document's access level.
pub fn access_action(access: Access) -> (&'static str, &'static str) {
    match access {
        Access::Public => ("btn btn-primary", "📄 View"),
        Access::Restricted => ("btn btn-secondary", "🔒 Request access"),
    }
}

pub fn render(title: &str, link: Option<ShortcutLink<'_>>, items: &[DocumentationItem]) -> Element {
    let rows = items
        .iter()
        .enumerate()
        .map(|(index, doc)| row(doc, row_separator(index, items.len())))
        .collect();
    section_shell(title, link, rows)
}

fn row(doc: &DocumentationItem, separator: Option<&str>) -> Element {
    let (button_class, button_label) = access_action(doc.access);

    let label = Element::new("div")
        .style("display: flex; align-items: center; gap: 1rem;")
        .child(Element::new("span").class("doc-icon").style("font-size: 1.25rem;").text(doc.icon.as_str()))
        .child(
            Element::new("span")
                .class("doc-title")
                .style("font-family: var(--font-primary); font-weight: 500; font-size: 0.875rem;")
                .text(doc.title.as_str()),
        );
    let action = Element::new("button")
        .class(button_class)
        .style("font-size: 0.75rem; padding: 0.375rem 0.75rem;")
        .text(button_label);

    let mut card = Element::new("div").class("card");
    if let Some(sep) = separator {
        card = card.style(sep);
    }
    card.child(
        Element::new("div")
            .style("display: flex; justify-content: space-between; align-items: center;")
            .child(label)
            .child(action),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs::Tab;

    fn doc(title: &str, access: Access) -> DocumentationItem {
        DocumentationItem {
            title: title.to_string(),
            icon: "📄".to_string(),
            access,
        }
    }

    #[test]
    fn test_access_classification() {
        assert_eq!(access_action(Access::Public), ("btn btn-primary", "📄 View"));
        assert_eq!(access_action(Access::Restricted), ("btn btn-secondary", "🔒 Request access"));
    }

    #[test]
    fn test_rows_and_separators() {
        let items = vec![
            doc("Security Overview", Access::Public),
            doc("SOC 2 Report", Access::Restricted),
            doc("Privacy Policy", Access::Public),
        ];
        let section = render(
            "Documentation",
            ShortcutLink::from_parts(Some("View all"), Tab::Documentation),
            &items,
        );

        let cards = section.find_by_class("card");
        assert_eq!(cards.len(), 3);
        assert!(cards[0].get_attr("style").is_some());
        assert!(cards[1].get_attr("style").is_some());
        assert!(cards[2].get_attr("style").is_none());

        let labels: Vec<String> = section
            .find_all(&|el: &Element| el.tag == "button")
            .iter()
            .map(|el| el.text_content())
            .collect();
        assert_eq!(labels, vec!["📄 View", "🔒 Request access", "📄 View"]);

        let link = section.first_by_class("tab-link").unwrap();
        assert_eq!(link.get_attr("data-tab"), Some("documentation"));
    }
}
