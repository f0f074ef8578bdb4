//! Control cards: title, description, and a grid of feature labels.
//! Features are display-only.

use super::{row_separator, section_shell, ShortcutLink};
use crate::data::ControlItem;
use crate::markup::Element;

pub fn render(title: &str, link: Option<ShortcutLink<'_>>, items: &[ControlItem]) -> Element {
    let cards = items
        .iter()
        .enumerate()
        .map(|(index, control)| card(control, row_separator(index, items.len())))
        .collect();
    section_shell(title, link, cards)
}

fn card(control: &ControlItem, separator: Option<&str>) -> Element {
    let features = Element::new("div")
        .class("features-grid")
        .children(control.features.iter().map(|feature| {
            Element::new("div")
                .class("feature-item")
                .child(Element::new("div").class("feature-check"))
                .child(Element::new("div").class("feature-text").text(feature.as_str()))
        }));

    let mut card = Element::new("div").class("card");
    if let Some(sep) = separator {
        card = card.style(sep);
    }
    card.child(
        Element::new("div")
            .class("card-title")
            .text(control.title.as_str())
            .child(chevron()),
    )
    .child(Element::new("div").class("card-description").text(control.description.as_str()))
    .child(features)
}

fn chevron() -> Element {
    Element::new("svg")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("width", "16")
        .attr("height", "16")
        .attr("viewBox", "0 0 24 24")
        .attr("fill", "none")
        .attr("stroke", "currentColor")
        .attr("stroke-width", "2")
        .child(Element::new("path").attr("d", "m9 18 6-6-6-6"))
}
