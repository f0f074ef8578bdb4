//! Subprocessor rows: initial-letter glyph, name, service, location.

use super::{initial_glyph, row_separator, section_shell, ShortcutLink, GLYPH_BACKGROUND};
use crate::data::SubprocessorItem;
use crate::markup::Element;

pub fn render(title: &str, link: Option<ShortcutLink<'_>>, items: &[SubprocessorItem]) -> Element {
    let rows = items
        .iter()
        .enumerate()
        .map(|(index, sub)| row(sub, row_separator(index, items.len())))
        .collect();
    section_shell(title, link, rows)
}

fn row(sub: &SubprocessorItem, separator: Option<&str>) -> Element {
    let glyph_style = format!(
        "width: 32px; height: 32px; {} border-radius: 6px; display: flex; align-items: center; justify-content: center; color: white; font-weight: 700; flex-shrink: 0;",
        GLYPH_BACKGROUND
    );
    let row_style = format!("padding: var(--spacing-md); {}", separator.unwrap_or_default());

    Element::new("div").class("subprocessor-row").style(row_style.trim_end()).child(
        Element::new("div")
            .style("display: flex; align-items: center; gap: 1rem;")
            .child(
                Element::new("div")
                    .class("subprocessor-glyph")
                    .style(&glyph_style)
                    .text(initial_glyph(&sub.name)),
            )
            .child(
                Element::new("div")
                    .style("flex: 1;")
                    .child(
                        Element::new("div")
                            .class("subprocessor-name")
                            .style("font-family: var(--font-primary); font-weight: 500; font-size: 0.875rem; color: var(--color-content-primary);")
                            .text(sub.name.as_str()),
                    )
                    .child(
                        Element::new("div")
                            .class("subprocessor-service")
                            .style("font-size: 0.75rem; color: var(--color-content-tertiary);")
                            .text(sub.service.as_str()),
                    ),
            )
            .child(
                Element::new("div")
                    .class("subprocessor-location")
                    .style("font-size: 0.875rem; color: var(--color-content-tertiary); flex-shrink: 0;")
                    .text(sub.location.as_str()),
            ),
    )
}
