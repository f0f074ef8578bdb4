//! Certification badges from the root `certifications` collection.
//! The description is shown as the badge's hover tooltip.

use super::section_shell;
use crate::data::Certification;
use crate::markup::Element;

pub fn render(title: &str, certifications: &[Certification]) -> Element {
    let grid = Element::new("div")
        .class("certifications-grid")
        .children(certifications.iter().map(badge));
    section_shell(title, None, vec![grid])
}

fn badge(cert: &Certification) -> Element {
    Element::new("div")
        .class("cert-badge")
        .attr("title", cert.description.as_str())
        .child(
            Element::new("div")
                .class("cert-icon")
                .style("font-size: 3rem;")
                .text(cert.icon.as_str()),
        )
        .child(
            Element::new("div")
                .class("cert-name")
                .style("font-size: 0.75rem; text-align: center; margin-top: 0.5rem; color: var(--color-content-secondary);")
                .text(cert.name.as_str()),
        )
}
