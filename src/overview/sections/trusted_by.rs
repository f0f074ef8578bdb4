//! Logo tiles for the root `trusted_by` collection. There are no logo
//! assets; each tile shows the company's initial.

use super::{initial_glyph, section_shell, GLYPH_BACKGROUND};
use crate::data::TrustedCompany;
use crate::markup::Element;

pub fn render(title: &str, companies: &[TrustedCompany]) -> Element {
    let logos = Element::new("div")
        .class("trusted-logos")
        .children(companies.iter().map(logo_tile));
    section_shell(title, None, vec![logos])
}

fn logo_tile(company: &TrustedCompany) -> Element {
    let glyph_style = format!(
        "{} display: flex; align-items: center; justify-content: center; color: white; font-weight: 700; font-size: 1.25rem;",
        GLYPH_BACKGROUND
    );
    Element::new("div")
        .class("logo-item")
        .child(
            Element::new("div").class("logo-img-container").child(
                Element::new("div")
                    .class("logo-img")
                    .style(&glyph_style)
                    .text(initial_glyph(&company.name)),
            ),
        )
        .child(Element::new("div").class("logo-name").text(company.name.as_str()))
}
