//! Overview Dispatch
//!
//! `build_overview` is pure: descriptors in, `<section>` elements out.
//! `render_overview` commits the result into the host page's
//! `overview-content` container.

use crate::data::PortalData;
use crate::error::{Result, SectionError};
use crate::host::HostPage;
use crate::markup::Element;
use crate::overview::section::Section;
use crate::overview::sections::{certifications, controls, documentation, subprocessors, trusted_by, ShortcutLink};

pub const OVERVIEW_CONTAINER_ID: &str = "overview-content";

/// Fragments built from `overview_sections`, plus the error that stopped
/// rendering early, if any.
#[derive(Debug)]
pub struct OverviewContent {
    pub fragments: Vec<Element>,
    pub halted: Option<SectionError>,
}

pub fn render_section(section: &Section) -> Element {
    match section {
        Section::Certifications { title, certifications: certs } => certifications::render(title, certs),
        Section::TrustedBy { title, companies } => trusted_by::render(title, companies),
        Section::DocumentationPreview { title, link_text, items } => {
            documentation::render(title, shortcut(section, link_text.as_deref()), items)
        }
        Section::ControlsPreview { title, link_text, items } => {
            controls::render(title, shortcut(section, link_text.as_deref()), items)
        }
        Section::SubprocessorsPreview { title, link_text, items } => {
            subprocessors::render(title, shortcut(section, link_text.as_deref()), items)
        }
    }
}

/// Shortcut into the tab the section previews, when it has link text.
fn shortcut<'a>(section: &Section, link_text: Option<&'a str>) -> Option<ShortcutLink<'a>> {
    section
        .kind()
        .target_tab()
        .and_then(|tab| ShortcutLink::from_parts(link_text, tab))
}

/// Build one fragment per recognised section, preserving order.
pub fn build_overview(data: &PortalData) -> OverviewContent {
    let mut fragments = Vec::with_capacity(data.overview_sections.len());

    for desc in &data.overview_sections {
        match Section::resolve(desc, data) {
            Ok(Some(section)) => fragments.push(render_section(&section)),
            Ok(None) => tracing::debug!("Skipping unknown section type {:?}", desc.kind),
            Err(e) => {
                return OverviewContent {
                    fragments,
                    halted: Some(e),
                }
            }
        }
    }

    OverviewContent {
        fragments,
        halted: None,
    }
}

/// Clear the overview container and append the built sections.
///
/// No-op without data. Returns the section error that cut rendering short;
/// sections before it stay on the page.
pub fn render_overview<P: HostPage>(page: &mut P, data: Option<&PortalData>) -> Result<Option<SectionError>> {
    let Some(data) = data else {
        return Ok(None);
    };

    page.replace_children(OVERVIEW_CONTAINER_ID, Vec::new())?;

    let content = build_overview(data);
    let rendered = content.fragments.len();
    for fragment in content.fragments {
        page.append_child(OVERVIEW_CONTAINER_ID, fragment.into())?;
    }

    match &content.halted {
        Some(e) => tracing::warn!("Overview stopped after {} sections: {}", rendered, e),
        None => tracing::info!("Rendered {} overview sections", rendered),
    }
    Ok(content.halted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Document;
    use crate::markup::MarkupPolicy;
    use serde_json::{json, Value};

    fn portal(sections: Value) -> PortalData {
        serde_json::from_value(json!({
            "portal_title": "Acme Trust Center",
            "contact_email": "trust@acme.test",
            "description": "We take security seriously.",
            "certifications": [
                {"name": "SOC 2", "icon": "🔒", "description": "SOC 2 Type II"},
                {"name": "ISO 27001", "icon": "🛡️", "description": "ISMS"}
            ],
            "trusted_by": [{"name": "Northwind"}],
            "overview_sections": sections
        }))
        .unwrap()
    }

    fn section_titles(content: &OverviewContent) -> Vec<String> {
        content
            .fragments
            .iter()
            .map(|f| f.first_by_class("section-title").unwrap().text_content())
            .collect()
    }

    #[test]
    fn test_order_preserved_and_unknown_skipped() {
        let data = portal(json!([
            {"type": "trusted_by", "title": "Trusted by"},
            {"type": "testimonials", "title": "Quotes"},
            {"type": "certifications", "title": "Certifications"},
            {"type": "subprocessors_preview", "title": "Subprocessors", "link_text": "All",
             "items": [{"name": "AWS", "service": "Hosting", "location": "US"}]},
            {"type": "", "title": "Blank"}
        ]));
        let content = build_overview(&data);

        assert!(content.halted.is_none());
        assert_eq!(content.fragments.len(), 3);
        assert_eq!(section_titles(&content), vec!["Trusted by", "Certifications", "Subprocessors"]);
    }

    #[test]
    fn test_malformed_section_halts_later_sections() {
        let data = portal(json!([
            {"type": "certifications", "title": "First"},
            {"type": "controls_preview", "title": "Broken"},
            {"type": "trusted_by", "title": "Never rendered"}
        ]));
        let content = build_overview(&data);

        assert_eq!(section_titles(&content), vec!["First"]);
        assert!(matches!(content.halted, Some(SectionError::MissingItems { .. })));
    }

    #[test]
    fn test_section_without_type_is_skipped() {
        let data = portal(json!([
            {"type": "certifications", "title": "Certifications"},
            {"title": "No type"},
            {"type": 42, "title": "Numeric type"},
            {"type": "trusted_by", "title": "Trusted by"}
        ]));
        let content = build_overview(&data);

        assert!(content.halted.is_none());
        assert_eq!(section_titles(&content), vec!["Certifications", "Trusted by"]);
    }

    #[test]
    fn test_malformed_root_collection_halts_at_its_section() {
        let mut data = portal(json!([
            {"type": "certifications", "title": "Certifications"},
            {"type": "trusted_by", "title": "Trusted by"},
            {"type": "certifications", "title": "Never rendered"}
        ]));
        data.trusted_by = Some(json!([{"name": 5}]));
        let content = build_overview(&data);

        assert_eq!(section_titles(&content), vec!["Certifications"]);
        assert!(matches!(
            content.halted,
            Some(SectionError::Malformed { kind: "trusted_by", .. })
        ));
    }

    #[test]
    fn test_unused_bad_collection_is_ignored() {
        let mut data = portal(json!([{"type": "certifications", "title": "Certifications"}]));
        data.trusted_by = Some(json!("not a list"));
        let content = build_overview(&data);

        assert!(content.halted.is_none());
        assert_eq!(content.fragments.len(), 1);
    }

    #[test]
    fn test_preview_links_target_their_tabs() {
        let data = portal(json!([
            {"type": "documentation_preview", "title": "Docs", "link_text": "All docs",
             "items": [{"title": "Overview", "icon": "📄", "access": "public"}]},
            {"type": "controls_preview", "title": "Controls", "link_text": "All controls",
             "items": [{"title": "SSO", "description": "Single sign-on", "features": []}]},
            {"type": "subprocessors_preview", "title": "Subprocessors", "link_text": "All vendors",
             "items": [{"name": "AWS", "service": "Hosting", "location": "US"}]},
            {"type": "certifications", "title": "Certifications"}
        ]));
        let content = build_overview(&data);

        let targets: Vec<Option<String>> = content
            .fragments
            .iter()
            .map(|f| {
                f.first_by_class("tab-link")
                    .and_then(|link| link.get_attr("data-tab").map(str::to_string))
            })
            .collect();
        assert_eq!(
            targets,
            vec![
                Some("documentation".to_string()),
                Some("controls".to_string()),
                Some("subprocessors".to_string()),
                None,
            ]
        );
    }

    #[test]
    fn test_documentation_item_without_access_is_restricted() {
        let data = portal(json!([
            {"type": "documentation_preview", "title": "Docs",
             "items": [{"title": "Pen Test", "icon": "🛡️"}]}
        ]));
        let content = build_overview(&data);

        assert!(content.halted.is_none());
        let button = content.fragments[0]
            .find_all(&|el: &Element| el.tag == "button")
            .into_iter()
            .next()
            .unwrap()
            .text_content();
        assert_eq!(button, "🔒 Request access");
    }

    #[test]
    fn test_render_overview_commits_and_clears() {
        let data = portal(json!([{"type": "certifications", "title": "Our Certifications"}]));
        let mut doc = Document::skeleton(MarkupPolicy::Trusted);
        doc.append_child(OVERVIEW_CONTAINER_ID, Element::new("p").text("stale").into())
            .unwrap();

        let halted = render_overview(&mut doc, Some(&data)).unwrap();
        assert!(halted.is_none());

        let children = doc.children(OVERVIEW_CONTAINER_ID).unwrap();
        assert_eq!(children.len(), 1);
        let html = doc.inner_html(OVERVIEW_CONTAINER_ID).unwrap();
        assert!(!html.contains("stale"));
        assert!(html.contains("<h2 class=\"section-title\">Our Certifications</h2>"));
    }

    #[test]
    fn test_render_overview_without_data_is_noop() {
        let mut doc = Document::skeleton(MarkupPolicy::Trusted);
        let before = doc.clone();
        assert!(render_overview(&mut doc, None).unwrap().is_none());
        assert_eq!(doc, before);
    }

    #[test]
    fn test_missing_container_is_error() {
        let data = portal(json!([]));
        let mut doc = Document::skeleton(MarkupPolicy::Trusted);
        doc.remove_element(OVERVIEW_CONTAINER_ID);
        assert!(render_overview(&mut doc, Some(&data)).is_err());
    }
}
