//! Header Renderer
//!
//! Fills the static header: title, contact email text, `mailto:` link
//! target, and the description paragraphs.

use crate::data::{Description, PortalData};
use crate::error::Result;
use crate::host::HostPage;
use crate::markup::{Element, Node};

pub const TITLE_ID: &str = "portal-title";
pub const EMAIL_TEXT_ID: &str = "email-text";
pub const CONTACT_LINK_ID: &str = "contact-email";
pub const DESCRIPTION_ID: &str = "portal-description";

/// Header content built from the loaded document.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderView {
    pub title: String,
    pub email_text: String,
    pub contact_href: String,
    pub description: Vec<Node>,
}

impl HeaderView {
    pub fn from_data(data: &PortalData) -> Self {
        Self {
            title: data.portal_title.clone(),
            email_text: data.contact_email.clone(),
            contact_href: format!("mailto:{}", data.contact_email),
            description: description_paragraphs(&data.description),
        }
    }
}

/// One `<p>` per paragraph, in order.
pub fn description_paragraphs(description: &Description) -> Vec<Node> {
    description
        .paragraphs()
        .into_iter()
        .map(|para| Element::new("p").text(para).into())
        .collect()
}

/// Write the header into the page. No-op without data.
pub fn render_header<P: HostPage>(page: &mut P, data: Option<&PortalData>) -> Result<()> {
    let Some(data) = data else {
        return Ok(());
    };
    let view = HeaderView::from_data(data);

    page.set_text(TITLE_ID, &view.title)?;
    page.set_text(EMAIL_TEXT_ID, &view.email_text)?;
    page.set_attribute(CONTACT_LINK_ID, "href", &view.contact_href)?;
    page.replace_children(DESCRIPTION_ID, view.description)?;
    Ok(())
}
