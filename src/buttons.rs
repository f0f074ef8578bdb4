//! Button Handlers
//!
//! Placeholder actions for the subscribe and request-access buttons. Each
//! raises a notification; no network call, no state change.

use crate::error::Result;
use crate::host::HostPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortalButton {
    Subscribe,
    RequestAccess,
}

impl PortalButton {
    pub const ALL: [PortalButton; 2] = [PortalButton::Subscribe, PortalButton::RequestAccess];

    pub fn element_id(&self) -> &'static str {
        match self {
            PortalButton::Subscribe => "subscribe-btn",
            PortalButton::RequestAccess => "access-btn",
        }
    }

    pub fn from_element_id(id: &str) -> Option<Self> {
        PortalButton::ALL.into_iter().find(|b| b.element_id() == id)
    }

    pub fn notification(&self) -> &'static str {
        match self {
            PortalButton::Subscribe => "Subscribe functionality would open a modal or form here",
            PortalButton::RequestAccess => "Request access functionality would open a form here",
        }
    }

    pub fn press<P: HostPage>(&self, page: &mut P) {
        page.notify(self.notification());
    }
}

/// Check both buttons exist and return them as bound handlers.
pub fn setup_buttons<P: HostPage>(page: &P) -> Result<Vec<PortalButton>> {
    for button in PortalButton::ALL {
        page.require(button.element_id())?;
    }
    Ok(PortalButton::ALL.to_vec())
}
