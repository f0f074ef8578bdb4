//! Tab Controller
//!
//! Exactly one tab is active at a time. Activating a tab clears `active`
//! from every selector and every content region, then marks the chosen
//! selector and its `<tab>-content` region. Re-activating the current tab
//! re-applies the same state.

use crate::error::Result;
use crate::host::{HostPage, ScrollBehavior};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Overview,
    Documentation,
    Controls,
    Subprocessors,
}

impl Tab {
    pub const ALL: [Tab; 4] = [
        Tab::Overview,
        Tab::Documentation,
        Tab::Controls,
        Tab::Subprocessors,
    ];

    /// Identifier carried in `data-tab` attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Documentation => "documentation",
            Tab::Controls => "controls",
            Tab::Subprocessors => "subprocessors",
        }
    }

    pub fn from_id(id: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|t| t.as_str() == id)
    }

    /// Element id of the tab's content region.
    pub fn content_id(&self) -> String {
        format!("{}-content", self.as_str())
    }

    /// Selector label used by the default page skeleton.
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Documentation => "Documentation",
            Tab::Controls => "Controls",
            Tab::Subprocessors => "Subprocessors",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TabController {
    current: Tab,
}

impl TabController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Tab {
        self.current
    }

    /// Direct activation from a tab selector.
    pub fn activate<P: HostPage>(&mut self, page: &mut P, tab: Tab) -> Result<()> {
        for selector in page.tab_selectors() {
            page.set_tab_active(&selector, false);
        }
        for region in page.content_regions() {
            page.set_class(&region, "active", false)?;
        }

        page.set_tab_active(tab.as_str(), true);
        page.set_class(&tab.content_id(), "active", true)?;

        tracing::debug!("Tab {} -> {}", self.current.as_str(), tab.as_str());
        self.current = tab;
        Ok(())
    }

    /// Shortcut link carrying a target tab id.
    ///
    /// Behaves like clicking the matching selector, then scrolls to the top.
    /// Returns `false` (and changes nothing) when no selector carries `target`.
    pub fn follow_shortcut<P: HostPage>(&mut self, page: &mut P, target: &str) -> Result<bool> {
        let Some(tab) = Tab::from_id(target) else {
            tracing::debug!("Shortcut to unknown tab {:?} ignored", target);
            return Ok(false);
        };
        if !page.tab_selectors().iter().any(|s| s == tab.as_str()) {
            tracing::debug!("No selector for tab {:?}; shortcut ignored", target);
            return Ok(false);
        }

        self.activate(page, tab)?;
        page.scroll_to_top(ScrollBehavior::Smooth);
        Ok(true)
    }
}
