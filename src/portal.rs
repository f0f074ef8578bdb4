//! Trust Portal Controller
//!
//! Owns the application state and runs the page lifecycle:
//! 1. load the overview document (the only await point)
//! 2. render the header
//! 3. render the overview sections
//! 4. bind tab navigation
//! 5. bind the placeholder buttons
//!
//! Afterwards `dispatch` handles input events one at a time.

use chrono::{DateTime, Utc};

use crate::buttons::{setup_buttons, PortalButton};
use crate::config::PortalConfig;
use crate::data::{load_portal_data, DataSource, PortalData, OVERVIEW_DATA_PATH};
use crate::error::Result;
use crate::header::render_header;
use crate::host::HostPage;
use crate::overview::render_overview;
use crate::tabs::{Tab, TabController};

/// A recorded failure. Also emitted through `tracing`.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub at: DateTime<Utc>,
    pub message: String,
}

/// Input events from the host page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortalEvent {
    /// A tab selector was clicked; carries its `data-tab` value.
    TabSelected(String),
    /// A `.tab-link` in the content was clicked; carries its `data-tab` value.
    ShortcutLink(String),
    /// A button was clicked; carries its element id.
    ButtonPressed(String),
}

/// Handlers installed by the wiring steps.
#[derive(Debug, Clone, Default)]
struct Bindings {
    tab_selectors: Vec<Tab>,
    shortcut_links: bool,
    buttons: Vec<PortalButton>,
}

/// Explicit application state. `data` is written once during init.
#[derive(Debug, Clone, Default)]
pub struct PortalState {
    pub data: Option<PortalData>,
    pub tabs: TabController,
    pub diagnostics: Vec<Diagnostic>,
    bindings: Bindings,
}

impl PortalState {
    fn record(&mut self, message: String) {
        self.diagnostics.push(Diagnostic {
            at: Utc::now(),
            message,
        });
    }
}

pub struct TrustPortal<P: HostPage> {
    page: P,
    state: PortalState,
    data_path: String,
}

impl<P: HostPage> TrustPortal<P> {
    pub fn new(page: P) -> Self {
        Self {
            page,
            state: PortalState::default(),
            data_path: OVERVIEW_DATA_PATH.to_string(),
        }
    }

    pub fn with_config(page: P, config: &PortalConfig) -> Self {
        let mut portal = Self::new(page);
        portal.data_path = config.data_path.clone();
        portal
    }

    pub fn state(&self) -> &PortalState {
        &self.state
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn into_page(self) -> P {
        self.page
    }

    pub fn current_tab(&self) -> Tab {
        self.state.tabs.current()
    }

    /// Run the full page lifecycle.
    ///
    /// Fetch/parse failures and section errors are recorded as diagnostics
    /// and never returned. Only a missing host element fails `init`.
    pub async fn init<S: DataSource>(&mut self, source: &S) -> Result<()> {
        self.load_overview_data(source).await;

        render_header(&mut self.page, self.state.data.as_ref())?;

        if let Some(e) = render_overview(&mut self.page, self.state.data.as_ref())? {
            tracing::warn!("Overview rendering halted: {}", e);
            self.state.record(e.to_string());
        }

        self.setup_tab_navigation();
        self.setup_buttons()?;
        Ok(())
    }

    async fn load_overview_data<S: DataSource>(&mut self, source: &S) {
        match load_portal_data(source, &self.data_path).await {
            Ok(data) => self.state.data = Some(data),
            Err(e) => {
                tracing::error!("Error loading data: {}", e);
                self.state.record(format!("Error loading data: {}", e));
            }
        }
    }

    fn setup_tab_navigation(&mut self) {
        self.state.bindings.tab_selectors = self
            .page
            .tab_selectors()
            .iter()
            .filter_map(|id| Tab::from_id(id))
            .collect();
        self.state.bindings.shortcut_links = true;
        tracing::debug!("Bound {} tab selectors", self.state.bindings.tab_selectors.len());
    }

    fn setup_buttons(&mut self) -> Result<()> {
        self.state.bindings.buttons = setup_buttons(&self.page)?;
        Ok(())
    }

    /// Handle one input event to completion. Events without a bound
    /// handler are ignored.
    pub fn dispatch(&mut self, event: PortalEvent) -> Result<()> {
        match event {
            PortalEvent::TabSelected(id) => {
                match Tab::from_id(&id).filter(|t| self.state.bindings.tab_selectors.contains(t)) {
                    Some(tab) => self.state.tabs.activate(&mut self.page, tab)?,
                    None => tracing::debug!("No handler for tab selector {:?}", id),
                }
            }
            PortalEvent::ShortcutLink(target) => {
                if self.state.bindings.shortcut_links {
                    self.state.tabs.follow_shortcut(&mut self.page, &target)?;
                }
            }
            PortalEvent::ButtonPressed(id) => {
                match PortalButton::from_element_id(&id).filter(|b| self.state.bindings.buttons.contains(b)) {
                    Some(button) => button.press(&mut self.page),
                    None => tracing::debug!("No handler for button {:?}", id),
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PortalError;
    use crate::host::Document;
    use crate::markup::MarkupPolicy;

    /// In-memory source returning a fixed body, or a fetch error.
    struct StaticSource(Option<&'static str>);

    impl DataSource for StaticSource {
        fn describe(&self, path: &str) -> String {
            format!("static:{}", path)
        }

        async fn read(&self, path: &str) -> Result<Vec<u8>> {
            match self.0 {
                Some(body) => Ok(body.as_bytes().to_vec()),
                None => Err(PortalError::Fetch {
                    path: path.to_string(),
                    message: "network unreachable".to_string(),
                }),
            }
        }
    }

    const BODY: &str = r#"{
        "portal_title": "Acme Trust Center",
        "contact_email": "trust@acme.test",
        "description": ["One", "Two"],
        "certifications": [{"name": "SOC 2", "icon": "🔒", "description": "Type II"}],
        "overview_sections": [
            {"type": "certifications", "title": "Our Certifications"},
            {"type": "documentation_preview", "title": "Documentation", "link_text": "View all",
             "items": [{"title": "Overview", "icon": "📄", "access": "public"}]}
        ]
    }"#;

    fn portal() -> TrustPortal<Document> {
        TrustPortal::new(Document::skeleton(MarkupPolicy::Trusted))
    }

    #[tokio::test]
    async fn test_init_renders_everything() {
        let mut portal = portal();
        portal.init(&StaticSource(Some(BODY))).await.unwrap();

        assert!(portal.state().data.is_some());
        assert!(portal.state().diagnostics.is_empty());
        assert_eq!(portal.page().text("portal-title"), Some("Acme Trust Center"));
        assert_eq!(portal.page().children("overview-content").unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_recorded_once() {
        let mut portal = portal();
        portal.init(&StaticSource(None)).await.unwrap();

        assert!(portal.state().data.is_none());
        assert_eq!(portal.state().diagnostics.len(), 1);
        assert!(portal.state().diagnostics[0].message.contains("network unreachable"));
        assert_eq!(portal.page().text("portal-title"), Some("Trust Center"));
        assert!(portal.page().children("overview-content").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_tabs_and_buttons_work_without_data() {
        let mut portal = portal();
        portal.init(&StaticSource(None)).await.unwrap();

        portal.dispatch(PortalEvent::TabSelected("controls".into())).unwrap();
        assert_eq!(portal.current_tab(), Tab::Controls);

        portal.dispatch(PortalEvent::ButtonPressed("subscribe-btn".into())).unwrap();
        assert_eq!(portal.page().notifications().len(), 1);
    }

    #[tokio::test]
    async fn test_section_error_still_wires_tabs() {
        let body = r#"{
            "portal_title": "Acme",
            "contact_email": "trust@acme.test",
            "description": "x",
            "overview_sections": [{"type": "trusted_by", "title": "Trusted by"}]
        }"#;
        let mut portal = portal();
        portal.init(&StaticSource(Some(body))).await.unwrap();

        assert_eq!(portal.state().diagnostics.len(), 1);
        portal.dispatch(PortalEvent::ShortcutLink("documentation".into())).unwrap();
        assert_eq!(portal.current_tab(), Tab::Documentation);
    }

    #[test]
    fn test_events_ignored_before_init() {
        let mut portal = portal();
        portal.dispatch(PortalEvent::TabSelected("controls".into())).unwrap();
        portal.dispatch(PortalEvent::ShortcutLink("controls".into())).unwrap();
        portal.dispatch(PortalEvent::ButtonPressed("access-btn".into())).unwrap();

        assert_eq!(portal.current_tab(), Tab::Overview);
        assert!(portal.page().notifications().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_targets_ignored() {
        let mut portal = portal();
        portal.init(&StaticSource(Some(BODY))).await.unwrap();

        portal.dispatch(PortalEvent::TabSelected("pricing".into())).unwrap();
        portal.dispatch(PortalEvent::ButtonPressed("portal-title".into())).unwrap();
        assert_eq!(portal.current_tab(), Tab::Overview);
        assert!(portal.page().notifications().is_empty());
    }

    #[tokio::test]
    async fn test_missing_button_fails_init() {
        let mut doc = Document::skeleton(MarkupPolicy::Trusted);
        doc.remove_element("subscribe-btn");
        let mut portal = TrustPortal::new(doc);

        let err = portal.init(&StaticSource(Some(BODY))).await.unwrap_err();
        assert!(matches!(err, PortalError::MissingElement(id) if id == "subscribe-btn"));
    }

    #[tokio::test]
    async fn test_configured_data_path_is_used() {
        struct PathCheck;
        impl DataSource for PathCheck {
            fn describe(&self, path: &str) -> String {
                path.to_string()
            }
            async fn read(&self, path: &str) -> Result<Vec<u8>> {
                assert_eq!(path, "data/custom.json");
                Ok(BODY.as_bytes().to_vec())
            }
        }

        let config = PortalConfig {
            data_path: "data/custom.json".to_string(),
            ..PortalConfig::default()
        };
        let mut portal = TrustPortal::with_config(Document::skeleton(MarkupPolicy::Trusted), &config);
        portal.init(&PathCheck).await.unwrap();
        assert!(portal.state().data.is_some());
    }
}
