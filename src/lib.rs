//! Trust Portal Renderer
//!
//! Renders a trust portal page from a static JSON document
//! (`data/overview.json`): header fields, the overview sections
//! (certifications, trusted-by logos, documentation, controls and
//! subprocessor previews), tab navigation, and two placeholder buttons.
//!
//! Layout:
//! - `data`: document model and loader
//! - `markup`: pure content tree and HTML serialisation
//! - `header`, `overview`: renderers (pure builders + commit to the page)
//! - `tabs`, `buttons`: event handlers
//! - `host`: host page seam and in-memory `Document`
//! - `portal`: controller, application state, event dispatch
//! - `config`: environment configuration

pub mod error;
pub mod config;
pub mod data;
pub mod markup;
pub mod host;
pub mod header;
pub mod overview;
pub mod tabs;
pub mod buttons;
pub mod portal;

// Re-export commonly used types
pub use config::PortalConfig;
pub use data::{load_portal_data, DataSource, FsSource, PortalData, PortalSource, OVERVIEW_DATA_PATH};
pub use error::{PortalError, SectionError};
pub use host::{Document, HostPage};
pub use markup::{Element, MarkupPolicy, Node};
pub use portal::{PortalEvent, PortalState, TrustPortal};
pub use tabs::Tab;
