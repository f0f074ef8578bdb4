//! Portal Data Loading
//!
//! Model for the overview document (`data/overview.json`) and the single
//! fetch that loads it.
//!
//! Shape:
//! - `portal_title`, `contact_email`: header fields
//! - `description`: one paragraph string or a list of paragraphs
//! - `overview_sections`: ordered section descriptors, rendered in order
//! - `certifications`, `trusted_by`: root collections referenced by sections
//!
//! Only the root scalars and the section list itself are checked at load
//! time. Everything a section reads stays raw until that section renders.

use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{PortalError, Result};

/// Fixed resource path of the overview document, relative to the source root.
pub const OVERVIEW_DATA_PATH: &str = "data/overview.json";

// ============================================================================
// Model
// ============================================================================

/// Root of the overview document. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PortalData {
    pub portal_title: String,
    pub contact_email: String,
    pub description: Description,
    pub overview_sections: Vec<SectionDescriptor>,
    #[serde(default)]
    pub certifications: Option<Value>,
    #[serde(default)]
    pub trusted_by: Option<Value>,
}

impl PortalData {
    pub fn from_json(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }
}

/// Portal description: a single paragraph or an ordered list of paragraphs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Paragraphs(Vec<String>),
    Single(String),
}

impl Description {
    pub fn paragraphs(&self) -> Vec<&str> {
        match self {
            Description::Paragraphs(paras) => paras.iter().map(String::as_str).collect(),
            Description::Single(text) => vec![text.as_str()],
        }
    }
}

/// Wire shape of one `overview_sections` entry.
///
/// Accepts any JSON value. A missing or non-string `type` leaves `kind`
/// empty and the section is skipped as unknown. `items` stays raw and is
/// only resolved when the section is rendered, so a malformed section cannot
/// invalidate the sections before it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct SectionDescriptor {
    pub kind: Option<String>,
    pub title: String,
    pub link_text: Option<String>,
    pub items: Option<Value>,
}

impl From<Value> for SectionDescriptor {
    fn from(value: Value) -> Self {
        let Value::Object(mut fields) = value else {
            return Self::default();
        };
        Self {
            kind: match fields.remove("type") {
                Some(Value::String(tag)) => Some(tag),
                _ => None,
            },
            title: fields.remove("title").map(display_text).unwrap_or_default(),
            link_text: fields
                .remove("link_text")
                .filter(|v| !v.is_null())
                .map(display_text),
            items: fields.remove("items").filter(|v| !v.is_null()),
        }
    }
}

/// Text as it would be interpolated: strings verbatim, other values as JSON.
fn display_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Certification {
    pub name: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrustedCompany {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DocumentationItem {
    pub title: String,
    pub icon: String,
    #[serde(default)]
    pub access: Access,
}

/// Document access level. Anything other than `"public"` is restricted,
/// including a missing or non-string value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub enum Access {
    Public,
    #[default]
    Restricted,
}

impl From<Value> for Access {
    fn from(value: Value) -> Self {
        match value.as_str() {
            Some("public") => Access::Public,
            _ => Access::Restricted,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ControlItem {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubprocessorItem {
    pub name: String,
    pub service: String,
    pub location: String,
}

// ============================================================================
// Sources
// ============================================================================

/// Where the overview document is read from.
#[allow(async_fn_in_trait)]
pub trait DataSource {
    /// Human-readable location, used in logs.
    fn describe(&self, path: &str) -> String;

    /// Read the raw body stored at `path`.
    async fn read(&self, path: &str) -> Result<Vec<u8>>;
}

/// Reads documents from a directory on disk.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DataSource for FsSource {
    fn describe(&self, path: &str) -> String {
        self.root.join(path).display().to_string()
    }

    async fn read(&self, path: &str) -> Result<Vec<u8>> {
        let full = self.root.join(path);
        tokio::fs::read(&full).await.map_err(|e| PortalError::Fetch {
            path: full.display().to_string(),
            message: e.to_string(),
        })
    }
}

/// Fetches documents relative to a base URL.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    base: reqwest::Url,
    client: reqwest::Client,
}

#[cfg(feature = "http")]
impl HttpSource {
    pub fn new(base: &str) -> Result<Self> {
        // Url::join drops the last segment unless the base ends with '/'
        let normalized = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{}/", base)
        };
        let base = reqwest::Url::parse(&normalized)
            .map_err(|e| PortalError::Config(format!("bad base URL {}: {}", base, e)))?;
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("trust_portal/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PortalError::Config(e.to_string()))?;
        Ok(Self { base, client })
    }
}

#[cfg(feature = "http")]
impl DataSource for HttpSource {
    fn describe(&self, path: &str) -> String {
        self.base
            .join(path)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| format!("{}{}", self.base, path))
    }

    async fn read(&self, path: &str) -> Result<Vec<u8>> {
        let url = self.base.join(path).map_err(|e| PortalError::Fetch {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let fetch_err = |message: String| PortalError::Fetch {
            path: url.to_string(),
            message,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| fetch_err(e.to_string()))?;

        if !response.status().is_success() {
            return Err(fetch_err(format!("HTTP status: {}", response.status())));
        }

        let body = response.bytes().await.map_err(|e| fetch_err(e.to_string()))?;
        Ok(body.to_vec())
    }
}

/// Source selected by configuration.
#[derive(Debug, Clone)]
pub enum PortalSource {
    Fs(FsSource),
    #[cfg(feature = "http")]
    Http(HttpSource),
}

impl DataSource for PortalSource {
    fn describe(&self, path: &str) -> String {
        match self {
            PortalSource::Fs(src) => src.describe(path),
            #[cfg(feature = "http")]
            PortalSource::Http(src) => src.describe(path),
        }
    }

    async fn read(&self, path: &str) -> Result<Vec<u8>> {
        match self {
            PortalSource::Fs(src) => src.read(path).await,
            #[cfg(feature = "http")]
            PortalSource::Http(src) => src.read(path).await,
        }
    }
}

/// Read and parse the overview document. One attempt, no fallback.
pub async fn load_portal_data<S: DataSource>(source: &S, path: &str) -> Result<PortalData> {
    tracing::info!("Loading portal data from {}", source.describe(path));

    let body = source.read(path).await?;
    let data = PortalData::from_json(&body).map_err(|source| PortalError::Parse {
        path: path.to_string(),
        source,
    })?;

    tracing::info!(
        "Loaded portal data: {} sections, {} certifications, {} trusted companies",
        data.overview_sections.len(),
        collection_len(data.certifications.as_ref()),
        collection_len(data.trusted_by.as_ref()),
    );
    Ok(data)
}

fn collection_len(collection: Option<&Value>) -> usize {
    collection.and_then(Value::as_array).map_or(0, Vec::len)
}
