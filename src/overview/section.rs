//! Section Variants
//!
//! Closed set of overview sections. Each variant carries exactly the data
//! its sub-renderer reads.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::data::{
    Certification, ControlItem, DocumentationItem, PortalData, SectionDescriptor,
    SubprocessorItem, TrustedCompany,
};
use crate::error::SectionError;
use crate::tabs::Tab;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Certifications,
    TrustedBy,
    DocumentationPreview,
    ControlsPreview,
    SubprocessorsPreview,
}

impl SectionKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "certifications" => Some(SectionKind::Certifications),
            "trusted_by" => Some(SectionKind::TrustedBy),
            "documentation_preview" => Some(SectionKind::DocumentationPreview),
            "controls_preview" => Some(SectionKind::ControlsPreview),
            "subprocessors_preview" => Some(SectionKind::SubprocessorsPreview),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Certifications => "certifications",
            SectionKind::TrustedBy => "trusted_by",
            SectionKind::DocumentationPreview => "documentation_preview",
            SectionKind::ControlsPreview => "controls_preview",
            SectionKind::SubprocessorsPreview => "subprocessors_preview",
        }
    }

    /// Tab a preview's shortcut link opens. Root-collection sections have none.
    pub fn target_tab(&self) -> Option<Tab> {
        match self {
            SectionKind::Certifications | SectionKind::TrustedBy => None,
            SectionKind::DocumentationPreview => Some(Tab::Documentation),
            SectionKind::ControlsPreview => Some(Tab::Controls),
            SectionKind::SubprocessorsPreview => Some(Tab::Subprocessors),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Certifications {
        title: String,
        certifications: Vec<Certification>,
    },
    TrustedBy {
        title: String,
        companies: Vec<TrustedCompany>,
    },
    DocumentationPreview {
        title: String,
        link_text: Option<String>,
        items: Vec<DocumentationItem>,
    },
    ControlsPreview {
        title: String,
        link_text: Option<String>,
        items: Vec<ControlItem>,
    },
    SubprocessorsPreview {
        title: String,
        link_text: Option<String>,
        items: Vec<SubprocessorItem>,
    },
}

impl Section {
    /// Resolve a descriptor against the loaded document.
    ///
    /// `Ok(None)` for an unrecognised type tag.
    pub fn resolve(desc: &SectionDescriptor, data: &PortalData) -> Result<Option<Section>, SectionError> {
        let Some(kind) = desc.kind.as_deref().and_then(SectionKind::from_tag) else {
            return Ok(None);
        };
        let title = desc.title.clone();
        let link_text = desc.link_text.clone();

        let section = match kind {
            SectionKind::Certifications => Section::Certifications {
                certifications: parse_collection(kind, &title, "certifications", data.certifications.as_ref())?,
                title,
            },
            SectionKind::TrustedBy => Section::TrustedBy {
                companies: parse_collection(kind, &title, "trusted_by", data.trusted_by.as_ref())?,
                title,
            },
            SectionKind::DocumentationPreview => Section::DocumentationPreview {
                items: parse_items(kind, &title, desc.items.as_ref())?,
                title,
                link_text,
            },
            SectionKind::ControlsPreview => Section::ControlsPreview {
                items: parse_items(kind, &title, desc.items.as_ref())?,
                title,
                link_text,
            },
            SectionKind::SubprocessorsPreview => Section::SubprocessorsPreview {
                items: parse_items(kind, &title, desc.items.as_ref())?,
                title,
                link_text,
            },
        };
        Ok(Some(section))
    }

    pub fn kind(&self) -> SectionKind {
        match self {
            Section::Certifications { .. } => SectionKind::Certifications,
            Section::TrustedBy { .. } => SectionKind::TrustedBy,
            Section::DocumentationPreview { .. } => SectionKind::DocumentationPreview,
            Section::ControlsPreview { .. } => SectionKind::ControlsPreview,
            Section::SubprocessorsPreview { .. } => SectionKind::SubprocessorsPreview,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Section::Certifications { title, .. }
            | Section::TrustedBy { title, .. }
            | Section::DocumentationPreview { title, .. }
            | Section::ControlsPreview { title, .. }
            | Section::SubprocessorsPreview { title, .. } => title,
        }
    }
}

/// Parse a root collection referenced by a section.
fn parse_collection<T: DeserializeOwned>(
    kind: SectionKind,
    title: &str,
    field: &'static str,
    collection: Option<&Value>,
) -> Result<Vec<T>, SectionError> {
    match collection {
        None | Some(Value::Null) => Err(SectionError::MissingCollection {
            kind: kind.as_str(),
            title: title.to_string(),
            field,
        }),
        Some(value) => parse_list(kind, title, value),
    }
}

fn parse_items<T: DeserializeOwned>(
    kind: SectionKind,
    title: &str,
    items: Option<&Value>,
) -> Result<Vec<T>, SectionError> {
    match items {
        None | Some(Value::Null) => Err(SectionError::MissingItems {
            kind: kind.as_str(),
            title: title.to_string(),
        }),
        Some(value) => parse_list(kind, title, value),
    }
}

fn parse_list<T: DeserializeOwned>(kind: SectionKind, title: &str, value: &Value) -> Result<Vec<T>, SectionError> {
    serde_json::from_value(value.clone()).map_err(|source| SectionError::Malformed {
        kind: kind.as_str(),
        title: title.to_string(),
        source,
    })
}
