//! Error Types
//!
//! `PortalError` covers the init/dispatch boundary (fetch, parse, host page,
//! configuration). `SectionError` covers a single overview section that
//! could not be resolved; it halts the remaining sections but not the page.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PortalError>;

#[derive(Debug, Error)]
pub enum PortalError {
    /// Network or filesystem failure while reading the data document.
    #[error("failed to fetch {path}: {message}")]
    Fetch { path: String, message: String },

    /// The data document was read but is not a valid PortalData body.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The host page does not carry an element the renderer writes into.
    #[error("host page has no element with id `{0}`")]
    MissingElement(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

#[derive(Debug, Error)]
pub enum SectionError {
    #[error("section \"{title}\" ({kind}) needs the `{field}` collection, which is absent")]
    MissingCollection {
        kind: &'static str,
        title: String,
        field: &'static str,
    },

    #[error("section \"{title}\" ({kind}) has no `items` list")]
    MissingItems { kind: &'static str, title: String },

    #[error("section \"{title}\" ({kind}) is malformed: {source}")]
    Malformed {
        kind: &'static str,
        title: String,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_message() {
        let err = PortalError::MissingElement("portal-title".to_string());
        assert_eq!(err.to_string(), "host page has no element with id `portal-title`");
    }

    #[test]
    fn test_section_error_names_field() {
        let err = SectionError::MissingCollection {
            kind: "certifications",
            title: "Our Certifications".to_string(),
            field: "certifications",
        };
        let msg = err.to_string();
        assert!(msg.contains("Our Certifications"));
        assert!(msg.contains("`certifications`"));
    }
}
