//! Portal Configuration
//!
//! Environment variables:
//! - `PORTAL_ROOT`: directory holding `data/`, or an http(s) base URL
//!   (requires the `http` feature). Default: `.`
//! - `PORTAL_DATA_PATH`: document path relative to the root. Default: `data/overview.json`
//! - `PORTAL_MARKUP`: `trusted` (verbatim interpolation) or `escaped`. Default: `trusted`

use crate::data::{FsSource, PortalSource, OVERVIEW_DATA_PATH};
use crate::error::{PortalError, Result};
use crate::markup::MarkupPolicy;

#[derive(Debug, Clone, PartialEq)]
pub struct PortalConfig {
    pub root: String,
    pub data_path: String,
    pub markup: MarkupPolicy,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            root: ".".to_string(),
            data_path: OVERVIEW_DATA_PATH.to_string(),
            markup: MarkupPolicy::default(),
        }
    }
}

impl PortalConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let root = lookup("PORTAL_ROOT")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.root);

        let data_path = lookup("PORTAL_DATA_PATH")
            .map(|v| v.trim_start_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.data_path);

        let markup = match lookup("PORTAL_MARKUP") {
            Some(name) => MarkupPolicy::from_name(&name).ok_or_else(|| {
                PortalError::Config(format!(
                    "PORTAL_MARKUP must be `trusted` or `escaped`, got {:?}",
                    name
                ))
            })?,
            None => defaults.markup,
        };

        Ok(Self {
            root,
            data_path,
            markup,
        })
    }

    pub fn is_remote(&self) -> bool {
        self.root.starts_with("http://") || self.root.starts_with("https://")
    }

    /// Data source for the configured root.
    pub fn source(&self) -> Result<PortalSource> {
        if self.is_remote() {
            return remote_source(&self.root);
        }
        Ok(PortalSource::Fs(FsSource::new(&self.root)))
    }
}

#[cfg(feature = "http")]
fn remote_source(root: &str) -> Result<PortalSource> {
    Ok(PortalSource::Http(crate::data::HttpSource::new(root)?))
}

#[cfg(not(feature = "http"))]
fn remote_source(root: &str) -> Result<PortalSource> {
    Err(PortalError::Config(format!(
        "PORTAL_ROOT {} is a URL; rebuild with `--features http` to fetch over HTTP",
        root
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = PortalConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, PortalConfig::default());
        assert_eq!(config.data_path, "data/overview.json");
        assert!(!config.is_remote());
    }

    #[test]
    fn test_overrides() {
        let config = PortalConfig::from_lookup(lookup(&[
            ("PORTAL_ROOT", "/srv/portal"),
            ("PORTAL_DATA_PATH", "/data/trust.json"),
            ("PORTAL_MARKUP", "Escaped"),
        ]))
        .unwrap();
        assert_eq!(config.root, "/srv/portal");
        assert_eq!(config.data_path, "data/trust.json");
        assert_eq!(config.markup, MarkupPolicy::Escaped);
    }

    #[test]
    fn test_invalid_markup() {
        let err = PortalConfig::from_lookup(lookup(&[("PORTAL_MARKUP", "loose")])).unwrap_err();
        assert!(matches!(err, PortalError::Config(_)));
    }

    #[test]
    fn test_remote_root_detection() {
        let config = PortalConfig::from_lookup(lookup(&[("PORTAL_ROOT", "https://trust.acme.test")])).unwrap();
        assert!(config.is_remote());
    }

    #[cfg(not(feature = "http"))]
    #[test]
    fn test_remote_root_needs_http_feature() {
        let config = PortalConfig::from_lookup(lookup(&[("PORTAL_ROOT", "https://trust.acme.test")])).unwrap();
        assert!(matches!(config.source(), Err(PortalError::Config(_))));
    }
}
