//! Download descriptors and the kind registry.
//!
//! Every entry in a client's `downloads` list is a tagged object whose
//! `type` field selects a renderer. The [`DownloadRegistry`] maps that
//! discriminant to a factory producing a typed descriptor; each descriptor
//! implements [`Download`] and renders itself to a document [`Node`].
//!
//! Dispatch on an unrecognized `type` value is a fatal configuration error.
//! An entry that carries no `type` key at all degrades to the bold
//! "Unknown" badge instead of failing the whole document.

mod hosted;
mod link;
mod shield;

pub use hosted::{DockerDownload, FlathubDownload, GitHubDownload};
pub use link::{IconDownload, TextDownload};
pub use shield::{
    AppStoreDownload, DemoDownload, GitLabDownload, GooglePlayDownload, ShieldDownload,
};

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

use crate::error::{Error, Result};
use crate::markdown::Node;

/// A single download source for a client.
///
/// Required fields are checked once at construction, so [`Download::render`]
/// is infallible and configuration errors surface before any rendering.
pub trait Download: fmt::Debug + Send + Sync {
    /// Check that all fields this kind requires are non-empty after
    /// defaulting.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Render the download as a document node.
    fn render(&self) -> Node;

    /// Relative path of a local asset this download references, if any.
    /// Used by the icon pre-check.
    fn asset_path(&self) -> Option<PathBuf> {
        None
    }
}

/// Reject an empty required field.
pub(crate) fn require(kind: &'static str, field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::MissingDownloadField { field, kind });
    }
    Ok(())
}

/// Factory building one concrete descriptor from the raw YAML mapping.
pub type DownloadFactory = fn(Value) -> Result<Box<dyn Download>>;

fn build_spec<T>(value: Value) -> Result<Box<dyn Download>>
where
    T: Download + DeserializeOwned + 'static,
{
    let spec: T = serde_yaml::from_value(value)?;
    spec.validate()?;
    Ok(Box::new(spec))
}

/// Registry mapping a download `type` discriminant to its factory.
pub struct DownloadRegistry {
    factories: HashMap<String, DownloadFactory>,
}

impl DownloadRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Create a registry with all built-in download kinds.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        // simple renderers
        registry.register("icon", build_spec::<IconDownload>);
        registry.register("text", build_spec::<TextDownload>);
        // download-count badges
        registry.register("github", build_spec::<GitHubDownload>);
        registry.register("flathub", build_spec::<FlathubDownload>);
        registry.register("docker", build_spec::<DockerDownload>);
        // static shields
        registry.register("shield", build_spec::<ShieldDownload>);
        registry.register("gitlab", build_spec::<GitLabDownload>);
        registry.register("demo", build_spec::<DemoDownload>);
        registry.register("app-store", build_spec::<AppStoreDownload>);
        registry.register("google-play", build_spec::<GooglePlayDownload>);
        registry
    }

    /// Register a factory for a discriminant value.
    pub fn register(&mut self, kind: impl Into<String>, factory: DownloadFactory) {
        self.factories.insert(kind.into(), factory);
    }

    /// Whether a discriminant value is registered.
    pub fn supports(&self, kind: &str) -> bool {
        self.factories.contains_key(kind)
    }

    /// Build a descriptor of the given kind from a raw mapping.
    pub fn build(&self, kind: &str, value: Value) -> Result<Box<dyn Download>> {
        let factory = self
            .factories
            .get(kind)
            .ok_or_else(|| Error::UnknownDownloadKind(kind.to_string()))?;
        factory(value)
    }

    /// Build a descriptor from a raw download entry, dispatching on its
    /// `type` key. A missing key selects the fallback badge; an
    /// unrecognized value is fatal.
    pub fn build_entry(&self, value: Value) -> Result<Box<dyn Download>> {
        match value.get("type") {
            None => {
                log::debug!("download entry without a type key, using fallback badge");
                Ok(Box::new(FallbackDownload))
            }
            Some(Value::String(kind)) => {
                let kind = kind.clone();
                self.build(&kind, value)
            }
            Some(other) => Err(Error::UnknownDownloadKind(format!("{other:?}"))),
        }
    }
}

impl Default for DownloadRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Degraded badge used when a download entry names no renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackDownload;

impl Download for FallbackDownload {
    fn render(&self) -> Node {
        Node::bold("Unknown")
    }
}

/// Ordered list of a client's download sources.
///
/// Deserializes through the default registry, so the whole config load
/// fails on the first malformed or unknown-kind entry.
#[derive(Debug, Default)]
pub struct Downloads(pub Vec<Box<dyn Download>>);

impl Downloads {
    /// Iterate over the download descriptors in config order.
    pub fn iter(&self) -> std::slice::Iter<'_, Box<dyn Download>> {
        self.0.iter()
    }

    /// Whether the client declares no downloads.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of download entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'de> Deserialize<'de> for Downloads {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Vec<Value> = Vec::deserialize(deserializer)?;
        let registry = DownloadRegistry::with_defaults();
        raw.into_iter()
            .map(|value| registry.build_entry(value).map_err(serde::de::Error::custom))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map(Downloads)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_registry_supports_builtin_kinds() {
        let registry = DownloadRegistry::with_defaults();
        for kind in [
            "icon",
            "text",
            "github",
            "flathub",
            "docker",
            "shield",
            "gitlab",
            "demo",
            "app-store",
            "google-play",
        ] {
            assert!(registry.supports(kind), "missing builtin kind {kind}");
        }
        assert!(!registry.supports("torrent"));
    }

    #[test]
    fn test_registry_unknown_kind_is_fatal() {
        let registry = DownloadRegistry::with_defaults();
        let err = registry
            .build_entry(entry("{type: torrent, url: 'https://example.com'}"))
            .unwrap_err();
        assert!(matches!(err, Error::UnknownDownloadKind(kind) if kind == "torrent"));
    }

    #[test]
    fn test_entry_without_type_key_falls_back() {
        let registry = DownloadRegistry::with_defaults();
        let download = registry.build_entry(entry("{url: 'https://example.com'}")).unwrap();
        assert_eq!(download.render().render(), "**Unknown**");
    }

    #[test]
    fn test_entry_with_non_string_type_is_fatal() {
        let registry = DownloadRegistry::with_defaults();
        let err = registry.build_entry(entry("{type: 7}")).unwrap_err();
        assert!(matches!(err, Error::UnknownDownloadKind(_)));
    }

    #[test]
    fn test_registry_custom_factory() {
        fn demo_factory(value: Value) -> Result<Box<dyn Download>> {
            build_spec::<DemoDownload>(value)
        }

        let mut registry = DownloadRegistry::new();
        assert!(!registry.supports("demo"));
        registry.register("demo", demo_factory);
        assert!(registry.supports("demo"));
    }

    #[test]
    fn test_downloads_deserialize_preserves_order() {
        let downloads: Downloads = serde_yaml::from_str(
            r#"
            - type: text
              text: Download
              url: https://example.com
            - type: github
              owner: jellyfin
              repo: jellyfin
            "#,
        )
        .unwrap();
        assert_eq!(downloads.len(), 2);
        assert!(downloads.0[0].render().render().starts_with("[Download]"));
        assert!(downloads.0[1]
            .render()
            .render()
            .contains("github.com/jellyfin/jellyfin/releases"));
    }

    #[test]
    fn test_downloads_deserialize_unknown_kind_fails() {
        let result: std::result::Result<Downloads, _> =
            serde_yaml::from_str("[{type: torrent, url: 'https://example.com'}]");
        let message = result.unwrap_err().to_string();
        assert!(message.contains("unknown download type: torrent"), "{message}");
    }

    #[test]
    fn test_downloads_deserialize_missing_field_fails() {
        let result: std::result::Result<Downloads, _> =
            serde_yaml::from_str("[{type: github, owner: jellyfin}]");
        let message = result.unwrap_err().to_string();
        assert!(message.contains("repo is required for github download"), "{message}");
    }
}
