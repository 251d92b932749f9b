//! Configuration data model for the clients YAML document.
//!
//! The document is parsed once at startup and read-only afterwards.
//! Structural problems, unknown download kinds, and missing required
//! download fields all fail here, before any rendering starts.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::download::Downloads;
use crate::error::{Error, Result};
use crate::util::first_non_empty;

/// Cost flags for a client. Both are tri-state: unset means "use the
/// documented default" when the row is rendered.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct Price {
    /// Usable without paying.
    pub free: Option<bool>,
    /// Has paid features or a purchase price.
    pub paid: Option<bool>,
}

/// A client application and how it is presented in the overview.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Client {
    /// Display name.
    pub name: String,
    /// Platform identifiers this client targets.
    pub targets: Vec<String>,
    /// Maintained by the organization. Unset defers to the official policy.
    pub official: Option<bool>,
    /// Pre-release quality.
    pub beta: Option<bool>,
    /// Project website.
    pub website: String,
    /// Source repository URL. Empty means closed source.
    #[serde(rename = "oss")]
    pub open_source_url: String,
    /// Cost flags.
    pub price: Price,
    /// Download sources in display order.
    pub downloads: Downloads,
    /// Type keys from the `types` registry.
    pub types: Vec<String>,
}

/// One platform identifier inside a target group, with its display name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Target {
    /// Platform identifier matched against client targets.
    pub name: String,
    /// Display name for the identifier's section.
    pub mapped: String,
}

impl Target {
    /// Display name, falling back to the raw identifier.
    pub fn display_name(&self) -> &str {
        first_non_empty(&[&self.mapped, &self.name])
    }
}

/// A display category grouping several platform identifiers.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TargetGroup {
    /// Stable group key.
    pub key: String,
    /// Group heading.
    pub display: String,
    /// Identifiers in display order.
    pub has: Vec<Target>,
}

/// A client type: a badge glyph and optionally its own output section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClientType {
    /// Key referenced from client `types` lists.
    pub key: String,
    /// Badge glyph shown next to client names. Empty means no badge.
    pub badge: String,
    /// Display name, falling back to the key.
    pub display: String,
    /// Whether the type gets its own "By Type" section.
    pub section: bool,
}

impl ClientType {
    /// Display name, falling back to the key.
    pub fn display_name(&self) -> &str {
        first_non_empty(&[&self.display, &self.key])
    }
}

/// Root configuration aggregate.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ClientsConfig {
    /// All known clients, in config order.
    pub clients: Vec<Client>,
    /// Display categories, in output order.
    pub targets: Vec<TargetGroup>,
    /// Client type registry, in output order.
    pub types: Vec<ClientType>,
}

/// Read and deserialize the clients YAML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ClientsConfig> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| Error::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ClientsConfig = serde_yaml::from_str(&data)?;
    log::debug!(
        "loaded {} clients, {} target groups, {} types from {}",
        config.clients.len(),
        config.targets.len(),
        config.types.len(),
        path.display()
    );
    Ok(config)
}
