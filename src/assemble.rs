//! Assembles the clients overview document from configuration.
//!
//! The assembler walks the client/target/type configuration and produces a
//! [`Node`] tree: a "By Environment" section of per-platform tables,
//! optional "By Type" sections, and a badge legend. It performs no I/O;
//! any error aborts assembly before a partial document exists.

use std::collections::HashMap;

use crate::config::{Client, ClientType, ClientsConfig};
use crate::error::{Error, Result};
use crate::markdown::{Node, TableBuilder};
use crate::util::{first_non_empty, resolve_flag};

/// How the Official badge defaults when a client's `official` flag is
/// unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OfficialPolicy {
    /// Official if the open-source URL starts with the organization
    /// prefix.
    #[default]
    OrgPrefix,
    /// Like [`OfficialPolicy::OrgPrefix`], but beta clients stay
    /// unofficial.
    OrgPrefixStable,
}

/// Glyphs for the OSS/Free/Paid status cells, split by whether the true
/// value is desirable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusGlyphs {
    /// Desirable true (e.g. free).
    pub good_true: String,
    /// Undesirable true (e.g. paid).
    pub bad_true: String,
    /// Desirable false (e.g. not paid).
    pub good_false: String,
    /// Undesirable false (e.g. closed source).
    pub bad_false: String,
}

impl Default for StatusGlyphs {
    fn default() -> Self {
        Self {
            good_true: "✅".into(),
            bad_true: "☑️".into(),
            good_false: "❎".into(),
            bad_false: "❌".into(),
        }
    }
}

/// Assembly configuration: badge glyphs and the Official defaulting
/// policy. All values that were process-wide constants in early versions
/// of the generator live here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembleOptions {
    /// Badge glyph for official clients.
    pub official_badge: String,
    /// Badge glyph for beta clients.
    pub beta_badge: String,
    /// Organization URL prefix that makes a client official by default.
    pub org_url_prefix: String,
    /// Official defaulting policy.
    pub official_policy: OfficialPolicy,
    /// Status cell glyphs.
    pub glyphs: StatusGlyphs,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            official_badge: "🔹".into(),
            beta_badge: "🛠️".into(),
            org_url_prefix: "https://github.com/jellyfin/".into(),
            official_policy: OfficialPolicy::default(),
            glyphs: StatusGlyphs::default(),
        }
    }
}

impl AssembleOptions {
    /// Create options with the stock glyphs and policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Official defaulting policy.
    pub fn with_official_policy(mut self, policy: OfficialPolicy) -> Self {
        self.official_policy = policy;
        self
    }

    /// Set the organization URL prefix.
    pub fn with_org_url_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.org_url_prefix = prefix.into();
        self
    }

    /// Set the official and beta badge glyphs.
    pub fn with_badges(
        mut self,
        official: impl Into<String>,
        beta: impl Into<String>,
    ) -> Self {
        self.official_badge = official.into();
        self.beta_badge = beta.into();
        self
    }
}

/// Build the full clients document for a configuration.
pub fn assemble(config: &ClientsConfig, options: &AssembleOptions) -> Result<Node> {
    Assembler::new(config, options).assemble()
}

/// Walks the configuration and builds the document tree.
pub struct Assembler<'a> {
    config: &'a ClientsConfig,
    options: &'a AssembleOptions,
    types: HashMap<&'a str, &'a ClientType>,
}

impl<'a> Assembler<'a> {
    /// Create an assembler for a configuration.
    pub fn new(config: &'a ClientsConfig, options: &'a AssembleOptions) -> Self {
        let types = config
            .types
            .iter()
            .map(|ty| (ty.key.as_str(), ty))
            .collect();
        Self {
            config,
            options,
            types,
        }
    }

    /// Assemble the document. Returns the Vertical root node.
    pub fn assemble(&self) -> Result<Node> {
        self.validate_type_keys()?;

        let buckets = self.identifier_clients();
        let mut doc = Node::vertical(vec![Node::heading(1, Node::text("By Environment"))]);

        for group in &self.config.targets {
            doc.push(Node::heading(2, Node::text(group.display.as_str())));
            let multiple = group.has.len() > 1;
            for target in &group.has {
                if multiple {
                    doc.push(Node::heading(3, Node::text(target.display_name())));
                }
                let mut clients = buckets
                    .get(normalize_identifier(&target.name).as_str())
                    .cloned()
                    .unwrap_or_default();
                sort_clients(&mut clients);
                doc.push(self.client_table(&clients)?);
            }
        }

        if self.config.types.iter().any(|ty| ty.section) {
            doc.push(Node::divider());
            doc.push(Node::heading(1, Node::text("By Type")));
            for ty in self.config.types.iter().filter(|ty| ty.section) {
                let mut clients: Vec<&Client> = self
                    .config
                    .clients
                    .iter()
                    .filter(|client| client.types.iter().any(|key| key == &ty.key))
                    .collect();
                if clients.is_empty() {
                    log::debug!("type {} has no clients, skipping section", ty.key);
                    continue;
                }
                sort_clients(&mut clients);

                let mut heading = vec![Node::text(ty.display_name())];
                if !ty.badge.is_empty() {
                    heading.push(Node::code_padded(ty.badge.as_str()));
                }
                doc.push(Node::heading(2, Node::horizontal(heading)));
                doc.push(self.client_table(&clients)?);
            }
        }

        let badged: Vec<&ClientType> = self
            .config
            .types
            .iter()
            .filter(|ty| !ty.badge.is_empty())
            .collect();
        if !badged.is_empty() {
            doc.push(Node::divider());
            doc.push(Node::list(
                false,
                badged
                    .iter()
                    .map(|ty| {
                        Node::horizontal(vec![
                            Node::bold(ty.display_name()),
                            Node::code_padded(ty.badge.as_str()),
                        ])
                    })
                    .collect(),
            ));
        }

        Ok(doc)
    }

    /// Fail fast on any client type key missing from the registry.
    fn validate_type_keys(&self) -> Result<()> {
        for client in &self.config.clients {
            for key in &client.types {
                if !self.types.contains_key(key.as_str()) {
                    return Err(Error::UnknownClientType(key.clone()));
                }
            }
        }
        Ok(())
    }

    /// Bucket clients by normalized platform identifier. A client appears
    /// under every identifier it targets; insertion order is preserved per
    /// bucket.
    fn identifier_clients(&self) -> HashMap<String, Vec<&'a Client>> {
        let mut buckets: HashMap<String, Vec<&Client>> = HashMap::new();
        for client in &self.config.clients {
            for identifier in &client.targets {
                buckets
                    .entry(normalize_identifier(identifier))
                    .or_default()
                    .push(client);
            }
        }
        buckets
    }

    /// Build the 5-column client table for an already sorted client list.
    fn client_table(&self, clients: &[&Client]) -> Result<Node> {
        let mut table = TableBuilder::new(vec![
            Node::text("Name"),
            Node::text("OSS"),
            Node::text("Free"),
            Node::text("Paid"),
            Node::text("Downloads"),
        ]);
        for client in clients {
            table.add_row(self.client_row(client)?);
        }
        Ok(table.build())
    }

    fn client_row(&self, client: &Client) -> Result<Vec<Node>> {
        let oss = !client.open_source_url.is_empty();

        let mut label = vec![Node::text(client.name.as_str())];
        if self.is_official(client) {
            label.push(Node::code_padded(self.options.official_badge.as_str()));
        }
        if resolve_flag(client.beta, false) {
            label.push(Node::code_padded(self.options.beta_badge.as_str()));
        }
        for key in &client.types {
            let ty = self
                .types
                .get(key.as_str())
                .ok_or_else(|| Error::UnknownClientType(key.clone()))?;
            if !ty.badge.is_empty() {
                label.push(Node::code_padded(ty.badge.as_str()));
            }
        }
        let label = Node::horizontal(label);

        let url = first_non_empty(&[&client.website, &client.open_source_url]);
        let name_cell = if url.is_empty() {
            label
        } else {
            Node::link(label, url)
        };

        let free = resolve_flag(client.price.free, oss);
        let paid = resolve_flag(client.price.paid, false);
        let glyphs = &self.options.glyphs;

        let downloads = Node::horizontal(
            client
                .downloads
                .iter()
                .map(|download| download.render())
                .collect(),
        );

        Ok(vec![
            name_cell,
            Node::text(if oss {
                glyphs.good_true.as_str()
            } else {
                glyphs.bad_false.as_str()
            }),
            Node::text(if free {
                glyphs.good_true.as_str()
            } else {
                glyphs.bad_false.as_str()
            }),
            Node::text(if paid {
                glyphs.bad_true.as_str()
            } else {
                glyphs.good_false.as_str()
            }),
            downloads,
        ])
    }

    /// Resolve the Official badge: an explicit flag wins, otherwise the
    /// configured policy decides from the open-source URL.
    fn is_official(&self, client: &Client) -> bool {
        match client.official {
            Some(explicit) => explicit,
            None => {
                let from_org = !self.options.org_url_prefix.is_empty()
                    && client
                        .open_source_url
                        .starts_with(&self.options.org_url_prefix);
                match self.options.official_policy {
                    OfficialPolicy::OrgPrefix => from_org,
                    OfficialPolicy::OrgPrefixStable => {
                        from_org && !resolve_flag(client.beta, false)
                    }
                }
            }
        }
    }
}

fn normalize_identifier(identifier: &str) -> String {
    identifier.trim().to_lowercase()
}

fn sort_clients(clients: &mut [&Client]) {
    clients.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
}
