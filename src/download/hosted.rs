//! Download-count badges for hosting platforms (GitHub, Flathub, Docker).

use serde::Deserialize;

use super::{require, Download};
use crate::error::Result;
use crate::markdown::Node;
use crate::util::{first_non_empty, path_escape, query_escape};

/// Shields.io badge counting GitHub release downloads.
///
/// The link target defaults to the repository's releases page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GitHubDownload {
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Explicit link target, overriding the releases page.
    pub url: String,
    /// Badge label, overriding "GitHub".
    pub label: String,
}

impl Download for GitHubDownload {
    fn validate(&self) -> Result<()> {
        require("github", "owner", &self.owner)?;
        require("github", "repo", &self.repo)
    }

    fn render(&self) -> Node {
        let releases = format!("https://github.com/{}/{}/releases", self.owner, self.repo);
        let url = first_non_empty(&[&self.url, &releases]).to_string();
        let label = first_non_empty(&[&self.label, "GitHub"]);

        let badge = format!(
            "https://img.shields.io/github/downloads/{}/{}/total?logo=github&label={}",
            path_escape(&self.owner),
            path_escape(&self.repo),
            query_escape(label)
        );
        Node::link(Node::image(Node::text("github"), badge), url)
    }
}

/// Shields.io badge counting Flathub downloads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FlathubDownload {
    /// Flatpak application id.
    pub package: String,
    /// Explicit link target, overriding the Flathub app page.
    pub url: String,
}

impl Download for FlathubDownload {
    fn validate(&self) -> Result<()> {
        require("flathub", "package", &self.package)
    }

    fn render(&self) -> Node {
        let app_page = format!("https://flathub.org/apps/{}", self.package);
        let url = first_non_empty(&[&self.url, &app_page]).to_string();

        let badge = format!(
            "https://img.shields.io/flathub/downloads/{}?logo=Flathub&label=Flathub",
            path_escape(&self.package)
        );
        Node::link(Node::image(Node::text("flathub"), badge), url)
    }
}

/// Shields.io badge counting Docker Hub pulls.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DockerDownload {
    /// Docker Hub user or organization.
    pub user: String,
    /// Image repository name.
    pub repo: String,
    /// Explicit link target, overriding the Docker Hub page.
    pub url: String,
}

impl Download for DockerDownload {
    fn validate(&self) -> Result<()> {
        require("docker", "user", &self.user)?;
        require("docker", "repo", &self.repo)
    }

    fn render(&self) -> Node {
        let hub_page = format!("https://hub.docker.com/r/{}/{}", self.user, self.repo);
        let url = first_non_empty(&[&self.url, &hub_page]).to_string();

        let badge = format!(
            "https://img.shields.io/docker/pulls/{}/{}?logo=docker&label=Docker",
            path_escape(&self.user),
            path_escape(&self.repo)
        );
        Node::link(Node::image(Node::text("docker"), badge), url)
    }
}
