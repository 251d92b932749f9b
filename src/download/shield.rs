//! Static shields.io badges and the thin store-specific variants built on
//! top of them.

use serde::Deserialize;

use super::{require, Download};
use crate::error::Result;
use crate::markdown::Node;
use crate::util::{first_non_empty, path_escape, query_escape};

/// Generic shields.io static badge.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShieldDownload {
    /// Badge label (left-hand side).
    pub label: String,
    /// Badge content (right-hand side). When absent, the icon name is used.
    pub content: Option<String>,
    /// Shields.io logo name.
    pub icon: String,
    /// Badge color, defaulting to grey.
    pub color: String,
    /// Link target.
    pub url: String,
}

impl Download for ShieldDownload {
    fn validate(&self) -> Result<()> {
        require("shield", "url", &self.url)
    }

    fn render(&self) -> Node {
        let color = first_non_empty(&[&self.color, "grey"]);
        let alt = first_non_empty(&[&self.label, &self.icon, "alt"]);
        let content = match &self.content {
            Some(content) => content.as_str(),
            None => &self.icon,
        };

        let badge = format!(
            "https://img.shields.io/badge/{}-{color}?logo={}&label={}",
            path_escape(content),
            query_escape(&self.icon),
            query_escape(&self.label)
        );
        Node::link(Node::image(Node::text(alt), badge), self.url.as_str())
    }
}

/// GitLab badge linking to the project page by default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GitLabDownload {
    /// Project owner or group.
    pub owner: String,
    /// Project name.
    pub repo: String,
    /// Explicit link target, overriding the project page.
    pub url: String,
}

impl Download for GitLabDownload {
    fn render(&self) -> Node {
        let project = format!(
            "https://gitlab.com/{}/{}",
            path_escape(&self.owner),
            path_escape(&self.repo)
        );
        ShieldDownload {
            icon: "GitLab".into(),
            url: first_non_empty(&[&self.url, &project]).to_string(),
            ..Default::default()
        }
        .render()
    }
}

/// Fixed blue "Demo" badge pointing at a hosted demo.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DemoDownload {
    /// Demo location.
    pub url: String,
}

impl Download for DemoDownload {
    fn validate(&self) -> Result<()> {
        require("demo", "url", &self.url)
    }

    fn render(&self) -> Node {
        ShieldDownload {
            label: "Demo".into(),
            content: Some("Web".into()),
            color: "blue".into(),
            url: self.url.clone(),
            ..Default::default()
        }
        .render()
    }
}

/// App Store badge linking to the app page by default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppStoreDownload {
    /// Numeric App Store application id.
    pub id: String,
    /// Explicit link target, overriding the app page.
    pub url: String,
}

impl Download for AppStoreDownload {
    fn render(&self) -> Node {
        let app_page = format!("https://apps.apple.com/app/id{}", self.id);
        ShieldDownload {
            icon: "App Store".into(),
            url: first_non_empty(&[&self.url, &app_page]).to_string(),
            ..Default::default()
        }
        .render()
    }
}

/// Google Play badge linking to the store listing by default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GooglePlayDownload {
    /// Application package id.
    pub id: String,
    /// Explicit link target, overriding the store listing.
    pub url: String,
}

impl Download for GooglePlayDownload {
    fn render(&self) -> Node {
        let listing = format!("https://play.google.com/store/apps/details?id={}", self.id);
        ShieldDownload {
            icon: "Google Play".into(),
            url: first_non_empty(&[&self.url, &listing]).to_string(),
            ..Default::default()
        }
        .render()
    }
}
