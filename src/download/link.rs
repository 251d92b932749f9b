//! Plain link renderers: local icon and labelled text.

use std::path::PathBuf;

use serde::Deserialize;

use super::{require, Download};
use crate::error::Result;
use crate::markdown::Node;
use crate::util::path_escape;

/// Relative directory holding client icon assets.
const ICON_DIR: &str = "assets/clients/icons";

/// Download link showing a local icon asset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IconDownload {
    /// Icon file stem under the icon asset directory.
    pub icon: String,
    /// Link target.
    pub url: String,
}

impl Download for IconDownload {
    fn validate(&self) -> Result<()> {
        require("icon", "icon", &self.icon)?;
        require("icon", "url", &self.url)
    }

    fn render(&self) -> Node {
        let source = format!("{ICON_DIR}/{}.png", path_escape(&self.icon));
        Node::link(
            Node::image(Node::text(self.icon.as_str()), source),
            self.url.as_str(),
        )
    }

    fn asset_path(&self) -> Option<PathBuf> {
        Some(PathBuf::from(format!("{ICON_DIR}/{}.png", self.icon)))
    }
}

/// Download link with plain text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TextDownload {
    /// Link label.
    pub text: String,
    /// Link target.
    pub url: String,
}

impl Download for TextDownload {
    fn validate(&self) -> Result<()> {
        require("text", "text", &self.text)?;
        require("text", "url", &self.url)
    }

    fn render(&self) -> Node {
        Node::link(Node::text(self.text.as_str()), self.url.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_icon_renders_local_asset_link() {
        let download = IconDownload {
            icon: "jellyfin".into(),
            url: "https://jellyfin.org".into(),
        };
        assert_eq!(
            download.render().render(),
            "[![jellyfin](assets/clients/icons/jellyfin.png)](https://jellyfin.org)"
        );
    }

    #[test]
    fn test_icon_name_is_path_escaped() {
        let download = IconDownload {
            icon: "app store".into(),
            url: "https://example.com".into(),
        };
        assert!(download
            .render()
            .render()
            .contains("assets/clients/icons/app%20store.png"));
        // The on-disk asset path keeps the raw name.
        assert_eq!(
            download.asset_path(),
            Some(PathBuf::from("assets/clients/icons/app store.png"))
        );
    }

    #[test]
    fn test_icon_requires_both_fields() {
        let missing_url = IconDownload {
            icon: "kodi".into(),
            url: String::new(),
        };
        assert!(matches!(
            missing_url.validate(),
            Err(Error::MissingDownloadField {
                field: "url",
                kind: "icon"
            })
        ));

        let missing_icon = IconDownload {
            icon: String::new(),
            url: "https://example.com".into(),
        };
        assert!(matches!(
            missing_icon.validate(),
            Err(Error::MissingDownloadField {
                field: "icon",
                kind: "icon"
            })
        ));
    }

    #[test]
    fn test_text_renders_plain_link() {
        let download = TextDownload {
            text: "Downloads".into(),
            url: "https://jellyfin.org/downloads".into(),
        };
        assert_eq!(
            download.render().render(),
            "[Downloads](https://jellyfin.org/downloads)"
        );
        assert!(download.asset_path().is_none());
    }

    #[test]
    fn test_text_requires_label() {
        let download = TextDownload {
            text: String::new(),
            url: "https://example.com".into(),
        };
        assert!(matches!(
            download.validate(),
            Err(Error::MissingDownloadField {
                field: "text",
                kind: "text"
            })
        ));
    }
}
