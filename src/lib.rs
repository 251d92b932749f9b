//! # mkmd
//!
//! Generates the Jellyfin clients overview Markdown document from a
//! declarative YAML description of client applications.
//!
//! The library is three layers, leaf to root:
//!
//! - [`markdown`]: a small document model of composable nodes, each
//!   rendering itself to Markdown text.
//! - [`download`]: a registry mapping tagged download sources (GitHub,
//!   Flathub, Docker, shields, stores) to renderable descriptors.
//! - [`assemble`]: walks the client/target/type configuration and builds
//!   the document tree.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mkmd::{load_config, AssembleOptions};
//!
//! fn main() -> mkmd::Result<()> {
//!     let config = load_config("clients.yaml")?;
//!     let markdown = mkmd::generate(&config, &AssembleOptions::default())?;
//!     println!("{}", markdown);
//!     Ok(())
//! }
//! ```
//!
//! The pipeline is single-threaded and single-shot: the config is parsed
//! once, the node tree is built once, rendered to one string, and any
//! configuration error aborts before output exists.

pub mod assemble;
pub mod config;
pub mod download;
pub mod error;
pub mod markdown;

mod util;

pub use assemble::{assemble, AssembleOptions, Assembler, OfficialPolicy, StatusGlyphs};
pub use config::{load_config, Client, ClientType, ClientsConfig, Price, Target, TargetGroup};
pub use download::{Download, DownloadRegistry, Downloads, FallbackDownload};
pub use error::{Error, Result};
pub use markdown::{CodeStyle, Node, TableBuilder, TextStyle};

use std::path::Path;

/// Assemble and render the clients document to Markdown text.
///
/// The returned text always ends with a single trailing newline.
pub fn generate(config: &ClientsConfig, options: &AssembleOptions) -> Result<String> {
    let doc = assemble::assemble(config, options)?;
    let mut text = doc.render();
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

/// Load a clients YAML file and render it with default options.
///
/// # Example
///
/// ```no_run
/// let markdown = mkmd::generate_from_path("clients.yaml").unwrap();
/// std::fs::write("clients.md", markdown).unwrap();
/// ```
pub fn generate_from_path<P: AsRef<Path>>(path: P) -> Result<String> {
    let config = load_config(path)?;
    generate(&config, &AssembleOptions::default())
}

/// Verify that every local icon asset referenced by a download exists
/// under `assets_root`. Fails with the first missing path.
pub fn check_icons(config: &ClientsConfig, assets_root: &Path) -> Result<()> {
    for client in &config.clients {
        for download in client.downloads.iter() {
            if let Some(relative) = download.asset_path() {
                let path = assets_root.join(&relative);
                if !path.is_file() {
                    return Err(Error::MissingIcon(path));
                }
                log::debug!("icon asset present: {}", path.display());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon_config() -> ClientsConfig {
        serde_yaml::from_str(
            r#"
clients:
  - name: Kodi
    targets: [tv]
    website: https://kodi.tv
    downloads:
      - type: icon
        icon: kodi
        url: https://kodi.tv/download
targets:
  - key: tv
    display: TV
    has:
      - name: tv
        mapped: TV
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_generate_ends_with_newline() {
        let markdown = generate(&icon_config(), &AssembleOptions::default()).unwrap();
        assert!(markdown.ends_with('\n'));
        assert!(!markdown.ends_with("\n\n"));
    }

    #[test]
    fn test_check_icons_missing_asset() {
        let dir = tempfile::tempdir().unwrap();
        let err = check_icons(&icon_config(), dir.path()).unwrap_err();
        match err {
            Error::MissingIcon(path) => {
                assert!(path.ends_with("assets/clients/icons/kodi.png"), "{path:?}");
            }
            other => panic!("expected MissingIcon, got {other:?}"),
        }
    }

    #[test]
    fn test_check_icons_present_asset() {
        let dir = tempfile::tempdir().unwrap();
        let icons = dir.path().join("assets/clients/icons");
        std::fs::create_dir_all(&icons).unwrap();
        std::fs::write(icons.join("kodi.png"), b"png").unwrap();
        assert!(check_icons(&icon_config(), dir.path()).is_ok());
    }

    #[test]
    fn test_generate_from_path_missing_file() {
        let err = generate_from_path("no-such-config.yaml").unwrap_err();
        assert!(matches!(err, Error::ReadFile { .. }));
    }
}
