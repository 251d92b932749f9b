//! Error types for the mkmd library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mkmd operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading configuration or building the
/// clients document.
///
/// There is no recoverable category: the generator is a single-shot batch
/// transform, and every variant here aborts the run before any output is
/// written.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// I/O error tied to a specific file path.
    #[error("failed to read {path}: {source}")]
    ReadFile {
        /// The offending path.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The YAML document is structurally invalid.
    #[error("configuration error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A download entry carries a `type` discriminant no renderer is
    /// registered for.
    #[error("unknown download type: {0}")]
    UnknownDownloadKind(String),

    /// A download entry is missing a field its kind requires.
    #[error("{field} is required for {kind} download")]
    MissingDownloadField {
        /// The missing field name.
        field: &'static str,
        /// The download kind.
        kind: &'static str,
    },

    /// A client references a type key absent from the `types` registry.
    #[error("unknown client type: {0}")]
    UnknownClientType(String),

    /// A referenced local icon asset does not exist.
    #[error("missing icon asset: {0}")]
    MissingIcon(PathBuf),
}
