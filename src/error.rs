//! Error taxonomy for agmd operations.
//!
//! Every variant renders as a single line; the CLI prints it verbatim and
//! exits non-zero.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgmdError {
    /// The manifest does not exist yet.
    #[error("Missing config file: {}. Run `agmd init` first.", .path.display())]
    MissingConfig { path: PathBuf },

    /// The manifest exists but does not follow the `mappings:` grammar.
    #[error("Invalid config in {}: {detail}", .path.display())]
    InvalidConfig { path: PathBuf, detail: String },

    /// A local path resolved outside the project root.
    #[error("Path '{raw}' must be within the project root '{}'.", .root.display())]
    OutOfRoot { raw: String, root: PathBuf },

    /// A GitHub path with fewer than two segments.
    #[error("Invalid GitHub path '{slug}'. Expected at least <owner>/<repo>.")]
    InvalidSlug { slug: String },

    /// Network, timeout or HTTP status failure while fetching a remote AGENTS.md.
    #[error("Failed to fetch AGENTS.md for '{slug}' at {url}. Error: {source}")]
    Fetch {
        slug: String,
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A fetched AGENTS.md body that is not valid UTF-8.
    #[error("AGENTS.md for '{slug}' is not valid UTF-8. Error: {source}")]
    InvalidUtf8 {
        slug: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Reading or writing a project file failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, AgmdError>;

impl AgmdError {
    pub fn invalid_config(path: impl Into<PathBuf>, detail: impl Into<String>) -> Self {
        Self::InvalidConfig { path: path.into(), detail: detail.into() }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
