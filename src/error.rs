// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Transport failure or non-2xx status.
    #[error("request to {url} failed: {cause}")]
    Network { url: String, cause: String },

    /// Expected markup element absent.
    #[error("{what} not found")]
    NotFound { what: &'static str },

    #[error("cannot write {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Existing gamelist could not be read back; it is left as-is.
    #[error("cannot parse {}: {cause}", path.display())]
    Gamelist { path: PathBuf, cause: String },

    /// Caller-supplied CSS selector that does not parse.
    #[error("invalid selector {css:?}: {cause}")]
    Selector { css: String, cause: String },

    #[error("Download already in progress")]
    AlreadyRunning,

    #[error("cannot start download worker: {0}")]
    Spawn(#[source] io::Error),
}

impl ScrapeError {
    pub fn network(url: &str, cause: impl ToString) -> Self {
        Self::Network { url: s!(url), cause: cause.to_string() }
    }

    pub fn fs(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Filesystem { path: path.into(), source }
    }
}
