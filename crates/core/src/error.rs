//! Error types for catalog loading, configuration, and retrieval.

use std::path::PathBuf;

/// Failure to load the project/insight catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure to load `folio.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse folio.toml: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for '{key}': {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// A retrieval attempt that could not produce a path.
///
/// Aborts the attempt: the sandbox stops searching and shows `Failed`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RetrievalError {
    #[error("catalog has no projects to retrieve from")]
    EmptyCatalog,

    #[error("retrieval failed: {0}")]
    Failed(String),
}
