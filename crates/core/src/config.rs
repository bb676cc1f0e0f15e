//! `folio.toml` loading.
//!
//! The file is optional. Unknown keys are logged with a typo suggestion and
//! otherwise ignored; known keys with bad values are rejected.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::ConfigError;

/// Pacing between revealed steps when nothing is configured.
pub const DEFAULT_PACING_MS: u64 = 500;

/// Number of steps the scored retriever returns when nothing is configured.
pub const DEFAULT_TOP_K: usize = 3;

/// Config file name looked up in the project directory.
pub const CONFIG_FILE: &str = "folio.toml";

/// Known keys in `folio.toml` for config validation.
const KNOWN_CONFIG_KEYS: &[&str] = &["data_dir", "pacing_ms", "retriever", "top_k"];

/// Which retriever drives the sandbox's retrieval path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetrieverKind {
    /// Fixed three-step path, independent of the query.
    #[default]
    Simulated,
    /// Fuzzy-scored path over the catalog.
    Scored,
}

impl RetrieverKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RetrieverKind::Simulated => "simulated",
            RetrieverKind::Scored => "scored",
        }
    }
}

impl FromStr for RetrieverKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simulated" => Ok(RetrieverKind::Simulated),
            "scored" => Ok(RetrieverKind::Scored),
            other => Err(format!("unknown retriever '{other}' (expected 'simulated' or 'scored')")),
        }
    }
}

/// Runtime configuration for the sandbox and catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct FolioConfig {
    /// Directory holding `projects.json` / `insights.json`. `None` = built-in fixtures.
    pub data_dir: Option<PathBuf>,
    pub pacing: Duration,
    pub retriever: RetrieverKind,
    pub top_k: usize,
    /// The file this config was read from, if any.
    pub source: Option<PathBuf>,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            pacing: Duration::from_millis(DEFAULT_PACING_MS),
            retriever: RetrieverKind::default(),
            top_k: DEFAULT_TOP_K,
            source: None,
        }
    }
}

/// Simple Levenshtein edit distance for typo suggestions.
fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

fn warn_unknown_key(key: &str) {
    let suggestion = KNOWN_CONFIG_KEYS.iter().min_by_key(|k| edit_distance(key, k));
    match suggestion {
        Some(s) if edit_distance(key, s) <= 3 => {
            warn!(key, suggestion = *s, "Unknown key in folio.toml — did you mean '{s}'?");
        }
        _ => {
            warn!(key, "Unknown key in folio.toml (known keys: {})", KNOWN_CONFIG_KEYS.join(", "));
        }
    }
}

impl FolioConfig {
    /// Load `folio.toml` from `dir`. A missing file yields defaults.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            debug!(dir = %dir.display(), "No folio.toml, using defaults");
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "Loading folio.toml");
        let content = std::fs::read_to_string(&path)
            .map_err(|source| ConfigError::Io { path: path.clone(), source })?;
        let mut config = Self::from_toml_str(&content)?;

        // Relative data dirs are relative to the config file, not the cwd.
        if let Some(data_dir) = config.data_dir.take() {
            config.data_dir =
                Some(if data_dir.is_relative() { dir.join(data_dir) } else { data_dir });
        }
        config.source = Some(path);
        Ok(config)
    }

    /// Parse config from TOML text, merging over defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let table = content.parse::<toml::Table>()?;
        let mut config = Self::default();

        for key in table.keys() {
            if !KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
                warn_unknown_key(key);
            }
        }

        if let Some(value) = table.get("data_dir") {
            let dir = value.as_str().ok_or(ConfigError::Invalid {
                key: "data_dir",
                reason: "expected a string path".into(),
            })?;
            config.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(value) = table.get("pacing_ms") {
            let ms = value
                .as_integer()
                .filter(|ms| *ms >= 0)
                .ok_or(ConfigError::Invalid {
                    key: "pacing_ms",
                    reason: format!("expected a non-negative integer, got {value}"),
                })?;
            config.pacing = Duration::from_millis(ms as u64);
        }

        if let Some(value) = table.get("retriever") {
            let name = value.as_str().ok_or(ConfigError::Invalid {
                key: "retriever",
                reason: "expected a string".into(),
            })?;
            config.retriever = name
                .parse()
                .map_err(|reason| ConfigError::Invalid { key: "retriever", reason })?;
        }

        if let Some(value) = table.get("top_k") {
            let k = value.as_integer().filter(|k| *k >= 1).ok_or(ConfigError::Invalid {
                key: "top_k",
                reason: format!("expected an integer >= 1, got {value}"),
            })?;
            config.top_k = k as usize;
        }

        Ok(config)
    }
}
