//! Global application state using Dioxus signals.

use dioxus::prelude::*;
use folio_core::carousel::Carousel;
use folio_core::{Catalog, FolioConfig, Sandbox, SearchState};
use tracing::info;

/// Immutable snapshot of the loaded portfolio — created once at startup.
pub struct AppState {
    pub sandbox: Sandbox,
}

impl AppState {
    /// Load `folio.toml` and the catalog relative to the current working directory.
    pub fn from_cwd() -> Result<Self, String> {
        let cwd = std::env::current_dir()
            .map_err(|e| format!("could not determine current directory: {e}"))?;
        Self::from_path(&cwd)
    }

    pub fn from_path(root: &std::path::Path) -> Result<Self, String> {
        let config = FolioConfig::load(root).map_err(|e| e.to_string())?;
        let catalog = Catalog::load(&config).map_err(|e| e.to_string())?;
        let sandbox = Sandbox::from_config(catalog, &config);
        info!(
            projects = sandbox.catalog().projects().len(),
            insights = sandbox.catalog().insights().len(),
            retriever = sandbox.retriever_name(),
            "Portfolio loaded"
        );
        Ok(AppState { sandbox })
    }

    pub fn catalog(&self) -> &Catalog {
        self.sandbox.catalog()
    }
}

// ---------------------------------------------------------------------------
// Global signals
// ---------------------------------------------------------------------------

/// Loaded portfolio — set once on first render
pub static CORE: GlobalSignal<Option<AppState>> = Signal::global(|| None);

/// Sandbox search state for this session
pub static SEARCH: GlobalSignal<SearchState> = Signal::global(SearchState::new);

/// Position in the insights carousel
pub static INSIGHT: GlobalSignal<Carousel> = Signal::global(|| Carousel::new(0));
