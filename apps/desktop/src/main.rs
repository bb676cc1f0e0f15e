//! Folio Desktop — the portfolio site as a Dioxus app.

use std::sync::Mutex;

use dioxus::prelude::*;
use tracing::error;

mod app;
mod gallery;
mod sandbox;
mod state;

use app::App;
use state::AppState;

/// Pre-runtime storage — loaded before Dioxus launches, consumed on first render.
pub static INITIAL_STATE: Mutex<Option<AppState>> = Mutex::new(None);

fn main() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("folio=info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config + catalog at startup (blocking) — store in Mutex, NOT in the signal
    let initial_state = match AppState::from_cwd() {
        Ok(s) => s,
        Err(e) => {
            error!(error = %e, "Could not load portfolio data");
            std::process::exit(1);
        }
    };
    match INITIAL_STATE.lock() {
        Ok(mut slot) => *slot = Some(initial_state),
        Err(_) => {
            error!("Startup state lock poisoned");
            std::process::exit(1);
        }
    }

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_background_color((10, 14, 26, 255))
                    .with_window(
                        WindowBuilder::new()
                            .with_title("Folio")
                            .with_inner_size(LogicalSize::new(1280.0, 900.0))
                            .with_min_inner_size(LogicalSize::new(720.0, 500.0))
                            .with_resizable(true)
                            .with_decorations(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
