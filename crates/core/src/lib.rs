//! Folio — the logic behind the portfolio site.
//!
//! Almost all of the site is markup and fixture data. What is left lives here:
//! the project catalog, the keyword filter, and the retrieval sandbox that
//! reveals a paced retrieval path before showing matching projects.
//!
//! # Modules
//!
//! - [`types`] — Projects, insights, knowledge nodes, retrieval steps
//! - [`catalog`] — Read-only catalog loaded from JSON fixtures
//! - [`filter`] — Case-insensitive substring filter over the catalog
//! - [`retrieval`] — The `Retriever` seam: simulated and scored retrievers
//! - [`sequencer`] — Paced, step-at-a-time reveal of a retrieval plan
//! - [`sandbox`] — Search state, display view, and the attempt driver
//! - [`carousel`] — Wrap-around index for the insights carousel
//! - [`knowledge`] — Radial layout of the knowledge stack
//! - [`config`] — `folio.toml` loading
//! - [`error`] — Error types

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod knowledge;
pub mod retrieval;
pub mod sandbox;
pub mod sequencer;
pub mod types;

pub use catalog::Catalog;
pub use config::FolioConfig;
pub use sandbox::{Sandbox, SandboxView, SearchState};
