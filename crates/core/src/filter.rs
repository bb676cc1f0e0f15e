//! Keyword result filter for the sandbox.
//!
//! Plain case-insensitive substring containment over title, description, and
//! tags. Not tokenized, not fuzzy, not ranked: output keeps catalog order.

use crate::types::Project;

/// Return the projects matching `query`, in catalog order.
///
/// `query` is used exactly as submitted apart from case folding, so leading or
/// trailing whitespace is part of the needle.
pub fn filter_projects(projects: &[Project], query: &str) -> Vec<Project> {
    let needle = query.to_lowercase();
    projects.iter().filter(|p| p.matches(&needle)).cloned().collect()
}
