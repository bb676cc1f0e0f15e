//! The read-only project and insight catalog.
//!
//! Loaded once at startup, either from the fixtures compiled into this crate or
//! from a data directory, then shared by reference. Nothing mutates it.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::config::FolioConfig;
use crate::error::CatalogError;
use crate::types::{Insight, KnowledgeStack, Project};

const BUILTIN_PROJECTS: &str = include_str!("../data/projects.json");
const BUILTIN_INSIGHTS: &str = include_str!("../data/insights.json");
const BUILTIN_KNOWLEDGE: &str = include_str!("../data/knowledge_stack.json");

pub const PROJECTS_FILE: &str = "projects.json";
pub const INSIGHTS_FILE: &str = "insights.json";
pub const KNOWLEDGE_FILE: &str = "knowledge_stack.json";

/// Immutable snapshot of the portfolio data. Cloning shares the underlying slices.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Arc<[Project]>,
    insights: Arc<[Insight]>,
    knowledge: Option<Arc<KnowledgeStack>>,
}

fn parse<T: serde::de::DeserializeOwned>(path: &Path, text: &str) -> Result<T, CatalogError> {
    serde_json::from_str(text)
        .map_err(|source| CatalogError::Parse { path: path.to_path_buf(), source })
}

fn read(path: &Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path).map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })
}

fn read_optional<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>, CatalogError> {
    if !path.exists() {
        return Ok(None);
    }
    parse(path, &read(path)?).map(Some)
}

impl Catalog {
    pub fn from_parts(projects: Vec<Project>, insights: Vec<Insight>) -> Self {
        let mut seen = HashSet::new();
        for p in &projects {
            if !seen.insert(p.id.as_str()) {
                warn!(id = p.id.as_str(), "Duplicate project id in catalog");
            }
        }
        Self { projects: projects.into(), insights: insights.into(), knowledge: None }
    }

    /// Attach the knowledge stack shown below the gallery.
    pub fn with_knowledge(mut self, stack: KnowledgeStack) -> Self {
        self.knowledge = Some(Arc::new(stack));
        self
    }

    /// The fixtures embedded at build time.
    pub fn builtin() -> Result<Self, CatalogError> {
        let projects = parse(Path::new(PROJECTS_FILE), BUILTIN_PROJECTS)?;
        let insights = parse(Path::new(INSIGHTS_FILE), BUILTIN_INSIGHTS)?;
        let knowledge = parse(Path::new(KNOWLEDGE_FILE), BUILTIN_KNOWLEDGE)?;
        Ok(Self::from_parts(projects, insights).with_knowledge(knowledge))
    }

    /// Load `projects.json` (required) plus `insights.json` and
    /// `knowledge_stack.json` (both optional) from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, CatalogError> {
        let projects_path = dir.join(PROJECTS_FILE);
        let projects = parse(&projects_path, &read(&projects_path)?)?;
        let insights = read_optional(&dir.join(INSIGHTS_FILE))?.unwrap_or_default();

        let mut catalog = Self::from_parts(projects, insights);
        if let Some(stack) = read_optional(&dir.join(KNOWLEDGE_FILE))? {
            catalog = catalog.with_knowledge(stack);
        }
        info!(
            dir = %dir.display(),
            projects = catalog.projects.len(),
            insights = catalog.insights.len(),
            knowledge = catalog.knowledge.is_some(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Load from the configured data dir, or fall back to the built-in fixtures.
    pub fn load(config: &FolioConfig) -> Result<Self, CatalogError> {
        match &config.data_dir {
            Some(dir) => Self::from_dir(dir),
            None => Self::builtin(),
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn insights(&self) -> &[Insight] {
        &self.insights
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn knowledge(&self) -> Option<&KnowledgeStack> {
        self.knowledge.as_deref()
    }
}
