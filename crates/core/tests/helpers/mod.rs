//! Shared fixtures for sandbox integration tests.

use folio_core::error::RetrievalError;
use folio_core::retrieval::Retriever;
use folio_core::types::{Project, RetrievalStep};
use folio_core::Catalog;

pub fn project(id: &str, title: &str, description: &str, tags: &[&str]) -> Project {
    Project {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        icon: "*".into(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        github_url: None,
        live_url: None,
    }
}

/// A small catalog with one graph project among unrelated ones.
pub fn fixture_catalog() -> Catalog {
    Catalog::from_parts(
        vec![
            project("stream", "Streaming Analytics", "Windowed aggregation over Kafka", &["Kafka"]),
            project(
                "kg",
                "Knowledge Graph Explorer",
                "Browse extracted entities",
                &["Neo4j", "Graph"],
            ),
            project("vision", "Vision Inspector", "Flags defects in images", &["PyTorch"]),
        ],
        vec![],
    )
}

/// Retriever that always fails, standing in for a real backend going away.
pub struct FailingRetriever;

impl Retriever for FailingRetriever {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn plan(&self, _query: &str) -> Result<Vec<RetrievalStep>, RetrievalError> {
        Err(RetrievalError::Failed("index unavailable".into()))
    }
}
