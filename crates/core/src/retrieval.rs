//! Retrievers produce the retrieval path the sandbox reveals step by step.
//!
//! [`SimulatedRetriever`] is the canned three-step path shown on the site; it
//! ignores the query. [`ScoredRetriever`] ranks catalog projects with a small
//! fzf-style scorer and turns the top hits into steps.

use std::sync::Arc;

use rayon::prelude::*;

use crate::catalog::Catalog;
use crate::config::{FolioConfig, RetrieverKind};
use crate::error::RetrievalError;
use crate::types::{Project, RetrievalStep};

/// Plans the ordered list of steps for one search attempt.
pub trait Retriever: Send + Sync {
    fn name(&self) -> &'static str;

    fn plan(&self, query: &str) -> Result<Vec<RetrievalStep>, RetrievalError>;
}

/// Build the retriever selected in `config`.
pub fn from_config(catalog: &Catalog, config: &FolioConfig) -> Arc<dyn Retriever> {
    match config.retriever {
        RetrieverKind::Simulated => Arc::new(SimulatedRetriever),
        RetrieverKind::Scored => Arc::new(ScoredRetriever::new(catalog.clone(), config.top_k)),
    }
}

// ---------------------------------------------------------------------------
// Simulated path
// ---------------------------------------------------------------------------

const SIMULATED_PATH: [(&str, f64, &str); 3] = [
    ("Knowledge Graph", 0.95, "Query matches core domain: AI/ML systems"),
    ("Projects Index", 0.87, "Found relevant projects in vector space"),
    ("Technical Stack", 0.82, "Matched technologies and tools"),
];

/// Always the same three steps, whatever the query.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedRetriever;

impl Retriever for SimulatedRetriever {
    fn name(&self) -> &'static str {
        "simulated"
    }

    fn plan(&self, _query: &str) -> Result<Vec<RetrievalStep>, RetrievalError> {
        Ok(SIMULATED_PATH
            .iter()
            .map(|&(node, score, reason)| RetrievalStep::new(node, score, reason))
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Scored path
// ---------------------------------------------------------------------------

const SCORE_MATCH: i32 = 16;
const SCORE_GAP_START: i32 = -3;
const SCORE_GAP_EXTENSION: i32 = -1;
const BONUS_BOUNDARY: i32 = 8;
const BONUS_CONSECUTIVE: i32 = 4;
const BONUS_FIRST_CHAR_MULTIPLIER: i32 = 2;

const WEIGHT_TITLE: f64 = 2.0;
const WEIGHT_TAG: f64 = 1.5;
const WEIGHT_DESC: f64 = 0.5;

#[inline]
fn at_boundary(text: &[u8], pos: usize) -> bool {
    pos == 0 || !text[pos - 1].is_ascii_alphanumeric()
}

/// Score `pattern` against `text`, both already lowercased.
///
/// Exact substrings get the consecutive bonus on every character; otherwise
/// falls back to an in-order subsequence match with gap penalties.
fn score_text(text: &str, pattern: &str) -> Option<f64> {
    let tb = text.as_bytes();
    let pb = pattern.as_bytes();
    let m = pb.len();
    if m == 0 || m > tb.len() {
        return None;
    }

    if let Some(pos) = text.find(pattern) {
        let mut score = SCORE_MATCH * m as i32 + BONUS_CONSECUTIVE * (m as i32 - 1);
        if at_boundary(tb, pos) {
            score += BONUS_BOUNDARY * BONUS_FIRST_CHAR_MULTIPLIER;
        }
        return Some(score as f64);
    }

    let mut score = 0i32;
    let mut pi = 0;
    let mut last_match: Option<usize> = None;
    for (i, &b) in tb.iter().enumerate() {
        if pi == m {
            break;
        }
        if b != pb[pi] {
            continue;
        }
        score += SCORE_MATCH;
        if at_boundary(tb, i) {
            score += BONUS_BOUNDARY;
        }
        match last_match {
            Some(prev) if prev + 1 == i => score += BONUS_CONSECUTIVE,
            Some(prev) => score += SCORE_GAP_START + SCORE_GAP_EXTENSION * (i - prev - 2) as i32,
            None => {}
        }
        last_match = Some(i);
        pi += 1;
    }

    if pi < m || score <= 0 {
        return None;
    }
    Some(score as f64)
}

struct Hit {
    score: f64,
    fields: Vec<String>,
}

fn score_project(project: &Project, tokens: &[String]) -> Option<Hit> {
    let title = project.title.to_lowercase();
    let desc = project.description.to_lowercase();
    let tags: Vec<String> = project.tags.iter().map(|t| t.to_lowercase()).collect();

    let mut total = 0.0;
    let mut fields: Vec<String> = Vec::new();
    let mut note = |field: String| {
        if !fields.contains(&field) {
            fields.push(field);
        }
    };

    for token in tokens {
        if let Some(s) = score_text(&title, token) {
            total += s * WEIGHT_TITLE;
            note("title".to_string());
            continue;
        }

        let best_tag = tags
            .iter()
            .enumerate()
            .filter_map(|(i, tag)| score_text(tag, token).map(|s| (i, s)))
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        if let Some((i, s)) = best_tag {
            total += s * WEIGHT_TAG;
            note(format!("tag '{}'", project.tags[i]));
            continue;
        }

        if let Some(s) = score_text(&desc, token) {
            total += s * WEIGHT_DESC;
            note("description".to_string());
            continue;
        }

        return None;
    }

    Some(Hit { score: total, fields })
}

/// Ranks catalog projects against the query and returns the top `top_k` as steps.
///
/// Scores are normalized so the best hit is `1.0`.
#[derive(Debug, Clone)]
pub struct ScoredRetriever {
    catalog: Catalog,
    top_k: usize,
}

impl ScoredRetriever {
    pub fn new(catalog: Catalog, top_k: usize) -> Self {
        Self { catalog, top_k: top_k.max(1) }
    }
}

impl Retriever for ScoredRetriever {
    fn name(&self) -> &'static str {
        "scored"
    }

    fn plan(&self, query: &str) -> Result<Vec<RetrievalStep>, RetrievalError> {
        let projects = self.catalog.projects();
        if projects.is_empty() {
            return Err(RetrievalError::EmptyCatalog);
        }

        let tokens: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        let mut hits: Vec<(&Project, Hit)> = projects
            .par_iter()
            .filter_map(|p| score_project(p, &tokens).map(|hit| (p, hit)))
            .collect();
        // Stable: ties keep catalog order.
        hits.sort_by(|a, b| b.1.score.partial_cmp(&a.1.score).unwrap_or(std::cmp::Ordering::Equal));
        hits.truncate(self.top_k);

        let best = hits.first().map(|(_, h)| h.score).unwrap_or(1.0);
        Ok(hits
            .into_iter()
            .map(|(p, hit)| {
                RetrievalStep::new(
                    p.title.clone(),
                    hit.score / best,
                    format!("Matched {}", hit.fields.join(", ")),
                )
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, title: &str, tags: &[&str]) -> Project {
        Project {
            id: id.into(),
            title: title.into(),
            description: "Tooling for teams".into(),
            icon: "*".into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            github_url: None,
            live_url: None,
        }
    }

    #[test]
    fn simulated_path_is_fixed() {
        let r = SimulatedRetriever;
        let a = r.plan("graph").unwrap();
        let b = r.plan("something else entirely").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
        assert_eq!(a[0].node, "Knowledge Graph");
        assert_eq!(a[0].score, 0.95);
        assert_eq!(a[1].node, "Projects Index");
        assert_eq!(a[1].reason, "Found relevant projects in vector space");
        assert_eq!(a[2].node, "Technical Stack");
        assert_eq!(a[2].score, 0.82);
    }

    #[test]
    fn substring_beats_subsequence() {
        let exact = score_text("graph explorer", "graph").unwrap();
        let scattered = score_text("great paths", "grph").unwrap();
        assert!(exact > scattered, "{exact} should beat {scattered}");
    }

    #[test]
    fn boundary_bonus_applies() {
        let boundary = score_text("knowledge graph", "graph").unwrap();
        let inner = score_text("paragraphs", "graph").unwrap();
        assert!(boundary > inner);
    }

    #[test]
    fn non_matching_returns_none() {
        assert!(score_text("hello", "xyz").is_none());
        assert!(score_text("hi", "longer").is_none());
        assert!(score_text("hello", "").is_none());
    }

    #[test]
    fn scored_ranks_title_hits_first_and_normalizes() {
        let catalog = Catalog::from_parts(
            vec![
                project("a", "Layout Engine", &["Graph"]),
                project("b", "Graph Explorer", &["Neo4j"]),
                project("c", "Vision", &["PyTorch"]),
            ],
            vec![],
        );
        let steps = ScoredRetriever::new(catalog, 3).plan("graph").unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].node, "Graph Explorer");
        assert_eq!(steps[0].score, 1.0);
        assert_eq!(steps[0].reason, "Matched title");
        assert_eq!(steps[1].node, "Layout Engine");
        assert!(steps[1].score < 1.0);
        assert_eq!(steps[1].reason, "Matched tag 'Graph'");
    }

    #[test]
    fn scored_respects_top_k() {
        let catalog = Catalog::from_parts(
            (0..5).map(|i| project(&format!("p{i}"), &format!("Tool {i}"), &[])).collect(),
            vec![],
        );
        let steps = ScoredRetriever::new(catalog, 2).plan("tool").unwrap();
        assert_eq!(steps.len(), 2);
        // ties keep catalog order
        assert_eq!(steps[0].node, "Tool 0");
        assert_eq!(steps[1].node, "Tool 1");
    }

    #[test]
    fn scored_fails_on_empty_catalog() {
        let r = ScoredRetriever::new(Catalog::from_parts(vec![], vec![]), 3);
        assert_eq!(r.plan("graph"), Err(RetrievalError::EmptyCatalog));
    }
}
