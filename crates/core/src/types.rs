//! Core types shared across Folio: catalog projects, insights, and the
//! retrieval steps revealed by the sandbox.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Catalog entries
// ---------------------------------------------------------------------------

/// A portfolio project. Loaded once from the catalog fixture and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub tags: Vec<String>,
    #[serde(rename = "githubUrl", default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(rename = "liveUrl", default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
}

/// Border accent used when rendering a project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Blue,
    Purple,
    Green,
    Orange,
}

const ACCENTS: [Accent; 4] = [Accent::Blue, Accent::Purple, Accent::Green, Accent::Orange];

impl Accent {
    pub fn as_str(self) -> &'static str {
        match self {
            Accent::Blue => "blue",
            Accent::Purple => "purple",
            Accent::Green => "green",
            Accent::Orange => "orange",
        }
    }

    /// Parse a fixture color name. Unknown names return `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        ACCENTS.into_iter().find(|a| a.as_str() == name)
    }

    pub fn hex(self) -> &'static str {
        match self {
            Accent::Blue => "#3b82f6",
            Accent::Purple => "#8b5cf6",
            Accent::Green => "#10b981",
            Accent::Orange => "#f59e0b",
        }
    }
}

impl Project {
    /// True if `needle_lower` (already lowercased) is contained in the title,
    /// the description, or any tag, compared case-insensitively.
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle_lower))
    }

    /// Card accent, cycled from the first UTF-16 code unit of the id.
    pub fn accent(&self) -> Accent {
        match self.id.encode_utf16().next() {
            Some(unit) => ACCENTS[unit as usize % ACCENTS.len()],
            None => Accent::Blue,
        }
    }
}

/// A blog post teaser shown in the insights carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub id: String,
    pub author: String,
    pub date: String,
    pub excerpt: String,
    #[serde(rename = "readMoreUrl", default, skip_serializing_if = "Option::is_none")]
    pub read_more_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Insight {
    /// First character of the author name, the avatar fallback.
    pub fn initial(&self) -> Option<char> {
        self.author.chars().next()
    }
}

// ---------------------------------------------------------------------------
// Knowledge stack
// ---------------------------------------------------------------------------

/// One skill area in the knowledge stack. `connections` lists other node ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeNode {
    pub id: String,
    pub label: String,
    pub color: String,
    #[serde(default)]
    pub connections: Vec<String>,
}

impl KnowledgeNode {
    /// Fill color, falling back to blue for names outside the palette.
    pub fn accent(&self) -> Accent {
        Accent::from_name(&self.color).unwrap_or(Accent::Blue)
    }
}

/// A hub node with the skill areas arranged around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeStack {
    pub central: KnowledgeNode,
    pub nodes: Vec<KnowledgeNode>,
}

// ---------------------------------------------------------------------------
// Retrieval path
// ---------------------------------------------------------------------------

/// One node visited on the retrieval path, with its relevance score in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetrievalStep {
    pub node: String,
    pub score: f64,
    pub reason: String,
}

impl RetrievalStep {
    pub fn new(node: impl Into<String>, score: f64, reason: impl Into<String>) -> Self {
        Self { node: node.into(), score: score.clamp(0.0, 1.0), reason: reason.into() }
    }

    /// Score as a rounded whole percent, e.g. `95` for `0.95`.
    pub fn percent(&self) -> u32 {
        (self.score * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, title: &str, tags: &[&str]) -> Project {
        Project {
            id: id.into(),
            title: title.into(),
            description: "A thing".into(),
            icon: "*".into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            github_url: None,
            live_url: None,
        }
    }

    #[test]
    fn matches_title_description_and_tags() {
        let p = project("kg", "Knowledge Graph Explorer", &["Neo4j", "Graph"]);
        assert!(p.matches("graph"));
        assert!(p.matches("neo4j"));
        assert!(p.matches("thing"));
        assert!(!p.matches("kafka"));
    }

    #[test]
    fn accent_cycles_on_first_code_unit() {
        // 'a' = 97 -> 97 % 4 = 1
        assert_eq!(project("a", "x", &[]).accent(), Accent::Purple);
        // 'd' = 100 -> 0
        assert_eq!(project("d", "x", &[]).accent(), Accent::Blue);
        assert_eq!(project("", "x", &[]).accent(), Accent::Blue);
    }

    #[test]
    fn accent_uses_utf16_not_utf8() {
        // 'é' is U+00E9 = 233 -> 1. Its first UTF-8 byte (0xC3 = 195) would give 3.
        assert_eq!(project("élan", "x", &[]).accent(), Accent::Purple);
        // U+1F680 is a surrogate pair; the high surrogate 0xD83D = 55357 -> 1.
        assert_eq!(project("\u{1F680}", "x", &[]).accent(), Accent::Purple);
    }

    #[test]
    fn knowledge_node_color_falls_back_to_blue() {
        let json = r#"{"id":"rag","label":"RAG","color":"green"}"#;
        let node: KnowledgeNode = serde_json::from_str(json).unwrap();
        assert!(node.connections.is_empty());
        assert_eq!(node.accent(), Accent::Green);
        assert_eq!(node.accent().hex(), "#10b981");

        let odd = KnowledgeNode { color: "teal".into(), ..node };
        assert_eq!(odd.accent(), Accent::Blue);
    }

    #[test]
    fn project_json_uses_camel_case_urls() {
        let json = r#"{"id":"p","title":"T","description":"D","icon":"i","tags":[],"githubUrl":"https://g"}"#;
        let p: Project = serde_json::from_str(json).unwrap();
        assert_eq!(p.github_url.as_deref(), Some("https://g"));
        assert!(p.live_url.is_none());

        let out = serde_json::to_string(&p).unwrap();
        assert!(out.contains("\"githubUrl\""));
        assert!(!out.contains("liveUrl"));
    }

    #[test]
    fn step_percent_rounds() {
        assert_eq!(RetrievalStep::new("n", 0.95, "r").percent(), 95);
        assert_eq!(RetrievalStep::new("n", 0.875, "r").percent(), 88);
        assert_eq!(RetrievalStep::new("n", 1.7, "r").percent(), 100);
    }

    #[test]
    fn insight_initial_falls_back_to_author() {
        let i = Insight {
            id: "i".into(),
            author: "Alex".into(),
            date: "2024-01-01".into(),
            excerpt: "e".into(),
            read_more_url: None,
            avatar: None,
        };
        assert_eq!(i.initial(), Some('A'));
    }
}
