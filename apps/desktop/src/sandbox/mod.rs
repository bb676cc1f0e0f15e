//! Retrieval sandbox panel — query form, retrieval path, and results.

mod query_input;
mod results;
mod retrieval_path;

use dioxus::prelude::*;
use query_input::QueryInput;
use results::SandboxResults;
use retrieval_path::RetrievalPath;

#[component]
pub fn SandboxPanel() -> Element {
    rsx! {
        section {
            class: "section sandbox",
            h2 { class: "section-title", "RAG Sandbox" }
            p {
                class: "section-lead",
                "Query the portfolio in plain language. Watch the retrieval agent walk the \
                 knowledge graph before the matching projects appear."
            }
            QueryInput {}
            RetrievalPath {}
            SandboxResults {}
        }
    }
}
