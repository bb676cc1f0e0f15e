//! Result cards, the no-results message, or the failure message.

use dioxus::prelude::*;
use folio_core::sandbox::{result_heading, NO_RESULTS_MESSAGE};
use folio_core::SandboxView;

use crate::state::*;

#[component]
pub fn SandboxResults() -> Element {
    let search = SEARCH.read();

    match search.view() {
        SandboxView::Completed { results, .. } => rsx! {
            div {
                class: "sandbox-results",
                h3 { class: "results-heading", {result_heading(results.len())} }
                div {
                    class: "results-grid",
                    for project in results.iter() {
                        div {
                            key: "{project.id}",
                            class: "result-card",
                            h4 { class: "result-title", "{project.icon} {project.title}" }
                            p { class: "result-desc", "{project.description}" }
                            div {
                                class: "tag-list",
                                for tag in project.tags.iter() {
                                    span { key: "{tag}", class: "tag", "{tag}" }
                                }
                            }
                        }
                    }
                }
            }
        },
        SandboxView::NoResults { .. } => rsx! {
            div { class: "sandbox-empty", {NO_RESULTS_MESSAGE} }
        },
        SandboxView::Failed { message } => rsx! {
            div { class: "sandbox-error", "Retrieval failed: {message}" }
        },
        SandboxView::Idle | SandboxView::Searching { .. } => rsx! {},
    }
}
