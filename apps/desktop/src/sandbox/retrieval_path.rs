//! Retrieval path — the steps revealed so far, numbered, with scores.

use dioxus::prelude::*;

use crate::state::*;

#[component]
pub fn RetrievalPath() -> Element {
    let search = SEARCH.read();
    let view = search.view();
    let steps = view.steps();

    if steps.is_empty() {
        return rsx! {};
    }

    let last = steps.len() - 1;

    rsx! {
        div {
            class: "retrieval-path",
            h3 { class: "retrieval-title", "Retrieval Path" }
            div {
                class: "retrieval-steps",
                for (i, step) in steps.iter().enumerate() {
                    div {
                        key: "{i}",
                        class: "retrieval-step",
                        div { class: "step-index", "{i + 1}" }
                        div {
                            class: "step-body",
                            div {
                                class: "step-header",
                                span { class: "step-node", "{step.node}" }
                                span { class: "step-score", "(Score: {step.percent()}%)" }
                            }
                            p { class: "step-reason", "{step.reason}" }
                        }
                        if i < last {
                            div { class: "step-arrow", "\u{2193}" }
                        }
                    }
                }
            }
        }
    }
}
