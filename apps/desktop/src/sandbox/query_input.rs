//! Query form. The submit button is disabled while an attempt is running.

use dioxus::prelude::*;
use folio_core::sandbox::Submission;
use folio_core::Sandbox;

use crate::state::*;

#[component]
pub fn QueryInput() -> Element {
    let search = SEARCH.read();
    let busy = search.is_searching();
    let query = search.query().to_string();

    rsx! {
        form {
            class: "sandbox-form",
            onsubmit: move |e: Event<FormData>| {
                e.prevent_default();
                submit_query();
            },
            input {
                class: "sandbox-input",
                r#type: "text",
                placeholder: "Ask about projects, technologies, or experiences...",
                value: "{query}",
                oninput: move |e: Event<FormData>| {
                    SEARCH.write().set_query(e.value());
                },
            }
            button {
                class: "sandbox-submit",
                r#type: "submit",
                disabled: busy,
                if busy { "Searching..." } else { "Search" }
            }
        }
    }
}

/// Start an attempt if the query allows it and drive it in the background.
fn submit_query() {
    let sandbox = match CORE.read().as_ref() {
        Some(state) => state.sandbox.clone(),
        None => return,
    };
    let Some(submission) = SEARCH.write().submit() else {
        return;
    };
    spawn(run_attempt(sandbox, submission));
}

/// Apply each event of the attempt to the search signal as the sandbox emits it.
async fn run_attempt(sandbox: Sandbox, submission: Submission) {
    let attempt = submission.attempt;
    // Failures are logged by the sandbox and land in the signal as `Failed`.
    let _ = sandbox
        .drive(&submission, |event| {
            SEARCH.write().apply(attempt, event);
        })
        .await;
}
