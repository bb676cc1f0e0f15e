//! Project gallery, knowledge stack, and insights carousel.

mod insights;
mod knowledge;
mod project_card;

pub use insights::InsightsCarousel;
pub use knowledge::KnowledgeStackView;
use project_card::ProjectCard;

use dioxus::prelude::*;

use crate::state::*;

#[component]
pub fn ProjectGallery() -> Element {
    let core = CORE.read();
    let Some(state) = core.as_ref() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "project-grid",
            for project in state.catalog().projects().iter() {
                ProjectCard { key: "{project.id}", project: project.clone() }
            }
        }
    }
}
