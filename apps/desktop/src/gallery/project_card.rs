//! A single project card with code / demo links.

use dioxus::prelude::*;
use folio_core::types::Project;

#[component]
pub fn ProjectCard(project: Project) -> Element {
    let accent = project.accent().as_str();

    rsx! {
        article {
            class: "project-card accent-{accent}",
            div {
                class: "project-header",
                span { class: "project-icon", "{project.icon}" }
                h3 { class: "project-title", "{project.title}" }
            }
            p { class: "project-desc", "{project.description}" }
            div {
                class: "tag-list",
                for tag in project.tags.iter() {
                    span { key: "{tag}", class: "tag", "{tag}" }
                }
            }
            div {
                class: "project-links",
                if let Some(url) = &project.github_url {
                    a { class: "project-link", href: "{url}", target: "_blank", rel: "noopener noreferrer", "Github Code" }
                }
                if let Some(url) = &project.live_url {
                    a { class: "project-link", href: "{url}", target: "_blank", rel: "noopener noreferrer", "Live Demo" }
                }
            }
        }
    }
}
