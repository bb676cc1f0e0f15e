//! Root application component — single-page portfolio layout.

use dioxus::prelude::*;

use crate::gallery::{InsightsCarousel, KnowledgeStackView, ProjectGallery};
use crate::sandbox::SandboxPanel;
use crate::state::*;
use crate::INITIAL_STATE;

static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    use_hook(|| {
        let taken = INITIAL_STATE.lock().ok().and_then(|mut slot| slot.take());
        if let Some(state) = taken {
            *INSIGHT.write() = folio_core::carousel::Carousel::new(state.catalog().insights().len());
            *CORE.write() = Some(state);
        }
    });

    rsx! {
        document::Stylesheet { href: APP_CSS }

        main {
            class: "page",

            header {
                class: "hero",
                h1 { class: "hero-title", "Building systems that retrieve, reason, and ship" }
                p { class: "hero-subtitle", "AI/ML engineering, knowledge graphs, and backend services." }
                a { class: "hero-cta", href: "#projects", "View projects" }
            }

            SandboxPanel {}

            section {
                id: "projects",
                class: "section",
                h2 { class: "section-title", "Featured Projects" }
                ProjectGallery {}
            }

            KnowledgeStackView {}

            section {
                class: "section section-alt",
                h2 { class: "section-title", "Latest Insights" }
                InsightsCarousel {}
            }

            footer {
                class: "contact",
                h2 { class: "section-title", "Get in touch" }
                a { class: "contact-link", href: "mailto:hello@example.dev", "hello@example.dev" }
            }
        }
    }
}
