//! Insights carousel — one post teaser at a time with wrap-around arrows.

use dioxus::prelude::*;

use crate::state::*;

#[component]
pub fn InsightsCarousel() -> Element {
    let core = CORE.read();
    let carousel = *INSIGHT.read();

    let insight = match (core.as_ref(), carousel.current()) {
        (Some(state), Some(i)) => state.catalog().insights()[i].clone(),
        _ => return rsx! {},
    };
    let initial = insight.initial().map(String::from).unwrap_or_default();

    rsx! {
        div {
            class: "carousel",
            if carousel.has_controls() {
                button {
                    class: "carousel-arrow prev",
                    aria_label: "Previous insight",
                    onclick: move |_| { INSIGHT.write().prev(); },
                    "\u{2039}"
                }
            }
            div {
                class: "insight-card",
                if let Some(avatar) = &insight.avatar {
                    img { class: "insight-avatar", src: "{avatar}", alt: "{insight.author}" }
                } else {
                    div { class: "insight-avatar insight-initial", "{initial}" }
                }
                div {
                    class: "insight-body",
                    div {
                        class: "insight-meta",
                        span { class: "insight-author", "{insight.author}" }
                        span { class: "insight-date", "{insight.date}" }
                    }
                    p { class: "insight-excerpt", "{insight.excerpt}" }
                    if let Some(url) = &insight.read_more_url {
                        a { class: "insight-more", href: "{url}", "Read More \u{2192}" }
                    }
                }
            }
            if carousel.has_controls() {
                button {
                    class: "carousel-arrow next",
                    aria_label: "Next insight",
                    onclick: move |_| { INSIGHT.write().next(); },
                    "\u{203A}"
                }
            }
        }
    }
}
