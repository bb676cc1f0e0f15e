//! The knowledge stack: a hub node with skill areas on a ring, drawn as SVG.

use dioxus::prelude::*;
use folio_core::knowledge::{CENTRAL_RADIUS, DEFAULT_SIZE, NODE_RADIUS};

use crate::state::*;

#[component]
pub fn KnowledgeStackView() -> Element {
    let core = CORE.read();
    let Some(stack) = core.as_ref().and_then(|state| state.catalog().knowledge()) else {
        return rsx! {};
    };
    let layout = stack.layout(DEFAULT_SIZE);
    let size = layout.size;
    let central = layout.central.clone();

    rsx! {
        section {
            class: "section knowledge",
            h2 { class: "section-title", "The Knowledge Stack" }
            svg {
                class: "knowledge-canvas",
                view_box: "0 0 {size} {size}",
                for (i, edge) in layout.edges.iter().enumerate() {
                    line {
                        key: "{i}",
                        class: "knowledge-edge",
                        x1: "{edge.x1}",
                        y1: "{edge.y1}",
                        x2: "{edge.x2}",
                        y2: "{edge.y2}",
                    }
                }
                for node in layout.nodes.iter() {
                    g {
                        key: "{node.id}",
                        circle { cx: "{node.x}", cy: "{node.y}", r: "{NODE_RADIUS}", fill: node.accent.hex() }
                        text {
                            class: "knowledge-label",
                            x: "{node.x}",
                            y: "{node.y}",
                            "{node.label}"
                        }
                    }
                }
                circle { cx: "{central.x}", cy: "{central.y}", r: "{CENTRAL_RADIUS}", fill: central.accent.hex() }
                text {
                    class: "knowledge-label central",
                    x: "{central.x}",
                    y: "{central.y}",
                    "{central.label}"
                }
            }
        }
    }
}
