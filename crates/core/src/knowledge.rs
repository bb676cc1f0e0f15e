//! Radial layout for the knowledge stack section.
//!
//! The central node sits in the middle of a `size` by `size` square. The other
//! nodes go on a ring of radius `0.3 * size`, starting at twelve o'clock and
//! running clockwise in list order.

use std::f64::consts::{FRAC_PI_2, TAU};

use serde::Serialize;

use crate::types::{Accent, KnowledgeNode, KnowledgeStack};

const RING_RATIO: f64 = 0.3;

/// Radius of a ring node's circle.
pub const NODE_RADIUS: f64 = 40.0;
/// Radius of the central node's circle.
pub const CENTRAL_RADIUS: f64 = NODE_RADIUS * 1.2;

/// Default canvas edge, matching the section's maximum width.
pub const DEFAULT_SIZE: f64 = 600.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedNode {
    pub id: String,
    pub label: String,
    pub accent: Accent,
    pub x: f64,
    pub y: f64,
}

impl PlacedNode {
    fn at(node: &KnowledgeNode, x: f64, y: f64) -> Self {
        Self { id: node.id.clone(), label: node.label.clone(), accent: node.accent(), x, y }
    }
}

/// A straight connector between two node centers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Segment {
    fn between(a: &PlacedNode, b: &PlacedNode) -> Self {
        Self { x1: a.x, y1: a.y, x2: b.x, y2: b.y }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KnowledgeLayout {
    pub size: f64,
    pub central: PlacedNode,
    pub nodes: Vec<PlacedNode>,
    /// Spokes from the center first for each node, then its listed connections.
    pub edges: Vec<Segment>,
}

impl KnowledgeStack {
    /// Place every node for a square canvas of edge `size`.
    ///
    /// Connections naming the central node or an id not in `nodes` draw nothing.
    /// A mutual connection is listed once per direction.
    pub fn layout(&self, size: f64) -> KnowledgeLayout {
        let center = size / 2.0;
        let radius = size * RING_RATIO;
        let count = self.nodes.len() as f64;

        let central = PlacedNode::at(&self.central, center, center);
        let nodes: Vec<PlacedNode> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, node)| {
                let angle = TAU * i as f64 / count - FRAC_PI_2;
                PlacedNode::at(node, center + radius * angle.cos(), center + radius * angle.sin())
            })
            .collect();

        let mut edges = Vec::new();
        for (node, placed) in self.nodes.iter().zip(&nodes) {
            edges.push(Segment::between(&central, placed));
            for id in &node.connections {
                if *id == self.central.id {
                    continue;
                }
                if let Some(other) = nodes.iter().find(|p| p.id == *id) {
                    edges.push(Segment::between(placed, other));
                }
            }
        }

        KnowledgeLayout { size, central, nodes, edges }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, connections: &[&str]) -> KnowledgeNode {
        KnowledgeNode {
            id: id.into(),
            label: id.to_uppercase(),
            color: "purple".into(),
            connections: connections.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn stack(nodes: Vec<KnowledgeNode>) -> KnowledgeStack {
        KnowledgeStack { central: node("hub", &[]), nodes }
    }

    #[test]
    fn ring_starts_at_top_and_runs_clockwise() {
        let s = stack(vec![node("a", &[]), node("b", &[]), node("c", &[]), node("d", &[])]);
        let layout = s.layout(600.0);

        assert!(close(layout.central.x, 300.0) && close(layout.central.y, 300.0));
        let pos: Vec<(f64, f64)> = layout.nodes.iter().map(|n| (n.x, n.y)).collect();
        // radius = 180
        assert!(close(pos[0].0, 300.0) && close(pos[0].1, 120.0), "top: {:?}", pos[0]);
        assert!(close(pos[1].0, 480.0) && close(pos[1].1, 300.0), "right: {:?}", pos[1]);
        assert!(close(pos[2].0, 300.0) && close(pos[2].1, 480.0), "bottom: {:?}", pos[2]);
        assert!(close(pos[3].0, 120.0) && close(pos[3].1, 300.0), "left: {:?}", pos[3]);
        assert_eq!(layout.nodes[1].id, "b");
        assert_eq!(layout.nodes[1].accent, Accent::Purple);
    }

    #[test]
    fn every_node_gets_a_spoke() {
        let s = stack(vec![node("a", &[]), node("b", &[]), node("c", &[])]);
        let layout = s.layout(300.0);
        assert_eq!(layout.edges.len(), 3);
        for (edge, placed) in layout.edges.iter().zip(&layout.nodes) {
            assert!(close(edge.x1, 150.0) && close(edge.y1, 150.0));
            assert!(close(edge.x2, placed.x) && close(edge.y2, placed.y));
        }
    }

    #[test]
    fn connections_skip_central_and_unknown_ids() {
        let s = stack(vec![node("a", &["b", "hub", "ghost"]), node("b", &["a"])]);
        let layout = s.layout(600.0);
        let (a, b) = (&layout.nodes[0], &layout.nodes[1]);

        // a: spoke + a->b; b: spoke + b->a
        assert_eq!(layout.edges.len(), 4);
        assert_eq!(layout.edges[1], Segment::between(a, b));
        assert_eq!(layout.edges[3], Segment::between(b, a));
    }

    #[test]
    fn empty_ring_only_places_central() {
        let layout = stack(vec![]).layout(DEFAULT_SIZE);
        assert!(layout.nodes.is_empty());
        assert!(layout.edges.is_empty());
        assert!(close(layout.central.x, 300.0));
    }

    #[test]
    fn single_node_sits_above_center() {
        let layout = stack(vec![node("solo", &["solo"])]).layout(100.0);
        let solo = &layout.nodes[0];
        assert!(close(solo.x, 50.0) && close(solo.y, 20.0));
        // Self-connection is a zero-length segment, still listed.
        assert_eq!(layout.edges.len(), 2);
    }
}
