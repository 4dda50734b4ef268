//! Hit testing: pointer position → nearest node / nearest edge slot.
//!
//! The edge search considers every unordered pair of existing nodes whether
//! or not the edge exists yet, so one query answers both "which edge would a
//! click delete" and "which edge would a click create".

use glam::Vec2;

use crate::math;
use crate::model::{GraphState, NodeId};

/// The nearest edge slot and its perpendicular distance to the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeHit {
    /// Candidate pair, lower id first.
    pub pair: (NodeId, NodeId),
    pub distance: f32,
}

/// Nearest node within `radius` of `p`, scanning ids in ascending order.
///
/// Strict comparison, so a tie keeps the earlier id and a node exactly on
/// the threshold is not hovered.
pub fn nearest_node(graph: &GraphState, p: Vec2, radius: f32) -> Option<NodeId> {
    let mut best_dist_sq = radius * radius;
    let mut best = None;
    for node in graph.nodes() {
        let dist_sq = p.distance_squared(node.position);
        if dist_sq < best_dist_sq {
            best_dist_sq = dist_sq;
            best = Some(node.id);
        }
    }
    best
}

/// Nearest edge slot within `threshold` of `p`.
///
/// Pairs whose projection falls off the segment span, and degenerate pairs
/// with coincident endpoints, never improve the current best. A pair whose
/// node vanished mid-scan is not a candidate either.
pub fn nearest_edge_slot(graph: &GraphState, p: Vec2, threshold: f32) -> Option<EdgeHit> {
    let ids: Vec<NodeId> = graph.ids().collect();
    let mut best_distance = threshold;
    let mut best = None;
    for (i, &a) in ids.iter().enumerate() {
        for &b in &ids[i + 1..] {
            let (Some(node_a), Some(node_b)) = (graph.get(a), graph.get(b)) else {
                continue;
            };
            let Some(distance) = math::distance_to_segment(p, node_a.position, node_b.position)
            else {
                continue;
            };
            if distance < best_distance {
                best_distance = distance;
                best = Some(EdgeHit {
                    pair: (a, b),
                    distance,
                });
            }
        }
    }
    best
}
