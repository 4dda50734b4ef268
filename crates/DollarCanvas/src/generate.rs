//! Random playable graphs.
//!
//! Produces a connected instance whose total dollar amount equals its genus,
//! the tightest boundary at which the puzzle stays interesting: a total at
//! or above the genus guarantees a winning sequence exists.

use glam::Vec2;
use rand::Rng;
use tracing::debug;

use crate::config::ShellConfig;
use crate::model::GraphState;

/// Builds a fresh random graph laid out for `config.view_size`.
///
/// Shape:
/// 1. A node count drawn from the configured range, the nodes evenly spaced
///    on an ellipse centered in the view so the initial layout never
///    overlaps.
/// 2. A chain edge between each consecutive pair, guaranteeing connectivity.
/// 3. `count / 2` extra random edges; self-pairs are skipped and duplicates
///    are absorbed by the edge set.
/// 4. Random amounts from the configured range, then node 0 absorbs the
///    difference `genus - dollars` so the final total equals the genus
///    exactly.
pub fn random_graph<R: Rng + ?Sized>(rng: &mut R, config: &ShellConfig) -> GraphState {
    let params = &config.generator;
    let count = rng.gen_range(params.min_nodes..=params.max_nodes);

    let mut graph = GraphState::new();
    let center = config.view_size * 0.5;
    let radius = config.view_size / 3.0;

    let mut ids = Vec::with_capacity(count as usize);
    for n in 0..count {
        let angle = n as f32 * std::f32::consts::TAU / count as f32;
        let position = center + Vec2::new(angle.cos() * radius.x, angle.sin() * radius.y);
        let id = graph.add_node(position);
        if let Some(&prev) = ids.last() {
            // Chain edges onto a fresh graph cannot collide.
            let _ = graph.add_edge(prev, id);
        }
        ids.push(id);
    }

    for _ in 0..count / 2 {
        let a = ids[rng.gen_range(0..ids.len())];
        let b = ids[rng.gen_range(0..ids.len())];
        if a != b {
            let _ = graph.add_edge(a, b);
        }
    }

    let genus = graph.genus();
    let mut dollars = 0;
    for &id in &ids {
        let amount = rng.gen_range(params.min_amount..=params.max_amount);
        if let Some(node) = graph.get_mut(id) {
            node.amount = amount;
        }
        dollars += amount;
    }
    if let Some(first) = ids.first().copied()
        && let Some(node) = graph.get_mut(first)
    {
        node.amount += genus - dollars;
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        genus,
        "generated random graph"
    );
    graph
}
