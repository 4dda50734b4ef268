//! Save / load for the graph.
//!
//! The on-disk payload is an explicit `SavedGraph` snapshot serialized as
//! JSON: nodes, edges and the id counter, nothing else. Amounts round-trip
//! untouched and are never re-validated against the genus balance; a
//! hand-edited state is a legal state.

use std::fs;
use std::io;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::model::{GraphState, NodeId};

/// Failure while writing a save file.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("save file I/O failed")]
    Io(#[from] io::Error),
    #[error("save payload could not be encoded")]
    Encode(#[from] serde_json::Error),
}

/// A serializable representation of a node.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SavedNode {
    pub id: NodeId,
    pub position: Vec2,
    pub amount: i64,
}

/// A serializable snapshot of the graph.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SavedGraph {
    pub nodes: Vec<SavedNode>,
    pub edges: Vec<(NodeId, NodeId)>,
    pub next_id: u32,
}

impl GraphState {
    /// Serializes the graph state into a `SavedGraph` payload.
    pub fn to_saved(&self) -> SavedGraph {
        SavedGraph {
            nodes: self
                .nodes()
                .map(|n| SavedNode {
                    id: n.id,
                    position: n.position,
                    amount: n.amount,
                })
                .collect(),
            edges: self.edges().map(|e| (e.a(), e.b())).collect(),
            next_id: self.next_id(),
        }
    }

    /// Rebuilds a graph from a saved payload.
    ///
    /// Everything goes back in through the mutation API, so a tampered file
    /// cannot smuggle in a duplicate id, a self-loop, a doubled edge or an
    /// edge to a node that is not there; such entries are dropped. The id
    /// counter is repaired if it fell behind the stored ids.
    pub fn from_saved(saved: SavedGraph) -> GraphState {
        let mut graph = GraphState::new();
        for node in saved.nodes {
            if !graph.restore_node(node.id, node.position, node.amount) {
                warn!(id = node.id.0, "duplicate node id in save payload, dropped");
            }
        }
        for (a, b) in saved.edges {
            if let Err(err) = graph.add_edge(a, b) {
                warn!(%err, a = a.0, b = b.0, "edge in save payload dropped");
            }
        }
        graph.bump_next_id(saved.next_id);
        graph
    }
}

/// Durably writes the graph to `path`.
pub fn save_to_path(path: impl AsRef<Path>, graph: &GraphState) -> Result<(), PersistError> {
    let payload = serde_json::to_vec_pretty(&graph.to_saved())?;
    fs::write(path, payload)?;
    Ok(())
}

/// Reads a previously saved graph.
///
/// A missing, unreadable or corrupt file is "no saved graph", never an error
/// the caller has to surface; the editor simply starts empty.
pub fn load_from_path(path: impl AsRef<Path>) -> Option<GraphState> {
    let path = path.as_ref();
    let bytes = fs::read(path).ok()?;
    match serde_json::from_slice::<SavedGraph>(&bytes) {
        Ok(saved) => Some(GraphState::from_saved(saved)),
        Err(err) => {
            warn!(%err, path = %path.display(), "save file unreadable, starting empty");
            None
        }
    }
}
