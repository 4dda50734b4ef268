//! # Core Data Model
//!
//! The graph lives in a flat arena: a growable table of optional node slots
//! indexed by id, plus a monotonic counter. Deletion empties a slot and the
//! counter only grows, so an id is never reused and references held by edges
//! or the render layer stay stable for the whole life of the graph.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Unique identifier for a node. Issued once, never recycled.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Slot index backing this id.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node of the puzzle graph.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Self-reference ID.
    pub id: NodeId,
    /// Screen-space position of the node's center.
    pub position: Vec2,
    /// Dollar amount. Negative means the node is in debt.
    pub amount: i64,
}

/// An unordered pair of distinct node ids.
///
/// Normalized so `a < b`: the same pair compares equal no matter the
/// construction order, which is what makes the edge set multi-edge free.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Edge {
    a: NodeId,
    b: NodeId,
}

impl Edge {
    /// Builds the normalized pair. `None` for a self-pair.
    pub fn new(a: NodeId, b: NodeId) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { a, b }),
            std::cmp::Ordering::Equal => None,
            std::cmp::Ordering::Greater => Some(Self { a: b, b: a }),
        }
    }

    /// Lower endpoint id.
    pub fn a(&self) -> NodeId {
        self.a
    }

    /// Higher endpoint id.
    pub fn b(&self) -> NodeId {
        self.b
    }

    /// True when `id` is one of the endpoints.
    pub fn touches(&self, id: NodeId) -> bool {
        self.a == id || self.b == id
    }

    /// The opposite endpoint, if `id` is an endpoint at all.
    pub fn other(&self, id: NodeId) -> Option<NodeId> {
        if self.a == id {
            Some(self.b)
        } else if self.b == id {
            Some(self.a)
        } else {
            None
        }
    }
}

/// Status of a failed edge mutation. Failures leave the graph untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Self-pair, missing endpoint, or the edge already exists.
    #[error("edge endpoints must be two distinct existing nodes and the edge must be new")]
    InvalidEdge,
    /// The edge to remove is not in the graph.
    #[error("no such edge")]
    NotFound,
}

/// The entire state of the graph.
///
/// Responsible for storage and the chip-firing semantics, not for rendering
/// or interaction logic. All mutation goes through this API, which is what
/// upholds the invariants: edges only ever reference live nodes, and
/// `next_id` stays strictly above every id ever issued.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphState {
    slots: Vec<Option<Node>>,
    edges: BTreeSet<Edge>,
    next_id: u32,
}

impl GraphState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next id and inserts a node with amount 0 at `position`.
    pub fn add_node(&mut self, position: Vec2) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        if self.slots.len() < self.next_id as usize {
            self.slots.resize(self.next_id as usize, None);
        }
        self.slots[id.index()] = Some(Node {
            id,
            position,
            amount: 0,
        });
        id
    }

    /// Empties the node's slot and returns the node.
    ///
    /// The caller must have removed every incident edge first; an edge
    /// pointing at a missing node is a defect, not a runtime condition.
    pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        debug_assert_eq!(self.degree(id), 0, "removing a node that still has edges");
        self.slots.get_mut(id.index())?.take()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.index())?.as_ref()
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots.get_mut(id.index())?.as_mut()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Live nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.slots.iter().flatten()
    }

    /// Ids of live nodes in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes().map(|n| n.id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes().next().is_none()
    }

    /// The id the next `add_node` call will issue.
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// The highest-indexed node that still exists.
    pub fn latest_node(&self) -> Option<NodeId> {
        self.slots.iter().rev().flatten().map(|n| n.id).next()
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        Edge::new(a, b).is_some_and(|e| self.edges.contains(&e))
    }

    /// Inserts the edge `{a, b}`.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<(), GraphError> {
        let edge = Edge::new(a, b).ok_or(GraphError::InvalidEdge)?;
        if !self.contains(a) || !self.contains(b) || self.edges.contains(&edge) {
            return Err(GraphError::InvalidEdge);
        }
        self.edges.insert(edge);
        Ok(())
    }

    /// Removes the edge `{a, b}`.
    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) -> Result<(), GraphError> {
        let edge = Edge::new(a, b).ok_or(GraphError::NotFound)?;
        if self.edges.remove(&edge) {
            Ok(())
        } else {
            Err(GraphError::NotFound)
        }
    }

    /// Number of edges incident to `id`.
    pub fn degree(&self, id: NodeId) -> usize {
        self.edges.iter().filter(|e| e.touches(id)).count()
    }

    /// Opposite endpoints of every edge incident to `id`.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.edges.iter().filter_map(move |e| e.other(id))
    }

    /// The chip-firing primitive.
    ///
    /// For every incident edge, `id` gains `delta` and the neighbor loses it:
    /// a node of degree `d` changes by `d * delta` in total. `delta = -1` is
    /// a lending move (one dollar to every neighbor), `delta = +1` borrows
    /// one from each. Every unit leaving one endpoint lands on the other, so
    /// the total dollar amount is conserved exactly.
    pub fn fire(&mut self, id: NodeId, delta: i64) {
        debug_assert!(delta == -1 || delta == 1, "firing delta must be -1 or +1");
        let neighbors: Vec<NodeId> = self.neighbors(id).collect();
        for other in neighbors {
            if let Some(node) = self.get_mut(id) {
                node.amount += delta;
            }
            if let Some(node) = self.get_mut(other) {
                node.amount -= delta;
            }
        }
    }

    /// The win condition: no node in debt.
    pub fn is_solved(&self) -> bool {
        self.nodes().all(|n| n.amount >= 0)
    }

    /// Cycle rank `|edges| - |nodes| + 1`, the solvability threshold for the
    /// total dollar amount (meaningful on a connected graph; connectivity is
    /// not verified here).
    pub fn genus(&self) -> i64 {
        self.edge_count() as i64 - self.node_count() as i64 + 1
    }

    /// Sum of all node amounts; invariant under `fire`.
    pub fn total_dollars(&self) -> i64 {
        self.nodes().map(|n| n.amount).sum()
    }

    /// Places a node at a specific id, growing the table as needed.
    ///
    /// Load-path only. The public allocator stays monotonic because the
    /// counter is bumped past every restored id. Returns false when the slot
    /// is already taken.
    pub(crate) fn restore_node(&mut self, id: NodeId, position: Vec2, amount: i64) -> bool {
        let index = id.index();
        if index >= self.slots.len() {
            self.slots.resize(index + 1, None);
        }
        if self.slots[index].is_some() {
            return false;
        }
        self.slots[index] = Some(Node {
            id,
            position,
            amount,
        });
        self.next_id = self.next_id.max(id.0 + 1);
        true
    }

    /// Raises the id counter to at least `floor`. Load-path only.
    pub(crate) fn bump_next_id(&mut self, floor: u32) {
        self.next_id = self.next_id.max(floor);
    }
}
