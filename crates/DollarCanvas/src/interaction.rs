//! # Mode State Machine
//!
//! Title, Editor and Game as a closed set of states driven by an explicit
//! transition function. Each handler consumes one abstract input event and
//! may request the next mode; the machine owns the switch and runs the
//! enter/exit effects, not the states themselves.

use glam::Vec2;
use tracing::debug;

use crate::config::ShellConfig;
use crate::generate;
use crate::hit::{self, EdgeHit};
use crate::input::{Button, InputEvent, Key, PointerState};
use crate::model::{GraphState, NodeId};

/// Side effects the host application must act on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellEvent {
    /// The editor asked for the graph to be written out.
    SaveRequested,
    /// The host should shut the shell down.
    QuitRequested,
}

/// The three screens of the shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Title,
    Editor,
    Game,
}

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Mode::Title => "title",
            Mode::Editor => "editor",
            Mode::Game => "game",
        }
    }
}

/// Transient per-frame interaction state.
///
/// Hover fields are recomputed from scratch on every pointer move and
/// returned as a fresh value; the drag target and the pending amount delta
/// are press/release state and are carried into the next snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InteractionState {
    /// Node under the pointer, if any.
    pub hovered_node: Option<NodeId>,
    /// Nearest edge slot, only searched while no node is hovered.
    pub hovered_edge: Option<EdgeHit>,
    /// Node following the pointer while the left button stays down.
    pub drag_node: Option<NodeId>,
    /// Amount change to apply on release: -1, 0 or +1.
    pub pending_delta: i64,
    /// Where a click on empty space would create a new node.
    pub new_node_pos: Option<Vec2>,
}

impl InteractionState {
    /// Fresh snapshot carrying over only the press/release state.
    fn carry_over(&self) -> Self {
        Self {
            drag_node: self.drag_node,
            pending_delta: self.pending_delta,
            ..Self::default()
        }
    }
}

/// Mode flags plus the interaction snapshot, owned by the shell.
#[derive(Clone, Copy, Debug, Default)]
pub struct Session {
    pub interaction: InteractionState,
    /// Editor entry regenerates the graph while this is set. Raised on the
    /// title screen, cleared when a game round ends.
    pub start_random: bool,
    /// Latched by the win check; a press then leaves the game.
    pub solved: bool,
    /// The scene changed since the last render.
    pub needs_redraw: bool,
}

/// Routes one input event to the active mode's handler and applies the
/// requested transition.
pub fn handle_event(
    mode: &mut Mode,
    session: &mut Session,
    config: &ShellConfig,
    pointer: &PointerState,
    event: &InputEvent,
    graph: &mut GraphState,
    effects: &mut Vec<ShellEvent>,
) {
    if matches!(event, InputEvent::Quit) {
        effects.push(ShellEvent::QuitRequested);
        return;
    }

    let next = match mode {
        Mode::Title => handle_title(session, event),
        Mode::Editor => handle_editor(session, config, pointer, event, graph, effects),
        Mode::Game => handle_game(session, config, event, graph),
    };

    if let Some(next) = next {
        transition(mode, next, session, config, graph);
    }
}

/// Swaps modes and runs the exit/enter effects.
fn transition(
    mode: &mut Mode,
    next: Mode,
    session: &mut Session,
    config: &ShellConfig,
    graph: &mut GraphState,
) {
    debug!(from = mode.name(), to = next.name(), "mode transition");

    // Exit effects. Transient interaction state never crosses a transition;
    // an in-progress drag is implicitly abandoned.
    session.interaction = InteractionState::default();
    if *mode == Mode::Game {
        session.solved = false;
        session.start_random = false;
    }

    *mode = next;

    // Enter effects.
    if next == Mode::Editor && session.start_random {
        *graph = generate::random_graph(&mut rand::thread_rng(), config);
    }
    session.needs_redraw = true;
}

fn handle_title(session: &mut Session, event: &InputEvent) -> Option<Mode> {
    match event {
        InputEvent::KeyDown(key) => {
            if *key == Key::R {
                session.start_random = true;
            }
            Some(Mode::Editor)
        }
        InputEvent::PointerDown(..) => Some(Mode::Editor),
        _ => None,
    }
}

fn handle_editor(
    session: &mut Session,
    config: &ShellConfig,
    pointer: &PointerState,
    event: &InputEvent,
    graph: &mut GraphState,
    effects: &mut Vec<ShellEvent>,
) -> Option<Mode> {
    match *event {
        InputEvent::KeyDown(Key::S) => {
            effects.push(ShellEvent::SaveRequested);
            None
        }
        InputEvent::KeyDown(_) => Some(Mode::Game),
        InputEvent::PointerMove(pos) => {
            editor_hover(session, config, pointer, pos, graph);
            None
        }
        InputEvent::PointerDown(button, pos) => {
            editor_press(session, config, button, pos, graph);
            None
        }
        InputEvent::PointerUp(..) => {
            editor_release(session, graph);
            None
        }
        InputEvent::Quit => None,
    }
}

/// Rebuilds the interaction snapshot for a pointer move.
fn editor_hover(
    session: &mut Session,
    config: &ShellConfig,
    pointer: &PointerState,
    pos: Vec2,
    graph: &mut GraphState,
) {
    let dragging = pointer.left && session.interaction.drag_node.is_some();
    if dragging {
        let mut next = session.interaction.carry_over();
        if let Some(id) = next.drag_node {
            if let Some(node) = graph.get_mut(id) {
                node.position = pos;
            }
            // Fast moves must not retarget the hover mid-drag, and ending a
            // drag never changes the node's amount.
            next.hovered_node = Some(id);
        }
        next.pending_delta = 0;
        session.interaction = next;
    } else {
        session.interaction = hover_snapshot(&session.interaction, config, pos, graph);
    }
    session.needs_redraw = true;
}

/// The hover search: nearest node first; only without one, the nearest edge
/// slot; with neither, the position becomes a new-node candidate.
fn hover_snapshot(
    prev: &InteractionState,
    config: &ShellConfig,
    pos: Vec2,
    graph: &GraphState,
) -> InteractionState {
    let mut next = prev.carry_over();
    next.hovered_node = hit::nearest_node(graph, pos, config.node_radius);
    if next.hovered_node.is_none() {
        next.hovered_edge = hit::nearest_edge_slot(graph, pos, config.edge_hit_threshold());
    }
    if next.hovered_node.is_none() && next.hovered_edge.is_none() {
        next.new_node_pos = Some(pos);
    }
    next
}

fn editor_press(
    session: &mut Session,
    config: &ShellConfig,
    button: Button,
    pos: Vec2,
    graph: &mut GraphState,
) {
    let mut state = session.interaction;
    // A press starts a fresh drag, if any.
    state.drag_node = None;

    if let Some(id) = state.hovered_node {
        match button {
            Button::Left => {
                state.drag_node = Some(id);
                state.pending_delta = -1;
            }
            Button::Right => state.pending_delta = 1,
        }
        session.interaction = state;
    } else if let Some(EdgeHit { pair: (a, b), .. }) = state.hovered_edge {
        if button == Button::Left {
            toggle_edge(graph, a, b);
            session.needs_redraw = true;
            // Re-derive the hover against the mutated graph right away, as
            // if the pointer had moved.
            session.interaction = hover_snapshot(&state, config, pos, graph);
        } else {
            session.interaction = state;
        }
    } else if button == Button::Left {
        // Empty space: create a node and tie it to the newest existing one
        // so the graph stays connected while sketching.
        let id = graph.add_node(pos);
        if let Some(prev) = previous_node(graph, id) {
            let _ = graph.add_edge(prev, id);
        }
        state.hovered_node = Some(id);
        state.new_node_pos = None;
        session.needs_redraw = true;
        session.interaction = state;
    } else {
        session.interaction = state;
    }
}

/// Removes the edge if present, adds it otherwise. An edge removal also
/// deletes each endpoint it left without any edge.
fn toggle_edge(graph: &mut GraphState, a: NodeId, b: NodeId) {
    if graph.remove_edge(a, b).is_ok() {
        for id in [a, b] {
            if graph.contains(id) && graph.degree(id) == 0 {
                graph.remove_node(id);
            }
        }
    } else {
        // Not an existing edge, so the hovered slot becomes a new edge. The
        // endpoints may have vanished since the hover was computed; that is
        // a no-op, not an error.
        let _ = graph.add_edge(a, b);
    }
}

fn editor_release(session: &mut Session, graph: &mut GraphState) {
    let mut state = session.interaction;
    state.drag_node = None;
    if let Some(id) = state.hovered_node
        && let Some(node) = graph.get_mut(id)
    {
        // The editor sets the starting endowment directly; this is a plain
        // adjustment, not a firing across edges.
        node.amount += state.pending_delta;
        session.needs_redraw = true;
    }
    state.pending_delta = 0;
    session.interaction = state;
}

fn handle_game(
    session: &mut Session,
    config: &ShellConfig,
    event: &InputEvent,
    graph: &mut GraphState,
) -> Option<Mode> {
    match *event {
        // Give up.
        InputEvent::KeyDown(_) => Some(Mode::Title),
        InputEvent::PointerMove(pos) => {
            let previous = session.interaction.hovered_node;
            let mut next = session.interaction.carry_over();
            // Edges are not editable in play; only nodes are hover targets.
            next.hovered_node = hit::nearest_node(graph, pos, config.node_radius);
            if next.hovered_node != previous {
                next.pending_delta = 0;
                session.needs_redraw = true;
            }
            session.interaction = next;
            None
        }
        InputEvent::PointerDown(button, _) => {
            if session.solved {
                return Some(Mode::Title);
            }
            if session.interaction.hovered_node.is_some() {
                session.interaction.pending_delta = match button {
                    Button::Left => -1,
                    Button::Right => 1,
                };
            }
            None
        }
        InputEvent::PointerUp(..) => {
            let state = session.interaction;
            if let Some(id) = state.hovered_node
                && state.pending_delta != 0
            {
                graph.fire(id, state.pending_delta);
                session.needs_redraw = true;
            }
            session.interaction.pending_delta = 0;
            None
        }
        InputEvent::Quit => None,
    }
}

/// Highest-indexed existing node below `id`.
fn previous_node(graph: &GraphState, id: NodeId) -> Option<NodeId> {
    (0..id.0).rev().map(NodeId).find(|&i| graph.contains(i))
}
