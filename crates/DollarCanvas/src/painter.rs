//! Scene construction for the three screens.
//!
//! Converts the graph, the interaction snapshot and the session flags into
//! an ordered `RenderList`. Edges are painted before nodes so the circles
//! sit on top of their lines.

use glam::{Vec2, Vec4};

use crate::config::ShellConfig;
use crate::interaction::{Mode, Session};
use crate::model::{GraphState, NodeId};
use crate::render::{DrawCommand, RenderList, TextAnchor};

const EDGE_WIDTH: f32 = 5.0;
const NODE_STROKE_WIDTH: f32 = 5.0;
const TITLE_SIZE: f32 = 100.0;
const TEXT_SIZE: f32 = 33.0;
const AMOUNT_SIZE: f32 = 60.0;
const TRANSPARENT: Vec4 = Vec4::ZERO;

/// Generates the draw list for the current frame.
pub fn draw(
    mode: Mode,
    graph: &GraphState,
    session: &Session,
    config: &ShellConfig,
) -> RenderList {
    let mut list = Vec::new();
    match mode {
        Mode::Title => draw_title(config, &mut list),
        Mode::Editor => draw_editor(graph, session, config, &mut list),
        Mode::Game => draw_game(graph, session, config, &mut list),
    }
    list
}

fn draw_title(config: &ShellConfig, list: &mut RenderList) {
    let style = &config.style;
    let center = config.view_size * 0.5;

    list.push(DrawCommand::Text {
        pos: Vec2::new(center.x, center.y - TITLE_SIZE),
        anchor: TextAnchor::Center,
        text: "The Dollar Game".to_string(),
        color: style.title_color,
        size: TITLE_SIZE,
    });

    let lines = [
        "As seen on numberphile",
        "Click anywhere to start the editor.",
        "Press R to create a random graph.",
        "Press any other key to start the game.",
    ];
    for (i, line) in lines.iter().enumerate() {
        list.push(DrawCommand::Text {
            pos: Vec2::new(center.x, center.y + 10.0 + i as f32 * (TEXT_SIZE + 10.0)),
            anchor: TextAnchor::Center,
            text: (*line).to_string(),
            color: style.text_color,
            size: TEXT_SIZE,
        });
    }
}

fn draw_editor(
    graph: &GraphState,
    session: &Session,
    config: &ShellConfig,
    list: &mut RenderList,
) {
    let style = &config.style;
    let state = &session.interaction;
    let view = config.view_size;

    list.push(DrawCommand::Text {
        pos: Vec2::new(view.x * 0.5, 20.0),
        anchor: TextAnchor::Center,
        text: "Press S to save the game.".to_string(),
        color: style.text_color,
        size: TEXT_SIZE,
    });
    list.push(DrawCommand::Text {
        pos: Vec2::new(view.x * 0.5, 30.0 + TEXT_SIZE),
        anchor: TextAnchor::Center,
        text: "Press any other key to start the game.".to_string(),
        color: style.text_color,
        size: TEXT_SIZE,
    });
    list.push(DrawCommand::Text {
        pos: Vec2::new(10.0, view.y - TEXT_SIZE - 10.0),
        anchor: TextAnchor::TopLeft,
        text: "click to create or delete node or edge, nodes can be dragged.".to_string(),
        color: style.text_color,
        size: TEXT_SIZE,
    });

    // A hovered existing edge previews as removable, a hovered empty slot as
    // creatable.
    let hovered_pair = state.hovered_edge.map(|hit| hit.pair);
    let hovered_exists = hovered_pair.is_some_and(|(a, b)| graph.has_edge(a, b));

    for edge in graph.edges() {
        let pair = (edge.a(), edge.b());
        let color = if Some(pair) == hovered_pair {
            style.remove_color
        } else {
            style.graph_color
        };
        push_edge_line(graph, pair, color, list);
    }
    if let Some(pair) = hovered_pair.filter(|_| !hovered_exists) {
        push_edge_line(graph, pair, style.add_color, list);
    }

    // Endpoints that the hovered edge's removal would orphan get flagged in
    // the removal color too.
    let mut doomed: Vec<NodeId> = Vec::new();
    if hovered_exists
        && let Some((a, b)) = hovered_pair
    {
        for id in [a, b] {
            if graph.degree(id) == 1 {
                doomed.push(id);
            }
        }
    }

    list.push(DrawCommand::Text {
        pos: Vec2::new(view.x - 10.0, view.y - TEXT_SIZE - 10.0),
        anchor: TextAnchor::TopRight,
        text: format!("Genus:{} Dollars:{}", graph.genus(), graph.total_dollars()),
        color: style.text_color,
        size: TEXT_SIZE,
    });

    // Ghost preview of the node a click would create, wired to the node it
    // would connect to.
    if let Some(pos) = state.new_node_pos {
        if let Some(latest) = graph.latest_node().and_then(|id| graph.get(id)) {
            list.push(DrawCommand::Line {
                start: latest.position,
                end: pos,
                color: style.add_color,
                width: EDGE_WIDTH,
            });
        }
        list.push(DrawCommand::Circle {
            center: pos,
            radius: config.node_radius,
            fill: TRANSPARENT,
            stroke_width: NODE_STROKE_WIDTH,
            stroke_color: Some(style.add_color),
        });
        list.push(DrawCommand::Text {
            pos,
            anchor: TextAnchor::Center,
            text: "0".to_string(),
            color: style.add_color,
            size: AMOUNT_SIZE,
        });
    }

    draw_nodes(graph, state.hovered_node, &doomed, config, list);
}

fn draw_game(
    graph: &GraphState,
    session: &Session,
    config: &ShellConfig,
    list: &mut RenderList,
) {
    let style = &config.style;
    let state = &session.interaction;

    let banner = if session.solved {
        "You solved! Press any key or click to continue."
    } else {
        "Press any key to give up."
    };
    list.push(DrawCommand::Text {
        pos: Vec2::new(config.view_size.x * 0.5, 20.0),
        anchor: TextAnchor::Center,
        text: banner.to_string(),
        color: style.text_color,
        size: TEXT_SIZE,
    });

    for edge in graph.edges() {
        let color = if state.hovered_node.is_some_and(|id| edge.touches(id)) {
            style.highlight_color
        } else {
            style.graph_color
        };
        push_edge_line(graph, (edge.a(), edge.b()), color, list);
    }

    draw_nodes(graph, state.hovered_node, &[], config, list);
}

fn push_edge_line(
    graph: &GraphState,
    pair: (NodeId, NodeId),
    color: Vec4,
    list: &mut RenderList,
) {
    if let (Some(a), Some(b)) = (graph.get(pair.0), graph.get(pair.1)) {
        list.push(DrawCommand::Line {
            start: a.position,
            end: b.position,
            color,
            width: EDGE_WIDTH,
        });
    }
}

fn draw_nodes(
    graph: &GraphState,
    hovered: Option<NodeId>,
    doomed: &[NodeId],
    config: &ShellConfig,
    list: &mut RenderList,
) {
    let style = &config.style;
    for node in graph.nodes() {
        let color = if hovered == Some(node.id) {
            style.highlight_color
        } else if doomed.contains(&node.id) {
            style.remove_color
        } else {
            style.graph_color
        };
        list.push(DrawCommand::Circle {
            center: node.position,
            radius: config.node_radius,
            fill: TRANSPARENT,
            stroke_width: NODE_STROKE_WIDTH,
            stroke_color: Some(color),
        });
        list.push(DrawCommand::Text {
            pos: node.position,
            anchor: TextAnchor::Center,
            text: node.amount.to_string(),
            color,
            size: AMOUNT_SIZE,
        });
    }
}
