use dollar_canvas::input::{Button, InputEvent, Key};
use dollar_canvas::model::{GraphState, NodeId};
use dollar_canvas::{Mode, Shell, ShellConfig, ShellEvent};
use glam::Vec2;

fn shell() -> Shell {
    Shell::new(ShellConfig::default())
}

/// Title -> Editor without the random flag.
fn enter_editor(shell: &mut Shell, graph: &mut GraphState) {
    shell.handle_event(&InputEvent::KeyDown(Key::Other), graph);
    assert_eq!(shell.mode(), Mode::Editor);
}

fn move_to(shell: &mut Shell, graph: &mut GraphState, x: f32, y: f32) {
    shell.handle_event(&InputEvent::PointerMove(Vec2::new(x, y)), graph);
}

/// Move, press, release at one spot, like a real pointer would.
fn click(shell: &mut Shell, graph: &mut GraphState, button: Button, x: f32, y: f32) {
    let pos = Vec2::new(x, y);
    move_to(shell, graph, x, y);
    shell.handle_event(&InputEvent::PointerDown(button, pos), graph);
    shell.handle_event(&InputEvent::PointerUp(button, pos), graph);
}

/// Three clicks on empty space: nodes 0, 1, 2 chained by auto-edges.
fn sketch_chain(shell: &mut Shell, graph: &mut GraphState) -> [NodeId; 3] {
    click(shell, graph, Button::Left, 100.0, 100.0);
    click(shell, graph, Button::Left, 400.0, 100.0);
    click(shell, graph, Button::Left, 400.0, 400.0);
    [NodeId(0), NodeId(1), NodeId(2)]
}

#[test]
fn test_title_pointer_press_starts_editor() {
    let mut shell = shell();
    let mut graph = GraphState::new();

    shell.handle_event(
        &InputEvent::PointerDown(Button::Left, Vec2::new(10.0, 10.0)),
        &mut graph,
    );
    assert_eq!(shell.mode(), Mode::Editor);
    assert!(graph.is_empty());
}

#[test]
fn test_title_r_key_generates_a_balanced_graph() {
    let mut shell = shell();
    let mut graph = GraphState::new();

    shell.handle_event(&InputEvent::KeyDown(Key::R), &mut graph);
    assert_eq!(shell.mode(), Mode::Editor);
    assert!(!graph.is_empty());
    assert_eq!(graph.total_dollars(), graph.genus());
}

#[test]
fn test_title_other_key_keeps_the_loaded_graph() {
    let mut shell = shell();
    let mut graph = GraphState::new();
    graph.add_node(Vec2::new(50.0, 50.0));

    shell.handle_event(&InputEvent::KeyDown(Key::Other), &mut graph);
    assert_eq!(shell.mode(), Mode::Editor);
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_editor_empty_clicks_create_a_chained_graph() {
    let mut shell = shell();
    let mut graph = GraphState::new();
    enter_editor(&mut shell, &mut graph);

    let [a, b, c] = sketch_chain(&mut shell, &mut graph);
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.get(a).unwrap().amount, 0);
    // Each new node connects to the newest node that existed before it.
    assert!(graph.has_edge(a, b));
    assert!(graph.has_edge(b, c));
    assert!(!graph.has_edge(a, c));
}

#[test]
fn test_editor_new_node_connects_to_latest_surviving_node() {
    let mut shell = shell();
    let mut graph = GraphState::new();
    enter_editor(&mut shell, &mut graph);
    let [a, b, c] = sketch_chain(&mut shell, &mut graph);

    // Toggle the b-c edge away; c becomes edge-less and disappears.
    click(&mut shell, &mut graph, Button::Left, 400.0, 250.0);
    assert!(!graph.contains(c));

    // The next sketched node skips the dead id and wires to b.
    click(&mut shell, &mut graph, Button::Left, 100.0, 400.0);
    let d = NodeId(3);
    assert!(graph.contains(d));
    assert!(graph.has_edge(b, d));
    assert!(!graph.has_edge(a, d));
}

#[test]
fn test_editor_release_applies_the_pending_delta() {
    let mut shell = shell();
    let mut graph = GraphState::new();
    enter_editor(&mut shell, &mut graph);

    click(&mut shell, &mut graph, Button::Left, 100.0, 100.0);
    let a = NodeId(0);
    assert_eq!(graph.get(a).unwrap().amount, 0);

    // A left click on the node is a -1 endowment, a right click +1. These
    // adjust the single node only, no edges involved.
    click(&mut shell, &mut graph, Button::Left, 100.0, 100.0);
    assert_eq!(graph.get(a).unwrap().amount, -1);
    click(&mut shell, &mut graph, Button::Right, 100.0, 100.0);
    assert_eq!(graph.get(a).unwrap().amount, 0);
}

#[test]
fn test_editor_drag_moves_the_node_and_suppresses_the_delta() {
    let mut shell = shell();
    let mut graph = GraphState::new();
    enter_editor(&mut shell, &mut graph);

    click(&mut shell, &mut graph, Button::Left, 100.0, 100.0);
    let a = NodeId(0);

    move_to(&mut shell, &mut graph, 100.0, 100.0);
    shell.handle_event(
        &InputEvent::PointerDown(Button::Left, Vec2::new(100.0, 100.0)),
        &mut graph,
    );
    move_to(&mut shell, &mut graph, 300.0, 300.0);
    move_to(&mut shell, &mut graph, 310.0, 300.0);
    shell.handle_event(
        &InputEvent::PointerUp(Button::Left, Vec2::new(310.0, 300.0)),
        &mut graph,
    );

    let node = graph.get(a).unwrap();
    assert_eq!(node.position, Vec2::new(310.0, 300.0));
    // Dragging never counts as a -1 click.
    assert_eq!(node.amount, 0);
    assert_eq!(shell.interaction().drag_node, None);
}

#[test]
fn test_editor_edge_toggle_is_idempotent() {
    let mut shell = shell();
    let mut graph = GraphState::new();
    enter_editor(&mut shell, &mut graph);
    let [a, _b, c] = sketch_chain(&mut shell, &mut graph);
    click(&mut shell, &mut graph, Button::Left, 100.0, 400.0);
    let d = NodeId(3);
    let edges_before: Vec<_> = graph.edges().collect();

    // The a-d slot is empty; a click fills it.
    click(&mut shell, &mut graph, Button::Left, 100.0, 250.0);
    assert!(graph.has_edge(a, d));

    // A second click takes it out again. Both endpoints still have their
    // chain edges, so nobody is deleted.
    click(&mut shell, &mut graph, Button::Left, 100.0, 250.0);
    assert!(!graph.has_edge(a, d));
    assert_eq!(graph.edges().collect::<Vec<_>>(), edges_before);
    assert!(graph.contains(a) && graph.contains(c) && graph.contains(d));
}

#[test]
fn test_editor_removing_a_last_edge_deletes_the_orphan() {
    let mut shell = shell();
    let mut graph = GraphState::new();
    enter_editor(&mut shell, &mut graph);
    let [a, b, c] = sketch_chain(&mut shell, &mut graph);

    // Removing b-c orphans c only.
    click(&mut shell, &mut graph, Button::Left, 400.0, 250.0);
    assert!(!graph.has_edge(b, c));
    assert!(!graph.contains(c));
    assert!(graph.contains(b));

    // Removing the last edge orphans both of its endpoints.
    click(&mut shell, &mut graph, Button::Left, 250.0, 100.0);
    assert!(graph.is_empty());
}

#[test]
fn test_editor_s_key_requests_a_save() {
    let mut shell = shell();
    let mut graph = GraphState::new();
    enter_editor(&mut shell, &mut graph);

    let effects = shell.handle_event(&InputEvent::KeyDown(Key::S), &mut graph);
    assert_eq!(effects, vec![ShellEvent::SaveRequested]);
    assert_eq!(shell.mode(), Mode::Editor);
}

#[test]
fn test_editor_any_other_key_starts_the_game() {
    let mut shell = shell();
    let mut graph = GraphState::new();
    enter_editor(&mut shell, &mut graph);

    // R has no special meaning here.
    shell.handle_event(&InputEvent::KeyDown(Key::R), &mut graph);
    assert_eq!(shell.mode(), Mode::Game);
}

fn playable_pair() -> (GraphState, NodeId, NodeId) {
    let mut graph = GraphState::new();
    let a = graph.add_node(Vec2::new(100.0, 100.0));
    let b = graph.add_node(Vec2::new(400.0, 100.0));
    graph.add_edge(a, b).unwrap();
    graph.get_mut(a).unwrap().amount = -1;
    graph.get_mut(b).unwrap().amount = 2;
    (graph, a, b)
}

fn enter_game(shell: &mut Shell, graph: &mut GraphState) {
    enter_editor(shell, graph);
    shell.handle_event(&InputEvent::KeyDown(Key::Other), graph);
    assert_eq!(shell.mode(), Mode::Game);
}

#[test]
fn test_game_release_fires_the_hovered_node() {
    let mut shell = shell();
    let (mut graph, a, b) = playable_pair();
    enter_game(&mut shell, &mut graph);

    // Left: lend along the single edge.
    click(&mut shell, &mut graph, Button::Left, 100.0, 100.0);
    assert_eq!(graph.get(a).unwrap().amount, -2);
    assert_eq!(graph.get(b).unwrap().amount, 3);
    assert_eq!(graph.total_dollars(), 1);

    // Right: borrow it back.
    click(&mut shell, &mut graph, Button::Right, 100.0, 100.0);
    assert_eq!(graph.get(a).unwrap().amount, -1);
    assert_eq!(graph.get(b).unwrap().amount, 2);
}

#[test]
fn test_game_hover_change_cancels_the_pending_move() {
    let mut shell = shell();
    let (mut graph, a, b) = playable_pair();
    enter_game(&mut shell, &mut graph);

    move_to(&mut shell, &mut graph, 100.0, 100.0);
    shell.handle_event(
        &InputEvent::PointerDown(Button::Left, Vec2::new(100.0, 100.0)),
        &mut graph,
    );
    // Sliding onto the other node drops the queued delta.
    move_to(&mut shell, &mut graph, 400.0, 100.0);
    shell.handle_event(
        &InputEvent::PointerUp(Button::Left, Vec2::new(400.0, 100.0)),
        &mut graph,
    );

    assert_eq!(graph.get(a).unwrap().amount, -1);
    assert_eq!(graph.get(b).unwrap().amount, 2);
}

#[test]
fn test_game_clicks_off_any_node_change_nothing() {
    let mut shell = shell();
    let (mut graph, a, b) = playable_pair();
    enter_game(&mut shell, &mut graph);

    click(&mut shell, &mut graph, Button::Left, 250.0, 300.0);
    assert_eq!(graph.get(a).unwrap().amount, -1);
    assert_eq!(graph.get(b).unwrap().amount, 2);
    assert_eq!(graph.node_count(), 2);
    assert_eq!(shell.mode(), Mode::Game);
}

#[test]
fn test_game_any_key_gives_up() {
    let mut shell = shell();
    let mut graph = GraphState::new();

    // Start a random round so the flag lifecycle is observable.
    shell.handle_event(&InputEvent::KeyDown(Key::R), &mut graph);
    shell.handle_event(&InputEvent::KeyDown(Key::Other), &mut graph);
    assert_eq!(shell.mode(), Mode::Game);

    shell.handle_event(&InputEvent::KeyDown(Key::Other), &mut graph);
    assert_eq!(shell.mode(), Mode::Title);
    assert!(!shell.is_solved());

    // Giving up cleared the random flag: re-entering the editor keeps the
    // graph instead of regenerating it.
    let snapshot = graph.clone();
    shell.handle_event(&InputEvent::KeyDown(Key::Other), &mut graph);
    assert_eq!(shell.mode(), Mode::Editor);
    assert_eq!(graph, snapshot);
}

#[test]
fn test_game_win_latches_and_a_press_leaves() {
    let mut shell = shell();
    let mut graph = GraphState::new();
    let a = graph.add_node(Vec2::new(100.0, 100.0));
    let b = graph.add_node(Vec2::new(400.0, 100.0));
    graph.add_edge(a, b).unwrap();
    graph.get_mut(b).unwrap().amount = 1;
    enter_game(&mut shell, &mut graph);
    assert!(!shell.is_solved());

    // The win check runs with the redraw cycle, not per event.
    shell.render(&graph);
    assert!(shell.is_solved());

    shell.handle_event(
        &InputEvent::PointerDown(Button::Left, Vec2::new(100.0, 100.0)),
        &mut graph,
    );
    assert_eq!(shell.mode(), Mode::Title);
    assert!(!shell.is_solved());
}

#[test]
fn test_quit_reaches_the_host_from_any_mode() {
    let mut shell = shell();
    let mut graph = GraphState::new();

    let effects = shell.handle_event(&InputEvent::Quit, &mut graph);
    assert_eq!(effects, vec![ShellEvent::QuitRequested]);
    assert_eq!(shell.mode(), Mode::Title);

    enter_editor(&mut shell, &mut graph);
    let effects = shell.handle_event(&InputEvent::Quit, &mut graph);
    assert_eq!(effects, vec![ShellEvent::QuitRequested]);
    assert_eq!(shell.mode(), Mode::Editor);
}

#[test]
fn test_needs_redraw_lifecycle() {
    let mut shell = shell();
    let mut graph = GraphState::new();
    assert!(shell.needs_redraw());

    shell.render(&graph);
    assert!(!shell.needs_redraw());

    enter_editor(&mut shell, &mut graph);
    assert!(shell.needs_redraw());
    shell.render(&graph);

    // A save request leaves the scene alone.
    shell.handle_event(&InputEvent::KeyDown(Key::S), &mut graph);
    assert!(!shell.needs_redraw());

    move_to(&mut shell, &mut graph, 10.0, 10.0);
    assert!(shell.needs_redraw());
}
