//! # DollarCanvas
//!
//! `dollar_canvas` is a headless core for the Dollar Game, the chip-firing
//! puzzle on an undirected graph: every node holds a signed dollar amount, a
//! move sends one dollar along every incident edge (or pulls one back from
//! each neighbor), and the goal is a state with no node in debt.
//!
//! The crate owns state, mathematics and game logic while delegating
//! rendering, window management and device polling to the host application.
//!
//! ## Core Architecture
//! - **Model (`src/model.rs`)**: graph state in a flat arena of id slots.
//! - **Interaction (`src/interaction.rs`)**: the Title/Editor/Game machine.
//! - **Painter (`src/painter.rs`)**: outputs `DrawCommand`s for the host.

pub mod config;
pub mod generate;
pub mod hit;
pub mod input;
pub mod interaction;
pub mod math;
pub mod model;
pub mod painter;
pub mod persistence;
pub mod render;

use input::{InputEvent, PointerState};
use interaction::{InteractionState, Session};
use model::GraphState;
use render::RenderList;

// Re-exports for convenience
pub use config::ShellConfig;
pub use interaction::{Mode, ShellEvent};

/// The main entry point for the library.
///
/// The `Shell` holds the transient state of the editor/player (mode, pointer
/// tracking, interaction snapshot, session flags) and configuration. The
/// graph itself stays outside so the host can load, save and replace it
/// freely.
pub struct Shell {
    /// Configuration settings.
    pub config: ShellConfig,
    mode: Mode,
    session: Session,
    pointer: PointerState,
}

impl Shell {
    /// Creates a new shell on the title screen.
    pub fn new(config: ShellConfig) -> Self {
        Self {
            config,
            mode: Mode::Title,
            session: Session {
                needs_redraw: true,
                ..Session::default()
            },
            pointer: PointerState::default(),
        }
    }

    /// Routes one abstract input event through the active mode.
    ///
    /// Graph and interaction state are mutated in place; the returned side
    /// effects (save, quit) are the host's to act on.
    pub fn handle_event(&mut self, event: &InputEvent, graph: &mut GraphState) -> Vec<ShellEvent> {
        let mut effects = Vec::new();
        self.pointer.apply(event);
        interaction::handle_event(
            &mut self.mode,
            &mut self.session,
            &self.config,
            &self.pointer,
            event,
            graph,
            &mut effects,
        );
        effects
    }

    /// Builds the draw list for the current frame and lowers the redraw
    /// flag. The Game-mode win check runs here, once per redraw cycle.
    pub fn render(&mut self, graph: &GraphState) -> RenderList {
        if self.mode == Mode::Game && !self.session.solved && graph.is_solved() {
            self.session.solved = true;
            self.session.interaction = InteractionState::default();
        }
        self.session.needs_redraw = false;
        painter::draw(self.mode, graph, &self.session, &self.config)
    }

    /// True when the scene changed since the last `render` call.
    pub fn needs_redraw(&self) -> bool {
        self.session.needs_redraw
    }

    /// The active mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Read-only view of the current interaction snapshot.
    pub fn interaction(&self) -> &InteractionState {
        &self.session.interaction
    }

    /// True once the win check has latched in Game mode.
    pub fn is_solved(&self) -> bool {
        self.session.solved
    }
}
