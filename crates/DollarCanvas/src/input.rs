//! # Input Protocol
//!
//! Abstract input events the host application feeds into the shell. The host
//! owns the raw device loop and translates whatever its windowing layer
//! reports into these shapes; the core never polls anything.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Pointer buttons the core distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Button {
    Left,
    Right,
}

/// Keys the state machine cares about; everything else maps to `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// `r`/`R`: request a random graph from the title screen.
    R,
    /// `s`/`S`: request a save from the editor.
    S,
    /// Any other key.
    Other,
}

/// One abstract input event.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown(Key),
    PointerMove(Vec2),
    PointerDown(Button, Vec2),
    PointerUp(Button, Vec2),
    Quit,
}

/// Pointer position and button state, tracked across discrete events.
///
/// Motion can happen while a button is held, and the drag logic needs the
/// held state without re-deriving it from event history.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct PointerState {
    /// Last reported pointer position in screen space.
    pub pos: Vec2,
    /// Left button is currently held.
    pub left: bool,
    /// Right button is currently held.
    pub right: bool,
}

impl PointerState {
    /// Folds one event into the tracked state.
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerMove(pos) => self.pos = pos,
            InputEvent::PointerDown(button, pos) => {
                self.pos = pos;
                self.set(button, true);
            }
            InputEvent::PointerUp(button, pos) => {
                self.pos = pos;
                self.set(button, false);
            }
            InputEvent::KeyDown(_) | InputEvent::Quit => {}
        }
    }

    fn set(&mut self, button: Button, down: bool) {
        match button {
            Button::Left => self.left = down,
            Button::Right => self.right = down,
        }
    }
}
