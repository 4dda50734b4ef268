//! # Rendering Contract
//!
//! The core never draws. It emits a display list of `DrawCommand`s and the
//! host application is responsible for interpreting them and drawing pixels.
//! Coordinates are in **Screen Space** (pixels).

use glam::{Vec2, Vec4};
use serde::{Deserialize, Serialize};

/// How the host should place a text run relative to `pos`.
///
/// Font metrics live on the host side, so alignment has to travel as a hint
/// instead of a precomputed offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    /// `pos` is the top-left corner of the run.
    TopLeft,
    /// `pos` is the top-right corner of the run.
    TopRight,
    /// `pos` is the center of the run.
    Center,
}

/// A single drawing primitive.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum DrawCommand {
    /// A circle with a fill and an optional stroke.
    Circle {
        /// Center in screen pixels.
        center: Vec2,
        /// Radius in screen pixels.
        radius: f32,
        /// Fill color (RGBA, 0.0 - 1.0); fully transparent fills are legal.
        fill: Vec4,
        /// Width of the outline stroke in pixels.
        stroke_width: f32,
        /// Color of the outline stroke.
        stroke_color: Option<Vec4>,
    },
    /// A straight line segment.
    Line {
        /// Start point in screen pixels.
        start: Vec2,
        /// End point in screen pixels.
        end: Vec2,
        /// Line color (RGBA, 0.0 - 1.0).
        color: Vec4,
        /// Line thickness in pixels.
        width: f32,
    },
    /// Text to be rendered. Styling and layout of text is handled by the
    /// consumer.
    Text {
        /// Anchor point in screen pixels.
        pos: Vec2,
        /// How `pos` relates to the laid-out run.
        anchor: TextAnchor,
        text: String,
        /// Text color.
        color: Vec4,
        /// Font size in pixels (approximate).
        size: f32,
    },
}

/// A list of draw commands representing the current frame.
pub type RenderList = Vec<DrawCommand>;
