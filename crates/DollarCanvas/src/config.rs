//! # Configuration
//!
//! This module defines the configuration struct for the shell.

use glam::{Vec2, Vec4};
use serde::{Deserialize, Serialize};

/// Configuration parameters for the shell.
///
/// These settings let the host application tune the feel of the editor and
/// the shape of generated puzzles.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Visual radius of a node circle in pixels. Also the source of both
    /// hit-test thresholds.
    pub node_radius: f32,
    /// Logical size of the play field in pixels. Anchors the generator
    /// layout and the painter's text placement.
    pub view_size: Vec2,
    /// Bounds for the random graph generator.
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// Visual styling configuration.
    #[serde(default)]
    pub style: ShellStyle,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            node_radius: 50.0,
            view_size: Vec2::new(1200.0, 900.0),
            generator: GeneratorConfig::default(),
            style: ShellStyle::default(),
        }
    }
}

impl ShellConfig {
    /// An edge slot is hovered below this perpendicular distance. The node
    /// hover threshold is `node_radius` itself: the pointer has to be inside
    /// the drawn circle.
    pub fn edge_hit_threshold(&self) -> f32 {
        self.node_radius * 0.5
    }
}

/// Bounds for the random graph generator.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Smallest node count, inclusive.
    pub min_nodes: u32,
    /// Largest node count, inclusive.
    pub max_nodes: u32,
    /// Lowest per-node starting amount, before the genus correction.
    pub min_amount: i64,
    /// Highest per-node starting amount, before the genus correction.
    pub max_amount: i64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_nodes: 4,
            max_nodes: 15,
            min_amount: -3,
            max_amount: 3,
        }
    }
}

/// RGBA palette of the scene (components 0.0 - 1.0).
///
/// The host interprets these when it executes the draw list; the core only
/// picks which role a primitive plays.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShellStyle {
    /// Background clear color.
    pub background_color: Vec4,
    /// Idle nodes and edges.
    pub graph_color: Vec4,
    /// Creation previews: the hovered not-yet-existing edge slot and the
    /// ghost node under the pointer.
    pub add_color: Vec4,
    /// Deletion previews: the hovered existing edge and any endpoint its
    /// removal would orphan.
    pub remove_color: Vec4,
    /// Hovered node, and its incident edges while playing.
    pub highlight_color: Vec4,
    /// Instruction and readout text.
    pub text_color: Vec4,
    /// Title banner.
    pub title_color: Vec4,
}

impl Default for ShellStyle {
    fn default() -> Self {
        Self {
            background_color: Vec4::new(0.91, 0.88, 0.79, 1.0),
            graph_color: Vec4::new(0.06, 0.25, 0.5, 1.0),
            add_color: Vec4::new(0.06, 0.75, 0.5, 1.0),
            remove_color: Vec4::new(1.0, 0.0, 0.0, 1.0),
            highlight_color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            text_color: Vec4::new(0.0, 0.0, 0.0, 1.0),
            title_color: Vec4::new(0.52, 0.73, 0.4, 1.0),
        }
    }
}
