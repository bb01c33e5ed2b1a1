//! Platform glue
//!
//! Browser-independent pieces of the page integration:
//! - Canvas sizing from the client area
//! - Pointer position tracking in canvas coordinates

use serde::{Deserialize, Serialize};

use crate::sim::Vector2;

/// Space reserved around the canvas, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub horizontal: u32,
    /// Room for the page header and instructions
    pub vertical: u32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            horizontal: 10,
            vertical: 180,
        }
    }
}

/// Canvas size for a client area of `client_w` x `client_h`
pub fn layout(client_w: u32, client_h: u32, margins: Margins) -> (u32, u32) {
    (
        client_w.saturating_sub(margins.horizontal).max(1),
        client_h.saturating_sub(margins.vertical).max(1),
    )
}

/// Last known pointer position relative to the canvas
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    position: Vector2,
    /// Canvas top-left in client coordinates
    origin: Vector2,
}

impl Pointer {
    pub fn position(&self) -> Vector2 {
        self.position
    }

    /// Record where the canvas sits so client coordinates can be mapped
    pub fn set_origin(&mut self, left: f64, top: f64) {
        self.origin = Vector2::new(left, top);
    }

    /// Update from client (viewport) coordinates
    pub fn track_client(&mut self, client_x: f64, client_y: f64) -> Vector2 {
        self.position = Vector2::new(client_x, client_y) - self.origin;
        self.position
    }
}
