//! Surface implementation that collects triangles for the GPU

use super::color::{Color, palette};
use super::shapes;
use super::vertex::Vertex;
use super::Surface;
use crate::sim::Vector2;

/// Stroke and line width in pixels
const STROKE_WIDTH: f32 = 1.0;

/// Bounds for segments per circle; configured values are clamped into this range
const MIN_SEGMENTS: u32 = 3;
const MAX_SEGMENTS: u32 = 1024;

/// Records draw calls as a triangle list in pixel coordinates.
///
/// Triangles are kept in draw order, so later calls paint over earlier ones.
#[derive(Debug, Clone)]
pub struct MeshSurface {
    vertices: Vec<Vertex>,
    clear_color: Color,
    segments: u32,
}

impl Default for MeshSurface {
    fn default() -> Self {
        Self::new(crate::consts::CIRCLE_SEGMENTS)
    }
}

impl MeshSurface {
    pub fn new(segments: u32) -> Self {
        Self {
            vertices: Vec::new(),
            clear_color: palette::BACKGROUND,
            segments: segments.clamp(MIN_SEGMENTS, MAX_SEGMENTS),
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Color of the most recent `clear`
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }
}

impl Surface for MeshSurface {
    fn clear(&mut self, color: Color) {
        self.vertices.clear();
        self.clear_color = color;
    }

    fn fill_circle(&mut self, center: Vector2, radius: f64, fill: Color, stroke: Color) {
        if radius <= 0.0 {
            return;
        }
        let center = center.as_vec2();
        let radius = radius as f32;

        self.vertices
            .extend(shapes::circle(center, radius, fill.to_rgba(), self.segments));
        self.vertices.extend(shapes::ring(
            center,
            (radius - STROKE_WIDTH * 0.5).max(0.0),
            radius + STROKE_WIDTH * 0.5,
            stroke.to_rgba(),
            self.segments,
        ));
    }

    fn line(&mut self, from: Vector2, to: Vector2, color: Color) {
        self.vertices.extend(shapes::line(
            from.as_vec2(),
            to.as_vec2(),
            STROKE_WIDTH,
            color.to_rgba(),
        ));
    }
}
