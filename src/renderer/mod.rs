//! Rendering module
//!
//! The simulation draws through the [`Surface`] trait. [`MeshSurface`]
//! tessellates those calls into triangles that the WebGPU pipeline uploads
//! once per frame.

pub mod color;
pub mod mesh;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use color::{Color, palette};
pub use mesh::MeshSurface;
pub use pipeline::RenderState;

use crate::sim::Vector2;

/// A 2D drawing context in pixel coordinates (origin top-left, y down)
pub trait Surface {
    /// Wipe everything drawn so far and fill with `color`
    fn clear(&mut self, color: Color);

    /// Filled circle with a 1-pixel outline
    fn fill_circle(&mut self, center: Vector2, radius: f64, fill: Color, stroke: Color);

    /// 1-pixel line segment
    fn line(&mut self, from: Vector2, to: Vector2, color: Color);
}
