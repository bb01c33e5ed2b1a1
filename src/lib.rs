//! Gravity Sandbox - an interactive 2D N-body playground
//!
//! Core modules:
//! - `sim`: Bodies, the per-frame gravity step and pointer gestures
//! - `sandbox`: Ties the simulation, gestures and pointer together
//! - `renderer`: Drawing surface trait and the WebGPU pipeline
//! - `platform`: Canvas layout and pointer tracking
//! - `settings`: JSON-backed configuration

pub mod platform;
pub mod renderer;
pub mod sandbox;
pub mod settings;
pub mod sim;

pub use sandbox::Sandbox;
pub use settings::Settings;

/// Simulation constants
pub mod consts {
    /// Gravitational constant, tuned for pixel-scale bodies at one step per frame
    pub const GRAVITY: f64 = 0.005;
    /// Density used to derive mass from radius
    pub const DENSITY: f64 = 1.0;
    /// Speed given to a launched body (pixels per frame)
    pub const LAUNCH_SPEED: f64 = 3.0;
    /// Bodies created smaller than this are drawn red, larger ones yellow
    pub const SMALL_BODY_RADIUS: f64 = 15.0;
    /// Triangles per circle
    pub const CIRCLE_SEGMENTS: u32 = 48;
}
