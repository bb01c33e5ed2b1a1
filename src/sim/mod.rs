//! Simulation module
//!
//! All physics and gesture logic lives here. Nothing in this module touches
//! the browser or the GPU:
//! - Unit timestep (one step per rendered frame)
//! - Stable iteration order (insertion order)
//! - Seeded RNG only

pub mod body;
pub mod interaction;
pub mod scene;
pub mod simulation;
pub mod vector;

pub use body::{Body, mass_for_radius};
pub use interaction::{Gesture, GesturePhase, InteractionController};
pub use scene::{BodyConfig, default_scene};
pub use simulation::{RunState, Simulation, velocity_delta};
pub use vector::{Direction, Vector2};
