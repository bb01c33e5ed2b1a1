//! N-body simulation
//!
//! One [`Simulation::step`] per rendered frame:
//! 1. every ordered pair (i, j), i != j, adds `G * m_j / d^2` toward j to
//!    body i's velocity (away from j when the two overlap)
//! 2. every body moves by its velocity (unit timestep)
//!
//! Velocities are updated in place while the pair loop is still running.
//! The force only depends on positions and masses, which do not change until
//! phase 2, but each direction of a pair is still its own update: body i and
//! body j receive independent deltas, with no shared action/reaction.

use super::body::Body;
use super::scene::BodyConfig;
use super::vector::{Direction, Vector2};
use crate::consts::GRAVITY;
use crate::renderer::{Color, Surface, palette};

/// Whether `step` advances the physics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Running,
    Paused,
}

/// Owns every committed body and advances them frame by frame
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Insertion order, which is also the pairwise iteration order
    bodies: Vec<Body>,
    state: RunState,
    gravity: f64,
    background: Color,
    /// Steps actually executed (paused frames don't count)
    ticks: u64,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(GRAVITY, palette::BACKGROUND)
    }
}

impl Simulation {
    /// Empty, running simulation
    pub fn new(gravity: f64, background: Color) -> Self {
        Self {
            bodies: Vec::new(),
            state: RunState::Running,
            gravity,
            background,
            ticks: 0,
        }
    }

    /// Running simulation populated from a scene
    pub fn from_scene(scene: &[BodyConfig], gravity: f64, background: Color) -> Self {
        let mut sim = Self::new(gravity, background);
        for config in scene {
            sim.add_body(config.to_body());
        }
        log::debug!("Simulation created with {} bodies", sim.bodies.len());
        sim
    }

    /// Append a body. Radius 0 is allowed.
    pub fn add_body(&mut self, body: Body) {
        self.bodies.push(body);
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_paused(&self) -> bool {
        self.state == RunState::Paused
    }

    pub fn pause(&mut self) {
        if self.state != RunState::Paused {
            log::debug!("Simulation paused at tick {}", self.ticks);
        }
        self.state = RunState::Paused;
    }

    pub fn resume(&mut self) {
        if self.state != RunState::Running {
            log::debug!("Simulation resumed at tick {}", self.ticks);
        }
        self.state = RunState::Running;
    }

    pub fn toggle_pause(&mut self) {
        match self.state {
            RunState::Running => self.pause(),
            RunState::Paused => self.resume(),
        }
    }

    /// Advance one frame; does nothing while paused
    pub fn step(&mut self) {
        if self.is_paused() {
            return;
        }
        self.accumulate_velocities();
        self.integrate_positions();
        self.ticks += 1;
    }

    /// Clear to the background color, then draw bodies in insertion order
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.background);
        for body in &self.bodies {
            body.render(surface);
        }
    }

    fn accumulate_velocities(&mut self) {
        let n = self.bodies.len();
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let delta = velocity_delta(&self.bodies[i], &self.bodies[j], self.gravity);
                self.bodies[i].velocity += delta;
            }
        }
    }

    fn integrate_positions(&mut self) {
        for body in &mut self.bodies {
            body.position += body.velocity;
        }
    }
}

/// Velocity change of `body` caused by `other` over one frame.
///
/// Overlapping bodies push apart instead of attracting. Coincident centers
/// have no direction and contribute nothing.
pub fn velocity_delta(body: &Body, other: &Body, gravity: f64) -> Vector2 {
    let offset = body.vector_to(other);
    let dist = offset.length();
    if dist == 0.0 {
        return Vector2::ZERO;
    }

    let accel = gravity * other.mass() / (dist * dist);
    let mut delta = offset.unit() * accel;

    if dist < body.radius() + other.radius() {
        // Mass share is only reported; the response is a plain sign flip
        log::trace!(
            "Overlap at distance {:.3}, mass fraction {:.3}",
            dist,
            body.mass_fraction(other)
        );
        delta = -delta;
    }

    delta
}
