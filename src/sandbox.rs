//! The running sandbox
//!
//! Owns the simulation, the gesture controller and the tracked pointer
//! together. The frame driver and the input handlers both work through one
//! `Sandbox`, so a pointer event can never land in the middle of a step.

use crate::platform::Pointer;
use crate::renderer::Surface;
use crate::settings::Settings;
use crate::sim::{GesturePhase, InteractionController, Simulation};

pub struct Sandbox {
    pub simulation: Simulation,
    pub controller: InteractionController,
    pub pointer: Pointer,
}

impl Sandbox {
    /// Build from settings; `seed` is used when the settings don't pin one
    pub fn new(settings: &Settings, seed: u64) -> Self {
        let seed = settings.seed.unwrap_or(seed);
        log::info!("Sandbox seed: {}", seed);
        Self {
            simulation: Simulation::from_scene(
                &settings.scene,
                settings.gravity,
                settings.background,
            ),
            controller: InteractionController::new(settings.launch_speed, seed),
            pointer: Pointer::default(),
        }
    }

    /// One animation frame: advance physics, then draw
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.simulation.step();
        self.render(surface);
    }

    /// Draw the simulation with the pending body on top
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.simulation.render(surface);
        if let Some(body) = self.controller.pending() {
            body.render(surface);
        }
    }

    pub fn pointer_moved(&mut self, client_x: f64, client_y: f64) {
        let at = self.pointer.track_client(client_x, client_y);
        self.controller.pointer_move(at);
    }

    pub fn pointer_pressed(&mut self) -> bool {
        let at = self.pointer.position();
        self.controller.pointer_down(&mut self.simulation, at)
    }

    pub fn pointer_released(&mut self) -> Option<usize> {
        self.controller.pointer_up(&mut self.simulation)
    }

    /// Keyboard pause. Refused mid-gesture, which keeps the simulation
    /// paused for as long as a body is being placed.
    pub fn toggle_pause(&mut self) -> bool {
        if self.controller.phase() != GesturePhase::Idle {
            log::debug!("Pause toggle ignored during {:?}", self.controller.phase());
            return false;
        }
        self.simulation.toggle_pause();
        true
    }
}
