//! Pointer-driven body creation
//!
//! A press pauses the simulation and drops a zero-radius body under the
//! pointer. Dragging sizes it; the first release freezes the radius. The next
//! drag aims it; the second release launches it into the simulation at a
//! fixed speed and resumes the simulation.
//!
//! ```text
//! Idle --down--> Sizing --up (r > 0)--> Aiming --up--> Idle
//!                  ^  |
//!                  +--+ up (r == 0)
//! ```

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::body::Body;
use super::simulation::Simulation;
use super::vector::{Direction, Vector2};
use crate::consts::LAUNCH_SPEED;
use crate::renderer::Color;

/// Gesture in progress. The pending body lives here until it is launched.
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    Idle,
    /// Radius follows the pointer
    Sizing(Body),
    /// Radius is frozen; velocity follows the pointer
    Aiming(Body),
}

/// Discriminant of [`Gesture`] without the body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Sizing,
    Aiming,
}

/// Turns pointer events into new bodies
#[derive(Debug, Clone)]
pub struct InteractionController {
    gesture: Gesture,
    launch_speed: f64,
    rng: Pcg32,
}

impl InteractionController {
    pub fn new(launch_speed: f64, seed: u64) -> Self {
        Self {
            gesture: Gesture::Idle,
            launch_speed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Controller with the default launch speed
    pub fn with_seed(seed: u64) -> Self {
        Self::new(LAUNCH_SPEED, seed)
    }

    pub fn phase(&self) -> GesturePhase {
        match self.gesture {
            Gesture::Idle => GesturePhase::Idle,
            Gesture::Sizing(_) => GesturePhase::Sizing,
            Gesture::Aiming(_) => GesturePhase::Aiming,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.gesture, Gesture::Idle)
    }

    /// Body being sized or aimed, if any
    pub fn pending(&self) -> Option<&Body> {
        match &self.gesture {
            Gesture::Idle => None,
            Gesture::Sizing(body) | Gesture::Aiming(body) => Some(body),
        }
    }

    /// Start a new body at `at`.
    ///
    /// Only a running simulation with no gesture in progress reacts; the
    /// simulation is paused for the whole gesture. Returns whether a gesture
    /// started.
    pub fn pointer_down(&mut self, sim: &mut Simulation, at: Vector2) -> bool {
        if !self.is_idle() || sim.is_paused() {
            return false;
        }

        sim.pause();

        let mut body = Body::new(at.x, at.y, 0.0);
        body.fill = Color::random(&mut self.rng);
        body.interactive = true;

        log::debug!("Sizing new body at ({}, {})", at.x, at.y);
        self.gesture = Gesture::Sizing(body);
        true
    }

    /// Resize or re-aim the pending body toward `at`
    pub fn pointer_move(&mut self, at: Vector2) {
        match &mut self.gesture {
            Gesture::Idle => {}
            Gesture::Sizing(body) => {
                let d = at - body.position;
                body.set_radius(d.x.abs().max(d.y.abs()));
            }
            Gesture::Aiming(body) => {
                body.velocity = at - body.position;
            }
        }
    }

    /// Finish the current sub-gesture.
    ///
    /// Ends sizing (unless the radius is still zero) or launches the body.
    /// Ignored unless the simulation is paused. Returns the index of the
    /// launched body in the simulation.
    pub fn pointer_up(&mut self, sim: &mut Simulation) -> Option<usize> {
        if !sim.is_paused() {
            return None;
        }

        match std::mem::replace(&mut self.gesture, Gesture::Idle) {
            Gesture::Idle => None,
            Gesture::Sizing(body) => {
                if body.radius() > 0.0 {
                    log::debug!("Radius fixed at {}", body.radius());
                    self.gesture = Gesture::Aiming(body);
                } else {
                    // Nothing to aim yet: keep sizing until a radius exists
                    self.gesture = Gesture::Sizing(body);
                }
                None
            }
            Gesture::Aiming(mut body) => {
                body.velocity = body.velocity.unit() * self.launch_speed;
                body.interactive = false;
                log::info!("Launched {}", body);

                sim.add_body(body);
                sim.resume();
                Some(sim.bodies().len() - 1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::body::mass_for_radius;

    fn setup() -> (Simulation, InteractionController) {
        (Simulation::default(), InteractionController::with_seed(42))
    }

    #[test]
    fn test_full_gesture() {
        let (mut sim, mut ctl) = setup();

        assert!(ctl.pointer_down(&mut sim, Vector2::new(50.0, 50.0)));
        assert!(sim.is_paused());
        assert_eq!(ctl.phase(), GesturePhase::Sizing);
        let pending = ctl.pending().unwrap();
        assert_eq!(pending.radius(), 0.0);
        assert!(pending.interactive);
        assert!(sim.bodies().is_empty());

        ctl.pointer_move(Vector2::new(80.0, 50.0));
        assert_eq!(ctl.pending().unwrap().radius(), 30.0);
        assert_eq!(ctl.pending().unwrap().mass(), mass_for_radius(30.0));

        assert_eq!(ctl.pointer_up(&mut sim), None);
        assert_eq!(ctl.phase(), GesturePhase::Aiming);
        assert!(sim.is_paused());

        // Aim is the offset from the body's center
        ctl.pointer_move(Vector2::new(83.0, 53.0));
        assert_eq!(ctl.pending().unwrap().velocity, Vector2::new(33.0, 3.0));
        ctl.pointer_move(Vector2::new(53.0, 53.0));
        assert_eq!(ctl.pending().unwrap().velocity, Vector2::new(3.0, 3.0));
        assert_eq!(ctl.pending().unwrap().radius(), 30.0);

        assert_eq!(ctl.pointer_up(&mut sim), Some(0));
        assert!(!sim.is_paused());
        assert!(ctl.is_idle());
        assert!(ctl.pending().is_none());

        let body = &sim.bodies()[0];
        let expected = Vector2::new(3.0, 3.0).unit() * 3.0;
        assert!((body.velocity - expected).length() < 1e-12);
        assert!((body.velocity.length() - 3.0).abs() < 1e-12);
        assert!(!body.interactive);
        assert_eq!(body.position, Vector2::new(50.0, 50.0));
        assert_eq!(body.radius(), 30.0);
    }

    #[test]
    fn test_radius_uses_larger_axis() {
        let (mut sim, mut ctl) = setup();
        ctl.pointer_down(&mut sim, Vector2::new(100.0, 100.0));
        ctl.pointer_move(Vector2::new(90.0, 140.0));
        assert_eq!(ctl.pending().unwrap().radius(), 40.0);
        ctl.pointer_move(Vector2::new(100.0, 100.0));
        assert_eq!(ctl.pending().unwrap().radius(), 0.0);
    }

    #[test]
    fn test_zero_radius_release_stays_sizing() {
        let (mut sim, mut ctl) = setup();
        ctl.pointer_down(&mut sim, Vector2::new(10.0, 10.0));
        assert_eq!(ctl.pointer_up(&mut sim), None);
        assert_eq!(ctl.phase(), GesturePhase::Sizing);
        assert!(sim.is_paused());

        // A new press is ignored while the gesture is stuck
        assert!(!ctl.pointer_down(&mut sim, Vector2::new(20.0, 20.0)));
        assert_eq!(ctl.pending().unwrap().position, Vector2::new(10.0, 10.0));

        // Moving still resizes the same body
        ctl.pointer_move(Vector2::new(15.0, 10.0));
        assert_eq!(ctl.pending().unwrap().radius(), 5.0);
    }

    #[test]
    fn test_press_ignored_while_paused() {
        let (mut sim, mut ctl) = setup();
        sim.pause();
        assert!(!ctl.pointer_down(&mut sim, Vector2::new(1.0, 1.0)));
        assert!(ctl.is_idle());
    }

    #[test]
    fn test_release_ignored_while_running() {
        let (mut sim, mut ctl) = setup();
        ctl.pointer_down(&mut sim, Vector2::new(0.0, 0.0));
        ctl.pointer_move(Vector2::new(5.0, 0.0));
        sim.resume();
        assert_eq!(ctl.pointer_up(&mut sim), None);
        assert_eq!(ctl.phase(), GesturePhase::Sizing);
    }

    #[test]
    fn test_idle_events_are_noops() {
        let (mut sim, mut ctl) = setup();
        ctl.pointer_move(Vector2::new(5.0, 5.0));
        sim.pause();
        assert_eq!(ctl.pointer_up(&mut sim), None);
        assert!(ctl.is_idle());
        assert!(sim.bodies().is_empty());
    }

    #[test]
    fn test_launch_without_aim_is_at_rest() {
        let (mut sim, mut ctl) = setup();
        ctl.pointer_down(&mut sim, Vector2::new(0.0, 0.0));
        ctl.pointer_move(Vector2::new(8.0, 0.0));
        ctl.pointer_up(&mut sim);
        assert_eq!(ctl.pointer_up(&mut sim), Some(0));
        assert_eq!(sim.bodies()[0].velocity, Vector2::ZERO);
    }

    #[test]
    fn test_custom_launch_speed() {
        let mut sim = Simulation::default();
        let mut ctl = InteractionController::new(5.0, 1);
        ctl.pointer_down(&mut sim, Vector2::new(0.0, 0.0));
        ctl.pointer_move(Vector2::new(4.0, 0.0));
        ctl.pointer_up(&mut sim);
        ctl.pointer_move(Vector2::new(0.0, -100.0));
        ctl.pointer_up(&mut sim);
        assert!((sim.bodies()[0].velocity - Vector2::new(0.0, -5.0)).length() < 1e-12);
    }

    #[test]
    fn test_seeded_colors_repeat() {
        let mut sim_a = Simulation::default();
        let mut sim_b = Simulation::default();
        let mut a = InteractionController::with_seed(9);
        let mut b = InteractionController::with_seed(9);
        a.pointer_down(&mut sim_a, Vector2::ZERO);
        b.pointer_down(&mut sim_b, Vector2::ZERO);
        assert_eq!(a.pending().unwrap().fill, b.pending().unwrap().fill);
    }
}
