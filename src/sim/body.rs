//! Gravitating bodies

use std::f64::consts::PI;
use std::fmt;

use super::vector::Vector2;
use crate::consts::{DENSITY, SMALL_BODY_RADIUS};
use crate::renderer::{Color, Surface, palette};

/// Mass of a body of the given radius.
///
/// The radius is treated as that of a sphere even though the world is 2D.
#[inline]
pub fn mass_for_radius(radius: f64) -> f64 {
    DENSITY * (4.0 / 3.0) * PI * radius.powi(3)
}

/// A circular mass
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub position: Vector2,
    pub velocity: Vector2,
    radius: f64,
    mass: f64,
    /// Being shaped by the pointer; also draws the pending velocity
    pub interactive: bool,
    pub fill: Color,
    pub stroke: Color,
}

impl Body {
    /// Body at rest. Use [`Body::with_velocity`] for an initial velocity.
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        let radius = radius.max(0.0);
        let fill = if radius < SMALL_BODY_RADIUS {
            palette::SMALL_BODY
        } else {
            palette::LARGE_BODY
        };
        Self {
            position: Vector2::new(x, y),
            velocity: Vector2::ZERO,
            radius,
            mass: mass_for_radius(radius),
            interactive: false,
            fill,
            stroke: palette::BODY_STROKE,
        }
    }

    pub fn with_velocity(mut self, velocity: Vector2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Resize the body, keeping mass in step with the radius
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius.max(0.0);
        self.mass = mass_for_radius(self.radius);
    }

    /// Displacement from this body's center to `other`'s
    #[inline]
    pub fn vector_to(&self, other: &Body) -> Vector2 {
        other.position - self.position
    }

    /// Share of the pair's combined mass held by this body
    pub fn mass_fraction(&self, other: &Body) -> f64 {
        let total = self.mass + other.mass;
        if total == 0.0 { 0.0 } else { self.mass / total }
    }

    /// Draw the body; interactive bodies also show their velocity vector
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_circle(self.position, self.radius, self.fill, self.stroke);

        if self.interactive {
            surface.line(
                self.position,
                self.position + self.velocity,
                palette::AIM_LINE,
            );
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Body(C({}, {}), radius: {}, velocity: {}, {})",
            self.position.x, self.position.y, self.radius, self.velocity.x, self.velocity.y
        )
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Surface that records draw calls in order
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSurface {
        pub calls: Vec<DrawCall>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum DrawCall {
        Clear(Color),
        Circle { center: Vector2, radius: f64, fill: Color },
        Line { from: Vector2, to: Vector2, color: Color },
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, color: Color) {
            self.calls.push(DrawCall::Clear(color));
        }

        fn fill_circle(&mut self, center: Vector2, radius: f64, fill: Color, _stroke: Color) {
            self.calls.push(DrawCall::Circle { center, radius, fill });
        }

        fn line(&mut self, from: Vector2, to: Vector2, color: Color) {
            self.calls.push(DrawCall::Line { from, to, color });
        }
    }

    #[test]
    fn test_mass_follows_sphere_volume() {
        let body = Body::new(0.0, 0.0, 2.0);
        let expected = 4.0 / 3.0 * PI * 8.0;
        assert!((body.mass() - expected).abs() < 1e-9);
        assert_eq!(Body::new(0.0, 0.0, 0.0).mass(), 0.0);
    }

    #[test]
    fn test_set_radius_recomputes_mass() {
        let mut body = Body::new(10.0, 10.0, 0.0);
        body.set_radius(30.0);
        assert_eq!(body.radius(), 30.0);
        assert_eq!(body.mass(), mass_for_radius(30.0));
    }

    #[test]
    fn test_radius_never_negative() {
        let mut body = Body::new(0.0, 0.0, -5.0);
        assert_eq!(body.radius(), 0.0);
        body.set_radius(-1.0);
        assert_eq!(body.radius(), 0.0);
        assert_eq!(body.mass(), 0.0);
    }

    #[test]
    fn test_default_velocity_is_zero() {
        let body = Body::new(1.0, 2.0, 3.0);
        assert_eq!(body.velocity, Vector2::ZERO);
        let moving = Body::new(1.0, 2.0, 3.0).with_velocity(Vector2::new(4.0, 0.0));
        assert_eq!(moving.velocity, Vector2::new(4.0, 0.0));
    }

    #[test]
    fn test_fill_depends_on_initial_radius() {
        assert_eq!(Body::new(0.0, 0.0, 14.99).fill, palette::SMALL_BODY);
        assert_eq!(Body::new(0.0, 0.0, 15.0).fill, palette::LARGE_BODY);
    }

    #[test]
    fn test_vector_to() {
        let a = Body::new(100.0, 200.0, 1.0);
        let b = Body::new(300.0, 150.0, 1.0);
        assert_eq!(a.vector_to(&b), Vector2::new(200.0, -50.0));
        assert_eq!(b.vector_to(&a), Vector2::new(-200.0, 50.0));
    }

    #[test]
    fn test_mass_fraction() {
        let a = Body::new(0.0, 0.0, 1.0);
        let b = Body::new(0.0, 0.0, 1.0);
        assert!((a.mass_fraction(&b) - 0.5).abs() < 1e-12);
        let empty = Body::new(0.0, 0.0, 0.0);
        assert_eq!(empty.mass_fraction(&empty), 0.0);
    }

    #[test]
    fn test_render_plain_body_draws_circle_only() {
        let body = Body::new(5.0, 6.0, 7.0).with_velocity(Vector2::new(1.0, 1.0));
        let mut surface = RecordingSurface::default();
        body.render(&mut surface);
        assert_eq!(
            surface.calls,
            vec![DrawCall::Circle {
                center: Vector2::new(5.0, 6.0),
                radius: 7.0,
                fill: palette::SMALL_BODY,
            }]
        );
    }

    #[test]
    fn test_render_interactive_body_draws_velocity_line() {
        let mut body = Body::new(50.0, 50.0, 30.0).with_velocity(Vector2::new(3.0, 3.0));
        body.interactive = true;
        let mut surface = RecordingSurface::default();
        body.render(&mut surface);
        assert_eq!(surface.calls.len(), 2);
        assert_eq!(
            surface.calls[1],
            DrawCall::Line {
                from: Vector2::new(50.0, 50.0),
                to: Vector2::new(53.0, 53.0),
                color: palette::AIM_LINE,
            }
        );
    }

    #[test]
    fn test_display() {
        let body = Body::new(1.0, 2.0, 3.0).with_velocity(Vector2::new(0.5, -1.0));
        assert_eq!(body.to_string(), "Body(C(1, 2), radius: 3, velocity: 0.5, -1)");
    }

    proptest! {
        #[test]
        fn test_mass_monotonic_in_radius(r1 in 0.0..500.0_f64, delta in 0.001..500.0_f64) {
            let r2 = r1 + delta;
            prop_assert!(mass_for_radius(r1) < mass_for_radius(r2));
        }
    }
}
