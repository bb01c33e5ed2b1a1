//! Starting scenes
//!
//! A scene is the list of bodies present when the simulation starts. It is
//! part of [`Settings`](crate::Settings) so it can be overridden from JSON.

use serde::{Deserialize, Serialize};

use super::body::Body;
use super::vector::Vector2;

/// Serializable description of a starting body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    /// Initial velocity in pixels per frame
    #[serde(default)]
    pub velocity: [f64; 2],
}

impl BodyConfig {
    pub const fn new(x: f64, y: f64, radius: f64, velocity: [f64; 2]) -> Self {
        Self { x, y, radius, velocity }
    }

    pub fn to_body(&self) -> Body {
        Body::new(self.x, self.y, self.radius)
            .with_velocity(Vector2::new(self.velocity[0], self.velocity[1]))
    }
}

/// One heavy star with three lighter bodies in flight
pub fn default_scene() -> Vec<BodyConfig> {
    vec![
        BodyConfig::new(300.0, 300.0, 50.0, [0.0, 0.0]),
        BodyConfig::new(100.0, 200.0, 10.0, [1.2, -2.0]),
        BodyConfig::new(290.0, 100.0, 14.99, [4.0, 0.0]),
        BodyConfig::new(290.0, 500.0, 4.0, [4.0, 1.0]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scene() {
        let bodies: Vec<Body> = default_scene().iter().map(BodyConfig::to_body).collect();
        assert_eq!(bodies.len(), 4);
        assert_eq!(bodies[0].position, Vector2::new(300.0, 300.0));
        assert_eq!(bodies[0].velocity, Vector2::ZERO);
        assert_eq!(bodies[1].velocity, Vector2::new(1.2, -2.0));
        assert_eq!(bodies[2].radius(), 14.99);
        assert_eq!(bodies[3].velocity, Vector2::new(4.0, 1.0));
    }

    #[test]
    fn test_velocity_defaults_to_rest() {
        let config: BodyConfig = serde_json::from_str(r#"{"x": 1, "y": 2, "radius": 3}"#).unwrap();
        assert_eq!(config.velocity, [0.0, 0.0]);
        assert_eq!(config.to_body().velocity, Vector2::ZERO);
    }
}
