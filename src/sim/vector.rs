//! 2D vector value type
//!
//! Positions and velocities are plain `glam::DVec2` values. Double precision
//! keeps long-running orbits stable at pixel scale.

pub use glam::DVec2 as Vector2;

/// Direction helpers on top of the glam vector
pub trait Direction {
    /// Unit vector pointing the same way.
    ///
    /// A zero-length vector has no direction and yields `(0, 0)`. Coincident
    /// bodies therefore exert no force on each other.
    fn unit(self) -> Self;
}

impl Direction for Vector2 {
    #[inline]
    fn unit(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            return Vector2::ZERO;
        }
        Vector2::new(self.x / len, self.y / len)
    }
}
