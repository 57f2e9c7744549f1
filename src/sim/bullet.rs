//! Straight-line projectiles
//!
//! A bullet inherits its heading from the firer and never changes it; only
//! its position advances.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Arena, Rect};
use crate::heading_vector;

/// Which side fired a bullet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

/// A projectile in flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub bounds: Rect,
    /// Heading in degrees, fixed at creation
    pub heading: f32,
    /// Scalar speed (pixels/s)
    pub velocity: f32,
    pub side: Side,
}

impl Bullet {
    /// Spawn a bullet centered on the firer's box, facing the firer's heading
    pub fn fired_from(firer: &Rect, heading: f32, size: Vec2, velocity: f32, side: Side) -> Self {
        Self {
            bounds: Rect::centered_on(firer.center(), size),
            heading,
            velocity,
            side,
        }
    }

    /// Integrate one time step
    pub fn advance(&mut self, dt: f32) {
        let delta = heading_vector(self.heading) * self.velocity * dt;
        self.bounds = self.bounds.translated(delta);
    }

    /// Forward-center point of the box along the heading; the hit-test primitive
    pub fn nose(&self) -> Vec2 {
        let half = self.bounds.size / 2.0;
        self.bounds.center() + heading_vector(self.heading) * half
    }

    /// Removal trigger: any part of the box has left the arena
    pub fn is_out_of_bounds(&self, arena: &Arena) -> bool {
        !arena.contains(&self.bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bullet_at(x: f32, y: f32, heading: f32) -> Bullet {
        Bullet {
            bounds: Rect::new(x, y, 8.0, 8.0),
            heading,
            velocity: 500.0,
            side: Side::Player,
        }
    }

    #[test]
    fn test_fired_from_centers_on_firer() {
        let firer = Rect::new(100.0, 100.0, 32.0, 32.0);
        let b = Bullet::fired_from(&firer, 45.0, Vec2::new(8.0, 8.0), 500.0, Side::Enemy);
        assert_eq!(b.bounds.pos, Vec2::new(112.0, 112.0));
        assert_eq!(b.bounds.center(), firer.center());
        assert_eq!(b.heading, 45.0);
        assert_eq!(b.side, Side::Enemy);
    }

    #[test]
    fn test_advance_heading_zero() {
        let mut b = bullet_at(90.0, 108.0, 0.0);
        b.advance(0.05);
        assert!((b.bounds.pos.x - 115.0).abs() < 1e-4);
        assert!((b.bounds.pos.y - 108.0).abs() < 1e-4);
    }

    #[test]
    fn test_nose_point_heading_zero_is_front_center() {
        let b = bullet_at(115.0, 108.0, 0.0);
        let nose = b.nose();
        assert!((nose.x - 123.0).abs() < 1e-4);
        assert!((nose.y - 112.0).abs() < 1e-4);
    }

    #[test]
    fn test_nose_point_follows_heading() {
        let b = bullet_at(100.0, 100.0, 180.0);
        let nose = b.nose();
        assert!((nose.x - 100.0).abs() < 1e-4);
        assert!((nose.y - 104.0).abs() < 1e-4);
    }

    #[test]
    fn test_out_of_bounds_when_partially_outside() {
        let arena = Arena::new(500.0, 500.0);
        assert!(!bullet_at(250.0, 250.0, 0.0).is_out_of_bounds(&arena));
        assert!(bullet_at(495.0, 250.0, 0.0).is_out_of_bounds(&arena));
        assert!(bullet_at(-1.0, 250.0, 0.0).is_out_of_bounds(&arena));
    }
}
