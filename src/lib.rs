//! Tank Arena - A top-down arena shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, enemy behavior, bullets, collisions)
//! - `level`: Data-driven level tuning
//! - `settings`: Runtime configuration (seed, key bindings, audio, video)
//! - `input`: Key bindings and per-frame input mapping
//! - `renderer`: Renderer contract and scene building
//! - `platform`: Clock/input contracts and a headless platform
//! - `game`: Frame driver tying the sim to its collaborators

pub mod assets;
pub mod audio;
pub mod error;
pub mod game;
pub mod input;
pub mod level;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{AudioError, ConfigError, PlacementError, StartupError};
pub use game::Game;
pub use level::LevelConfig;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (pixels)
    pub const ARENA_WIDTH: f32 = 500.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    /// Bullet speed (pixels/s)
    pub const BULLET_VELOCITY: f32 = 500.0;
    /// Player tank speed (pixels/s)
    pub const PLAYER_TANK_VELOCITY: f32 = 300.0;
    /// Player rotation rate (degrees/s)
    pub const PLAYER_ROTATION_SPEED: f32 = 500.0;
    /// Enemy turret rotation rate when rotation is animated (degrees/s)
    pub const ENEMY_ROTATION_SPEED: f32 = 180.0;

    /// Explosion animation sheet: 8x8 cells of 128x128 pixels
    pub const EXPLOSION_CELL_WIDTH: f32 = 128.0;
    pub const EXPLOSION_CELL_HEIGHT: f32 = 128.0;
    pub const EXPLOSION_COLUMNS: usize = 8;
    pub const EXPLOSION_ROWS: usize = 8;
    /// Total explosion lifetime (seconds)
    pub const EXPLOSION_LIFE_SPAN: f32 = 0.5;

    /// Rejection-sampling cap for enemy placement
    pub const PLACEMENT_MAX_ATTEMPTS: u32 = 10_000;
}

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees.to_radians()
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(radians: f32) -> f32 {
    radians.to_degrees()
}

/// Normalized heading to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Signed shortest difference `to - from`, in (-180, 180]
#[inline]
pub fn degrees_between(from: f32, to: f32) -> f32 {
    let mut delta = normalize_degrees(to) - normalize_degrees(from);
    if delta > 180.0 {
        delta -= 360.0;
    } else if delta <= -180.0 {
        delta += 360.0;
    }
    delta
}

/// Unit vector for a heading in degrees (0 = +X, clockwise on a y-down screen)
#[inline]
pub fn heading_vector(degrees: f32) -> Vec2 {
    let radians = deg_to_rad(degrees);
    Vec2::new(radians.cos(), radians.sin())
}

/// Heading (degrees) pointing from `from` toward `to`
#[inline]
pub fn bearing_degrees(from: Vec2, to: Vec2) -> f32 {
    let delta = to - from;
    normalize_degrees(rad_to_deg(delta.y.atan2(delta.x)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert!((normalize_degrees(370.0) - 10.0).abs() < 1e-4);
        assert!((normalize_degrees(-90.0) - 270.0).abs() < 1e-4);
        assert!(normalize_degrees(-1e-9) < 360.0);
    }

    #[test]
    fn test_degrees_between_takes_short_way() {
        assert!((degrees_between(350.0, 10.0) - 20.0).abs() < 1e-4);
        assert!((degrees_between(10.0, 350.0) + 20.0).abs() < 1e-4);
        assert!((degrees_between(0.0, 180.0) - 180.0).abs() < 1e-4);
    }

    #[test]
    fn test_heading_zero_faces_right() {
        let v = heading_vector(0.0);
        assert!((v.x - 1.0).abs() < 1e-6);
        assert!(v.y.abs() < 1e-6);

        // 90 degrees points down the screen (y-down)
        let down = heading_vector(90.0);
        assert!(down.x.abs() < 1e-6);
        assert!((down.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_bearing_degrees() {
        let origin = Vec2::new(10.0, 10.0);
        assert!(bearing_degrees(origin, Vec2::new(20.0, 10.0)).abs() < 1e-4);
        assert!((bearing_degrees(origin, Vec2::new(10.0, 20.0)) - 90.0).abs() < 1e-4);
        assert!((bearing_degrees(origin, Vec2::new(0.0, 10.0)) - 180.0).abs() < 1e-4);
    }
}
