//! The player's tank
//!
//! Commands never mutate the tank directly. `apply` produces a candidate
//! copy, `try_command` validates it against the world and only returns it
//! when it may be committed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bullet::{Bullet, Side};
use super::enemy::EnemyTank;
use super::geometry::{Arena, Rect};
use crate::consts::{PLAYER_ROTATION_SPEED, PLAYER_TANK_VELOCITY};
use crate::normalize_degrees;

/// Continuous (held-key) commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerCommand {
    RotateClockwise,
    RotateAntiClockwise,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
}

/// The player's tank
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerTank {
    pub bounds: Rect,
    /// Heading (degrees)
    pub heading: f32,
    pub speed: f32,
    /// Degrees per second
    pub rotation_speed: f32,
}

impl PlayerTank {
    /// A tank of `size` centered in the arena, facing right
    pub fn centered(arena: &Arena, size: Vec2) -> Self {
        Self {
            bounds: Rect::centered_on(arena.center(), size),
            heading: 0.0,
            speed: PLAYER_TANK_VELOCITY,
            rotation_speed: PLAYER_ROTATION_SPEED,
        }
    }

    /// Candidate state after applying `command` for `dt` seconds
    pub fn apply(&self, command: PlayerCommand, dt: f32) -> Self {
        let mut next = *self;
        let step = self.speed * dt;
        match command {
            PlayerCommand::RotateClockwise => {
                next.heading = normalize_degrees(self.heading + self.rotation_speed * dt);
            }
            PlayerCommand::RotateAntiClockwise => {
                next.heading = normalize_degrees(self.heading - self.rotation_speed * dt);
            }
            PlayerCommand::MoveUp => next.bounds = self.bounds.translated(Vec2::new(0.0, -step)),
            PlayerCommand::MoveDown => next.bounds = self.bounds.translated(Vec2::new(0.0, step)),
            PlayerCommand::MoveLeft => next.bounds = self.bounds.translated(Vec2::new(-step, 0.0)),
            PlayerCommand::MoveRight => next.bounds = self.bounds.translated(Vec2::new(step, 0.0)),
        }
        next
    }

    /// Candidate state if it stays inside the arena and clear of every enemy
    pub fn try_command(
        &self,
        command: PlayerCommand,
        dt: f32,
        enemies: &[EnemyTank],
        arena: &Arena,
    ) -> Option<Self> {
        let candidate = self.apply(command, dt);
        let blocked = enemies
            .iter()
            .any(|enemy| enemy.bounds.intersects(&candidate.bounds));
        if blocked || !arena.contains(&candidate.bounds) {
            None
        } else {
            Some(candidate)
        }
    }

    /// Fire along the current heading
    pub fn fire(&self, bullet_size: Vec2, velocity: f32) -> Bullet {
        Bullet::fired_from(&self.bounds, self.heading, bullet_size, velocity, Side::Player)
    }
}
