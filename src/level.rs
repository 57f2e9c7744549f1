//! Data-driven level tuning
//!
//! A level fixes the enemy population (initial range, cap, spawn cadence)
//! and how enemies behave.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{ENEMY_ROTATION_SPEED, PLACEMENT_MAX_ATTEMPTS};
use crate::error::ConfigError;
use crate::sim::enemy::EnemyAction;

/// How an enemy reaches a newly chosen heading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RotationMode {
    /// Heading jumps straight to the target
    Snap,
    /// Heading converges toward the target at a fixed rate
    Animate { degrees_per_sec: f32 },
}

/// Level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    pub name: String,
    /// Maximum number of enemies that will ever spawn
    pub max_enemies: u32,
    /// Lower bound of the initial population
    pub initial_min: u32,
    /// Seconds between timed spawns
    pub spawn_interval: f32,
    /// Enemy move speed (pixels/s)
    pub enemy_speed: f32,
    /// Per-enemy behavior interval drawn from [min, max)
    pub behavior_interval_min: f32,
    pub behavior_interval_max: f32,
    /// Actions an enemy picks from, uniformly
    pub actions: Vec<EnemyAction>,
    /// Rotate toward the player half of the time instead of always at random
    pub aim_at_player: bool,
    pub rotation: RotationMode,
    /// Placement search retry cap
    pub placement_attempts: u32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self::level_0()
    }
}

impl LevelConfig {
    /// The standard first level
    pub fn level_0() -> Self {
        Self {
            name: "level-0".to_string(),
            max_enemies: 10,
            initial_min: 2,
            spawn_interval: 3.0,
            enemy_speed: 310.0,
            behavior_interval_min: 1.0,
            behavior_interval_max: 3.0,
            actions: vec![EnemyAction::Move, EnemyAction::Rotate, EnemyAction::Fire],
            aim_at_player: true,
            rotation: RotationMode::Animate {
                degrees_per_sec: ENEMY_ROTATION_SPEED,
            },
            placement_attempts: PLACEMENT_MAX_ATTEMPTS,
        }
    }

    /// Level 0 with hyperactive enemies
    pub fn crazy() -> Self {
        Self {
            name: "crazy".to_string(),
            ..Self::level_0().with_crazy_tanks()
        }
    }

    /// Same level, enemies act every 0-0.5s
    pub fn with_crazy_tanks(self) -> Self {
        Self {
            behavior_interval_min: 0.0,
            behavior_interval_max: 0.5,
            ..self
        }
    }

    /// Look up a built-in level by name
    pub fn preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "level-0" | "0" => Some(Self::level_0()),
            "crazy" => Some(Self::crazy()),
            _ => None,
        }
    }

    /// Upper bound (exclusive) of the initial population: initial_min + cap/2,
    /// never above the cap
    pub fn initial_max(&self) -> u32 {
        (self.initial_min + self.max_enemies / 2).min(self.max_enemies)
    }

    /// Check internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_min > self.max_enemies {
            return Err(ConfigError::InvalidLevel(format!(
                "initial_min {} exceeds max_enemies {}",
                self.initial_min, self.max_enemies
            )));
        }
        if self.actions.is_empty() {
            return Err(ConfigError::InvalidLevel("no enemy actions enabled".into()));
        }
        if self.behavior_interval_min < 0.0
            || self.behavior_interval_max < self.behavior_interval_min
        {
            return Err(ConfigError::InvalidLevel(format!(
                "bad behavior interval range {}..{}",
                self.behavior_interval_min, self.behavior_interval_max
            )));
        }
        if self.spawn_interval < 0.0 || self.enemy_speed < 0.0 {
            return Err(ConfigError::InvalidLevel(
                "spawn_interval and enemy_speed must be non-negative".into(),
            ));
        }
        if self.placement_attempts == 0 {
            return Err(ConfigError::InvalidLevel("placement_attempts must be > 0".into()));
        }
        Ok(())
    }

    /// Load a level from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let level: LevelConfig = serde_json::from_str(&json)?;
        level.validate()?;
        log::info!("Loaded level '{}' from {}", level.name, path.display());
        Ok(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_0_is_valid() {
        let level = LevelConfig::level_0();
        assert!(level.validate().is_ok());
        assert_eq!(level.max_enemies, 10);
        assert_eq!(level.initial_max(), 7);
    }

    #[test]
    fn test_crazy_shortens_behavior_interval() {
        let crazy = LevelConfig::crazy();
        assert_eq!(crazy.behavior_interval_max, 0.5);
        assert_eq!(crazy.max_enemies, LevelConfig::level_0().max_enemies);
        assert!(crazy.validate().is_ok());
    }

    #[test]
    fn test_initial_max_capped() {
        let level = LevelConfig {
            max_enemies: 2,
            initial_min: 2,
            ..LevelConfig::level_0()
        };
        assert_eq!(level.initial_max(), 2);
    }

    #[test]
    fn test_validate_rejects_bad_levels() {
        let no_actions = LevelConfig {
            actions: Vec::new(),
            ..LevelConfig::level_0()
        };
        assert!(no_actions.validate().is_err());

        let too_many = LevelConfig {
            initial_min: 20,
            ..LevelConfig::level_0()
        };
        assert!(too_many.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let level: LevelConfig =
            serde_json::from_str(r#"{ "max_enemies": 4, "actions": ["Move", "Fire"] }"#).unwrap();
        assert_eq!(level.max_enemies, 4);
        assert_eq!(level.actions, vec![EnemyAction::Move, EnemyAction::Fire]);
        assert_eq!(level.spawn_interval, 3.0);
    }

    #[test]
    fn test_preset_lookup() {
        assert!(LevelConfig::preset("CRAZY").is_some());
        assert!(LevelConfig::preset("nope").is_none());
    }
}
