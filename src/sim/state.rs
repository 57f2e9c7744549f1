//! Game state and core simulation types
//!
//! Everything the frame step reads or writes lives here, including the
//! seeded RNG, so a run is reproducible from its seed and input stream.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bullet::{Bullet, Side};
use super::enemy::{EnemyTank, EntityId, find_spawn_position};
use super::explosion::Explosion;
use super::geometry::Arena;
use super::player::PlayerTank;
use super::spawn::SpawnController;
use crate::consts::BULLET_VELOCITY;
use crate::error::PlacementError;
use crate::level::LevelConfig;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Every enemy spawned and was destroyed
    Won,
    /// Quit requested
    Quit,
}

/// Things that happened during a tick, drained by the frame driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Shot { side: Side },
    EnemySpawned { id: EntityId },
    EnemyDestroyed { id: EntityId, center: Vec2 },
    PlayerWon,
    Quit,
}

/// Native sprite sizes; every entity box uses its sprite's size unscaled
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteSizes {
    pub player: Vec2,
    pub enemy: Vec2,
    pub bullet: Vec2,
}

impl Default for SpriteSizes {
    fn default() -> Self {
        Self {
            player: Vec2::new(32.0, 32.0),
            enemy: Vec2::new(32.0, 32.0),
            bullet: Vec2::new(8.0, 8.0),
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub arena: Arena,
    pub level: LevelConfig,
    pub sprites: SpriteSizes,
    pub bullet_velocity: f32,
    pub phase: GamePhase,
    /// Simulated seconds
    pub time: f32,
    pub frame: u64,
    pub player: PlayerTank,
    pub enemies: Vec<EnemyTank>,
    pub player_bullets: Vec<Bullet>,
    pub enemy_bullets: Vec<Bullet>,
    pub explosions: Vec<Explosion>,
    pub spawner: SpawnController,
    /// Pending events (drained by the frame driver)
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a level with its random initial population placed
    pub fn new(
        seed: u64,
        level: LevelConfig,
        arena: Arena,
        sprites: SpriteSizes,
    ) -> Result<Self, PlacementError> {
        let mut state = Self::empty(seed, level, arena, sprites);

        let min = state.level.initial_min.min(state.level.max_enemies);
        let max = state.level.initial_max();
        let initial = if max > min {
            state.rng.random_range(min..max)
        } else {
            min
        };

        for _ in 0..initial {
            state.spawn_enemy()?;
        }
        state.spawner = SpawnController::new(
            state.level.spawn_interval,
            state.level.max_enemies,
            initial,
        );
        state.events.clear();

        log::info!(
            "Level '{}' started: seed {}, {} of {} enemies alive",
            state.level.name,
            seed,
            initial,
            state.level.max_enemies
        );
        Ok(state)
    }

    /// A level with the player placed and no enemies yet
    pub fn empty(seed: u64, level: LevelConfig, arena: Arena, sprites: SpriteSizes) -> Self {
        let spawner = SpawnController::new(level.spawn_interval, level.max_enemies, 0);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            arena,
            player: PlayerTank::centered(&arena, sprites.player),
            level,
            sprites,
            bullet_velocity: BULLET_VELOCITY,
            phase: GamePhase::Playing,
            time: 0.0,
            frame: 0,
            enemies: Vec::new(),
            player_bullets: Vec::new(),
            enemy_bullets: Vec::new(),
            explosions: Vec::new(),
            spawner,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Place one new enemy via the placement search.
    ///
    /// Does not touch the spawn counter; callers own that bookkeeping.
    pub fn spawn_enemy(&mut self) -> Result<EntityId, PlacementError> {
        let bounds = find_spawn_position(
            self.sprites.enemy,
            &self.enemies,
            &self.player.bounds,
            &self.arena,
            &mut self.rng,
            self.level.placement_attempts,
        )?;
        let heading = self.rng.random_range(0.0..360.0);
        let interval = self.draw_behavior_interval();
        let id = self.next_entity_id();
        self.enemies.push(EnemyTank::new(id, bounds, heading, interval));
        self.events.push(GameEvent::EnemySpawned { id });
        log::debug!("Enemy {:?} spawned at {:?}", id, bounds.pos);
        Ok(id)
    }

    fn draw_behavior_interval(&mut self) -> f32 {
        let min = self.level.behavior_interval_min;
        let max = self.level.behavior_interval_max;
        if max > min {
            self.rng.random_range(min..max)
        } else {
            min
        }
    }

    /// Every enemy that will ever spawn has spawned and none is left
    pub fn is_won(&self) -> bool {
        self.spawner.exhausted() && self.enemies.is_empty()
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
