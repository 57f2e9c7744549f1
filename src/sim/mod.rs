//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, owned by the game state
//! - dt threaded in from the caller
//! - No rendering, audio or platform dependencies

pub mod bullet;
pub mod collision;
pub mod enemy;
pub mod explosion;
pub mod geometry;
pub mod player;
pub mod spawn;
pub mod state;
pub mod tick;

pub use bullet::{Bullet, Side};
pub use collision::{bullet_hits_enemy, prune_out_of_bounds, resolve_bullet_hits};
pub use enemy::{
    Direction, EnemyAction, EnemyTank, EntityId, choose_action, find_spawn_position,
    valid_position,
};
pub use explosion::{EXPLOSION_FRAMES, Explosion};
pub use geometry::{Arena, Rect};
pub use player::{PlayerCommand, PlayerTank};
pub use spawn::SpawnController;
pub use state::{GameEvent, GamePhase, GameState, SpriteSizes};
pub use tick::{TickInput, tick};
