//! Enemy tank behavior
//!
//! Each enemy sits idle until its behavior timer reaches its own randomly
//! drawn interval, then performs one action picked uniformly from the
//! level's action set. Moves produce a candidate box that is only committed
//! if it passes `valid_position`.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bullet::{Bullet, Side};
use super::geometry::{Arena, Rect};
use crate::error::PlacementError;
use crate::level::RotationMode;
use crate::{bearing_degrees, degrees_between, normalize_degrees};

/// Stable entity identifier (never reused within a run)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Autonomous actions an enemy can take when its timer fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyAction {
    Move,
    Rotate,
    Fire,
}

/// Cardinal move directions (screen space, y down)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn vector(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// An enemy tank
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyTank {
    pub id: EntityId,
    pub bounds: Rect,
    /// Current heading (degrees)
    pub heading: f32,
    /// Heading the tank is turning toward
    pub target_heading: f32,
    /// Seconds since the last action
    pub behavior_timer: f32,
    /// Seconds between actions, fixed at spawn
    pub behavior_interval: f32,
}

impl EnemyTank {
    pub fn new(id: EntityId, bounds: Rect, heading: f32, behavior_interval: f32) -> Self {
        let heading = normalize_degrees(heading);
        Self {
            id,
            bounds,
            heading,
            target_heading: heading,
            behavior_timer: 0.0,
            behavior_interval,
        }
    }

    /// Per-frame local update: behavior timer and rotation animation
    pub fn advance(&mut self, dt: f32, rotation: RotationMode) {
        self.behavior_timer += dt;

        match rotation {
            RotationMode::Snap => self.heading = self.target_heading,
            RotationMode::Animate { degrees_per_sec } => {
                let delta = degrees_between(self.heading, self.target_heading);
                let max_step = degrees_per_sec * dt;
                if delta.abs() <= max_step {
                    self.heading = self.target_heading;
                } else {
                    self.heading = normalize_degrees(self.heading + delta.signum() * max_step);
                }
            }
        }
    }

    /// Mutating poll: returns true and resets the timer once the interval elapsed
    pub fn will_act(&mut self) -> bool {
        if self.behavior_timer >= self.behavior_interval {
            self.behavior_timer = 0.0;
            true
        } else {
            false
        }
    }

    /// Candidate box after moving `speed * dt` toward `direction`
    pub fn move_candidate(&self, direction: Direction, speed: f32, dt: f32) -> Rect {
        self.bounds.translated(direction.vector() * speed * dt)
    }

    /// Pick a new target heading: the bearing to the player (when aiming and
    /// the coin flip says so) or a uniformly random heading
    pub fn pick_rotation_target(
        &mut self,
        rng: &mut impl Rng,
        player_center: Vec2,
        aim_at_player: bool,
        rotation: RotationMode,
    ) {
        let aim = aim_at_player && rng.random_bool(0.5);
        self.target_heading = if aim {
            bearing_degrees(self.bounds.center(), player_center)
        } else {
            rng.random_range(0.0..360.0)
        };
        if rotation == RotationMode::Snap {
            self.heading = self.target_heading;
        }
    }

    /// Fire along the current heading
    pub fn fire(&self, bullet_size: Vec2, velocity: f32) -> Bullet {
        Bullet::fired_from(&self.bounds, self.heading, bullet_size, velocity, Side::Enemy)
    }
}

/// Pick one action uniformly from the enabled set
pub fn choose_action(actions: &[EnemyAction], rng: &mut impl Rng) -> Option<EnemyAction> {
    if actions.is_empty() {
        return None;
    }
    Some(actions[rng.random_range(0..actions.len())])
}

/// A candidate box is valid if it stays inside the arena and overlaps neither
/// the player nor any other enemy (`moving` is excluded from the check)
pub fn valid_position(
    candidate: &Rect,
    moving: Option<EntityId>,
    others: &[EnemyTank],
    player: &Rect,
    arena: &Arena,
) -> bool {
    if !arena.contains(candidate) || candidate.intersects(player) {
        return false;
    }
    others
        .iter()
        .filter(|other| Some(other.id) != moving)
        .all(|other| !candidate.intersects(&other.bounds))
}

/// Rejection-sample a free box of `size` inside the arena.
///
/// Gives up after `max_attempts` samples instead of looping forever on a
/// saturated arena.
pub fn find_spawn_position(
    size: Vec2,
    others: &[EnemyTank],
    player: &Rect,
    arena: &Arena,
    rng: &mut impl Rng,
    max_attempts: u32,
) -> Result<Rect, PlacementError> {
    let free_x = arena.width - size.x;
    let free_y = arena.height - size.y;
    if free_x <= 0.0 || free_y <= 0.0 {
        return Err(PlacementError::ArenaSaturated { attempts: 0 });
    }

    for _ in 0..max_attempts {
        let candidate = Rect {
            pos: Vec2::new(rng.random_range(0.0..free_x), rng.random_range(0.0..free_y)),
            size,
        };
        if valid_position(&candidate, None, others, player, arena) {
            return Ok(candidate);
        }
    }

    Err(PlacementError::ArenaSaturated {
        attempts: max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn enemy(id: u32, x: f32, y: f32) -> EnemyTank {
        EnemyTank::new(EntityId(id), Rect::new(x, y, 32.0, 32.0), 0.0, 1.0)
    }

    #[test]
    fn test_will_act_resets_timer() {
        let mut e = enemy(1, 50.0, 50.0);
        e.advance(0.6, RotationMode::Snap);
        assert!(!e.will_act());
        assert!((e.behavior_timer - 0.6).abs() < 1e-6);

        e.advance(0.6, RotationMode::Snap);
        assert!(e.will_act());
        assert_eq!(e.behavior_timer, 0.0);
        // Second poll in the same frame does not fire again
        assert!(!e.will_act());
    }

    #[test]
    fn test_animated_rotation_converges() {
        let mut e = enemy(1, 50.0, 50.0);
        e.target_heading = 90.0;
        let mode = RotationMode::Animate {
            degrees_per_sec: 180.0,
        };
        e.advance(0.25, mode);
        assert!((e.heading - 45.0).abs() < 1e-3);
        e.advance(0.25, mode);
        assert!((e.heading - 90.0).abs() < 1e-3);
        // No overshoot
        e.advance(1.0, mode);
        assert!((e.heading - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_animated_rotation_wraps_short_way() {
        let mut e = enemy(1, 50.0, 50.0);
        e.heading = 350.0;
        e.target_heading = 10.0;
        e.advance(
            0.05,
            RotationMode::Animate {
                degrees_per_sec: 100.0,
            },
        );
        assert!((e.heading - 355.0).abs() < 1e-3);
    }

    #[test]
    fn test_snap_rotation() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut e = enemy(1, 50.0, 50.0);
        e.pick_rotation_target(&mut rng, Vec2::ZERO, false, RotationMode::Snap);
        assert_eq!(e.heading, e.target_heading);
        assert!((0.0..360.0).contains(&e.heading));
    }

    #[test]
    fn test_aim_at_player_bearing() {
        // With aiming enabled, over many draws some targets point exactly at the player
        let mut rng = Pcg32::seed_from_u64(3);
        let mut e = enemy(1, 100.0, 100.0);
        let player_center = Vec2::new(300.0, 116.0); // straight right of enemy center
        let mut aimed = 0;
        for _ in 0..50 {
            e.pick_rotation_target(&mut rng, player_center, true, RotationMode::Snap);
            if e.target_heading.abs() < 1e-3 {
                aimed += 1;
            }
        }
        assert!(aimed > 0);
    }

    #[test]
    fn test_move_candidate_cardinal() {
        let e = enemy(1, 100.0, 100.0);
        let c = e.move_candidate(Direction::Up, 310.0, 0.1);
        assert!((c.pos.y - 69.0).abs() < 1e-3);
        assert_eq!(c.pos.x, 100.0);
        // Candidate does not touch the tank itself
        assert_eq!(e.bounds.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_choose_action_respects_enabled_set() {
        let mut rng = Pcg32::seed_from_u64(11);
        let actions = [EnemyAction::Move, EnemyAction::Fire];
        for _ in 0..100 {
            let a = choose_action(&actions, &mut rng).unwrap();
            assert_ne!(a, EnemyAction::Rotate);
        }
        assert_eq!(choose_action(&[], &mut rng), None);
    }

    #[test]
    fn test_valid_position_rules() {
        let arena = Arena::new(500.0, 500.0);
        let player = Rect::new(234.0, 234.0, 32.0, 32.0);
        let others = vec![enemy(1, 100.0, 100.0), enemy(2, 300.0, 300.0)];
        let free = |x: f32, y: f32, moving: Option<EntityId>| {
            valid_position(&Rect::new(x, y, 32.0, 32.0), moving, &others, &player, &arena)
        };

        assert!(free(10.0, 10.0, None));
        // Overlaps enemy 1
        assert!(!free(110.0, 110.0, None));
        // Enemy 1 may overlap its own old box
        assert!(free(110.0, 110.0, Some(EntityId(1))));
        // Overlaps player
        assert!(!free(240.0, 240.0, None));
        // Touches arena edge
        assert!(!free(0.0, 10.0, None));
    }

    #[test]
    fn test_fire_inherits_heading() {
        let mut e = enemy(1, 100.0, 100.0);
        e.heading = 270.0;
        let b = e.fire(Vec2::new(8.0, 8.0), 500.0);
        assert_eq!(b.heading, 270.0);
        assert_eq!(b.side, Side::Enemy);
        assert_eq!(b.bounds.center(), e.bounds.center());
    }

    #[test]
    fn test_find_spawn_position_is_valid() {
        let mut rng = Pcg32::seed_from_u64(42);
        let arena = Arena::new(500.0, 500.0);
        let player = Rect::new(234.0, 234.0, 32.0, 32.0);
        let size = Vec2::new(32.0, 32.0);
        let mut placed: Vec<EnemyTank> = Vec::new();
        for i in 0..10 {
            let rect =
                find_spawn_position(size, &placed, &player, &arena, &mut rng, 10_000).unwrap();
            assert!(valid_position(&rect, None, &placed, &player, &arena));
            placed.push(EnemyTank::new(EntityId(i), rect, 0.0, 1.0));
        }
    }

    #[test]
    fn test_find_spawn_position_saturated_terminates() {
        // One enemy covers the whole sampling space except a single cell-sized gap
        let mut rng = Pcg32::seed_from_u64(5);
        let arena = Arena::new(100.0, 100.0);
        let player = Rect::new(1.0, 1.0, 10.0, 10.0);
        let blocker = EnemyTank::new(EntityId(1), Rect::new(11.0, 0.0, 89.0, 100.0), 0.0, 1.0);
        let blocker_low = EnemyTank::new(EntityId(2), Rect::new(0.0, 21.0, 11.0, 79.0), 0.0, 1.0);
        let others = vec![blocker, blocker_low];

        let size = Vec2::new(10.0, 10.0);
        let result = find_spawn_position(size, &others, &player, &arena, &mut rng, 500);
        match result {
            Ok(rect) => assert!(valid_position(&rect, None, &others, &player, &arena)),
            Err(err) => assert_eq!(err, PlacementError::ArenaSaturated { attempts: 500 }),
        }
    }

    #[test]
    fn test_find_spawn_position_fully_blocked() {
        let mut rng = Pcg32::seed_from_u64(9);
        let arena = Arena::new(100.0, 100.0);
        let player = Rect::new(1.0, 1.0, 10.0, 10.0);
        let wall = EnemyTank::new(EntityId(1), Rect::new(0.0, 0.0, 100.0, 100.0), 0.0, 1.0);

        let size = Vec2::new(10.0, 10.0);
        let result = find_spawn_position(size, &[wall], &player, &arena, &mut rng, 64);
        assert_eq!(result, Err(PlacementError::ArenaSaturated { attempts: 64 }));
    }

    #[test]
    fn test_find_spawn_position_sprite_larger_than_arena() {
        let mut rng = Pcg32::seed_from_u64(1);
        let arena = Arena::new(20.0, 20.0);
        let player = Rect::new(1.0, 1.0, 2.0, 2.0);
        let result = find_spawn_position(Vec2::new(32.0, 32.0), &[], &player, &arena, &mut rng, 10);
        assert!(result.is_err());
    }
}
