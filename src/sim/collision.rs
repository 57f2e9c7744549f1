//! Collision detection and pruning
//!
//! Hits use the bullet's nose point against enemy boxes rather than full box
//! overlap. Removal is swap-with-last since collection order carries no
//! meaning.

use super::bullet::Bullet;
use super::enemy::EnemyTank;
use super::geometry::Arena;

/// Remove bullets whose box is no longer fully inside the arena.
/// Returns how many were removed.
pub fn prune_out_of_bounds(bullets: &mut Vec<Bullet>, arena: &Arena) -> usize {
    let before = bullets.len();
    let mut i = 0;
    while i < bullets.len() {
        if bullets[i].is_out_of_bounds(arena) {
            // The swapped-in bullet lands at `i` and is checked next pass
            bullets.swap_remove(i);
        } else {
            i += 1;
        }
    }
    before - bullets.len()
}

/// Whether a bullet's nose has entered the enemy's box
#[inline]
pub fn bullet_hits_enemy(bullet: &Bullet, enemy: &EnemyTank) -> bool {
    enemy.bounds.contains_point(bullet.nose())
}

/// Destroy every enemy struck by one of `bullets`.
///
/// Destroyed enemies are physically removed from `enemies` and returned.
/// Bullets pierce: they are not consumed by a hit.
pub fn resolve_bullet_hits(bullets: &[Bullet], enemies: &mut Vec<EnemyTank>) -> Vec<EnemyTank> {
    let mut destroyed = Vec::new();
    for bullet in bullets {
        let mut i = 0;
        while i < enemies.len() {
            if bullet_hits_enemy(bullet, &enemies[i]) {
                destroyed.push(enemies.swap_remove(i));
            } else {
                i += 1;
            }
        }
    }
    destroyed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::bullet::Side;
    use crate::sim::enemy::EntityId;
    use crate::sim::geometry::Rect;

    fn bullet(x: f32, y: f32, heading: f32) -> Bullet {
        Bullet {
            bounds: Rect::new(x, y, 8.0, 8.0),
            heading,
            velocity: 500.0,
            side: Side::Player,
        }
    }

    fn enemy(id: u32, x: f32, y: f32) -> EnemyTank {
        EnemyTank::new(EntityId(id), Rect::new(x, y, 32.0, 32.0), 0.0, 1.0)
    }

    #[test]
    fn test_prune_removes_adjacent_out_of_bounds() {
        let arena = Arena::new(500.0, 500.0);
        // Two consecutive out-of-bounds bullets must both go
        let mut bullets = vec![
            bullet(600.0, 10.0, 0.0),
            bullet(-20.0, 10.0, 0.0),
            bullet(100.0, 100.0, 0.0),
            bullet(100.0, 497.0, 0.0),
        ];
        let removed = prune_out_of_bounds(&mut bullets, &arena);
        assert_eq!(removed, 3);
        assert_eq!(bullets.len(), 1);
        assert_eq!(bullets[0].bounds.pos.x, 100.0);
    }

    #[test]
    fn test_nose_hit_destroys_enemy() {
        let mut b = bullet(90.0, 108.0, 0.0);
        b.advance(0.05);
        let mut enemies = vec![enemy(1, 100.0, 100.0)];
        let destroyed = resolve_bullet_hits(&[b], &mut enemies);
        assert_eq!(destroyed.len(), 1);
        assert_eq!(destroyed[0].id, EntityId(1));
        assert!(enemies.is_empty());
    }

    #[test]
    fn test_tail_overlap_is_not_a_hit() {
        // Bullet box overlaps the enemy but its nose points away and sits outside
        let b = bullet(128.0, 108.0, 0.0);
        let e = enemy(1, 100.0, 100.0);
        assert!(b.bounds.intersects(&e.bounds));
        assert!(!bullet_hits_enemy(&b, &e));
    }

    #[test]
    fn test_bullet_pierces_stacked_enemies() {
        // Nose point (123, 112) lies in both boxes
        let b = bullet(115.0, 108.0, 0.0);
        let mut enemies = vec![
            enemy(1, 100.0, 100.0),
            enemy(2, 120.0, 90.0),
            enemy(3, 300.0, 300.0),
        ];
        let destroyed = resolve_bullet_hits(&[b], &mut enemies);
        let mut ids: Vec<u32> = destroyed.iter().map(|e| e.id.0).collect();
        ids.sort();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(enemies.len(), 1);
        assert_eq!(enemies[0].id, EntityId(3));
    }
}
