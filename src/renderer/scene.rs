//! Converts a game state into draw commands

use super::{Renderer, Sprite};
use crate::assets::Assets;
use crate::sim::GameState;

/// Draw one full frame: explosions underneath, then the player, player
/// bullets, enemies and enemy bullets
pub fn draw_scene(renderer: &mut impl Renderer, state: &GameState, assets: &Assets) {
    renderer.clear();

    for explosion in &state.explosions {
        renderer.draw_sprite(&Sprite {
            texture: assets.explosion.handle,
            source: Some(explosion.source_cell()),
            dest: explosion.bounds,
            rotation: 0.0,
        });
    }

    renderer.draw_sprite(&Sprite {
        texture: assets.player.handle,
        source: None,
        dest: state.player.bounds,
        rotation: state.player.heading,
    });

    for bullet in &state.player_bullets {
        renderer.draw_sprite(&Sprite {
            texture: assets.bullet.handle,
            source: None,
            dest: bullet.bounds,
            rotation: bullet.heading,
        });
    }

    for enemy in &state.enemies {
        renderer.draw_sprite(&Sprite {
            texture: assets.enemy.handle,
            source: None,
            dest: enemy.bounds,
            rotation: enemy.heading,
        });
    }

    for bullet in &state.enemy_bullets {
        renderer.draw_sprite(&Sprite {
            texture: assets.bullet.handle,
            source: None,
            dest: bullet.bounds,
            rotation: bullet.heading,
        });
    }

    renderer.present();
}
