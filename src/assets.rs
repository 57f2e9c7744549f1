//! Texture assets
//!
//! Every texture is required: a load failure aborts startup.

use glam::Vec2;

use crate::error::StartupError;
use crate::renderer::TextureHandle;
use crate::sim::SpriteSizes;

pub const PLAYER_TANK_TEXTURE_PATH: &str = "resources/player-tank.png";
pub const ENEMY_TANK_TEXTURE_PATH: &str = "resources/enemy-tank.png";
pub const BULLET_TEXTURE_PATH: &str = "resources/bullet_6.png";
pub const EXPLOSION_TEXTURE_PATH: &str = "resources/explosion_animation.png";

pub const SHOOT_SOUND_PATH: &str = "resources/flak_gun_sound.ogg";
pub const EXPLOSION_SOUND_PATH: &str = "resources/bombexplosion.ogg";

/// A loaded texture and its native size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadedTexture {
    pub handle: TextureHandle,
    pub size: Vec2,
}

/// Texture loading backend
pub trait TextureLoader {
    fn load_texture(&mut self, path: &str) -> Result<LoadedTexture, StartupError>;
}

/// All textures the game draws
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assets {
    pub player: LoadedTexture,
    pub enemy: LoadedTexture,
    pub bullet: LoadedTexture,
    pub explosion: LoadedTexture,
}

impl Assets {
    pub fn load(loader: &mut impl TextureLoader) -> Result<Self, StartupError> {
        let assets = Self {
            player: loader.load_texture(PLAYER_TANK_TEXTURE_PATH)?,
            enemy: loader.load_texture(ENEMY_TANK_TEXTURE_PATH)?,
            bullet: loader.load_texture(BULLET_TEXTURE_PATH)?,
            explosion: loader.load_texture(EXPLOSION_TEXTURE_PATH)?,
        };
        log::info!(
            "Textures loaded: player {:?}, enemy {:?}, bullet {:?}",
            assets.player.size,
            assets.enemy.size,
            assets.bullet.size
        );
        Ok(assets)
    }

    /// Entity box sizes (sprites are drawn at native size)
    pub fn sprite_sizes(&self) -> SpriteSizes {
        SpriteSizes {
            player: self.player.size,
            enemy: self.enemy.size,
            bullet: self.bullet.size,
        }
    }
}
