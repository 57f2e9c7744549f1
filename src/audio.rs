//! Sound effects
//!
//! Audio is optional: if the device or a sample fails to load the game keeps
//! running silently for that effect.

use crate::assets::{EXPLOSION_SOUND_PATH, SHOOT_SOUND_PATH};
use crate::error::AudioError;
use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Any tank fires
    Shoot,
    /// Enemy destroyed
    Explosion,
}

impl SoundEffect {
    pub fn path(self) -> &'static str {
        match self {
            SoundEffect::Shoot => SHOOT_SOUND_PATH,
            SoundEffect::Explosion => EXPLOSION_SOUND_PATH,
        }
    }
}

/// Opaque sample handle issued by an audio backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundHandle(pub u32);

/// Audio output backend
pub trait AudioBackend {
    fn load_sound(&mut self, path: &str) -> Result<SoundHandle, AudioError>;
    /// Fire and forget
    fn play(&mut self, sound: SoundHandle, volume: f32);
}

/// Audio manager for the game
pub struct AudioManager<B: AudioBackend> {
    backend: B,
    shoot: Option<SoundHandle>,
    explosion: Option<SoundHandle>,
    /// Playback volume, 0 when muted
    volume: f32,
}

impl<B: AudioBackend> AudioManager<B> {
    pub fn new(mut backend: B, settings: &Settings) -> Self {
        let shoot = load_or_warn(&mut backend, SoundEffect::Shoot);
        let explosion = load_or_warn(&mut backend, SoundEffect::Explosion);
        Self {
            backend,
            shoot,
            explosion,
            volume: settings.effective_sfx_volume(),
        }
    }

    /// Play a sound effect (no-op if its sample failed to load)
    pub fn play(&mut self, effect: SoundEffect) {
        if self.volume <= 0.0 {
            return;
        }
        let handle = match effect {
            SoundEffect::Shoot => self.shoot,
            SoundEffect::Explosion => self.explosion,
        };
        if let Some(handle) = handle {
            self.backend.play(handle, self.volume);
        }
    }

    /// Route a sim event to its sound, if it has one
    pub fn handle_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Shot { .. } => self.play(SoundEffect::Shoot),
            GameEvent::EnemyDestroyed { .. } => self.play(SoundEffect::Explosion),
            GameEvent::EnemySpawned { .. } | GameEvent::PlayerWon | GameEvent::Quit => {}
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

fn load_or_warn<B: AudioBackend>(backend: &mut B, effect: SoundEffect) -> Option<SoundHandle> {
    match backend.load_sound(effect.path()) {
        Ok(handle) => Some(handle),
        Err(err) => {
            log::warn!("{effect:?} sound disabled: {err}");
            None
        }
    }
}
