//! Headless platform: runs the full game loop without a window or sound card

use std::collections::{HashMap, VecDeque};

use glam::Vec2;

use super::InputSource;
use crate::assets::{
    BULLET_TEXTURE_PATH, ENEMY_TANK_TEXTURE_PATH, EXPLOSION_TEXTURE_PATH, LoadedTexture,
    PLAYER_TANK_TEXTURE_PATH, TextureLoader,
};
use crate::audio::{AudioBackend, SoundHandle};
use crate::consts::{
    EXPLOSION_CELL_HEIGHT, EXPLOSION_CELL_WIDTH, EXPLOSION_COLUMNS, EXPLOSION_ROWS,
};
use crate::error::{AudioError, StartupError};
use crate::input::{InputEvent, InputFrame, Key};
use crate::renderer::{Renderer, Sprite};
use crate::sim::GameState;
use crate::{bearing_degrees, degrees_between};

/// Keeps the sprites of the last presented frame
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    pub frames_presented: u64,
    pub last_frame: Vec<Sprite>,
    pending: Vec<Sprite>,
}

impl Renderer for HeadlessRenderer {
    fn clear(&mut self) {
        self.pending.clear();
    }

    fn draw_sprite(&mut self, sprite: &Sprite) {
        self.pending.push(*sprite);
    }

    fn present(&mut self) {
        self.last_frame = std::mem::take(&mut self.pending);
        self.frames_presented += 1;
    }
}

/// Hands out handles with fixed sizes instead of decoding images
#[derive(Debug)]
pub struct StubTextureLoader {
    sizes: HashMap<String, Vec2>,
    next_handle: u32,
}

impl Default for StubTextureLoader {
    fn default() -> Self {
        let sheet = Vec2::new(
            EXPLOSION_CELL_WIDTH * EXPLOSION_COLUMNS as f32,
            EXPLOSION_CELL_HEIGHT * EXPLOSION_ROWS as f32,
        );
        let sizes = [
            (PLAYER_TANK_TEXTURE_PATH, Vec2::new(32.0, 32.0)),
            (ENEMY_TANK_TEXTURE_PATH, Vec2::new(32.0, 32.0)),
            (BULLET_TEXTURE_PATH, Vec2::new(6.0, 6.0)),
            (EXPLOSION_TEXTURE_PATH, sheet),
        ]
        .into_iter()
        .map(|(path, size)| (path.to_string(), size))
        .collect();
        Self {
            sizes,
            next_handle: 1,
        }
    }
}

impl StubTextureLoader {
    /// Make `path` fail to load
    pub fn without(mut self, path: &str) -> Self {
        self.sizes.remove(path);
        self
    }
}

impl TextureLoader for StubTextureLoader {
    fn load_texture(&mut self, path: &str) -> Result<LoadedTexture, StartupError> {
        let size = *self.sizes.get(path).ok_or_else(|| StartupError::ImageLoad {
            path: path.to_string(),
            reason: "no such file".into(),
        })?;
        let handle = crate::renderer::TextureHandle(self.next_handle);
        self.next_handle += 1;
        Ok(LoadedTexture { handle, size })
    }
}

/// Accepts every sound and records what was played
#[derive(Debug, Default)]
pub struct NullAudio {
    pub played: Vec<(SoundHandle, f32)>,
    failing: Vec<String>,
    device_missing: bool,
    next_handle: u32,
}

impl NullAudio {
    /// Sound loads for these paths fail
    pub fn failing(paths: &[&str]) -> Self {
        Self {
            failing: paths.iter().map(|p| p.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Every load fails as if no device could be opened
    pub fn no_device() -> Self {
        Self {
            device_missing: true,
            ..Self::default()
        }
    }
}

impl AudioBackend for NullAudio {
    fn load_sound(&mut self, path: &str) -> Result<SoundHandle, AudioError> {
        if self.device_missing {
            return Err(AudioError::Device("no output device".into()));
        }
        if self.failing.iter().any(|p| p == path) {
            return Err(AudioError::Load {
                path: path.to_string(),
                reason: "unreadable".into(),
            });
        }
        self.next_handle += 1;
        Ok(SoundHandle(self.next_handle))
    }

    fn play(&mut self, sound: SoundHandle, volume: f32) {
        self.played.push((sound, volume));
    }
}

/// Replays a fixed list of frames, then reports nothing held
#[derive(Debug, Default)]
pub struct ScriptedInput {
    frames: VecDeque<InputFrame>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = InputFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// A quit event on the first frame
    pub fn quit_immediately() -> Self {
        Self::new([InputFrame {
            held: Vec::new(),
            events: vec![InputEvent::Quit],
        }])
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> InputFrame {
        self.frames.pop_front().unwrap_or_default()
    }
}

/// Hunts the nearest enemy: closes in, turns toward it and taps fire once
/// lined up. Emits the default key bindings.
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Aim error (degrees) under which the autopilot fires
    pub tolerance: f32,
    /// Distance to the target the autopilot tries to close to
    pub approach_distance: f32,
    turn: Option<Key>,
    advance: Option<Key>,
    aimed: bool,
    fire_held: bool,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            tolerance: 5.0,
            approach_distance: 120.0,
            turn: None,
            advance: None,
            aimed: false,
            fire_held: false,
        }
    }
}

impl InputSource for Autopilot {
    fn observe(&mut self, state: &GameState) {
        let origin = state.player.bounds.center();
        let nearest = state.enemies.iter().min_by(|a, b| {
            let da = a.bounds.center().distance_squared(origin);
            let db = b.bounds.center().distance_squared(origin);
            da.total_cmp(&db)
        });

        self.turn = None;
        self.advance = None;
        self.aimed = false;
        let Some(enemy) = nearest else { return };

        let target = enemy.bounds.center();
        let error = degrees_between(state.player.heading, bearing_degrees(origin, target));
        if error > self.tolerance {
            self.turn = Some(Key::Right);
        } else if error < -self.tolerance {
            self.turn = Some(Key::Left);
        } else {
            self.aimed = true;
        }

        let delta = target - origin;
        if delta.length() > self.approach_distance {
            self.advance = Some(match (delta.x.abs() > delta.y.abs(), delta) {
                (true, d) if d.x > 0.0 => Key::D,
                (true, _) => Key::A,
                (false, d) if d.y > 0.0 => Key::S,
                (false, _) => Key::W,
            });
        }
    }

    fn poll(&mut self) -> InputFrame {
        let mut frame = InputFrame::default();
        frame.held.extend(self.turn);
        frame.held.extend(self.advance);

        // Alternate press/release so every other frame is a fresh shot
        if self.fire_held {
            frame.events.push(InputEvent::KeyUp(Key::Space));
            self.fire_held = false;
        } else if self.aimed {
            frame.held.push(Key::Space);
            frame.events.push(InputEvent::KeyDown(Key::Space));
            self.fire_held = true;
        }
        frame
    }
}
