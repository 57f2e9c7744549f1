//! Frame driver
//!
//! Owns the sim state and its collaborators. Each frame: poll input, step
//! the sim, route its events, draw.

use crate::assets::{Assets, TextureLoader};
use crate::audio::{AudioBackend, AudioManager};
use crate::error::StartupError;
use crate::input::InputMapper;
use crate::platform::{FrameClock, InputSource};
use crate::renderer::{Renderer, draw_scene};
use crate::settings::Settings;
use crate::sim::{Arena, GamePhase, GameState, tick};

/// Running game instance
pub struct Game<A: AudioBackend> {
    pub state: GameState,
    pub assets: Assets,
    pub audio: AudioManager<A>,
    pub settings: Settings,
    mapper: InputMapper,
    fps_frames: u32,
    fps_timer: f32,
    /// Most recent FPS sample
    pub fps: f32,
}

impl<A: AudioBackend> Game<A> {
    /// Load textures, open audio and populate the level.
    ///
    /// Texture failures are fatal; audio failures only silence the game.
    pub fn new(
        settings: Settings,
        seed: u64,
        loader: &mut impl TextureLoader,
        audio_backend: A,
    ) -> Result<Self, StartupError> {
        let assets = Assets::load(loader)?;
        let state = GameState::new(
            seed,
            settings.level.clone(),
            Arena::default(),
            assets.sprite_sizes(),
        )?;
        let audio = AudioManager::new(audio_backend, &settings);
        let mapper = InputMapper::new(settings.key_bindings.clone());

        Ok(Self {
            state,
            assets,
            audio,
            settings,
            mapper,
            fps_frames: 0,
            fps_timer: 0.0,
            fps: 0.0,
        })
    }

    /// Run one frame. Returns false once the game stopped running.
    pub fn run_frame(
        &mut self,
        dt: f32,
        input: &mut impl InputSource,
        renderer: &mut impl Renderer,
    ) -> bool {
        input.observe(&self.state);
        let frame = input.poll();
        let tick_input = self.mapper.map(&frame);

        tick(&mut self.state, &tick_input, dt);

        for event in self.state.drain_events() {
            self.audio.handle_event(&event);
        }

        draw_scene(renderer, &self.state, &self.assets);
        self.track_fps(dt);

        self.state.is_running()
    }

    /// Drive frames until the game stops or `max_frames` have run.
    ///
    /// After a win the final frame stays up for `win_display_delay`.
    pub fn run(
        &mut self,
        clock: &mut impl FrameClock,
        input: &mut impl InputSource,
        renderer: &mut impl Renderer,
        max_frames: Option<u64>,
    ) -> GamePhase {
        let mut frames = 0u64;
        while max_frames.is_none_or(|max| frames < max) {
            let dt = clock.delta();
            frames += 1;
            if !self.run_frame(dt, input, renderer) {
                break;
            }
        }

        if self.state.phase == GamePhase::Won {
            clock.wait(self.settings.win_display_delay);
        }
        log::info!(
            "Run ended after {} frames: {:?}, {} enemies left",
            frames,
            self.state.phase,
            self.state.enemies.len()
        );
        self.state.phase
    }

    fn track_fps(&mut self, dt: f32) {
        let interval = self.settings.fps_log_interval;
        if interval <= 0.0 {
            return;
        }
        self.fps_frames += 1;
        self.fps_timer += dt;
        if self.fps_timer >= interval {
            self.fps = self.fps_frames as f32 / self.fps_timer;
            log::info!("FPS: {:.0}", self.fps);
            self.fps_frames = 0;
            self.fps_timer = 0.0;
        }
    }
}
