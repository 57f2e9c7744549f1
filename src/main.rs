//! Tank Arena - headless runner
//!
//! Plays a level with the autopilot at a fixed 60 Hz timestep and logs what
//! happens. Set `RUST_LOG=debug` for spawn-level detail.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use tank_arena::platform::FixedClock;
use tank_arena::platform::headless::{Autopilot, HeadlessRenderer, NullAudio, StubTextureLoader};
use tank_arena::{Game, LevelConfig, Settings};

const TIMESTEP: f32 = 1.0 / 60.0;

/// A top-down tank arena, played headless by the autopilot
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RNG seed (overrides the settings file; defaults to the clock)
    #[arg(long)]
    seed: Option<u64>,

    /// Settings file
    #[arg(long, default_value = "tank-arena.json")]
    settings: PathBuf,

    /// Built-in level name (level-0, crazy) or path to a level JSON file
    #[arg(long, value_parser = parse_level)]
    level: Option<LevelConfig>,

    /// Frames to simulate before stopping
    #[arg(long, default_value_t = 60 * 120)]
    frames: u64,

    /// Enemies act every 0-0.5s
    #[arg(long)]
    crazy: bool,
}

fn main() {
    let args = Args::parse();
    env_logger::init();

    let mut settings = Settings::load_or_default(&args.settings);
    if let Some(level) = args.level {
        settings.level = level;
    }
    if args.crazy {
        settings.level = settings.level.with_crazy_tanks();
    }

    let seed = args.seed.or(settings.seed).unwrap_or_else(system_seed);
    log::info!("Tank Arena starting (seed {seed})");

    let mut loader = StubTextureLoader::default();
    let mut game = match Game::new(settings, seed, &mut loader, NullAudio::default()) {
        Ok(game) => game,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(err.exit_code());
        }
    };

    let phase = game.run(
        &mut FixedClock::new(TIMESTEP),
        &mut Autopilot::default(),
        &mut HeadlessRenderer::default(),
        Some(args.frames),
    );
    log::info!("Final phase: {phase:?}");
}

/// Preset name or path to a level JSON file
fn parse_level(value: &str) -> Result<LevelConfig, String> {
    if let Some(level) = LevelConfig::preset(value) {
        return Ok(level);
    }
    LevelConfig::load(Path::new(value))
        .map_err(|err| format!("not a preset or level file: {err}"))
}

fn system_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}
